use std::path::Path;

use crate::traits::PageExtractor;
use crate::types::TextChunk;

/// Turns the pages of one document into [`TextChunk`]s.
///
/// Blank pages are dropped and page numbers stay 1-based with gaps preserved.
/// A document that fails to read produces no chunks; the failure is logged so
/// that one bad file never aborts a batch.
pub struct ChunkExtractor<E> {
    pages: E,
}

impl<E: PageExtractor> ChunkExtractor<E> {
    pub fn new(pages: E) -> Self {
        Self { pages }
    }

    pub fn extract_chunks(&self, path: &Path) -> Vec<TextChunk> {
        let document = document_name(path);
        let pages = match self.pages.extract_pages(path) {
            Ok(pages) => pages,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "error reading document");
                return Vec::new();
            }
        };

        let mut chunks = Vec::with_capacity(pages.len());
        for (index, raw) in pages.iter().enumerate() {
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }
            let Ok(page) = u32::try_from(index + 1) else { break };
            chunks.push(TextChunk { document: document.clone(), page, text: text.to_string() });
        }
        tracing::debug!(%document, pages = pages.len(), chunks = chunks.len(), "extracted");
        chunks
    }
}

pub(crate) fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}
