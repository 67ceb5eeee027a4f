//! Per-page PDF text extraction backed by `lopdf`.

use std::path::Path;

use lopdf::Document;

use docrank_core::error::{Error, Result};
use docrank_core::traits::PageExtractor;

/// Reads every page of a PDF in page order.
///
/// Fails for the whole document when the file cannot be parsed or any page's
/// content cannot be decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl PageExtractor for LopdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        let doc = Document::load(path).map_err(|e| Error::document_read(path, e))?;
        let pages = doc.get_pages();
        let mut texts = Vec::with_capacity(pages.len());
        for page_number in pages.keys() {
            let text = doc
                .extract_text(&[*page_number])
                .map_err(|e| Error::document_read(path, format!("page {page_number}: {e}")))?;
            texts.push(text);
        }
        tracing::debug!(path = %path.display(), pages = texts.len(), "pdf loaded");
        Ok(texts)
    }
}
