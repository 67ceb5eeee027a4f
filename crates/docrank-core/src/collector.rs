use std::path::{Path, PathBuf};

use crate::extractor::{document_name, ChunkExtractor};
use crate::traits::PageExtractor;
use crate::types::{DocumentCorpus, TextChunk};

const PDF_SUFFIX: &str = ".pdf";

/// Walks the configured input folders and extracts every PDF found.
///
/// Folders are visited in the order given; inside a folder only direct
/// entries are considered, sorted by file name. Missing folders are skipped.
pub struct CorpusCollector<E> {
    extractor: ChunkExtractor<E>,
}

impl<E: PageExtractor> CorpusCollector<E> {
    pub fn new(pages: E) -> Self {
        Self { extractor: ChunkExtractor::new(pages) }
    }

    pub fn discover(&self, folders: &[PathBuf]) -> Vec<PathBuf> {
        let mut documents = Vec::new();
        for folder in folders {
            if !folder.is_dir() {
                tracing::warn!(folder = %folder.display(), "folder not found");
                continue;
            }
            documents.extend(list_pdf_files(folder));
        }
        documents
    }

    /// Extracts every document into a single corpus, in document then page order.
    pub fn collect_pooled(&self, folders: &[PathBuf]) -> Vec<TextChunk> {
        let mut corpus = Vec::new();
        for document in self.collect_per_document(folders) {
            corpus.extend(document.chunks);
        }
        tracing::info!(chunks = corpus.len(), "corpus collected");
        corpus
    }

    /// Extracts every document separately. Documents without text are kept
    /// with an empty chunk list.
    pub fn collect_per_document(&self, folders: &[PathBuf]) -> Vec<DocumentCorpus> {
        let files = self.discover(folders);
        let mut documents = Vec::with_capacity(files.len());
        for (index, path) in files.into_iter().enumerate() {
            documents.push(self.extract_document(path, index + 1));
        }
        documents
    }

    fn extract_document(&self, path: PathBuf, position: usize) -> DocumentCorpus {
        tracing::info!(position, path = %path.display(), "processing document");
        let chunks = self.extractor.extract_chunks(&path);
        if chunks.is_empty() {
            tracing::warn!(path = %path.display(), "no text found in document");
        }
        DocumentCorpus { name: document_name(&path), path, chunks }
    }
}

fn list_pdf_files(folder: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| is_pdf_name(&e.file_name().to_string_lossy()))
        .map(|e| e.into_path())
        .collect()
}

fn is_pdf_name(name: &str) -> bool {
    name.to_lowercase().ends_with(PDF_SUFFIX)
}
