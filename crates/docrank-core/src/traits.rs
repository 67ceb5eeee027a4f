use std::path::Path;

use crate::error::Result;
use crate::types::{Query, ScoredChunk, TextChunk};

/// Source of per-page plain text for a single document.
///
/// Implementations return one entry per page, in page order, or fail for the
/// whole document. Page texts are returned raw; trimming happens upstream.
pub trait PageExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>>;
}

/// Scores a corpus against a query and keeps the best chunks.
///
/// Ranking never fails: an empty corpus yields an empty result and a corpus
/// with no usable terms yields zero scores.
pub trait Ranker {
    fn rank(&self, chunks: Vec<TextChunk>, query: &Query) -> Vec<ScoredChunk>;
}

impl<T: PageExtractor + ?Sized> PageExtractor for &T {
    fn extract_pages(&self, path: &Path) -> Result<Vec<String>> {
        (**self).extract_pages(path)
    }
}

impl<T: Ranker + ?Sized> Ranker for &T {
    fn rank(&self, chunks: Vec<TextChunk>, query: &Query) -> Vec<ScoredChunk> {
        (**self).rank(chunks, query)
    }
}
