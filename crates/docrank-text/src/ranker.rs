use docrank_core::traits::Ranker;
use docrank_core::types::{Query, ScoredChunk, TextChunk, MAX_SECTIONS};

use crate::tfidf::{cosine, TfIdfVectorizer};

/// Ranks chunks by TF-IDF cosine similarity to `"{persona} {task}"`.
///
/// The vocabulary is fit on the query plus the whole corpus on every call.
/// Equal scores keep their input order.
#[derive(Clone)]
pub struct TfIdfRanker {
    vectorizer: TfIdfVectorizer,
    limit: usize,
}

impl Default for TfIdfRanker {
    fn default() -> Self {
        Self { vectorizer: TfIdfVectorizer::default(), limit: MAX_SECTIONS }
    }
}

impl TfIdfRanker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `limit` chunks, capped at [`MAX_SECTIONS`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.min(MAX_SECTIONS);
        self
    }

    pub fn score(&self, chunks: Vec<TextChunk>, query: &Query) -> Vec<ScoredChunk> {
        if chunks.is_empty() {
            return Vec::new();
        }
        let mut docs = Vec::with_capacity(chunks.len() + 1);
        docs.push(query.text());
        docs.extend(chunks.iter().map(|c| c.text.clone()));

        let mut vectorizer = self.vectorizer.clone();
        let rows = vectorizer.fit_transform(&docs);
        let (query_row, chunk_rows) = rows.split_at(1);

        chunks
            .into_iter()
            .zip(chunk_rows)
            .map(|(chunk, row)| ScoredChunk::new(chunk, cosine(&query_row[0], row)))
            .collect()
    }
}

impl Ranker for TfIdfRanker {
    fn rank(&self, chunks: Vec<TextChunk>, query: &Query) -> Vec<ScoredChunk> {
        let total = chunks.len();
        let mut scored = self.score(chunks, query);
        // sort_by is stable
        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.limit);
        tracing::debug!(total, kept = scored.len(), "ranked corpus");
        scored
    }
}
