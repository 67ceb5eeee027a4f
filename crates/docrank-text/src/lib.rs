//! docrank-text
//!
//! Lexical relevance: a stop-word aware analyzer built on tantivy's tokenizer
//! pipeline, a TF-IDF vectorizer fit per query, and the ranker that ties them
//! together.

pub mod analyzer;
pub mod ranker;
pub mod tfidf;

pub use analyzer::{english_analyzer, Tokenizer};
pub use ranker::TfIdfRanker;
pub use tfidf::{cosine, SparseVector, TfIdfVectorizer};
