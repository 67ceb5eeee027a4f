//! Domain types shared by the extractor, ranker and writer.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound on the number of sections kept in a ranked result.
pub const MAX_SECTIONS: usize = 10;

/// The text of one page of a source document.
///
/// - `document`: base name of the source file (e.g. `handbook.pdf`)
/// - `page`: 1-based page index within the document
/// - `text`: trimmed, non-empty page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    pub document: String,
    pub page: u32,
    pub text: String,
}

/// A chunk after ranking. `score` lies in `[0, 1]`, higher is better.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    #[serde(flatten)]
    pub chunk: TextChunk,
    pub score: f64,
}

impl ScoredChunk {
    pub fn new(chunk: TextChunk, score: f64) -> Self {
        Self { chunk, score }
    }
}

/// The persona/task pair every chunk is scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub persona: String,
    pub task: String,
}

impl Query {
    pub fn new(persona: impl Into<String>, task: impl Into<String>) -> Self {
        Self { persona: persona.into(), task: task.into() }
    }

    /// The text used as the similarity anchor: `"{persona} {task}"`.
    pub fn text(&self) -> String {
        format!("{} {}", self.persona, self.task)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultMetadata {
    pub persona: String,
    pub task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// One output artifact: the query it answers and its best sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub metadata: ResultMetadata,
    pub sections: Vec<ScoredChunk>,
}

impl RankedResult {
    pub fn new(query: &Query, source: Option<String>, sections: Vec<ScoredChunk>) -> Self {
        let metadata = ResultMetadata {
            persona: query.persona.clone(),
            task: query.task.clone(),
            source,
        };
        Self { metadata, sections }
    }
}

/// All chunks extracted from a single document.
#[derive(Debug, Clone)]
pub struct DocumentCorpus {
    pub name: String,
    pub path: PathBuf,
    pub chunks: Vec<TextChunk>,
}

impl DocumentCorpus {
    /// File name without its extension, used to name per-document outputs.
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.name.clone())
    }
}
