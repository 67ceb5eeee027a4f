use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to read document {}: {reason}", path.display())]
    DocumentRead { path: PathBuf, reason: String },

    #[error("Nothing to process: no text chunks found in any input folder")]
    NothingToProcess,

    #[error("Failed to write output {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn document_read(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::DocumentRead { path: path.into(), reason: reason.to_string() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
