use std::fs;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::RankedResult;

/// Writes ranked results as indented UTF-8 JSON into one output directory.
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self { output_dir: output_dir.into() }
    }

    /// Serializes `result` to `<output_dir>/<file_name>`, replacing any
    /// existing file. Non-ASCII text is written as-is.
    pub fn write(&self, file_name: &str, result: &RankedResult) -> Result<PathBuf> {
        let path = self.output_dir.join(file_name);
        let json = serde_json::to_string_pretty(result)?;
        fs::create_dir_all(&self.output_dir)
            .map_err(|source| Error::OutputWrite { path: self.output_dir.clone(), source })?;
        fs::write(&path, json).map_err(|source| Error::OutputWrite { path: path.clone(), source })?;
        tracing::info!(path = %path.display(), sections = result.sections.len(), "output saved");
        Ok(path)
    }
}
