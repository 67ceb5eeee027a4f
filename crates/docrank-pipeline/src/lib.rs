use std::path::PathBuf;

use docrank_core::config::{OutputMode, RunConfig};
use docrank_core::error::{Error, Result};
use docrank_core::traits::{PageExtractor, Ranker};
use docrank_core::types::{Query, RankedResult};
use docrank_core::{CorpusCollector, ResultWriter};
use docrank_pdf::LopdfExtractor;
use docrank_text::TfIdfRanker;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub documents: usize,
    pub chunks: usize,
    pub outputs: Vec<PathBuf>,
}

/// Drives extract → rank → write for one [`RunConfig`].
pub struct Orchestrator<E, R> where E: PageExtractor, R: Ranker {
    config: RunConfig,
    collector: CorpusCollector<E>,
    ranker: R,
    writer: ResultWriter,
}

impl Orchestrator<LopdfExtractor, TfIdfRanker> {
    /// PDF extraction with TF-IDF ranking limited to `config.top_k`.
    pub fn with_defaults(config: RunConfig) -> Self {
        let ranker = TfIdfRanker::new().with_limit(config.top_k);
        Self::new(config, LopdfExtractor::new(), ranker)
    }
}

impl<E, R> Orchestrator<E, R> where E: PageExtractor, R: Ranker {
    pub fn new(config: RunConfig, extractor: E, ranker: R) -> Self {
        let writer = ResultWriter::new(config.output_dir.clone());
        Self { config, collector: CorpusCollector::new(extractor), ranker, writer }
    }

    /// Runs the configured mode. Returns [`Error::InvalidConfig`] for a config
    /// that fails validation and [`Error::NothingToProcess`] without writing
    /// anything when no document yields text.
    pub fn run(&self) -> Result<RunReport> {
        self.config.validate()?;
        let query = self.config.query();
        tracing::info!(persona = %query.persona, task = %query.task, mode = ?self.config.mode, "starting run");
        match self.config.mode {
            OutputMode::Aggregate => self.run_aggregate(&query),
            OutputMode::PerDocument => self.run_per_document(&query),
        }
    }

    fn run_aggregate(&self, query: &Query) -> Result<RunReport> {
        let documents = self.collector.collect_per_document(&self.config.input_dirs);
        let document_count = documents.iter().filter(|d| !d.chunks.is_empty()).count();
        let corpus: Vec<_> = documents.into_iter().flat_map(|d| d.chunks).collect();
        if corpus.is_empty() {
            tracing::warn!("nothing to process");
            return Err(Error::NothingToProcess);
        }
        let chunk_count = corpus.len();
        let sections = self.ranker.rank(corpus, query);
        let result = RankedResult::new(query, None, sections);
        let path = self.writer.write(&self.config.aggregate_file, &result)?;
        Ok(RunReport { documents: document_count, chunks: chunk_count, outputs: vec![path] })
    }

    fn run_per_document(&self, query: &Query) -> Result<RunReport> {
        let mut report = RunReport { documents: 0, chunks: 0, outputs: Vec::new() };
        for document in self.collector.collect_per_document(&self.config.input_dirs) {
            if document.chunks.is_empty() {
                continue;
            }
            let file_name = format!("{}_output.json", document.stem());
            report.documents += 1;
            report.chunks += document.chunks.len();
            let sections = self.ranker.rank(document.chunks, query);
            let result = RankedResult::new(query, Some(document.name), sections);
            let path = self.writer.write(&file_name, &result)?;
            if report.outputs.contains(&path) {
                tracing::warn!(
                    path = %path.display(),
                    document = %document.path.display(),
                    "output overwritten by a document with the same name"
                );
            } else {
                report.outputs.push(path);
            }
        }
        if report.outputs.is_empty() {
            tracing::warn!("nothing to process");
            return Err(Error::NothingToProcess);
        }
        Ok(report)
    }
}
