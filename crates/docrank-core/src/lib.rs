#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod collector;
pub mod config;
pub mod error;
pub mod extractor;
pub mod traits;
pub mod types;
pub mod writer;

pub use collector::CorpusCollector;
pub use config::{Config, OutputMode, RunConfig};
pub use error::{Error, Result};
pub use extractor::ChunkExtractor;
pub use writer::ResultWriter;
