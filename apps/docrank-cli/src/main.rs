//! docrank: rank PDF pages against a persona and task.
//!
//! Usage:
//!   docrank                                   # uses ./config.toml
//!   docrank --config jobs/hr.toml --mode per-document
//!   docrank --persona "HR Manager" --task "Create onboarding material" --input pdfs

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use docrank_core::config::{resolve_with_base, Config, OutputMode, RunOverrides};
use docrank_core::error::Error;
use docrank_pipeline::Orchestrator;

#[derive(Parser)]
#[command(name = "docrank", version, about = "Rank PDF pages against a persona and task")]
struct Cli {
    /// Configuration file; `config.<env>.toml` next to it is merged too
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Persona the ranking is done for
    #[arg(long)]
    persona: Option<String>,

    /// Task the persona wants to accomplish
    #[arg(long)]
    task: Option<String>,

    /// Input folder (repeatable, replaces configured folders)
    #[arg(short, long = "input")]
    inputs: Vec<String>,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<String>,

    /// One aggregate file or one file per document
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Sections kept per result (1-10)
    #[arg(long)]
    top_k: Option<usize>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Aggregate,
    PerDocument,
}

impl From<Mode> for OutputMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Aggregate => OutputMode::Aggregate,
            Mode::PerDocument => OutputMode::PerDocument,
        }
    }
}

impl Cli {
    fn overrides(&self, cwd: &Path) -> RunOverrides {
        RunOverrides {
            persona: self.persona.clone(),
            task: self.task.clone(),
            input_dirs: (!self.inputs.is_empty())
                .then(|| self.inputs.iter().map(|p| resolve_with_base(cwd, p)).collect()),
            output_dir: self.output_dir.as_ref().map(|p| resolve_with_base(cwd, p)),
            mode: self.mode.map(OutputMode::from),
            top_k: self.top_k,
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = ["docrank_core", "docrank_pdf", "docrank_text", "docrank_pipeline", "docrank"]
        .map(|target| format!("{target}={level}"))
        .join(",");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter)))
        .with_target(false)
        .init();

    let cwd = std::env::current_dir()?;
    let run = Config::load_from(&cli.config)?.with_overrides(cli.overrides(&cwd)).run_config()?;

    match Orchestrator::with_defaults(run).run() {
        Ok(report) => {
            tracing::info!(documents = report.documents, chunks = report.chunks, outputs = report.outputs.len(), "run complete");
            Ok(ExitCode::SUCCESS)
        }
        Err(Error::NothingToProcess) => {
            eprintln!("Nothing to process: no text found in the configured folders.");
            Ok(ExitCode::from(2))
        }
        Err(e) => Err(e.into()),
    }
}
