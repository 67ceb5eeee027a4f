//! Layered run configuration and path helpers.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `DOCRANK_*` env
//! vars + explicit overrides. The `[run]` table becomes a [`RunConfig`] whose
//! relative paths are resolved against the directory of the config file.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{Query, MAX_SECTIONS};

pub struct Config {
    figment: Figment,
    base_dir: PathBuf,
}

impl Config {
    /// Loads `path` plus the `config.<env>.toml` next to it, selected by
    /// `RUST_ENV`. Missing files contribute nothing.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
        let base_dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut figment = Figment::new().merge(Toml::file(path));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file(base_dir.join("config.dev.toml"))),
            "prod" | "production" => figment = figment.merge(Toml::file(base_dir.join("config.prod.toml"))),
            "test" | "testing" => figment = figment.merge(Toml::file(base_dir.join("config.test.toml"))),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("DOCRANK_").split("__"));

        Ok(Self { figment, base_dir })
    }

    /// Merges command-line style overrides on top of every other source.
    pub fn with_overrides(mut self, overrides: RunOverrides) -> Self {
        self.figment = self.figment.merge(Serialized::defaults(OverrideLayer { run: overrides }));
        self
    }

    pub fn run_config(&self) -> Result<RunConfig> {
        let mut run: RunConfig = self
            .figment
            .extract_inner("run")
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        run.input_dirs = run
            .input_dirs
            .iter()
            .map(|p| resolve_with_base(&self.base_dir, p.to_string_lossy()))
            .collect();
        run.output_dir = resolve_with_base(&self.base_dir, run.output_dir.to_string_lossy());
        run.validate()?;
        Ok(run)
    }
}

/// How ranked output is grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Pool every document and rank once into a single file.
    #[default]
    Aggregate,
    /// Rank each document on its own and write one file per document.
    PerDocument,
}

/// Everything a single run needs. Fixed for the duration of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub persona: String,
    pub task: String,
    pub input_dirs: Vec<PathBuf>,
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default)]
    pub mode: OutputMode,
    #[serde(default = "default_aggregate_file")]
    pub aggregate_file: String,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

fn default_aggregate_file() -> String {
    "ranked_sections.json".to_string()
}

fn default_top_k() -> usize {
    MAX_SECTIONS
}

impl RunConfig {
    pub fn new(
        persona: impl Into<String>,
        task: impl Into<String>,
        input_dirs: Vec<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            persona: persona.into(),
            task: task.into(),
            input_dirs,
            output_dir: output_dir.into(),
            mode: OutputMode::default(),
            aggregate_file: default_aggregate_file(),
            top_k: default_top_k(),
        }
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn query(&self) -> Query {
        Query::new(self.persona.clone(), self.task.clone())
    }

    pub fn validate(&self) -> Result<()> {
        if self.persona.trim().is_empty() {
            return Err(Error::InvalidConfig("run.persona must not be empty".into()));
        }
        if self.task.trim().is_empty() {
            return Err(Error::InvalidConfig("run.task must not be empty".into()));
        }
        if self.input_dirs.is_empty() {
            return Err(Error::InvalidConfig("run.input_dirs must list at least one folder".into()));
        }
        if self.aggregate_file.trim().is_empty() {
            return Err(Error::InvalidConfig("run.aggregate_file must not be empty".into()));
        }
        if !(1..=MAX_SECTIONS).contains(&self.top_k) {
            return Err(Error::InvalidConfig(format!(
                "run.top_k must be between 1 and {MAX_SECTIONS}, got {}",
                self.top_k
            )));
        }
        Ok(())
    }
}

/// Optional values that replace configured ones, typically from the CLI.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_dirs: Option<Vec<PathBuf>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<OutputMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
}

#[derive(Serialize)]
struct OverrideLayer {
    run: RunOverrides,
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}

/// Resolve a possibly relative path against a given base directory after expansion.
/// If `p` is absolute, it's returned as-is; otherwise `base.join(p)` is returned.
pub fn resolve_with_base<S: AsRef<str>>(base: &Path, p: S) -> PathBuf {
    let p = expand_path(p);
    if p.is_absolute() { p } else { base.join(p) }
}
