use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ir_core::{IndexConfig, QueryMode};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    And,
    Or,
}

impl From<Mode> for QueryMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::And => QueryMode::And,
            Mode::Or => QueryMode::Or,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "search")]
#[command(about = "Rank the lines of a text collection with BM25", long_about = None)]
pub struct Args {
    /// Collection file, one document per line
    pub collection: PathBuf,
    /// JSON file with base scoring parameters
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Term-frequency saturation (accepts `inf`)
    #[arg(long)]
    pub k: Option<f64>,
    /// Length normalization strength
    #[arg(long)]
    pub b: Option<f64>,
    /// Keep raw term frequencies
    #[arg(long, default_value_t = false)]
    pub no_bm25: bool,
    /// Disable the positional decay
    #[arg(long, default_value_t = false)]
    pub no_positional: bool,
    #[arg(long, value_enum, default_value_t = Mode::Or)]
    pub mode: Mode,
    /// Worker count for index construction
    #[arg(long, default_value_t = 1)]
    pub shards: usize,
    /// Print results as JSON lines
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Run one query and exit instead of prompting
    #[arg(long)]
    pub query: Option<String>,
    /// Result count for --query
    #[arg(long)]
    pub top: Option<usize>,
}

impl Args {
    pub fn index_config(&self) -> Result<IndexConfig> {
        resolve_config(self.config.as_deref(), self.k, self.b, self.no_bm25, self.no_positional)
    }
}

/// Base config from `base` (or the defaults), then explicit flags on top.
pub fn resolve_config(
    base: Option<&Path>,
    k: Option<f64>,
    b: Option<f64>,
    no_bm25: bool,
    no_positional: bool,
) -> Result<IndexConfig> {
    let mut config = match base {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            IndexConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path.display()))?
        }
        None => IndexConfig::default(),
    };
    if let Some(k) = k {
        config = config.with_k(k);
    }
    if let Some(b) = b {
        config = config.with_b(b);
    }
    if no_bm25 {
        config = config.with_bm25(false);
    }
    if no_positional {
        config = config.with_positional(false);
    }
    Ok(config)
}
