pub mod cli;

use anyhow::{Context, Result};
use ir_core::shard::build_sharded;
use ir_core::{IndexConfig, InvertedIndex, Posting, QueryMode, SharedIndex};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One document per line, in file order. Blank lines are kept as empty documents.
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read collection {}", path.display()))?;
    Ok(text.lines().map(str::to_owned).collect())
}

pub fn build_index<P: AsRef<Path>>(path: P, config: &IndexConfig, shards: usize) -> Result<InvertedIndex> {
    let documents = load_documents(&path)?;
    let index = if shards > 1 {
        build_sharded(&documents, config, shards)?
    } else {
        InvertedIndex::build(&documents, config)?
    };
    Ok(index)
}

pub struct Session {
    collection: PathBuf,
    config: IndexConfig,
    shards: usize,
    mode: QueryMode,
    format: OutputFormat,
    index: SharedIndex,
}

impl Session {
    pub fn open(collection: PathBuf, config: IndexConfig, shards: usize) -> Result<Self> {
        let index = build_index(&collection, &config, shards)?;
        Ok(Self {
            collection,
            config,
            shards,
            mode: QueryMode::default(),
            format: OutputFormat::default(),
            index: SharedIndex::new(index),
        })
    }

    pub fn with_mode(mut self, mode: QueryMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn num_docs(&self) -> u32 { self.index.load().num_docs() }

    /// Re-read the collection and swap the new index in. Returns the new document count.
    pub fn reload(&self) -> Result<u32> {
        let index = build_index(&self.collection, &self.config, self.shards)?;
        let num_docs = index.num_docs();
        self.index.swap(index);
        tracing::info!(num_docs, collection = %self.collection.display(), "index reloaded");
        Ok(num_docs)
    }

    pub fn search(&self, query: &str, limit: Option<usize>) -> Vec<Posting> {
        self.index.load().query(query, self.mode, limit)
    }

    pub fn write_results<W: Write>(&self, out: &mut W, results: &[Posting]) -> Result<()> {
        writeln!(out, "{} matching records:", results.len())?;
        for hit in results {
            match self.format {
                OutputFormat::Text => writeln!(out, "Doc id: [{}, {:?}]", hit.doc_id, hit.score)?,
                OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(hit)?)?,
            }
        }
        Ok(())
    }

    /// Prompt for a result count and a query until `input` runs out.
    /// A blank count means no limit; `:reload` rebuilds the index from the collection.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> Result<()> {
        let mut line = String::new();
        loop {
            write!(out, "You want to get how many top matching records: ")?;
            out.flush()?;
            if !read_line(&mut input, &mut line)? {
                break;
            }
            let answer = line.trim();
            if answer == ":reload" {
                match self.reload() {
                    Ok(num_docs) => writeln!(out, "Reindexed {num_docs} documents")?,
                    Err(err) => writeln!(out, "Reload failed: {err:#}")?,
                }
                continue;
            }
            let limit = if answer.is_empty() {
                None
            } else {
                match answer.parse::<usize>() {
                    Ok(n) => Some(n),
                    Err(_) => {
                        writeln!(out, "Not a number: {answer}")?;
                        continue;
                    }
                }
            };

            write!(out, "Enter query:\t")?;
            out.flush()?;
            if !read_line(&mut input, &mut line)? {
                break;
            }
            let results = self.search(line.trim(), limit);
            self.write_results(&mut out, &results)?;
        }
        Ok(())
    }
}

fn read_line<R: BufRead>(input: &mut R, line: &mut String) -> Result<bool> {
    line.clear();
    Ok(input.read_line(line)? > 0)
}
