use serde::{Deserialize, Serialize};

/// Term-frequency saturation used when the caller does not pick one.
pub const DEFAULT_K: f64 = 1.75;
/// Length-normalization strength used when the caller does not pick one.
pub const DEFAULT_B: f64 = 0.75;

/// Scoring parameters applied once, right after ingestion.
///
/// `k` may be `f64::INFINITY`, which reduces BM25 to term frequency weighted by idf.
/// With `bm25` off the postings keep their raw term frequencies and `k`, `b` and
/// `positional` are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    pub k: f64,
    pub b: f64,
    pub bm25: bool,
    pub positional: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self { k: DEFAULT_K, b: DEFAULT_B, bm25: true, positional: true }
    }
}

impl IndexConfig {
    pub fn new() -> Self { Self::default() }

    /// Plain term-frequency postings, no weighting at all.
    pub fn term_frequency() -> Self {
        Self { bm25: false, ..Self::default() }
    }

    pub fn with_k(mut self, k: f64) -> Self {
        self.k = k;
        self
    }

    pub fn with_b(mut self, b: f64) -> Self {
        self.b = b;
        self
    }

    pub fn with_bm25(mut self, bm25: bool) -> Self {
        self.bm25 = bm25;
        self
    }

    pub fn with_positional(mut self, positional: bool) -> Self {
        self.positional = positional;
        self
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
