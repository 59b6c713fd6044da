//! BM25 weighting of term-frequency postings.
//!
//! `tf' = tf * (k + 1) / (k * alpha + tf)` with `alpha = (1 - b) + b * dl / avdl`,
//! weighted by `log2(n / df)`. An optional positional decay favours documents
//! ingested earlier.

use crate::config::IndexConfig;
use crate::index::{DocId, DocumentLengths, InvertedList};

/// Round the exact binary value of `value` to `places` decimal places, ties to even.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// BM25 weight of one posting, rounded to 3 decimal places and never negative.
///
/// When the saturated term frequency is not finite (`k = inf` gives `inf / inf`)
/// the raw `tf` is used instead, so an infinite `k` degrades to tf-idf.
pub fn bm25(n: u32, df: usize, tf: f64, k: f64, b: f64, dl: u32, avdl: f64) -> f64 {
    let alpha = (1.0 - b) + b * (dl as f64 / avdl);
    let mut tf_extra = tf * ((k + 1.0) / (k * alpha + tf));
    if !tf_extra.is_finite() {
        tf_extra = tf;
    }
    let weight = tf_extra * (n as f64 / df as f64).log2();
    if weight > 0.0 {
        round_to(weight, 3)
    } else {
        0.0
    }
}

/// Multiplier in `(0, 1]`: 1 for the first document, decaying linearly toward `1/n`.
pub fn positional_decay(n: u32, doc_id: DocId) -> f64 {
    (n as f64 - (doc_id as f64 - 1.0)) / n as f64
}

/// Replace every term frequency in `inverted_list` with its weight. Postings order is kept.
pub fn score(
    inverted_list: &mut InvertedList,
    document_lengths: &DocumentLengths,
    average_length: f64,
    num_docs: u32,
    config: &IndexConfig,
) {
    for postings in inverted_list.values_mut() {
        let df = postings.len();
        for posting in postings.iter_mut() {
            let dl = document_lengths.get(&posting.doc_id).copied().unwrap_or(0);
            let weight = bm25(num_docs, df, posting.score, config.k, config.b, dl, average_length);
            posting.score = if config.positional {
                round_to(weight * positional_decay(num_docs, posting.doc_id), 3)
            } else {
                weight
            };
        }
    }
}
