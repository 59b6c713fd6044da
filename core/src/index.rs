use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::scorer::{self, round_to};
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 1-based, assigned densely in ingestion order.
pub type DocId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    /// Raw term frequency before scoring, BM25 weight after.
    pub score: f64,
}

impl Posting {
    pub fn new(doc_id: DocId, score: f64) -> Self { Self { doc_id, score } }
}

impl From<(DocId, f64)> for Posting {
    fn from((doc_id, score): (DocId, f64)) -> Self { Self { doc_id, score } }
}

/// term -> postings sorted strictly ascending by doc_id
pub type InvertedList = HashMap<String, Vec<Posting>>;
/// doc_id -> token count
pub type DocumentLengths = HashMap<DocId, u32>;

/// Immutable index snapshot. Built once, then only read; a rebuild produces a new value.
#[derive(Debug, Clone)]
pub struct InvertedIndex {
    inverted_list: InvertedList,
    document_lengths: DocumentLengths,
    average_length: f64,
    num_docs: u32,
}

impl InvertedIndex {
    /// Ingest `documents` in order, assigning ids from 1, then apply the scoring pass
    /// selected by `config`. Documents without any token still consume an id.
    pub fn build<I, S>(documents: I, config: &IndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut inverted_list = InvertedList::new();
        let mut document_lengths = DocumentLengths::new();
        let mut num_docs: DocId = 0;
        for document in documents {
            num_docs += 1;
            let length = ingest_document(num_docs, document.as_ref(), &mut inverted_list);
            document_lengths.insert(num_docs, length);
        }
        Self::finish(inverted_list, document_lengths, num_docs, config)
    }

    /// Shared tail of every build path: corpus statistics, then scoring.
    pub(crate) fn finish(
        mut inverted_list: InvertedList,
        document_lengths: DocumentLengths,
        num_docs: u32,
        config: &IndexConfig,
    ) -> Result<Self> {
        let average_length = average_length(&document_lengths)?;
        if config.bm25 {
            scorer::score(&mut inverted_list, &document_lengths, average_length, num_docs, config);
        }
        tracing::info!(
            num_docs,
            num_terms = inverted_list.len(),
            average_length,
            bm25 = config.bm25,
            "index built"
        );
        Ok(Self { inverted_list, document_lengths, average_length, num_docs })
    }

    /// Postings for `term`, case-insensitively. Unknown terms resolve to an empty list.
    pub fn postings(&self, term: &str) -> &[Posting] {
        let key = term.to_lowercase();
        self.inverted_list.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn inverted_list(&self) -> &InvertedList { &self.inverted_list }

    pub fn document_lengths(&self) -> &DocumentLengths { &self.document_lengths }

    pub fn document_length(&self, doc_id: DocId) -> Option<u32> {
        self.document_lengths.get(&doc_id).copied()
    }

    pub fn average_length(&self) -> f64 { self.average_length }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn num_terms(&self) -> usize { self.inverted_list.len() }
}

/// Count every term of one document and append exactly one posting per distinct term.
/// Callers must feed documents in ascending id order to keep postings sorted.
pub(crate) fn ingest_document(doc_id: DocId, text: &str, inverted_list: &mut InvertedList) -> u32 {
    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut length = 0u32;
    for term in tokenize(text) {
        length += 1;
        *counts.entry(term).or_insert(0) += 1;
    }
    for (term, tf) in counts {
        inverted_list.entry(term).or_default().push(Posting::new(doc_id, tf as f64));
    }
    length
}

/// Mean token count, rounded to 5 decimal places.
pub fn average_length(document_lengths: &DocumentLengths) -> Result<f64> {
    if document_lengths.is_empty() {
        return Err(IndexError::EmptyCorpus);
    }
    let total: u64 = document_lengths.values().map(|&l| l as u64).sum();
    Ok(round_to(total as f64 / document_lengths.len() as f64, 5))
}
