//! Parallel index construction over contiguous document chunks.

use crate::algebra::merge;
use crate::config::IndexConfig;
use crate::error::{IndexError, Result};
use crate::index::{ingest_document, DocId, DocumentLengths, InvertedIndex, InvertedList};
use rayon::prelude::*;
use std::collections::hash_map::Entry;

struct Partial {
    inverted_list: InvertedList,
    document_lengths: DocumentLengths,
}

/// Build the same index as [`InvertedIndex::build`] with up to `shards` workers.
///
/// Each chunk owns a disjoint, contiguous id range, so its per-term lists stay sorted
/// and are combined with the ordinary postings merge. Corpus size is the document
/// count, never an id.
pub fn build_sharded<S>(documents: &[S], config: &IndexConfig, shards: usize) -> Result<InvertedIndex>
where
    S: AsRef<str> + Sync,
{
    if documents.is_empty() {
        return Err(IndexError::EmptyCorpus);
    }
    let chunk_size = documents.len().div_ceil(shards.max(1));
    tracing::debug!(documents = documents.len(), chunk_size, "building index shards");

    let partials: Vec<Partial> = documents
        .par_chunks(chunk_size)
        .enumerate()
        .map(|(chunk, docs)| build_partial((chunk * chunk_size) as DocId, docs))
        .collect();

    let mut inverted_list = InvertedList::new();
    let mut document_lengths = DocumentLengths::with_capacity(documents.len());
    for partial in partials {
        document_lengths.extend(partial.document_lengths);
        for (term, postings) in partial.inverted_list {
            match inverted_list.entry(term) {
                Entry::Occupied(mut slot) => {
                    let combined = merge(slot.get(), &postings);
                    *slot.get_mut() = combined;
                }
                Entry::Vacant(slot) => {
                    slot.insert(postings);
                }
            }
        }
    }
    InvertedIndex::finish(inverted_list, document_lengths, documents.len() as u32, config)
}

fn build_partial<S: AsRef<str>>(offset: DocId, documents: &[S]) -> Partial {
    let mut inverted_list = InvertedList::new();
    let mut document_lengths = DocumentLengths::with_capacity(documents.len());
    for (i, document) in documents.iter().enumerate() {
        let doc_id = offset + i as DocId + 1;
        let length = ingest_document(doc_id, document.as_ref(), &mut inverted_list);
        document_lengths.insert(doc_id, length);
    }
    Partial { inverted_list, document_lengths }
}
