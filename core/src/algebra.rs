//! Merge-join combinators over postings lists sorted ascending by doc id.

use crate::index::{InvertedIndex, Posting};
use crate::scorer::round_to;
use std::cmp::Ordering;

/// One side of a binary combination: a term still to be looked up, or an
/// already computed postings list (e.g. the running result of a fold).
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a> {
    Term(&'a str),
    Postings(Vec<Posting>),
}

impl InvertedIndex {
    pub fn resolve<'a>(&'a self, operand: &'a Operand<'_>) -> &'a [Posting] {
        match operand {
            Operand::Term(term) => self.postings(term),
            Operand::Postings(postings) => postings.as_slice(),
        }
    }

    pub fn intersect(&self, one: &Operand<'_>, two: &Operand<'_>) -> Vec<Posting> {
        intersect(self.resolve(one), self.resolve(two))
    }

    pub fn merge(&self, one: &Operand<'_>, two: &Operand<'_>) -> Vec<Posting> {
        merge(self.resolve(one), self.resolve(two))
    }
}

/// Ranked AND: documents present in both lists, scores summed.
pub fn intersect(one: &[Posting], two: &[Posting]) -> Vec<Posting> {
    let mut combination = Vec::with_capacity(one.len().min(two.len()));
    let (mut i, mut j) = (0, 0);
    while i < one.len() && j < two.len() {
        match one[i].doc_id.cmp(&two[j].doc_id) {
            Ordering::Equal => {
                combination.push(summed(&one[i], &two[j]));
                i += 1;
                j += 1;
            }
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
        }
    }
    combination
}

/// Ranked OR: union of both lists, scores summed where a document is in both.
pub fn merge(one: &[Posting], two: &[Posting]) -> Vec<Posting> {
    let mut combination = Vec::with_capacity(one.len() + two.len());
    let (mut i, mut j) = (0, 0);
    while i < one.len() && j < two.len() {
        match one[i].doc_id.cmp(&two[j].doc_id) {
            Ordering::Equal => {
                combination.push(summed(&one[i], &two[j]));
                i += 1;
                j += 1;
            }
            Ordering::Less => {
                combination.push(one[i]);
                i += 1;
            }
            Ordering::Greater => {
                combination.push(two[j]);
                j += 1;
            }
        }
    }
    // at most one of these is non-empty
    combination.extend_from_slice(&one[i..]);
    combination.extend_from_slice(&two[j..]);
    combination
}

fn summed(one: &Posting, two: &Posting) -> Posting {
    Posting::new(one.doc_id, round_to(one.score + two.score, 3))
}
