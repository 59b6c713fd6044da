use crate::algebra::Operand;
use crate::index::{InvertedIndex, Posting};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueryMode {
    /// Documents containing every term.
    And,
    /// Documents containing any term.
    #[default]
    Or,
}

impl InvertedIndex {
    fn combine(&self, mode: QueryMode, one: &Operand<'_>, two: &Operand<'_>) -> Vec<Posting> {
        match mode {
            QueryMode::And => self.intersect(one, two),
            QueryMode::Or => self.merge(one, two),
        }
    }

    /// Whitespace-separated terms folded left to right, sorted by descending score.
    pub fn apply_query(&self, text: &str, mode: QueryMode) -> Vec<Posting> {
        let mut terms = text.split_whitespace();
        let Some(first) = terms.next() else {
            return Vec::new();
        };
        let mut term_count = 1usize;
        let combined = terms.fold(Operand::Term(first), |acc, term| {
            term_count += 1;
            Operand::Postings(self.combine(mode, &acc, &Operand::Term(term)))
        });
        let mut results = match combined {
            Operand::Term(term) => self.postings(term).to_vec(),
            Operand::Postings(postings) => postings,
        };
        // stable: equal scores keep their doc-id order from the fold
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        tracing::debug!(term_count, ?mode, hits = results.len(), "query applied");
        results
    }

    /// `apply_query` truncated to the first `limit` results.
    pub fn query(&self, text: &str, mode: QueryMode, limit: Option<usize>) -> Vec<Posting> {
        fetch_top(self.apply_query(text, mode), limit)
    }
}

/// Keep the first `limit` results; `None` keeps everything.
pub fn fetch_top(mut results: Vec<Posting>, limit: Option<usize>) -> Vec<Posting> {
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    results
}
