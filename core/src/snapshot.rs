use crate::index::InvertedIndex;
use parking_lot::RwLock;
use std::sync::Arc;

/// Read-mostly handle to the live index. Readers take an `Arc` snapshot and query it
/// without holding the lock; a rebuild installs a whole new index with [`swap`](Self::swap).
pub struct SharedIndex {
    current: RwLock<Arc<InvertedIndex>>,
}

impl SharedIndex {
    pub fn new(index: InvertedIndex) -> Self {
        Self { current: RwLock::new(Arc::new(index)) }
    }

    pub fn load(&self) -> Arc<InvertedIndex> {
        Arc::clone(&self.current.read())
    }

    /// Install `index` and return the snapshot it replaces.
    pub fn swap(&self, index: InvertedIndex) -> Arc<InvertedIndex> {
        let next = Arc::new(index);
        std::mem::replace(&mut *self.current.write(), next)
    }
}

impl From<InvertedIndex> for SharedIndex {
    fn from(index: InvertedIndex) -> Self { Self::new(index) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndexConfig;
    use crate::query::QueryMode;
    use std::thread;

    #[test]
    fn readers_keep_their_snapshot_across_swap() {
        let config = IndexConfig::term_frequency();
        let shared = SharedIndex::new(InvertedIndex::build(["old words"], &config).unwrap());
        let before = shared.load();

        let previous = shared.swap(InvertedIndex::build(["new words", "new"], &config).unwrap());
        assert!(Arc::ptr_eq(&before, &previous));
        assert_eq!(before.num_docs(), 1);
        assert_eq!(before.postings("old").len(), 1);
        assert_eq!(shared.load().num_docs(), 2);
        assert!(shared.load().postings("old").is_empty());
    }

    #[test]
    fn concurrent_queries() {
        let shared = Arc::new(SharedIndex::from(
            InvertedIndex::build(["a b", "b c", "c a"], &IndexConfig::term_frequency()).unwrap(),
        ));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || shared.load().apply_query("a b", QueryMode::And))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().len(), 1);
        }
    }
}
