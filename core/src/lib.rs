pub mod algebra;
pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod scorer;
pub mod shard;
pub mod snapshot;
pub mod tokenizer;

pub use algebra::Operand;
pub use config::IndexConfig;
pub use error::{IndexError, Result};
pub use index::{DocId, DocumentLengths, InvertedIndex, InvertedList, Posting};
pub use query::QueryMode;
pub use snapshot::SharedIndex;
