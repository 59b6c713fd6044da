use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Average document length is undefined without documents.
    #[error("cannot build an index from an empty corpus")]
    EmptyCorpus,
}

pub type Result<T> = std::result::Result<T, IndexError>;
