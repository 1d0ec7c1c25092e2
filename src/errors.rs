use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    #[error("Node not found in list {list}: slot {index}")]
    NodeNotFound { list: u64, index: usize },

    #[error("Operation requires a non-empty {0}")]
    EmptyCollection(&'static str),
}

pub type CollectionResult<T> = Result<T, CollectionError>;
