use thiserror::Error;

/// Errors from datastore operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced record does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A uniqueness constraint was violated.
    #[error("{0}")]
    Conflict(String),

    /// The requested collection name is not part of the schema.
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    /// Record could not be rendered as a document.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
