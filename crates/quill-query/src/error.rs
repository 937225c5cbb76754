use thiserror::Error;

use quill_store::StoreError;

/// Errors from pipeline execution.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The underlying document source failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
