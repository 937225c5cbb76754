use thiserror::Error;

use quill_store::StoreError;

/// Errors from credential and session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// No account matches the login identifier.
    #[error("user does not exist")]
    UserNotFound,

    /// Password comparison failed.
    #[error("invalid user credentials")]
    InvalidCredentials,

    /// Token missing, malformed, expired, or referencing a gone user.
    #[error("invalid or expired token")]
    InvalidToken,

    /// Presented refresh token does not match the stored slot.
    #[error("refresh token is expired or already used")]
    RefreshReused,

    /// Underlying store failure (including uniqueness conflicts).
    #[error(transparent)]
    Store(#[from] StoreError),

    /// bcrypt failure.
    #[error("password hashing failed: {0}")]
    Hash(String),

    /// Token signing failure.
    #[error("token signing failed: {0}")]
    Sign(String),
}

/// Result alias for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
