use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use thiserror::Error;

use quill_auth::AuthError;
use quill_query::QueryError;
use quill_store::StoreError;
use quill_types::TypeError;

/// The request-level error taxonomy. Every failure from the store, auth,
/// or query layers converges here and is rendered as the JSON error
/// envelope with the matching HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error envelope: `{status, message, errors}` with the HTTP status
/// mirrored in the body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: u16,
    message: String,
    errors: Vec<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            status: status.as_u16(),
            message: self.to_string(),
            errors: Vec::new(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound(err.to_string()),
            StoreError::Conflict(message) => Self::Conflict(message),
            StoreError::UnknownCollection(_) | StoreError::Serialization(_) => {
                Self::Internal(err.to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Validation(message) => Self::Validation(message),
            AuthError::UserNotFound => Self::NotFound(err.to_string()),
            AuthError::InvalidCredentials
            | AuthError::InvalidToken
            | AuthError::RefreshReused => Self::Auth(err.to_string()),
            AuthError::Store(store) => store.into(),
            AuthError::Hash(_) | AuthError::Sign(_) => Self::Internal(err.to_string()),
        }
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Store(store) => store.into(),
        }
    }
}

impl From<TypeError> for ApiError {
    fn from(err: TypeError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result alias for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;
