//! Request handlers, one module per resource.
//!
//! Handlers are thin: validate input, delegate to the store, session
//! manager, or a read pipeline, and wrap the result in the response
//! envelope. Identity arrives explicitly through the extractors.

pub mod auth;
pub mod blog;
pub mod category;
pub mod comment;
pub mod like;

use axum::response::Json;
use serde_json::json;

use quill_types::RecordId;

use crate::error::{ApiError, ApiResult};

/// Parse a path segment as a record id, reporting a 400 on garbage.
pub(crate) fn parse_id(raw: &str) -> ApiResult<RecordId> {
    raw.parse::<RecordId>().map_err(ApiError::from)
}

/// Liveness probe.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "name": "quill-server",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
