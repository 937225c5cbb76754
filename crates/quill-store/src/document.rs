use async_trait::async_trait;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};

/// A JSON object as stored and queried: field name → value.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Names of the collections a [`DocumentSource`] can serve.
pub mod collections {
    pub const USERS: &str = "users";
    pub const BLOGS: &str = "blogs";
    pub const CATEGORIES: &str = "categories";
    pub const COMMENTS: &str = "comments";
    pub const LIKES: &str = "likes";
}

/// Render a record as a document.
///
/// Sanitization happens here for free: fields a record marks
/// `skip_serializing` (password hash, refresh token) never reach a
/// document, so no read pipeline can leak them.
pub fn to_document<T: Serialize>(record: &T) -> StoreResult<Document> {
    match serde_json::to_value(record) {
        Ok(serde_json::Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::Serialization(format!(
            "expected a JSON object, got {other}"
        ))),
        Err(e) => Err(StoreError::Serialization(e.to_string())),
    }
}

/// Read-side access to whole collections as JSON documents.
///
/// This is the seam the query pipelines execute against. Implementations
/// return every document of the named collection in unspecified order; the
/// pipeline's own stages filter, sort, and paginate.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn collection(&self, name: &str) -> StoreResult<Vec<Document>>;
}
