use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// A blog post. Owner and category are references, not containment; both
/// must exist when the post is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: RecordId,
    pub title: String,
    pub content: String,
    pub category: RecordId,
    pub owner: RecordId,
    #[serde(default)]
    pub views: u64,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl Blog {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: RecordId,
        owner: RecordId,
    ) -> Self {
        let now = Utc::now();
        let title: String = title.into();
        Self {
            id: RecordId::new(),
            title: title.trim().to_string(),
            content: content.into(),
            category,
            owner,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
