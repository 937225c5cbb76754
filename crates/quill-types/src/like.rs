use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// The target of a like: exactly one of a blog or a comment.
///
/// Externally tagged, so a flattened like record serializes with a plain
/// `blog` or `comment` field — the document shape the read pipelines join
/// against — while the Rust type makes a two-target like unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LikeTarget {
    #[serde(rename = "blog")]
    Blog(RecordId),
    #[serde(rename = "comment")]
    Comment(RecordId),
}

impl LikeTarget {
    /// The referenced record id, whichever kind the target is.
    pub fn id(&self) -> RecordId {
        match self {
            Self::Blog(id) | Self::Comment(id) => *id,
        }
    }

    /// Collection-style name of the target kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Blog(_) => "blog",
            Self::Comment(_) => "comment",
        }
    }
}

/// A like placed by a user on a single target.
///
/// At most one like exists per (user, target) pair; the toggle operation
/// maintains that invariant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: RecordId,
    #[serde(flatten)]
    pub target: LikeTarget,
    pub liked_by: RecordId,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(target: LikeTarget, liked_by: RecordId) -> Self {
        Self {
            id: RecordId::new(),
            target,
            liked_by,
            created_at: Utc::now(),
        }
    }
}
