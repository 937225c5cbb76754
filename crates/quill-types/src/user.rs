use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Reference to an externally-hosted avatar image.
///
/// Upload and hosting happen outside this system; accounts only carry the
/// hosting provider's id and the public URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Avatar {
    pub public_id: String,
    pub url: String,
}

impl Avatar {
    pub fn new(public_id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            url: url.into(),
        }
    }

    /// Returns `true` if either half of the pair is blank.
    pub fn is_blank(&self) -> bool {
        self.public_id.trim().is_empty() || self.url.trim().is_empty()
    }
}

/// A registered account.
///
/// Username and email are globally unique and stored lowercase. The
/// password hash and the single-slot refresh token are never serialized:
/// any read path that emits a user as JSON emits it already sanitized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub avatar: Avatar,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(skip_serializing, default)]
    pub refresh_token: Option<String>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new account. Username and email are normalized to lowercase.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
        avatar: Avatar,
        password_hash: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        let username: String = username.into();
        let email: String = email.into();
        let display_name: String = display_name.into();
        Self {
            id: RecordId::new(),
            username: username.trim().to_lowercase(),
            email: email.trim().to_lowercase(),
            display_name: display_name.trim().to_string(),
            avatar,
            password_hash: password_hash.into(),
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sanitized projection for responses and token claims.
    pub fn public(&self) -> UserPublic {
        UserPublic {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            avatar: self.avatar.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A user with credential fields stripped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPublic {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub avatar: Avatar,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}
