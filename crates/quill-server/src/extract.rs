//! Explicit identity extraction.
//!
//! Session verification is an extractor, not middleware that mutates the
//! request: a handler that needs an identity declares [`CurrentUser`] in
//! its signature and receives the sanitized user value directly. Public
//! read routes that are viewer-aware declare [`MaybeUser`] instead, which
//! never rejects.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use quill_types::UserPublic;

use crate::cookies::{read_cookie, ACCESS_COOKIE};
use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated user; rejects with 401 when the access token is
/// missing, invalid, expired, or references a deleted account.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub UserPublic);

/// The authenticated user if a valid access token was presented, `None`
/// otherwise. Used by public routes that derive viewer-relative fields.
#[derive(Clone, Debug)]
pub struct MaybeUser(pub Option<UserPublic>);

/// Bearer header first, `accessToken` cookie second.
fn access_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_string)
        .or_else(|| read_cookie(&parts.headers, ACCESS_COOKIE))
}

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, ApiError> {
        let token =
            access_token(parts).ok_or_else(|| ApiError::Auth("unauthorized request".into()))?;
        let user = state.sessions.verify_session(&token).await?;
        Ok(Self(user))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = match access_token(parts) {
            Some(token) => state.sessions.verify_session(&token).await.ok(),
            None => None,
        };
        Ok(Self(user))
    }
}
