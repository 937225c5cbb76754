use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use quill_types::{RecordId, User};

use crate::error::{AuthError, AuthResult};

/// Claims carried by an access token: enough identity to serve a request
/// without a user lookup on every hop.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessClaims {
    pub sub: String,
    pub email: String,
    pub username: String,
    pub display_name: String,
    pub iat: usize,
    pub exp: usize,
}

/// Claims carried by a refresh token: the user id only, plus a unique token
/// id so every issuance is distinct even within the same second.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshClaims {
    pub sub: String,
    pub jti: String,
    pub iat: usize,
    pub exp: usize,
}

/// An access/refresh token pair as returned to clients.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Signs and verifies the two session tokens.
///
/// Both tokens are HS256 JWTs; the secrets are distinct so an access token
/// can never pass refresh verification or vice versa. Lifetimes are
/// asymmetric: access tokens live minutes, refresh tokens days.
#[derive(Clone)]
pub struct TokenIssuer {
    access_secret: String,
    refresh_secret: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    pub fn new(
        access_secret: impl Into<String>,
        refresh_secret: impl Into<String>,
        access_ttl_secs: i64,
        refresh_ttl_secs: i64,
    ) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl: Duration::seconds(access_ttl_secs),
            refresh_ttl: Duration::seconds(refresh_ttl_secs),
        }
    }

    /// Access-token lifetime in seconds (cookie max-age).
    pub fn access_ttl_secs(&self) -> i64 {
        self.access_ttl.num_seconds()
    }

    /// Refresh-token lifetime in seconds (cookie max-age).
    pub fn refresh_ttl_secs(&self) -> i64 {
        self.refresh_ttl.num_seconds()
    }

    /// Issue a fresh access/refresh pair for a user.
    pub fn issue_pair(&self, user: &User) -> AuthResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.issue_access(user)?,
            refresh_token: self.issue_refresh(user)?,
        })
    }

    fn issue_access(&self, user: &User) -> AuthResult<String> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            username: user.username.clone(),
            display_name: user.display_name.clone(),
            iat: now.timestamp() as usize,
            exp: (now + self.access_ttl).timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.access_secret.as_bytes()),
        )
        .map_err(|e| AuthError::Sign(e.to_string()))
    }

    fn issue_refresh(&self, user: &User) -> AuthResult<String> {
        let now = Utc::now();
        let claims = RefreshClaims {
            sub: user.id.to_string(),
            jti: RecordId::new().to_string(),
            iat: now.timestamp() as usize,
            exp: (now + self.refresh_ttl).timestamp() as usize,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.refresh_secret.as_bytes()),
        )
        .map_err(|e| AuthError::Sign(e.to_string()))
    }

    /// Verify an access token's signature and expiry.
    pub fn verify_access(&self, token: &str) -> AuthResult<AccessClaims> {
        let data = decode::<AccessClaims>(
            token,
            &DecodingKey::from_secret(self.access_secret.as_bytes()),
            &Self::validation(),
        )
        .map_err(|_| AuthError::InvalidToken)?;
        Ok(data.claims)
    }

    /// Verify a refresh token's signature and expiry.
    pub fn verify_refresh(&self, token: &str) -> AuthResult<RefreshClaims> {
        let data = decode::<RefreshClaims>(
            token,
            &DecodingKey::from_secret(self.refresh_secret.as_bytes()),
            &Self::validation(),
        )
        .map_err(|_| AuthError::InvalidToken)?;
        Ok(data.claims)
    }

    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        // Exact expiry; no clock-skew grace inside a single process.
        validation.leeway = 0;
        validation
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl", &self.access_ttl)
            .field("refresh_ttl", &self.refresh_ttl)
            .finish_non_exhaustive()
    }
}
