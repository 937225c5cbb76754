use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Server configuration. Defaults are suitable for local development only;
/// deployments load a TOML file with real secrets.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    /// Access-token lifetime in seconds (short-lived).
    pub access_token_ttl_secs: u64,
    /// Refresh-token lifetime in seconds (long-lived).
    pub refresh_token_ttl_secs: u64,
    /// bcrypt cost factor for password hashing.
    pub bcrypt_cost: u32,
    /// Mark session cookies `Secure`. Off only for plain-HTTP development.
    pub secure_cookies: bool,
    /// Exact CORS origin for credentialed requests; mirrors the request
    /// origin when unset.
    pub cors_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".parse().unwrap(),
            access_token_secret: "dev-access-secret".into(),
            refresh_token_secret: "dev-refresh-secret".into(),
            access_token_ttl_secs: 15 * 60,
            refresh_token_ttl_secs: 10 * 24 * 60 * 60,
            bcrypt_cost: quill_auth::HASH_COST,
            secure_cookies: true,
            cors_origin: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file. Missing keys fall back to
    /// defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }
}
