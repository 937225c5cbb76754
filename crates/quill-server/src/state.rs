use std::sync::Arc;

use quill_auth::{PasswordHasher, SessionManager, TokenIssuer};
use quill_store::{Datastore, DocumentSource, InMemoryStore};

use crate::config::ServerConfig;

/// Shared application state: one datastore viewed through its write-side
/// and read-side traits, the session manager, and the configuration.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Datastore>,
    pub docs: Arc<dyn DocumentSource>,
    pub sessions: Arc<SessionManager>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by the in-memory store.
    pub fn in_memory(config: ServerConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let sessions = SessionManager::new(
            store.clone(),
            PasswordHasher::new(config.bcrypt_cost),
            TokenIssuer::new(
                config.access_token_secret.clone(),
                config.refresh_token_secret.clone(),
                config.access_token_ttl_secs as i64,
                config.refresh_token_ttl_secs as i64,
            ),
        );
        Self {
            store: store.clone(),
            docs: store,
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}
