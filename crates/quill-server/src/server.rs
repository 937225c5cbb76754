use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::router::build_router;
use crate::state::AppState;

/// The Quill platform server.
pub struct QuillServer {
    config: ServerConfig,
}

impl QuillServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router over a fresh in-memory store (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::in_memory(self.config.clone()))
    }

    /// Start serving requests.
    pub async fn serve(self) -> std::io::Result<()> {
        let app = build_router(AppState::in_memory(self.config.clone()));
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("quill server listening on {}", self.config.bind_addr);
        axum::serve(listener, app).await
    }
}
