//! HTTP server for the Quill blog platform.
//!
//! Exposes registration/authentication, blogs, categories, comments, and
//! likes as a REST API with uniform `{status, data, message}` envelopes,
//! cookie- or bearer-carried sessions, and a single error boundary.

pub mod config;
pub mod cookies;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod router;
pub mod server;
pub mod state;
pub mod views;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use extract::{CurrentUser, MaybeUser};
pub use response::ApiResponse;
pub use router::build_router;
pub use server::QuillServer;
pub use state::AppState;
