//! Credentials and sessions for the Quill blog platform.
//!
//! Three pieces, layered:
//!
//! - [`PasswordHasher`] — slow one-way password hashing (bcrypt, cost 10)
//! - [`TokenIssuer`] — HMAC-signed access/refresh token pairs with distinct
//!   secrets and asymmetric lifetimes
//! - [`SessionManager`] — the account lifecycle over a [`UserStore`]:
//!   register, login, refresh with single-slot rotation, logout, password
//!   change, profile/avatar update, and per-request session verification
//!
//! [`UserStore`]: quill_store::UserStore

pub mod error;
pub mod password;
pub mod session;
pub mod token;

pub use error::{AuthError, AuthResult};
pub use password::{PasswordHasher, HASH_COST};
pub use session::{LoginOutcome, LoginRequest, NewAccount, SessionManager};
pub use token::{AccessClaims, RefreshClaims, TokenIssuer, TokenPair};
