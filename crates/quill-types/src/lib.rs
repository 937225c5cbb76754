//! Foundation types for the Quill blog platform.
//!
//! This crate provides the identifiers and domain records used throughout
//! the workspace. Every other `quill` crate depends on `quill-types`.
//!
//! # Key Types
//!
//! - [`RecordId`] — Time-ordered record identifier (UUID v7)
//! - [`User`] / [`UserPublic`] — Account record and its sanitized projection
//! - [`Blog`], [`Category`], [`Comment`] — Content records
//! - [`Like`] / [`LikeTarget`] — Like record with a structurally-enforced
//!   single target (blog or comment)

pub mod blog;
pub mod category;
pub mod comment;
pub mod error;
pub mod id;
pub mod like;
pub mod user;

pub use blog::Blog;
pub use category::Category;
pub use comment::Comment;
pub use error::TypeError;
pub use id::RecordId;
pub use like::{Like, LikeTarget};
pub use user::{Avatar, User, UserPublic};
