//! Persistence layer for the Quill blog platform.
//!
//! Defines the write-side datastore traits ([`UserStore`], [`BlogStore`],
//! [`CategoryStore`], [`CommentStore`], [`LikeStore`], umbrella
//! [`Datastore`]), the read-side [`DocumentSource`] the query pipelines
//! consume, and [`InMemoryStore`], the reference implementation backed by
//! `RwLock`-guarded maps. A production deployment would implement the same
//! traits over a real document database; nothing above this crate knows the
//! difference.

pub mod document;
pub mod error;
pub mod memory;
pub mod traits;

pub use document::{collections, to_document, Document, DocumentSource};
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use traits::{BlogStore, CategoryStore, CommentStore, Datastore, LikeStore, UserStore};
