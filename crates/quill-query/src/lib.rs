//! Read-side query composer for the Quill blog platform.
//!
//! The write side works with typed records; the read side works with
//! denormalized projections (a blog joined with its owner, category, and
//! likes). This crate expresses those projections as a [`Pipeline`] of
//! small typed stages evaluated in order over JSON documents:
//!
//! **match → join → derive → sort → project → paginate**
//!
//! Each stage is a pure function with an independently testable contract;
//! only the pipeline driver touches the [`DocumentSource`]. Both read paths
//! the platform has (blog projections and comment projections) are built
//! from the same [`PipelineBuilder`].
//!
//! [`DocumentSource`]: quill_store::DocumentSource

pub mod error;
pub mod page;
pub mod path;
pub mod pipeline;
pub mod stage;

pub use error::{QueryError, QueryResult};
pub use page::{paginate, Page, PageRequest};
pub use pipeline::{Pipeline, PipelineBuilder, QueryContext};
pub use stage::{DerivedField, JoinSpec, ProjectField, SortOrder, Stage};
