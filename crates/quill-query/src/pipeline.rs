use quill_store::{Document, DocumentSource};
use quill_types::RecordId;
use serde_json::Value;

use crate::error::QueryResult;
use crate::page::{paginate, Page, PageRequest};
use crate::stage::{
    apply_derive, apply_join, apply_match, apply_project, apply_sort, DerivedField, JoinSpec,
    ProjectField, SortOrder, Stage,
};

/// Per-request context a pipeline runs under: the authenticated viewer, if
/// any. Viewer-relative derivations (the `isLiked` flag) read it; nothing
/// else does.
#[derive(Clone, Debug, Default)]
pub struct QueryContext {
    pub viewer: Option<RecordId>,
}

impl QueryContext {
    /// Context without a viewer; membership flags derive to `false`.
    pub fn anonymous() -> Self {
        Self { viewer: None }
    }

    /// Context for an authenticated viewer.
    pub fn for_viewer(viewer: RecordId) -> Self {
        Self {
            viewer: Some(viewer),
        }
    }
}

/// A composed read projection: a primary collection and an ordered list of
/// stages. Build with [`Pipeline::over`], run with [`Pipeline::run`] or
/// [`Pipeline::run_paged`].
#[derive(Clone, Debug)]
pub struct Pipeline {
    primary: String,
    stages: Vec<Stage>,
}

impl Pipeline {
    /// Start building a pipeline over the named primary collection.
    pub fn over(primary: impl Into<String>) -> PipelineBuilder {
        PipelineBuilder {
            primary: primary.into(),
            stages: Vec::new(),
        }
    }

    /// Number of stages.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Evaluate the pipeline: fetch the primary collection, then apply the
    /// stages in order. Joins fetch their foreign collection once each.
    pub async fn run(
        &self,
        source: &dyn DocumentSource,
        context: &QueryContext,
    ) -> QueryResult<Vec<Document>> {
        let viewer = context.viewer.map(|id| id.to_string());
        let mut rows = source.collection(&self.primary).await?;
        for stage in &self.stages {
            rows = match stage {
                Stage::Match { field, value } => apply_match(rows, field, value),
                Stage::Join(spec) => {
                    let foreign = source.collection(&spec.from).await?;
                    apply_join(rows, spec, &foreign)
                }
                Stage::Derive(fields) => apply_derive(rows, fields, viewer.as_deref()),
                Stage::Sort { field, order } => apply_sort(rows, field, *order),
                Stage::Project(fields) => apply_project(rows, fields),
            };
        }
        Ok(rows)
    }

    /// Evaluate the pipeline, then slice the result into a page.
    pub async fn run_paged(
        &self,
        source: &dyn DocumentSource,
        context: &QueryContext,
        request: PageRequest,
    ) -> QueryResult<Page> {
        let rows = self.run(source, context).await?;
        Ok(paginate(rows, request))
    }
}

/// Fluent builder for [`Pipeline`], one method per stage kind.
#[derive(Clone, Debug)]
pub struct PipelineBuilder {
    primary: String,
    stages: Vec<Stage>,
}

impl PipelineBuilder {
    /// Keep rows whose value at `field` equals `value`.
    pub fn match_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.stages.push(Stage::Match {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Join a foreign collection.
    pub fn join(mut self, spec: JoinSpec) -> Self {
        self.stages.push(Stage::Join(spec));
        self
    }

    /// Compute derived scalar fields.
    pub fn derive(mut self, fields: Vec<DerivedField>) -> Self {
        self.stages.push(Stage::Derive(fields));
        self
    }

    /// Sort by `field`, newest/largest first.
    pub fn sort_descending(mut self, field: impl Into<String>) -> Self {
        self.stages.push(Stage::Sort {
            field: field.into(),
            order: SortOrder::Descending,
        });
        self
    }

    /// Sort by `field`, ascending.
    pub fn sort_ascending(mut self, field: impl Into<String>) -> Self {
        self.stages.push(Stage::Sort {
            field: field.into(),
            order: SortOrder::Ascending,
        });
        self
    }

    /// Reshape rows to the listed output fields.
    pub fn project(mut self, fields: Vec<ProjectField>) -> Self {
        self.stages.push(Stage::Project(fields));
        self
    }

    pub fn build(self) -> Pipeline {
        Pipeline {
            primary: self.primary,
            stages: self.stages,
        }
    }
}
