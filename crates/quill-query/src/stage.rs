//! Pipeline stages and their pure application functions.
//!
//! Every stage here is a plain data description plus a synchronous
//! function over already-fetched documents. Fetching foreign collections
//! for joins is the pipeline driver's job, which keeps each stage's
//! contract (input rows → output rows) independently testable.

use std::cmp::Ordering;

use quill_store::Document;
use serde_json::Value;

use crate::path::{get_path, insert_path, retain_paths};

/// Sort direction for a [`Stage::Sort`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// A lookup joining a foreign collection into each row.
///
/// For every row, all foreign documents whose `foreign_field` equals the
/// row's `local_field` are collected (hash join) into an array stored at
/// `as_field`. `fields` optionally restricts each joined document to a set
/// of dotted paths, the way a sub-projection would.
#[derive(Clone, Debug)]
pub struct JoinSpec {
    pub from: String,
    pub local_field: String,
    pub foreign_field: String,
    pub as_field: String,
    pub fields: Vec<String>,
}

impl JoinSpec {
    pub fn new(
        from: impl Into<String>,
        local_field: impl Into<String>,
        foreign_field: impl Into<String>,
        as_field: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            local_field: local_field.into(),
            foreign_field: foreign_field.into(),
            as_field: as_field.into(),
            fields: Vec::new(),
        }
    }

    /// Restrict joined documents to the given dotted paths.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

/// A scalar computed from joined data and written onto each row.
#[derive(Clone, Debug)]
pub enum DerivedField {
    /// `field` = number of elements in the array at `of` (0 if missing).
    Count { field: String, of: String },
    /// `field` = first element of the array at `of` (null if empty).
    First { field: String, of: String },
    /// `field` = whether the viewer's id appears under `key` in any element
    /// of the array at `array`. Always `false` without a viewer.
    ViewerMember {
        field: String,
        array: String,
        key: String,
    },
}

/// One output field of a [`Stage::Project`].
#[derive(Clone, Debug)]
pub enum ProjectField {
    /// Keep the value at this dotted path, preserving nesting.
    Keep(String),
    /// Write the value found at `from` to the (possibly new) field `field`.
    Computed { field: String, from: String },
}

/// A single transformation stage in a read pipeline.
#[derive(Clone, Debug)]
pub enum Stage {
    /// Keep rows whose value at `field` equals `value`.
    Match { field: String, value: Value },
    /// Join a foreign collection (see [`JoinSpec`]).
    Join(JoinSpec),
    /// Compute scalar fields from joined arrays.
    Derive(Vec<DerivedField>),
    /// Sort rows by the value at `field`.
    Sort { field: String, order: SortOrder },
    /// Reshape each row to the listed output fields.
    Project(Vec<ProjectField>),
}

// ---------------------------------------------------------------------------
// Stage application
// ---------------------------------------------------------------------------

/// Equality filter over a dotted path.
pub fn apply_match(rows: Vec<Document>, field: &str, value: &Value) -> Vec<Document> {
    rows.into_iter()
        .filter(|row| get_path(row, field) == Some(value))
        .collect()
}

/// Hash join against pre-fetched foreign documents.
pub fn apply_join(rows: Vec<Document>, spec: &JoinSpec, foreign: &[Document]) -> Vec<Document> {
    rows.into_iter()
        .map(|mut row| {
            let matches: Vec<Value> = match get_path(&row, &spec.local_field) {
                Some(local) => foreign
                    .iter()
                    .filter(|doc| get_path(doc, &spec.foreign_field) == Some(local))
                    .map(|doc| Value::Object(retain_paths(doc, &spec.fields)))
                    .collect(),
                None => Vec::new(),
            };
            row.insert(spec.as_field.clone(), Value::Array(matches));
            row
        })
        .collect()
}

/// Compute derived scalars onto each row. `viewer` is the requesting user's
/// id rendered as a string, if any.
pub fn apply_derive(
    rows: Vec<Document>,
    fields: &[DerivedField],
    viewer: Option<&str>,
) -> Vec<Document> {
    rows.into_iter()
        .map(|mut row| {
            for derived in fields {
                let value = match derived {
                    DerivedField::Count { of, .. } => {
                        let len = get_path(&row, of)
                            .and_then(Value::as_array)
                            .map_or(0, Vec::len);
                        Value::from(len as u64)
                    }
                    DerivedField::First { of, .. } => get_path(&row, of)
                        .and_then(Value::as_array)
                        .and_then(|arr| arr.first())
                        .cloned()
                        .unwrap_or(Value::Null),
                    DerivedField::ViewerMember { array, key, .. } => {
                        let is_member = match viewer {
                            Some(viewer) => get_path(&row, array)
                                .and_then(Value::as_array)
                                .is_some_and(|arr| {
                                    arr.iter().any(|item| {
                                        item.as_object()
                                            .and_then(|obj| get_path(obj, key))
                                            .and_then(Value::as_str)
                                            == Some(viewer)
                                    })
                                }),
                            None => false,
                        };
                        Value::Bool(is_member)
                    }
                };
                let field = match derived {
                    DerivedField::Count { field, .. }
                    | DerivedField::First { field, .. }
                    | DerivedField::ViewerMember { field, .. } => field,
                };
                row.insert(field.clone(), value);
            }
            row
        })
        .collect()
}

/// Stable sort by the value at a dotted path.
pub fn apply_sort(mut rows: Vec<Document>, field: &str, order: SortOrder) -> Vec<Document> {
    rows.sort_by(|a, b| {
        let ordering = compare_values(get_path(a, field), get_path(b, field));
        match order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    rows
}

/// Reshape each row to the projected fields.
pub fn apply_project(rows: Vec<Document>, fields: &[ProjectField]) -> Vec<Document> {
    rows.into_iter()
        .map(|row| {
            let mut projected = Document::new();
            for field in fields {
                match field {
                    ProjectField::Keep(path) => {
                        if let Some(value) = get_path(&row, path) {
                            insert_path(&mut projected, path, value.clone());
                        }
                    }
                    ProjectField::Computed { field, from } => {
                        let value = get_path(&row, from).cloned().unwrap_or(Value::Null);
                        insert_path(&mut projected, field, value);
                    }
                }
            }
            projected
        })
        .collect()
}

/// Total order over JSON values: null < bool < number < string < array <
/// object; numbers compare numerically, strings lexicographically. Missing
/// values sort first.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Object(_) => 5,
        }
    }
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a, b) {
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            (Value::Number(x), Value::Number(y)) => {
                let x = x.as_f64().unwrap_or(f64::NAN);
                let y = y.as_f64().unwrap_or(f64::NAN);
                x.partial_cmp(&y).unwrap_or(Ordering::Equal)
            }
            (Value::String(x), Value::String(y)) => x.cmp(y),
            _ => rank(a).cmp(&rank(b)),
        },
    }
}
