//! Dotted-path access into JSON documents.
//!
//! Paths like `"avatar.url"` address nested object fields. Traversal stops
//! at non-objects; there is no array indexing — the stages that walk joined
//! arrays do so explicitly.

use quill_store::Document;
use serde_json::Value;

/// Look up a dotted path. Returns `None` if any segment is missing or a
/// non-object is reached before the last segment.
pub fn get_path<'a>(doc: &'a Document, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = doc.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Insert a value at a dotted path, creating intermediate objects.
pub fn insert_path(doc: &mut Document, path: &str, value: Value) {
    let mut segments: Vec<&str> = path.split('.').collect();
    let last = segments.pop().expect("path has at least one segment");
    let mut current = doc;
    for segment in segments {
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Document::new()));
        if !entry.is_object() {
            *entry = Value::Object(Document::new());
        }
        current = entry.as_object_mut().expect("just ensured object");
    }
    current.insert(last.to_string(), value);
}

/// Build a new document containing only the given dotted paths, preserving
/// nesting. Missing paths are skipped. An empty path list keeps everything.
pub fn retain_paths(doc: &Document, paths: &[String]) -> Document {
    if paths.is_empty() {
        return doc.clone();
    }
    let mut kept = Document::new();
    for path in paths {
        if let Some(value) = get_path(doc, path) {
            insert_path(&mut kept, path, value.clone());
        }
    }
    kept
}
