use quill_store::Document;
use serde::{Deserialize, Serialize};

fn default_page() -> u64 {
    1
}

fn default_limit() -> u64 {
    10
}

/// Page/limit request parameters, deserializable straight from a query
/// string. Defaults: page 1, limit 10. Zero values normalize to 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl PageRequest {
    pub fn new(page: u64, limit: u64) -> Self {
        Self { page, limit }.normalized()
    }

    /// Clamp degenerate values (page/limit of 0 become 1).
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            limit: self.limit.max(1),
        }
    }
}

/// One page of pipeline output plus pagination bookkeeping.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub docs: Vec<Document>,
    pub total_docs: u64,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

/// Slice sorted rows into the requested page.
pub fn paginate(rows: Vec<Document>, request: PageRequest) -> Page {
    let request = request.normalized();
    let total_docs = rows.len() as u64;
    let total_pages = total_docs.div_ceil(request.limit);
    let start = (request.page - 1).saturating_mul(request.limit) as usize;
    let docs: Vec<Document> = rows
        .into_iter()
        .skip(start)
        .take(request.limit as usize)
        .collect();
    Page {
        docs,
        total_docs,
        page: request.page,
        limit: request.limit,
        total_pages,
    }
}
