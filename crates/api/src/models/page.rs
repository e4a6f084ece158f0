//! Pagination envelope for listing endpoints.
//!
//! Listing responses use a fixed wrapper:
//! `{data, totalDocuments, totalPages, currentPage}` - field names are part
//! of the external contract and must not change.

use serde::{Deserialize, Serialize};

/// Fixed page size for all paginated listings.
pub const PAGE_SIZE: i64 = 10;

/// One page of results plus client-side pagination totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The documents on this page (up to [`PAGE_SIZE`]).
    pub data: Vec<T>,
    /// Total number of documents matching the filter.
    pub total_documents: i64,
    /// `ceil(total_documents / PAGE_SIZE)`.
    pub total_pages: i64,
    /// The 1-based page this response covers.
    pub current_page: i64,
}

impl<T> Page<T> {
    /// Wrap one page of results in the listing envelope.
    #[must_use]
    pub fn new(data: Vec<T>, total_documents: i64, current_page: i64) -> Self {
        Self {
            data,
            total_documents,
            total_pages: (total_documents + PAGE_SIZE - 1) / PAGE_SIZE,
            current_page,
        }
    }
}

/// Query parameters accepted by paginated listings.
///
/// `page` is kept as a raw string: absent and non-numeric values both fall
/// back to page 1 instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// Resolve the requested page number. Always >= 1.
    #[must_use]
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|s| s.trim().parse::<i64>().ok())
            .map_or(1, |p| p.max(1))
    }

    /// Number of rows to skip for the resolved page.
    #[must_use]
    pub fn offset(&self) -> i64 {
        (self.page() - 1) * PAGE_SIZE
    }
}
