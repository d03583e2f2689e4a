//! Pagination metadata types

use crate::types::JsonValue;
use serde::{Deserialize, Serialize};

/// Result window reported by one fetch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMetadata {
    /// Total number of matching documents
    pub total: Option<u64>,
    /// Page size used by the server
    pub limit: Option<u64>,
    /// Offset used by the server (omitted by the API on page-based requests)
    pub offset: Option<u64>,
    /// Page number echoed by the server (omitted on offset-based requests)
    pub page: Option<i64>,
    /// Total number of pages
    pub pages: Option<u64>,
}

impl PaginationMetadata {
    /// Read the recognized fields from a response body
    ///
    /// Missing fields and values that are not non-negative integers (or, for
    /// `page`, integers) resolve to `None`. A body that is not an object
    /// yields empty metadata.
    pub fn from_body(body: &JsonValue) -> Self {
        let unsigned = |key: &str| body.get(key).and_then(JsonValue::as_u64);

        Self {
            total: unsigned("total"),
            limit: unsigned("limit"),
            offset: unsigned("offset"),
            page: body.get("page").and_then(JsonValue::as_i64),
            pages: unsigned("pages"),
        }
    }

    /// True when no field was reported
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Page that `next_page` will request
    pub fn next_page(&self) -> i64 {
        self.page.map_or(1, |page| page.saturating_add(1))
    }

    /// Page that `previous_page` will request
    ///
    /// Not clamped: page 1 yields page 0.
    pub fn previous_page(&self) -> i64 {
        self.page.map_or(1, |page| page.saturating_sub(1))
    }

    /// Whether the reported page is at or past the last page
    ///
    /// `None` when the server did not report both `page` and `pages`.
    pub fn is_last_page(&self) -> Option<bool> {
        match (self.page, self.pages) {
            (Some(page), Some(pages)) => {
                Some(i64::try_from(pages).is_ok_and(|pages| page >= pages))
            }
            _ => None,
        }
    }
}
