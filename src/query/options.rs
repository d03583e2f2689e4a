//! Query options and their serialization
//!
//! Parts are emitted in a fixed order: offset, limit, page, sort, filter.
//! Nothing is percent-encoded; filter values are passed through verbatim.

use super::filter::Filter;
use crate::types::SortOrder;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Paging, sorting and filtering state for one collection request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Number of results per page
    pub limit: Option<u64>,
    /// Page number to request (ignored when `offset` is set)
    pub page: Option<i64>,
    /// Number of results to skip
    pub offset: Option<u64>,
    /// Field to sort by, optionally prefixed with `+` or `-`
    pub sort: Option<String>,
    /// A single pre-formatted filter expression
    pub filter: Option<String>,
}

impl QueryOptions {
    /// Create empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    #[must_use]
    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Set the page number
    #[must_use]
    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the offset
    #[must_use]
    pub fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the raw sort value (`name`, `+name` or `-name`)
    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Sort by a field in the given direction
    #[must_use]
    pub fn sort_by(mut self, field: &str, order: SortOrder) -> Self {
        self.set_sort(field, order);
        self
    }

    /// Set a raw filter expression, replacing any previous one
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set a built filter expression, replacing any previous one
    #[must_use]
    pub fn with_filter(mut self, filter: &Filter) -> Self {
        self.set_filter(filter);
        self
    }

    /// Store `order.prefix() + field` as the sort value
    pub fn set_sort(&mut self, field: &str, order: SortOrder) {
        self.sort = Some(format!("{}{field}", order.prefix()));
    }

    /// Replace the active filter expression
    pub fn set_filter(&mut self, filter: &Filter) {
        self.filter = Some(filter.to_string());
    }

    /// Build the query parts in their fixed order
    fn parts(&self) -> Vec<String> {
        let mut parts = Vec::new();

        if let Some(offset) = self.offset {
            parts.push(format!("offset={offset}"));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        // Offset takes precedence over page
        if let (Some(page), None) = (self.page, self.offset) {
            parts.push(format!("page={page}"));
        }
        if let Some(sort) = &self.sort {
            parts.push(format!("sort={}", normalize_sort(sort)));
        }
        if let Some(filter) = &self.filter {
            parts.push(filter.clone());
        }

        parts
    }

    /// The serialized query string without the leading `?`
    pub fn query_string(&self) -> String {
        self.parts().join("&")
    }

    /// Append the serialized options to a base URL
    ///
    /// Returns `url` unchanged when no option is set.
    pub fn url_with_query(&self, url: &str) -> String {
        let parts = self.parts();
        if parts.is_empty() {
            return url.to_string();
        }

        let full = format!("{url}?{}", parts.join("&"));
        trace!(url = %full, "Serialized query options");
        full
    }
}

/// Normalize a sort value into `field:asc` or `field:desc`
///
/// A leading `-` means descending, a leading `+` or no prefix means ascending.
pub fn normalize_sort(sort: &str) -> String {
    if let Some(field) = sort.strip_prefix('-') {
        format!("{field}:desc")
    } else if let Some(field) = sort.strip_prefix('+') {
        format!("{field}:asc")
    } else {
        format!("{sort}:asc")
    }
}
