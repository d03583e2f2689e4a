//! Chainable, stateful collection
//!
//! State lives in three places: the owned [`QueryOptions`], the documents of
//! the last fetch and the [`PaginationMetadata`] of the last fetch. Paging
//! forward or backward derives the next page from that metadata, not from a
//! local counter.

use super::types::Resource;
use crate::client::TheOneApi;
use crate::document::Document;
use crate::error::Result;
use crate::http::ApiResponse;
use crate::pagination::PaginationMetadata;
use crate::query::{Filter, QueryOptions};
use crate::types::{JsonValue, SortOrder};
use std::fmt;
use tracing::{debug, warn};

/// A query builder and result holder for one resource
pub struct Collection<'a, R: Resource> {
    api: &'a TheOneApi,
    resource: R,
    options: QueryOptions,
    docs: Vec<R::Doc>,
    metadata: PaginationMetadata,
    last_response: Option<ApiResponse>,
}

impl<'a, R: Resource> Collection<'a, R> {
    /// Create an empty collection
    pub fn new(api: &'a TheOneApi, resource: R) -> Self {
        Self::with_options(api, resource, QueryOptions::default())
    }

    /// Create a collection with preset options
    pub fn with_options(api: &'a TheOneApi, resource: R, options: QueryOptions) -> Self {
        Self {
            api,
            resource,
            options,
            docs: Vec::new(),
            metadata: PaginationMetadata::default(),
            last_response: None,
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The resource this collection targets
    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// Current query options
    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Mutable access to the query options
    pub fn options_mut(&mut self) -> &mut QueryOptions {
        &mut self.options
    }

    /// Replace the query options
    pub fn set_options(&mut self, options: QueryOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// Documents from the last fetch
    pub fn docs(&self) -> &[R::Doc] {
        &self.docs
    }

    /// Take the documents out of the collection
    pub fn into_docs(self) -> Vec<R::Doc> {
        self.docs
    }

    /// Pagination metadata from the last fetch
    pub fn metadata(&self) -> &PaginationMetadata {
        &self.metadata
    }

    /// Raw response of the last fetch
    ///
    /// The only place an API-level rejection such as
    /// `{"message": "Unauthorized."}` is visible.
    pub fn last_response(&self) -> Option<&ApiResponse> {
        self.last_response.as_ref()
    }

    /// URL the next `fetch` will request
    pub fn url(&self) -> String {
        let base = self.api.endpoint(&self.resource.collection_path());
        self.options.url_with_query(&base)
    }

    // ========================================================================
    // Builder
    // ========================================================================

    /// Sort by a field
    pub fn sort(&mut self, field: &str, order: SortOrder) -> &mut Self {
        self.options.set_sort(field, order);
        self
    }

    /// Set the page size
    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.options.limit = Some(limit);
        self
    }

    /// Set the page number
    pub fn page(&mut self, page: i64) -> &mut Self {
        self.options.page = Some(page);
        self
    }

    /// Set the offset (takes precedence over the page)
    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.options.offset = Some(offset);
        self
    }

    /// Use a literal filter expression
    pub fn filter(&mut self, expression: impl Into<String>) -> &mut Self {
        self.options.filter = Some(expression.into());
        self
    }

    /// Use a built filter expression
    pub fn apply_filter(&mut self, filter: &Filter) -> &mut Self {
        self.options.set_filter(filter);
        self
    }

    /// `field=value`, or `field!=value` when negated
    pub fn match_field(
        &mut self,
        field: &str,
        value: impl fmt::Display,
        negate: bool,
    ) -> &mut Self {
        self.apply_filter(&Filter::match_field(field, value, negate))
    }

    /// `field=v1,v2,...`, or `field!=v1,v2,...` when negated
    pub fn include<I, V>(&mut self, field: &str, values: I, negate: bool) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: fmt::Display,
    {
        self.apply_filter(&Filter::include(field, values, negate))
    }

    /// `field!=v1,v2,...`
    pub fn exclude<I, V>(&mut self, field: &str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: fmt::Display,
    {
        self.apply_filter(&Filter::exclude(field, values))
    }

    /// `field`, or `!field` when negated
    pub fn exists(&mut self, field: &str, negate: bool) -> &mut Self {
        self.apply_filter(&Filter::exists(field, negate))
    }

    /// `field=/pattern/flags`, or `field!=/pattern/flags` when negated
    pub fn regex(&mut self, field: &str, pattern: &str, negate: bool) -> &mut Self {
        self.apply_filter(&Filter::regex(field, pattern, negate))
    }

    /// `field<value`, or `field<=value`
    pub fn less_than(&mut self, field: &str, value: impl fmt::Display, or_equal: bool) -> &mut Self {
        self.apply_filter(&Filter::less_than(field, value, or_equal))
    }

    /// `field>value`, or `field>=value`
    pub fn greater_than(
        &mut self,
        field: &str,
        value: impl fmt::Display,
        or_equal: bool,
    ) -> &mut Self {
        self.apply_filter(&Filter::greater_than(field, value, or_equal))
    }

    // ========================================================================
    // Fetching
    // ========================================================================

    /// Request the collection with the current options
    ///
    /// Transport errors are returned as-is and leave the stored documents
    /// and metadata untouched.
    pub async fn fetch(&mut self) -> Result<&mut Self> {
        let url = self.url();
        let response = self.api.execute_get(url).await?;
        self.store(response);
        Ok(self)
    }

    /// Request a single document by id
    ///
    /// On success the filter becomes `_id=<id>` so the options keep
    /// describing the one-document result.
    pub async fn by_id(&mut self, id: &str) -> Result<&mut Self> {
        let url = self.api.endpoint(&self.resource.item_path(id));
        let response = self.api.execute_get(url).await?;
        self.store(response);
        self.options.set_filter(&Filter::match_field("_id", id, false));
        Ok(self)
    }

    /// Fetch the page after the last reported one
    ///
    /// Falls back to page 1 when the last response carried no page number,
    /// which is the case after an offset-based fetch.
    pub async fn next_page(&mut self) -> Result<&mut Self> {
        self.options.page = Some(self.metadata.next_page());
        self.fetch().await
    }

    /// Fetch the page before the last reported one
    ///
    /// Falls back to page 1 like `next_page`. There is no lower bound: from
    /// page 1 this requests page 0, which the API answers with an error body.
    pub async fn previous_page(&mut self) -> Result<&mut Self> {
        self.options.page = Some(self.metadata.previous_page());
        self.fetch().await
    }

    /// Replace metadata and documents from a response body
    fn store(&mut self, response: ApiResponse) {
        self.metadata = PaginationMetadata::from_body(&response.body);
        self.docs = response
            .body
            .get("docs")
            .and_then(JsonValue::as_array)
            .map(|records| {
                records
                    .iter()
                    .map(<R::Doc as Document>::from_record)
                    .collect()
            })
            .unwrap_or_default();

        if let Some(message) = response.message() {
            warn!(
                resource = self.resource.name(),
                status = response.status,
                "API returned a message instead of documents: {message}"
            );
        }
        debug!(
            resource = self.resource.name(),
            docs = self.docs.len(),
            page = ?self.metadata.page,
            pages = ?self.metadata.pages,
            "Stored fetch result"
        );

        self.last_response = Some(response);
    }
}

impl<R: Resource + fmt::Debug> fmt::Debug for Collection<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("resource", &self.resource)
            .field("options", &self.options)
            .field("docs", &self.docs.len())
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}
