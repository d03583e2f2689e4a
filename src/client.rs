//! The One API client
//!
//! [`TheOneApi`] owns the base URL, the credentials and the transport. It
//! builds endpoint URLs, signs every request with the bearer header, exposes
//! the raw JSON endpoints and hands out [`Collection`]s.

use crate::auth::{ApiKey, Authenticator};
use crate::collection::{Collection, MovieQuotes, Movies, Quotes, Resource};
use crate::config::ClientConfig;
use crate::document::{Document, Movie};
use crate::error::{Error, Result};
use crate::http::{ApiRequest, ApiResponse, HttpClient, Transport};
use crate::query::QueryOptions;
use crate::types::JsonValue;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Client for The One API
#[derive(Clone)]
pub struct TheOneApi {
    base_url: Url,
    authenticator: Authenticator,
    transport: Arc<dyn Transport>,
}

impl TheOneApi {
    /// Create a client with the default configuration
    pub fn new(api_key: impl Into<ApiKey>) -> Result<Self> {
        Self::from_config(&ClientConfig::new(api_key))
    }

    /// Create a client from a configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = HttpClient::with_config(config.http_config())?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client that sends requests through a custom transport
    pub fn with_transport(config: &ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| Error::missing_field("api_key"))?;

        Ok(Self {
            base_url: config.base_url()?,
            authenticator: Authenticator::new(api_key),
            transport,
        })
    }

    /// API root, ending in `/`
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The key sent with every request
    pub fn api_key(&self) -> &ApiKey {
        self.authenticator.api_key()
    }

    /// Absolute URL of an endpoint path
    ///
    /// Plain concatenation; ids and paths are not re-encoded.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Execute an authenticated GET
    pub async fn execute_get(&self, url: String) -> Result<ApiResponse> {
        let request = self.authenticator.apply(ApiRequest::get(url));
        debug!("GET {}", request.url);
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "Response received");
        Ok(response)
    }

    // ========================================================================
    // Raw endpoints
    // ========================================================================

    /// Raw body of a resource's collection endpoint
    pub async fn get_collection<R: Resource>(
        &self,
        resource: &R,
        options: &QueryOptions,
    ) -> Result<JsonValue> {
        let url = options.url_with_query(&self.endpoint(&resource.collection_path()));
        Ok(self.execute_get(url).await?.body)
    }

    /// Raw body of a resource's single-document endpoint
    pub async fn get_item<R: Resource>(&self, resource: &R, id: &str) -> Result<JsonValue> {
        let url = self.endpoint(&resource.item_path(id));
        Ok(self.execute_get(url).await?.body)
    }

    /// Raw movie list
    pub async fn get_movies(&self, options: &QueryOptions) -> Result<JsonValue> {
        self.get_collection(&Movies, options).await
    }

    /// Raw single movie
    pub async fn get_movie(&self, id: &str) -> Result<JsonValue> {
        self.get_item(&Movies, id).await
    }

    /// Raw quote list
    pub async fn get_quotes(&self, options: &QueryOptions) -> Result<JsonValue> {
        self.get_collection(&Quotes, options).await
    }

    /// Raw single quote
    pub async fn get_quote(&self, id: &str) -> Result<JsonValue> {
        self.get_item(&Quotes, id).await
    }

    /// Raw quote list of one movie
    pub async fn get_movie_quotes(&self, id: &str, options: &QueryOptions) -> Result<JsonValue> {
        self.get_collection(&MovieQuotes::new(id), options).await
    }

    // ========================================================================
    // Collections
    // ========================================================================

    /// Collection over all movies
    pub fn movies(&self) -> Collection<'_, Movies> {
        Collection::new(self, Movies)
    }

    /// Collection over all quotes
    pub fn quotes(&self) -> Collection<'_, Quotes> {
        Collection::new(self, Quotes)
    }

    /// Collection over the quotes endpoint of one movie
    pub fn movie_quotes(&self, movie_id: impl Into<String>) -> Collection<'_, MovieQuotes> {
        Collection::new(self, MovieQuotes::new(movie_id))
    }

    /// Quotes collection filtered to `movie=<movie id>`
    pub fn quotes_for(&self, movie: &Movie) -> Collection<'_, Quotes> {
        let mut quotes = self.quotes();
        quotes.match_field("movie", movie.id().unwrap_or_default(), false);
        quotes
    }
}

impl std::fmt::Debug for TheOneApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TheOneApi")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", self.authenticator.api_key())
            .finish_non_exhaustive()
    }
}
