//! Transport abstraction
//!
//! A transport executes one request and returns the decoded body, or fails
//! on network errors and undecodable responses.

use crate::error::Result;
use crate::types::{JsonValue, Method, StringMap};
use async_trait::async_trait;

/// A request ready to be executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Fully serialized URL, query string included
    pub url: String,
    /// Request headers
    pub headers: StringMap,
}

impl ApiRequest {
    /// Create a GET request for a URL
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: StringMap::new(),
        }
    }

    /// Add a header
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }
}

/// A decoded response
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,
    /// Decoded JSON body
    pub body: JsonValue,
}

impl ApiResponse {
    /// Create a response
    pub fn new(status: u16, body: JsonValue) -> Self {
        Self { status, body }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The API's error message, if the body carries one
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(JsonValue::as_str)
    }
}

/// Executes requests against the remote API
#[async_trait]
pub trait Transport: Send + Sync {
    /// Execute a request and return the decoded body
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse>;
}
