//! Authenticator implementation
//!
//! Attaches the bearer header to outgoing requests.

use super::types::ApiKey;
use crate::http::ApiRequest;

/// Header carrying the credentials
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Applies bearer authentication to requests
#[derive(Debug, Clone)]
pub struct Authenticator {
    api_key: ApiKey,
}

impl Authenticator {
    /// Create an authenticator for a key
    pub fn new(api_key: ApiKey) -> Self {
        Self { api_key }
    }

    /// The key this authenticator sends
    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Value of the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.api_key.expose())
    }

    /// Add the `Authorization` header to a request
    pub fn apply(&self, request: ApiRequest) -> ApiRequest {
        request.header(AUTHORIZATION_HEADER, self.header_value())
    }
}
