//! HTTP transport module
//!
//! The collection engine only needs one capability from the network:
//! execute a request and hand back a decoded JSON body. That capability is
//! the [`Transport`] trait; [`HttpClient`] is the reqwest implementation.
//!
//! # Features
//!
//! - **Single GET execution**: no retries and no backoff
//! - **Rate Limiting**: optional token bucket limiter using governor
//! - **Status passthrough**: a JSON error body is returned, not raised

mod client;
mod rate_limit;
mod transport;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
pub use transport::{ApiRequest, ApiResponse, Transport};
