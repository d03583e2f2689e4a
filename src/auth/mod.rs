//! Authentication module
//!
//! The One API authenticates every request with a bearer token:
//! `Authorization: Bearer <api_key>`. The key is supplied once when the
//! client is built and never changes afterwards.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::ApiKey;
