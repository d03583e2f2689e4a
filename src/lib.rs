// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]

//! # The One API client
//!
//! A typed client for [The One API](https://the-one-api.dev), the Lord of the
//! Rings movie and quote database.
//!
//! ## Features
//!
//! - **Chainable queries**: sort, limit, page, offset and filter builders
//! - **Typed documents**: `Movie` and `Quote` with allow-listed attributes
//! - **Pagination**: walk pages from the metadata the server reports
//! - **Rate limiting**: optional client-side throttle matching the API quota
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use theoneapi::{Result, SortOrder, TheOneApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let api = TheOneApi::new("your-key")?;
//!
//!     let mut movies = api.movies();
//!     movies
//!         .sort("name", SortOrder::Ascending)
//!         .limit(3)
//!         .fetch()
//!         .await?;
//!
//!     for movie in movies.docs() {
//!         println!("{:?}", movie.name());
//!     }
//!
//!     // Page 2, derived from the metadata of the last response
//!     movies.next_page().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        TheOneApi                         │
//! │  movies()  quotes()  movie_quotes(id)  get_*() raw JSON  │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌────────────┬───────────────┼──────────────┬──────────────┐
//! │ Collection │ QueryOptions  │ Pagination   │  Transport   │
//! ├────────────┼───────────────┼──────────────┼──────────────┤
//! │ fetch      │ sort / limit  │ total, limit │ reqwest      │
//! │ by_id      │ page / offset │ offset, page │ Bearer auth  │
//! │ next/prev  │ Filter        │ pages        │ Rate limit   │
//! └────────────┴───────────────┴──────────────┴──────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// API key and request signing
pub mod auth;

/// HTTP transport with rate limiting
pub mod http;

/// Query options and filter expressions
pub mod query;

/// Typed documents
pub mod document;

/// Pagination metadata
pub mod pagination;

/// Chainable collections
pub mod collection;

/// API client
pub mod client;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use auth::ApiKey;
pub use client::TheOneApi;
pub use collection::{Collection, MovieQuotes, Movies, Quotes, Resource};
pub use config::ClientConfig;
pub use document::{Document, Movie, Quote};
pub use pagination::PaginationMetadata;
pub use query::{Filter, QueryOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
