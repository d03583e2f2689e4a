//! Pagination module
//!
//! # Overview
//!
//! Every collection response describes its result window with `total`,
//! `limit`, `offset`, `page` and `pages`. [`PaginationMetadata`] captures
//! those facts for one fetch. A field missing from the response stays `None`
//! so callers can tell "not returned" apart from zero.

mod types;

pub use types::PaginationMetadata;
