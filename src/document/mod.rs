//! Document module
//!
//! Typed records returned by the API. Each document type declares an
//! allow-list of attribute names; anything else in a raw record is dropped,
//! and reading a name outside the allow-list is an error. The API's `_id`
//! field is stored as `id`.

mod models;
mod types;

pub use models::{Movie, Quote};
pub use types::{Document, DocumentFields};
