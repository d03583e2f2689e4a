//! Collection module
//!
//! A [`Collection`] is a chainable query builder bound to one remote
//! resource. Builder calls only touch local state; `fetch`, `by_id`,
//! `next_page` and `previous_page` hit the network and replace the stored
//! documents and pagination metadata.
//!
//! # Example
//!
//! ```rust,ignore
//! use theoneapi::{SortOrder, TheOneApi};
//!
//! let api = TheOneApi::new("your-key")?;
//! let mut movies = api.movies();
//! movies.sort("name", SortOrder::Ascending).limit(3).fetch().await?;
//! movies.next_page().await?;
//! for movie in movies.docs() {
//!     println!("{:?}", movie.name());
//! }
//! ```

mod paging;
mod types;

pub use paging::Collection;
pub use types::{MovieQuotes, Movies, Quotes, Resource};
