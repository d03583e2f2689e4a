//! Query module
//!
//! Holds the paging, sorting and filtering state of a request and turns it
//! into a query string.
//!
//! # Overview
//!
//! [`QueryOptions`] accumulates `limit`, `page`, `offset`, `sort` and a single
//! filter expression. [`Filter`] builds those filter expressions. Only one
//! filter is ever active: every helper replaces the previous expression.

mod filter;
mod options;

pub use filter::Filter;
pub use options::{normalize_sort, QueryOptions};
