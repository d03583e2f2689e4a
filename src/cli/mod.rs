//! CLI module
//!
//! Command-line interface over the client.
//!
//! # Commands
//!
//! - `movies` - List movies or fetch one by id
//! - `quotes` - List quotes, optionally scoped to one movie

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat, QueryArgs};
pub use runner::Runner;
