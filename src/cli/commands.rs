//! CLI commands and argument parsing

use crate::config::{API_KEY_ENV, BASE_URL_ENV};
use crate::query::QueryOptions;
use crate::types::{LogLevel, SortOrder};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line client for The One API
#[derive(Parser, Debug)]
#[command(name = "theoneapi")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API key (overrides the config file)
    #[arg(long, global = true, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API root (overrides the config file)
    #[arg(long, global = true, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output (same as `--log-level debug`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level after `--verbose`
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List movies, or fetch one with --id
    Movies {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// List quotes, or fetch one with --id
    Quotes {
        #[command(flatten)]
        query: QueryArgs,

        /// Only quotes of this movie (uses the movie/{id}/quote endpoint)
        #[arg(long)]
        movie: Option<String>,
    },
}

/// Query flags shared by every listing command
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Sort field
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page size
    #[arg(long)]
    pub limit: Option<u64>,

    /// Page number
    #[arg(long, allow_negative_numbers = true)]
    pub page: Option<i64>,

    /// Offset (wins over --page)
    #[arg(long)]
    pub offset: Option<u64>,

    /// Raw filter expression, e.g. `budgetInMillions<100`
    #[arg(long)]
    pub filter: Option<String>,

    /// Fetch a single document by id
    #[arg(long)]
    pub id: Option<String>,
}

impl QueryArgs {
    /// Query options described by the flags
    pub fn to_options(&self) -> QueryOptions {
        let mut options = QueryOptions {
            limit: self.limit,
            page: self.page,
            offset: self.offset,
            sort: None,
            filter: self.filter.clone(),
        };

        if let Some(field) = &self.sort {
            let order = if self.desc {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
            options.set_sort(field, order);
        }

        options
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One JSON object per line
    Json,
    /// Indented JSON
    Pretty,
}
