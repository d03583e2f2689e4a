//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat, QueryArgs};
use crate::client::TheOneApi;
use crate::collection::{Collection, Resource};
use crate::config::ClientConfig;
use crate::document::Document;
use crate::error::{Error, Result, ResultExt};
use serde_json::{json, Value};
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let api = TheOneApi::from_config(&config)?;
        debug!(base_url = %api.base_url(), "Client ready");

        match &self.cli.command {
            Commands::Movies { query } => self.list(api.movies(), query).await,
            Commands::Quotes {
                query,
                movie: Some(movie_id),
            } => self.list(api.movie_quotes(movie_id.as_str()), query).await,
            Commands::Quotes { query, movie: None } => self.list(api.quotes(), query).await,
        }
    }

    /// Resolve the client configuration
    ///
    /// The config file is read first; `--api-key` and `--base-url` (or their
    /// environment variables) override it.
    pub fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => ClientConfig::default(),
        };

        if let Some(key) = &self.cli.api_key {
            config = config.with_api_key(key.as_str());
        }
        if let Some(base_url) = &self.cli.base_url {
            config = config.with_base_url(base_url.as_str());
        }

        Ok(config)
    }

    /// Fetch one page (or one document) and print it
    async fn list<R: Resource>(
        &self,
        mut collection: Collection<'_, R>,
        query: &QueryArgs,
    ) -> Result<()> {
        collection.set_options(query.to_options());

        match &query.id {
            Some(id) => collection.by_id(id).await?,
            None => collection.fetch().await?,
        };

        if let Some(response) = collection.last_response() {
            if let Some(message) = response.message() {
                return Err(Error::Other(format!(
                    "The One API rejected the request (HTTP {}): {message}",
                    response.status
                )));
            }
        }

        info!(
            resource = collection.resource().name(),
            docs = collection.docs().len(),
            "Fetched"
        );
        self.output(&render(&collection));
        Ok(())
    }

    /// Output a result
    fn output(&self, result: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                if let Some(docs) = result["docs"].as_array() {
                    for doc in docs {
                        println!("{}", serde_json::to_string(doc).unwrap_or_default());
                    }
                }
                let metadata = json!({ "metadata": result["metadata"] });
                println!("{}", serde_json::to_string(&metadata).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(result).unwrap_or_default());
            }
        }
    }
}

/// Attribute maps of the fetched documents plus the pagination metadata
fn render<R: Resource>(collection: &Collection<'_, R>) -> Value {
    let docs: Vec<Value> = collection
        .docs()
        .iter()
        .map(|doc| Value::Object(doc.as_map()))
        .collect();

    json!({
        "docs": docs,
        "metadata": collection.metadata(),
    })
}
