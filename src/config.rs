//! Client configuration
//!
//! A [`ClientConfig`] can be built in code, read from the environment, or
//! loaded from a YAML or JSON file:
//!
//! ```yaml
//! api_key: your-key
//! base_url: https://the-one-api.dev/v2/
//! timeout_secs: 30
//! rate_limit:
//!   max_requests: 100
//!   period_secs: 600
//! ```

use crate::auth::ApiKey;
use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://the-one-api.dev/v2/";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "THEONEAPI_API_KEY";

/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "THEONEAPI_BASE_URL";

/// Settings needed to construct a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root; endpoint paths are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer token sent with every request
    #[serde(default)]
    pub api_key: Option<ApiKey>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Custom user agent
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Client-side rate limit (`null` disables it)
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

#[allow(clippy::unnecessary_wraps)]
fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            user_agent: None,
            rate_limit: default_rate_limit(),
        }
    }
}

impl ClientConfig {
    /// Default configuration with an API key
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Read `THEONEAPI_API_KEY` and `THEONEAPI_BASE_URL`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| Error::missing_field(API_KEY_ENV))?;

        let mut config = Self::new(api_key);
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config.base_url = base_url;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load a YAML or JSON file
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&contents)?
        } else {
            serde_yaml::from_str(&contents)?
        };

        Ok(config)
    }

    /// Replace the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replace the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Disable client-side rate limiting
    #[must_use]
    pub fn without_rate_limit(mut self) -> Self {
        self.rate_limit = None;
        self
    }

    /// Check that a client can be built from this config
    pub fn validate(&self) -> Result<()> {
        match &self.api_key {
            Some(key) if !key.is_empty() => {}
            _ => return Err(Error::missing_field("api_key")),
        }
        self.base_url()?;
        Ok(())
    }

    /// The parsed base URL, always ending in `/`
    pub fn base_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Transport settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().timeout(Duration::from_secs(self.timeout_secs));

        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()).build(),
            None => builder.no_rate_limit().build(),
        }
    }
}
