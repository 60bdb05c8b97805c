use crate::config::load_api_key::load_api_key;
use anyhow::{Context, Result};
use derive_builder::Builder;
use std::env;
use std::fmt;
use std::time::Duration;

mod load_api_key;

pub use load_api_key::load_api_key_file;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://pro-api.coinmarketcap.com/v1/";
/// Sandbox API root; accepts the public sandbox key and serves mock data.
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.coinmarketcap.com/v1/";
/// Applied to every request; the API gives no guarantee of its own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const BASE_URL_ENV_VAR: &str = "CMC_BASE_URL";
const TIMEOUT_ENV_VAR: &str = "CMC_TIMEOUT_SECS";

/// Immutable client configuration.
#[derive(Builder, Clone)]
pub struct ClientConfig {
    /// The Pro API key sent with every request
    #[builder(setter(into))]
    pub(crate) api_key: String,
    /// Root every endpoint path is appended to
    #[builder(setter(into), default = "String::from(DEFAULT_BASE_URL)")]
    pub(crate) base_url: String,
    /// Per-request timeout
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub(crate) timeout: Duration,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Load configuration from the environment (and a `.env` file if present).
    ///
    /// Required:
    /// - `CMC_PRO_API_KEY`: the Pro API key
    ///
    /// Optional:
    /// - `CMC_BASE_URL`: API root (default: production)
    /// - `CMC_TIMEOUT_SECS`: request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut builder = Self::builder();
        builder.api_key(load_api_key()?);

        if let Some(base_url) = env_var(BASE_URL_ENV_VAR) {
            builder.base_url(base_url);
        }
        if let Some(secs) = env_var(TIMEOUT_ENV_VAR) {
            let secs: u64 = secs
                .parse()
                .with_context(|| format!("{TIMEOUT_ENV_VAR} must be a whole number of seconds"))?;
            builder.timeout(Duration::from_secs(secs));
        }

        builder.build().context("Invalid client configuration")
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Same settings against a different API root, e.g. [`SANDBOX_BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The API root with a trailing slash, so relative joins keep its path.
    pub(crate) fn base_url_normalized(&self) -> String {
        let root = self.base_url.trim();
        if root.ends_with('/') {
            root.to_string()
        } else {
            format!("{root}/")
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
