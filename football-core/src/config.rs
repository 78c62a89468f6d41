//! Process configuration
//!
//! Settings are read once at startup and handed to the components that need
//! them. Nothing below the binaries reads the environment.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(8000);

const DEFAULT_STAGE: &str = "BETA";
const DEFAULT_VERSION: &str = "0.9.0";
const DEFAULT_PORT: u16 = 3001;

/// Everything the fetch gateway needs to reach the prediction API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Root of the prediction API, e.g. `https://api.example.com/`
    pub base_url: Url,
    /// Bearer credential, only ever set for server-side use
    pub bearer_token: Option<String>,
    /// Upper bound for a single request, body included
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url: with_trailing_slash(base_url),
            bearer_token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Cosmetic labels shown in the page footer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppLabels {
    pub stage: String,
    pub version: String,
}

impl Default for AppLabels {
    fn default() -> Self {
        Self {
            stage: DEFAULT_STAGE.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

/// Application configuration
///
/// Recognized settings:
/// - API_BASE_URL: target for client-originated fetches
/// - BACKEND_API_URL: target for server-originated proxy fetches
/// - API_KEY: bearer credential, server side only
/// - APP_STAGE / APP_VERSION: footer labels
/// - REQUEST_TIMEOUT_MS: per-request timeout (default 8000)
/// - SERVER_PORT: proxy listen port (default 3001)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: Option<Url>,
    pub backend_api_url: Option<Url>,
    pub api_key: Option<String>,
    pub labels: AppLabels,
    pub request_timeout: Duration,
    pub server_port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_base_url = get("API_BASE_URL")
            .map(|raw| parse_url("API_BASE_URL", &raw))
            .transpose()?;
        let backend_api_url = get("BACKEND_API_URL")
            .map(|raw| parse_url("BACKEND_API_URL", &raw))
            .transpose()?;

        let request_timeout = match get("REQUEST_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .ok_or(ConfigError::InvalidValue {
                    field: "REQUEST_TIMEOUT_MS",
                    value: raw,
                })?,
            None => DEFAULT_TIMEOUT,
        };

        let server_port = match get("SERVER_PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "SERVER_PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let defaults = AppLabels::default();
        Ok(Self {
            api_base_url,
            backend_api_url,
            api_key: get("API_KEY"),
            labels: AppLabels {
                stage: get("APP_STAGE").unwrap_or(defaults.stage),
                version: get("APP_VERSION").unwrap_or(defaults.version),
            },
            request_timeout,
            server_port,
        })
    }

    /// Gateway settings for a client calling the API directly (no credential)
    pub fn client_gateway(&self) -> Result<GatewayConfig, ConfigError> {
        let base_url = self
            .api_base_url
            .clone()
            .ok_or(ConfigError::Missing("API_BASE_URL"))?;
        Ok(GatewayConfig::new(base_url).with_timeout(self.request_timeout))
    }

    /// Gateway settings for the proxy, carrying the server-held credential
    pub fn proxy_gateway(&self) -> Result<GatewayConfig, ConfigError> {
        let base_url = self
            .backend_api_url
            .clone()
            .ok_or(ConfigError::Missing("BACKEND_API_URL"))?;
        let mut config = GatewayConfig::new(base_url).with_timeout(self.request_timeout);
        config.bearer_token = self.api_key.clone();
        Ok(config)
    }
}

fn parse_url(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        field,
        error: e.to_string(),
    })
}

/// `Url::join` drops the last path segment unless the base ends with '/'
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
