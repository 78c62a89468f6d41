//! Prediction API client
//!
//! Provides time-bounded GET requests against the upstream prediction API,
//! either directly or from the proxy with a bearer credential.

use football_core::{GatewayConfig, LastUpdate, PredictionRecord, StatsSummary};
use reqwest::header::{HeaderMap, ACCEPT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::FetchError;

pub const PREDICTIONS_PATH: &str = "predictions";
pub const STATS_PATH: &str = "stats";
pub const LAST_UPDATE_PATH: &str = "meta/last-update";

/// Prediction API client
#[derive(Clone)]
pub struct FetchGateway {
    client: Client,
    config: GatewayConfig,
}

impl FetchGateway {
    /// Create a gateway from explicit settings
    pub fn new(config: GatewayConfig) -> Result<Self, FetchError> {
        // No client-wide timeout: each call races its own timer
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    /// Default per-request timeout
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Resolve a path relative to the base URL
    pub fn url_for(&self, path: &str) -> Result<Url, FetchError> {
        self.config
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", path, e)))
    }

    /// GET a URL and parse the body as JSON
    ///
    /// The send and the body read both count against `timeout`. When the
    /// timer fires first the request future is dropped, which aborts the
    /// connection.
    pub async fn fetch(&self, url: Url, timeout: Duration) -> Result<Value, FetchError> {
        self.fetch_with_headers(url, HeaderMap::new(), timeout).await
    }

    /// Same as [`FetchGateway::fetch`] with extra per-call request headers
    ///
    /// The configured bearer credential always replaces any `Authorization`
    /// header passed here.
    #[instrument(skip(self, url, headers), fields(url = %url))]
    pub async fn fetch_with_headers(
        &self,
        url: Url,
        headers: HeaderMap,
        timeout: Duration,
    ) -> Result<Value, FetchError> {
        let mut request = self
            .client
            .get(url.clone())
            .header(ACCEPT, "application/json")
            .headers(headers);
        if let Some(token) = &self.config.bearer_token {
            request = request.bearer_auth(token);
        }

        debug!("Fetching {}", url);

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = match tokio::time::timeout(timeout, exchange).await {
            Ok(result) => result.map_err(|e| {
                warn!("Transport failure for {}: {}", url, e);
                FetchError::Transport(e)
            })?,
            Err(_) => {
                warn!("Request to {} timed out after {:?}", url, timeout);
                return Err(FetchError::Timeout {
                    url: url.to_string(),
                    timeout,
                });
            }
        };

        let parsed = serde_json::from_slice::<Value>(&body);

        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, url);
            return Err(FetchError::Upstream {
                url: url.to_string(),
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body: parsed.ok(),
            });
        }

        parsed.map_err(|e| FetchError::MalformedResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// GET a path relative to the base URL with the configured timeout
    pub async fn fetch_path(&self, path: &str) -> Result<Value, FetchError> {
        let url = self.url_for(path)?;
        self.fetch(url, self.config.timeout).await
    }

    async fn fetch_typed<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        let value = self.fetch(url.clone(), self.config.timeout).await?;
        serde_json::from_value(value).map_err(|e| FetchError::MalformedResponse {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }

    /// All upcoming predictions, in upstream order
    #[instrument(skip(self))]
    pub async fn predictions(&self) -> Result<Vec<PredictionRecord>, FetchError> {
        let url = self.url_for(PREDICTIONS_PATH)?;
        let records: Option<Vec<PredictionRecord>> = self.fetch_typed(url).await?;
        let records = records.unwrap_or_default();
        debug!("Got {} predictions", records.len());
        Ok(records)
    }

    /// Prediction for a single match
    #[instrument(skip(self))]
    pub async fn prediction(&self, match_id: &str) -> Result<PredictionRecord, FetchError> {
        let url = self.prediction_url(match_id)?;
        self.fetch_typed(url).await
    }

    /// URL of a single match, with the id encoded as one path segment
    pub fn prediction_url(&self, match_id: &str) -> Result<Url, FetchError> {
        let mut url = self.url_for(PREDICTIONS_PATH)?;
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl("base URL cannot carry a path".to_string()))?
            .push(match_id);
        Ok(url)
    }

    /// Aggregate accuracy statistics
    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<Option<StatsSummary>, FetchError> {
        let url = self.url_for(STATS_PATH)?;
        self.fetch_typed(url).await
    }

    /// Timestamp of the last model refresh
    #[instrument(skip(self))]
    pub async fn last_update(&self) -> Result<Option<LastUpdate>, FetchError> {
        let url = self.url_for(LAST_UPDATE_PATH)?;
        self.fetch_typed(url).await
    }
}
