//! Error types for the fetch gateway

use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while fetching from the prediction API
#[derive(Debug, Error)]
pub enum FetchError {
    /// Request did not complete within the allotted time
    #[error("Request to {url} timed out after {} ms", .timeout.as_millis())]
    Timeout { url: String, timeout: Duration },

    /// Body was not valid JSON, or not the expected shape
    #[error("Malformed response from {url}: {reason}")]
    MalformedResponse { url: String, reason: String },

    /// Upstream answered with a non-success status
    #[error("Upstream error from {url} (status {status} {status_text})")]
    Upstream {
        url: String,
        status: u16,
        status_text: String,
        /// Parsed error body, kept for diagnostics
        body: Option<Value>,
    },

    /// DNS, connection or TLS failure
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Request path could not be resolved against the base URL
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Upstream HTTP status, when the failure carries one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout { .. })
    }
}
