//! Core types for the Football Predictions client
//!
//! This crate defines the payloads returned by the prediction API, the
//! tip-type decision table used to label outcomes, and the configuration
//! shared by the gateway and the proxy server.

pub mod config;
pub mod error;
pub mod prediction;
pub mod stats;
pub mod tip;
pub mod update;

pub use config::{AppConfig, AppLabels, GatewayConfig, DEFAULT_TIMEOUT};
pub use error::{ConfigError, ViewError};
pub use prediction::{PredictionRecord, TipPrediction};
pub use stats::{AccuracyStat, StatsSummary};
pub use tip::{confidence_percent, ConfidenceBand, TipType};
pub use update::{format_last_update, LastUpdate};
