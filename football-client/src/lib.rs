//! Fetch gateway for the football prediction API
//!
//! This crate provides a time-bounded HTTP client for the upstream
//! prediction API. Every failure is reported through [`FetchError`].

pub mod client;
pub mod error;
pub mod source;

pub use client::{FetchGateway, LAST_UPDATE_PATH, PREDICTIONS_PATH, STATS_PATH};
pub use error::FetchError;
pub use source::PredictionSource;
