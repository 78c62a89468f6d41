//! Source abstraction consumed by the home page loader

use async_trait::async_trait;
use football_core::{LastUpdate, PredictionRecord, StatsSummary};

use crate::client::FetchGateway;
use crate::error::FetchError;

/// Anything that can supply the three payloads behind the home page
#[async_trait]
pub trait PredictionSource: Send + Sync {
    async fn predictions(&self) -> Result<Vec<PredictionRecord>, FetchError>;

    async fn stats(&self) -> Result<Option<StatsSummary>, FetchError>;

    async fn last_update(&self) -> Result<Option<LastUpdate>, FetchError>;
}

#[async_trait]
impl PredictionSource for FetchGateway {
    async fn predictions(&self) -> Result<Vec<PredictionRecord>, FetchError> {
        FetchGateway::predictions(self).await
    }

    async fn stats(&self) -> Result<Option<StatsSummary>, FetchError> {
        FetchGateway::stats(self).await
    }

    async fn last_update(&self) -> Result<Option<LastUpdate>, FetchError> {
        FetchGateway::last_update(self).await
    }
}
