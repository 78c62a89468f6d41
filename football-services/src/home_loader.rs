//! Home page loader
//!
//! Fetches predictions, stats and the last update concurrently and builds
//! the view model once all three have arrived.

use football_client::PredictionSource;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::view_model::{ViewModel, ViewModelBuilder};

/// Shown when any of the upstream fetches failed
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load data. Please try again later.";

/// Outcome of a page load
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum HomePage {
    /// Data arrived and the page can render
    Ready(ViewModel),
    /// Upstream answered but had nothing to show
    Empty { message: String },
    /// A fetch failed or upstream data broke the view contract
    Failed { message: String },
}

impl HomePage {
    pub fn is_ready(&self) -> bool {
        matches!(self, HomePage::Ready(_))
    }

    /// Message to show instead of the page, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            HomePage::Ready(_) => None,
            HomePage::Empty { message } | HomePage::Failed { message } => Some(message),
        }
    }
}

/// Loads the home page from a prediction source
#[derive(Clone)]
pub struct HomeLoader {
    source: Arc<dyn PredictionSource>,
    builder: ViewModelBuilder,
}

impl HomeLoader {
    pub fn new(source: Arc<dyn PredictionSource>, builder: ViewModelBuilder) -> Self {
        Self { source, builder }
    }

    /// Fetch all three payloads and build the page
    ///
    /// The fetches are joined with `try_join!`: the first failure drops the
    /// other two in-flight requests. Nothing is retried.
    #[instrument(skip(self))]
    pub async fn load(&self) -> HomePage {
        let fetched = tokio::try_join!(
            self.source.predictions(),
            self.source.stats(),
            self.source.last_update(),
        );

        let (predictions, stats, last_update) = match fetched {
            Ok(payloads) => payloads,
            Err(e) => {
                error!("Failed to load home page data: {}", e);
                return HomePage::Failed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                };
            }
        };

        info!(
            "Loaded {} predictions (stats: {}, last update: {})",
            predictions.len(),
            stats.is_some(),
            last_update.is_some()
        );

        match self
            .builder
            .build(&predictions, stats.as_ref(), last_update.as_ref())
        {
            Ok(view) => match view.error.clone() {
                Some(message) => HomePage::Empty { message },
                None => HomePage::Ready(view),
            },
            Err(e) => {
                warn!("Upstream data violates the view contract: {}", e);
                HomePage::Failed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }
}
