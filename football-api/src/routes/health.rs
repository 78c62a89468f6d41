//! Health check endpoints

use axum::{routing::get, Router};

use crate::AppState;

/// Simple liveness check (always returns OK if server is running)
async fn liveness() -> &'static str {
    "OK"
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(liveness))
}
