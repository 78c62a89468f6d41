//! API route definitions

mod health;
mod home;
mod proxy;

use axum::Router;
use serde::Serialize;

use crate::AppState;

/// Error envelope returned by every route
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Create all `/api` routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(proxy::routes())
        .merge(home::routes())
}

/// Create health routes (outside `/api`)
pub fn health_routes() -> Router<AppState> {
    health::routes()
}
