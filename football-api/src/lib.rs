//! Football Predictions proxy server
//!
//! Re-exposes the upstream prediction API under same-origin `/api` routes,
//! attaching the server-held bearer credential, and serves the assembled
//! home page view model.

pub mod routes;

use axum::{
    http::{header, Method},
    Router,
};
use football_client::{FetchError, FetchGateway};
use football_core::{AppLabels, GatewayConfig};
use football_services::{HomeLoader, ViewModelBuilder};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<FetchGateway>,
    pub loader: HomeLoader,
    pub labels: AppLabels,
}

impl AppState {
    pub fn new(gateway: GatewayConfig, labels: AppLabels) -> Result<Self, FetchError> {
        let gateway = Arc::new(FetchGateway::new(gateway)?);
        let loader = HomeLoader::new(gateway.clone(), ViewModelBuilder::new(labels.clone()));
        Ok(Self {
            gateway,
            loader,
            labels,
        })
    }
}

/// Build the full router
pub fn app(state: AppState) -> Router {
    // Browsers only ever read from the proxy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .nest("/api", routes::api_routes())
        .merge(routes::health_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
