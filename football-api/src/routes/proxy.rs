//! Same-origin forwards to the upstream prediction API
//!
//! Bodies are passed through untouched. Upstream failures keep their status
//! code behind a `{ "error": ... }` envelope; anything else becomes a 500.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use football_client::{FetchError, LAST_UPDATE_PATH, PREDICTIONS_PATH, STATS_PATH};
use tracing::{error, warn};
use url::Url;

use super::ErrorResponse;
use crate::AppState;

/// Create proxy routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/predictions", get(get_predictions))
        .route("/predictions/{match_id}", get(get_prediction))
        .route("/stats", get(get_stats))
        .route("/last-update", get(get_last_update))
}

/// GET /api/predictions
async fn get_predictions(State(state): State<AppState>) -> Response {
    forward(&state, state.gateway.url_for(PREDICTIONS_PATH), "predictions").await
}

/// GET /api/predictions/{match_id}
async fn get_prediction(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Response {
    forward(&state, state.gateway.prediction_url(&match_id), "prediction").await
}

/// GET /api/stats
async fn get_stats(State(state): State<AppState>) -> Response {
    forward(&state, state.gateway.url_for(STATS_PATH), "stats").await
}

/// GET /api/last-update
async fn get_last_update(State(state): State<AppState>) -> Response {
    forward(&state, state.gateway.url_for(LAST_UPDATE_PATH), "last update").await
}

async fn forward(state: &AppState, url: Result<Url, FetchError>, resource: &str) -> Response {
    let result = match url {
        Ok(url) => state.gateway.fetch(url, state.gateway.timeout()).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(FetchError::Upstream { status, body, .. }) => {
            warn!("Upstream {} request failed with {}: {:?}", resource, status, body);
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (
                code,
                Json(ErrorResponse {
                    error: format!("Failed to fetch {}", resource),
                }),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to fetch {}: {}", resource, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
