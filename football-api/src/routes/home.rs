//! Home page endpoints

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use football_services::HomePage;

use super::ErrorResponse;
use crate::AppState;

/// Create home routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/home", get(get_home))
        .route("/app-info", get(get_app_info))
}

/// GET /api/home - Assembled view model for the home page
async fn get_home(State(state): State<AppState>) -> Response {
    match state.loader.load().await {
        HomePage::Ready(view) => (StatusCode::OK, Json(view)).into_response(),
        HomePage::Empty { message } => {
            (StatusCode::OK, Json(ErrorResponse { error: message })).into_response()
        }
        HomePage::Failed { message } => {
            (StatusCode::BAD_GATEWAY, Json(ErrorResponse { error: message })).into_response()
        }
    }
}

/// GET /api/app-info - Stage and version labels for the footer
async fn get_app_info(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.labels.clone())
}
