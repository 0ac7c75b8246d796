use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{error, info};

use crate::AppState;

/// Create a router for availability content APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_availability))
        .route("/reviews", get(get_reviews))
        .route("/reload", post(reload_availability))
}

/// The content file as loaded
async fn get_availability(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/availability");

    let data = state.availability_service.availability_data();
    (StatusCode::OK, Json(data)).into_response()
}

async fn get_reviews(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/availability/reviews");

    (StatusCode::OK, Json(state.availability_service.reviews())).into_response()
}

/// Re-read the content file and swap the index
async fn reload_availability(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/availability/reload");

    match state.availability_service.reload().await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Failed to reload availability: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Failed to reload availability: {:#}", e))
                .into_response()
        }
    }
}
