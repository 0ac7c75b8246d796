use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use tracing::{info, warn};

use crate::AppState;
use shared::{BookingLinkRequest, SelectDateRequest, ValidateStayRequest};

/// Create a router for booking widget APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/config", get(get_booking_config))
        .route("/selection", post(select_date))
        .route("/validate", post(validate_stay))
        .route("/link", post(build_link))
}

/// Effective widget configuration
async fn get_booking_config(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/booking/config");

    (StatusCode::OK, Json(state.booking_service.config().clone())).into_response()
}

/// Apply one day click to the posted selection state
async fn select_date(
    State(state): State<AppState>,
    Json(request): Json<SelectDateRequest>,
) -> impl IntoResponse {
    info!("POST /api/booking/selection - date: {}", request.date);

    match state.booking_service.select_date(request.state, request.date) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            warn!("Rejected selection click: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

async fn validate_stay(
    State(state): State<AppState>,
    Json(request): Json<ValidateStayRequest>,
) -> impl IntoResponse {
    info!("POST /api/booking/validate - request: {:?}", request);

    match state.booking_service.validate_stay(request.arrival, request.departure) {
        Ok(validation) => (StatusCode::OK, Json(validation)).into_response(),
        Err(e) => {
            warn!("Rejected stay validation: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Build the outbound booking-engine URL
async fn build_link(
    State(state): State<AppState>,
    Json(request): Json<BookingLinkRequest>,
) -> impl IntoResponse {
    info!("POST /api/booking/link - request: {:?}", request);

    match state.booking_service.build_link(&request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            warn!("Failed to build booking link: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}
