use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::AppState;
use shared::{UpdateCalendarFocusRequest, UpdateCalendarFocusResponse};

// Query parameters for calendar month API
#[derive(Debug, Deserialize)]
pub struct CalendarMonthQuery {
    pub month: u32,
    pub year: i32,
}

/// Create a router for calendar related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/month", get(get_calendar_month))
        .route("/current-date", get(get_current_date))
        .route("/focus-date", get(get_focus_date).post(set_focus_date))
        .route("/focus-date/previous", post(navigate_previous_month))
        .route("/focus-date/next", post(navigate_next_month))
}

/// Month grid annotated with the current availability
async fn get_calendar_month(
    State(state): State<AppState>,
    Query(query): Query<CalendarMonthQuery>,
) -> impl IntoResponse {
    info!("GET /api/calendar/month - query: {:?}", query);

    let snapshot = state.availability_service.snapshot();
    match state
        .calendar_service
        .generate_calendar_month(query.month, query.year, &snapshot.index)
    {
        Ok(calendar_month) => (StatusCode::OK, Json(calendar_month)).into_response(),
        Err(e) => {
            warn!("Rejected calendar month request: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Get current date information from the backend
async fn get_current_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/current-date");

    let current_date = state.calendar_service.get_current_date();
    (StatusCode::OK, Json(current_date)).into_response()
}

/// Get the current focus date for calendar navigation
async fn get_focus_date(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/calendar/focus-date");

    let focus_date = state.calendar_service.get_focus_date();
    (StatusCode::OK, Json(focus_date)).into_response()
}

/// Set the focus date for calendar navigation
async fn set_focus_date(
    State(state): State<AppState>,
    Json(request): Json<UpdateCalendarFocusRequest>,
) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date - request: {:?}", request);

    match state.calendar_service.set_focus_date(request.month, request.year) {
        Ok(focus_date) => {
            let response = UpdateCalendarFocusResponse {
                success_message: format!(
                    "Calendar focus set to {} {}",
                    state.calendar_service.month_name(focus_date.month),
                    focus_date.year
                ),
                focus_date,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!("Failed to set focus date: {}", e);
            (StatusCode::BAD_REQUEST, e.to_string()).into_response()
        }
    }
}

/// Navigate to the previous month
async fn navigate_previous_month(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date/previous");

    let focus_date = state.calendar_service.navigate_previous_month();
    navigation_response(&state, focus_date)
}

/// Navigate to the next month
async fn navigate_next_month(State(state): State<AppState>) -> impl IntoResponse {
    info!("POST /api/calendar/focus-date/next");

    let focus_date = state.calendar_service.navigate_next_month();
    navigation_response(&state, focus_date)
}

fn navigation_response(state: &AppState, focus_date: shared::CalendarFocusDate) -> axum::response::Response {
    let response = UpdateCalendarFocusResponse {
        success_message: format!(
            "Navigated to {} {}",
            state.calendar_service.month_name(focus_date.month),
            focus_date.year
        ),
        focus_date,
    };
    (StatusCode::OK, Json(response)).into_response()
}
