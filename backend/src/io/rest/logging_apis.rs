use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use shared::{LogEntry, LogResponse};
use tracing::{debug, error, info, warn};

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(log_message))
}

/// Re-emit a frontend log line through tracing at its level
pub async fn log_message(
    State(_app_state): State<AppState>,
    Json(request): Json<LogEntry>,
) -> Result<Json<LogResponse>, StatusCode> {
    let component = request.component.as_deref().unwrap_or("frontend");
    let message = format!("[{}] {}", component, request.message);

    match request.level.to_lowercase().as_str() {
        "debug" => debug!(target: "frontend", "{}", message),
        "warn" => warn!(target: "frontend", "{}", message),
        "error" => error!(target: "frontend", "{}", message),
        _ => info!(target: "frontend", "{}", message),
    }

    Ok(Json(LogResponse { success: true }))
}
