//! # Resort Booking Backend
//!
//! Serves the booking widget: availability content, month grids, the
//! selection reducer and booking-engine links, plus the built frontend.
//!
//! ```text
//! Yew booking modal
//!     ↓
//! io::rest     (axum handlers under /api)
//!     ↓
//! domain       (availability, calendar and booking services)
//!     ↓
//! storage      (data directory: availability-data.json, booking_config.yaml)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::config::ServerConfig;
use crate::domain::{AvailabilityService, BookingService, CalendarService, Clock};
use crate::storage::{
    AvailabilityRepository, BookingConfigRepository, BookingConfigStorage, ContentConnection,
};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub availability_service: AvailabilityService,
    pub calendar_service: CalendarService,
    pub booking_service: BookingService,
}

/// Initialize the backend from the process configuration
pub async fn initialize_backend(config: &ServerConfig) -> Result<AppState> {
    info!("Opening data directory");
    let connection = ContentConnection::new(&config.data_directory)
        .context("Cannot start without a data directory")?;

    build_app_state(connection, Clock::system()).await
}

/// Load content and widget config from `connection` and wire the services
pub async fn build_app_state(connection: ContentConnection, clock: Clock) -> Result<AppState> {
    info!("Loading booking widget config");
    let booking_config = BookingConfigRepository::new(connection.clone())
        .load_booking_config()
        .await?;

    info!("Loading availability content");
    let availability_service =
        AvailabilityService::load(Arc::new(AvailabilityRepository::new(connection))).await?;

    info!("Setting up domain services");
    let calendar_service = CalendarService::new(clock);
    let booking_service = BookingService::new(booking_config, availability_service.clone(), clock);

    Ok(AppState {
        availability_service,
        calendar_service,
        booking_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ServerConfig) -> Result<Router> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin: {}", config.allowed_origin))?;
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .nest("/availability", io::availability_apis::router())
        .nest("/calendar", io::calendar_apis::router())
        .nest("/booking", io::booking_apis::router())
        .nest("/logs", io::logging_apis::router());

    let frontend = ServeDir::new(&config.frontend_dist)
        .fallback(ServeFile::new(config.frontend_dist.join("index.html")));

    Ok(Router::new()
        .nest("/api", api_routes)
        .fallback_service(frontend)
        .layer(cors)
        .with_state(app_state))
}
