//! # REST API Interface Layer
//!
//! Each module exposes a `router()` that is nested under `/api` by
//! `create_router`:
//!
//! - `/api/availability` - content, reviews and reload
//! - `/api/calendar` - month grids and focus-month navigation
//! - `/api/booking` - widget config, selection reducer, validation, links
//! - `/api/logs` - frontend log forwarding
//!
//! Handlers only translate: domain errors become status codes, and every
//! request is logged.

pub mod availability_apis;
pub mod booking_apis;
pub mod calendar_apis;
pub mod logging_apis;
