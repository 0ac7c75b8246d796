//! # Storage Traits
//!
//! Storage abstraction used by the domain services.

use anyhow::Result;
use async_trait::async_trait;
use shared::{AvailabilityData, BookingConfig};

/// Source of the per-date availability content
#[async_trait]
pub trait AvailabilityStorage: Send + Sync {
    /// Load the full availability content (dates, blocked dates, reviews)
    async fn load_availability(&self) -> Result<AvailabilityData>;
}

/// Source of the booking widget configuration
#[async_trait]
pub trait BookingConfigStorage: Send + Sync {
    /// Load and validate the widget configuration
    async fn load_booking_config(&self) -> Result<BookingConfig>;
}
