//! # Flat-file Storage
//!
//! ```text
//! data/
//! ├── availability-data.json   ← AvailabilityRepository
//! └── booking_config.yaml      ← BookingConfigRepository
//! ```

pub mod availability_repository;
pub mod booking_config_repository;
pub mod connection;

#[cfg(test)]
pub mod test_utils;

pub use availability_repository::AvailabilityRepository;
pub use booking_config_repository::BookingConfigRepository;
pub use connection::ContentConnection;
