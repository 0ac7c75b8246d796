//! # Booking Config Repository
//!
//! Reads the widget configuration from `booking_config.yaml`.
//!
//! ```yaml
//! logoUrl: "/images/logo.png"   # optional
//! defaultAdults: 2              # optional, 1..=8
//! minNights: 2                  # optional, default 1
//! maxNights: 14                 # optional, default 30
//! bookingEngineUrl: "https://book.example.com/?hotel=X"
//! accentColor: "#C69C4D"        # optional
//! backgroundColor: "#EFEBE2"    # optional
//! ```

use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::BookingConfig;
use std::fs;
use tracing::debug;

use super::connection::ContentConnection;
use crate::storage::traits::BookingConfigStorage;

#[derive(Debug, Clone)]
pub struct BookingConfigRepository {
    connection: ContentConnection,
}

impl BookingConfigRepository {
    pub fn new(connection: ContentConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl BookingConfigStorage for BookingConfigRepository {
    async fn load_booking_config(&self) -> Result<BookingConfig> {
        let path = self.connection.booking_config_file_path();

        let yaml_content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read booking config {}", path.display()))?;
        let config: BookingConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Malformed booking config {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid booking config {}", path.display()))?;

        debug!(
            "Loaded booking config: {}..{} nights, engine {}",
            config.min_nights, config.max_nights, config.booking_engine_url
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::file::test_utils::TestEnvironment;

    #[tokio::test]
    async fn test_load_booking_config() {
        let env = TestEnvironment::with_december_content().unwrap();
        let repo = BookingConfigRepository::new(env.connection.clone());

        let config = repo.load_booking_config().await.unwrap();

        assert_eq!(config.min_nights, 2);
        assert_eq!(config.max_nights, 14);
        assert_eq!(config.booking_engine_url, "https://book.example.com/?hotel=X");
        assert_eq!(config.background_color, "#EFEBE2");
        // not in the file
        assert_eq!(config.logo_url, "/logo.png");
    }

    #[tokio::test]
    async fn test_engine_url_is_required() {
        let env = TestEnvironment::new().unwrap();
        env.write_booking_config("minNights: 2\n").unwrap();
        let repo = BookingConfigRepository::new(env.connection.clone());

        assert!(repo.load_booking_config().await.is_err());
    }

    #[tokio::test]
    async fn test_inverted_night_bounds_rejected() {
        let env = TestEnvironment::new().unwrap();
        env.write_booking_config(
            "minNights: 10\nmaxNights: 3\nbookingEngineUrl: \"https://book.example.com/\"\n",
        )
        .unwrap();
        let repo = BookingConfigRepository::new(env.connection.clone());

        let error = repo.load_booking_config().await.unwrap_err();
        assert!(format!("{:#}", error).contains("greater than maxNights"));
    }

    #[tokio::test]
    async fn test_unusable_engine_url_rejected() {
        let env = TestEnvironment::new().unwrap();
        env.write_booking_config("bookingEngineUrl: \"ftp://book.example.com/\"\n")
            .unwrap();
        let repo = BookingConfigRepository::new(env.connection.clone());

        let error = repo.load_booking_config().await.unwrap_err();
        assert!(format!("{:#}", error).contains("unsupported scheme 'ftp'"));
    }
}
