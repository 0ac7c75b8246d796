//! # Availability Repository
//!
//! Reads `availability-data.json` from the data directory. The file is
//! produced by the content pipeline and read as-is; a malformed file fails the
//! load with the file path in the error.

use anyhow::{Context, Result};
use async_trait::async_trait;
use shared::AvailabilityData;
use std::fs;
use tracing::debug;

use super::connection::ContentConnection;
use crate::storage::traits::AvailabilityStorage;

#[derive(Debug, Clone)]
pub struct AvailabilityRepository {
    connection: ContentConnection,
}

impl AvailabilityRepository {
    pub fn new(connection: ContentConnection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl AvailabilityStorage for AvailabilityRepository {
    async fn load_availability(&self) -> Result<AvailabilityData> {
        let path = self.connection.availability_file_path();

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read availability content {}", path.display()))?;
        let data: AvailabilityData = serde_json::from_str(&content)
            .with_context(|| format!("Malformed availability content {}", path.display()))?;

        debug!(
            "Loaded {} priced dates and {} blocked dates from {}",
            data.dates.len(),
            data.blocked_dates.len(),
            path.display()
        );
        Ok(data)
    }
}
