/// Test utilities for the flat-file storage
///
/// `TestEnvironment` owns a temporary data directory that is removed when the
/// environment is dropped, even if the test panics.

use std::path::Path;
use anyhow::Result;
use chrono::NaiveDate;
use tempfile::TempDir;
use shared::{AvailabilityData, AvailabilityStatus, DateAvailability, ReviewScore, Reviews};

use super::connection::ContentConnection;

/// Booking config used across backend tests
pub const TEST_BOOKING_CONFIG_YAML: &str = r##"
defaultAdults: 2
minNights: 2
maxNights: 14
bookingEngineUrl: "https://book.example.com/?hotel=X"
accentColor: "#C69C4D"
backgroundColor: "#EFEBE2"
"##;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 2025-12-01..=2025-12-10 at 100 USD, 2025-12-05 blocked
pub fn december_availability() -> AvailabilityData {
    AvailabilityData {
        dates: (1..=10)
            .map(|d| DateAvailability {
                date: date(2025, 12, d),
                price: 100.0,
                currency: "USD".to_string(),
                status: AvailabilityStatus::Available,
            })
            .collect(),
        blocked_dates: vec![date(2025, 12, 5)],
        reviews: Reviews {
            google: ReviewScore { rating: 4.9, count: 1204 },
            tripadvisor: ReviewScore { rating: 5.0, count: 868 },
        },
    }
}

/// RAII test data directory
pub struct TestEnvironment {
    /// Kept alive until drop
    _temp_dir: TempDir,
    pub connection: ContentConnection,
}

impl TestEnvironment {
    /// Empty data directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = ContentConnection::new(temp_dir.path())?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
        })
    }

    /// Data directory seeded with the December content and test config
    pub fn with_december_content() -> Result<Self> {
        let env = Self::new()?;
        env.write_availability(&december_availability())?;
        env.write_booking_config(TEST_BOOKING_CONFIG_YAML)?;
        Ok(env)
    }

    pub fn base_directory(&self) -> &Path {
        self.connection.base_directory()
    }

    pub fn write_availability(&self, data: &AvailabilityData) -> Result<()> {
        let json = serde_json::to_string_pretty(data)?;
        self.write_availability_raw(&json)
    }

    pub fn write_availability_raw(&self, content: &str) -> Result<()> {
        std::fs::write(self.connection.availability_file_path(), content)?;
        Ok(())
    }

    pub fn write_booking_config(&self, yaml: &str) -> Result<()> {
        std::fs::write(self.connection.booking_config_file_path(), yaml)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::with_december_content()?;
            base_path = env.base_directory().to_path_buf();
            assert!(env.connection.availability_file_path().exists());
            assert!(env.connection.booking_config_file_path().exists());
        }
        assert!(!base_path.exists());
        Ok(())
    }
}
