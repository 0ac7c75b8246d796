//! Availability content held in memory.
//!
//! The content file is read once at start-up and on explicit reload. Readers
//! take a snapshot (`Arc`) of the loaded content, so a reload never blocks or
//! changes a request that is already running.

use anyhow::Result;
use shared::{AvailabilityData, AvailabilityIndex, AvailabilityReloadResponse, Reviews};
use std::sync::{Arc, RwLock};
use tracing::{info, warn};

use crate::storage::AvailabilityStorage;

/// Content file as loaded, plus its lookup index
#[derive(Debug)]
pub struct LoadedAvailability {
    pub data: AvailabilityData,
    pub index: AvailabilityIndex,
}

impl LoadedAvailability {
    fn new(data: AvailabilityData) -> Self {
        let index = AvailabilityIndex::from_data(&data);
        Self { data, index }
    }
}

#[derive(Clone)]
pub struct AvailabilityService {
    storage: Arc<dyn AvailabilityStorage>,
    loaded: Arc<RwLock<Arc<LoadedAvailability>>>,
}

impl AvailabilityService {
    /// Load the content file; fails if it is missing or malformed
    pub async fn load(storage: Arc<dyn AvailabilityStorage>) -> Result<Self> {
        let data = storage.load_availability().await?;
        let loaded = LoadedAvailability::new(data);
        info!(
            "Availability index built: {} priced dates, {} blocked dates",
            loaded.index.len(),
            loaded.index.blocked_count()
        );

        Ok(Self {
            storage,
            loaded: Arc::new(RwLock::new(Arc::new(loaded))),
        })
    }

    /// Current content; cheap to call per request
    pub fn snapshot(&self) -> Arc<LoadedAvailability> {
        let guard = self.loaded.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    pub fn availability_data(&self) -> AvailabilityData {
        self.snapshot().data.clone()
    }

    pub fn reviews(&self) -> Reviews {
        self.snapshot().data.reviews.clone()
    }

    /// Re-read the content file and swap the index. On failure the previous
    /// content stays in place.
    pub async fn reload(&self) -> Result<AvailabilityReloadResponse> {
        let data = match self.storage.load_availability().await {
            Ok(data) => data,
            Err(e) => {
                warn!("Availability reload failed, keeping previous content: {:#}", e);
                return Err(e);
            }
        };

        let loaded = Arc::new(LoadedAvailability::new(data));
        let response = AvailabilityReloadResponse {
            priced_dates: loaded.index.len(),
            blocked_dates: loaded.index.blocked_count(),
            success_message: format!(
                "Reloaded {} priced dates and {} blocked dates",
                loaded.index.len(),
                loaded.index.blocked_count()
            ),
        };

        {
            let mut current = self.loaded.write().unwrap_or_else(|poisoned| poisoned.into_inner());
            *current = loaded;
        }

        info!("{}", response.success_message);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::file::test_utils::{date, december_availability, TestEnvironment};
    use crate::storage::AvailabilityRepository;

    async fn setup() -> (TestEnvironment, AvailabilityService) {
        let env = TestEnvironment::with_december_content().unwrap();
        let storage = Arc::new(AvailabilityRepository::new(env.connection.clone()));
        let service = AvailabilityService::load(storage).await.unwrap();
        (env, service)
    }

    #[tokio::test]
    async fn test_load_builds_index() {
        let (_env, service) = setup().await;
        let snapshot = service.snapshot();

        assert_eq!(snapshot.index.len(), 10);
        assert!(snapshot.index.is_blocked(date(2025, 12, 5)));
        assert!(snapshot.index.is_bookable(date(2025, 12, 4)));
        assert!(!snapshot.index.is_bookable(date(2025, 12, 5)));
        assert_eq!(service.reviews().google.count, 1204);
    }

    #[tokio::test]
    async fn test_load_fails_without_content() {
        let env = TestEnvironment::new().unwrap();
        let storage = Arc::new(AvailabilityRepository::new(env.connection.clone()));
        assert!(AvailabilityService::load(storage).await.is_err());
    }

    #[tokio::test]
    async fn test_reload_swaps_index() {
        let (env, service) = setup().await;
        let before = service.snapshot();

        let mut data = december_availability();
        data.blocked_dates.push(date(2025, 12, 8));
        data.dates.truncate(9);
        env.write_availability(&data).unwrap();

        let response = service.reload().await.unwrap();
        assert_eq!(response.priced_dates, 9);
        assert_eq!(response.blocked_dates, 2);
        assert!(service.snapshot().index.is_blocked(date(2025, 12, 8)));

        // snapshots taken before the reload are unchanged
        assert!(!before.index.is_blocked(date(2025, 12, 8)));
        assert_eq!(before.index.len(), 10);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_index() {
        let (env, service) = setup().await;
        env.write_availability_raw("{ not json").unwrap();

        assert!(service.reload().await.is_err());
        assert_eq!(service.snapshot().index.len(), 10);
        assert_eq!(service.availability_data(), december_availability());
    }
}
