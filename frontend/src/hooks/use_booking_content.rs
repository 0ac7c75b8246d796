use std::ops::Deref;
use std::rc::Rc;

use shared::{AvailabilityData, AvailabilityIndex, BookingConfig, Reviews};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Shared handle to one loaded index. Handles compare by identity, so props
/// and memo dependencies never walk the date maps.
#[derive(Debug, Clone)]
pub struct IndexHandle(Rc<AvailabilityIndex>);

impl IndexHandle {
    pub fn new(index: AvailabilityIndex) -> Self {
        Self(Rc::new(index))
    }
}

impl PartialEq for IndexHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for IndexHandle {
    type Target = AvailabilityIndex;

    fn deref(&self) -> &AvailabilityIndex {
        &self.0
    }
}

/// Widget config and availability, indexed once per load
#[derive(Debug, PartialEq)]
pub struct LoadedContent {
    pub config: BookingConfig,
    pub reviews: Reviews,
    pub index: IndexHandle,
}

impl LoadedContent {
    pub fn new(config: BookingConfig, data: &AvailabilityData) -> Self {
        Self {
            config,
            reviews: data.reviews.clone(),
            index: IndexHandle::new(AvailabilityIndex::from_data(data)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BookingContent {
    Loading,
    Ready(Rc<LoadedContent>),
    Failed(String),
}

/// Fetch the widget config and availability content once
#[hook]
pub fn use_booking_content(api_client: &ApiClient) -> BookingContent {
    let content = use_state(|| BookingContent::Loading);

    {
        let content = content.clone();
        let api_client = api_client.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match load(&api_client).await {
                    Ok(loaded) => {
                        Logger::debug_with_component(
                            "use_booking_content",
                            &format!(
                                "Loaded {} priced dates, {} blocked dates",
                                loaded.index.len(),
                                loaded.index.blocked_count()
                            ),
                        );
                        content.set(BookingContent::Ready(Rc::new(loaded)));
                    }
                    Err(e) => {
                        Logger::error_with_component("use_booking_content", &e);
                        content.set(BookingContent::Failed(e));
                    }
                }
            });
            || ()
        });
    }

    (*content).clone()
}

async fn load(api_client: &ApiClient) -> Result<LoadedContent, String> {
    let config = api_client.get_booking_config().await?;
    let data = api_client.get_availability().await?;
    Ok(LoadedContent::new(config, &data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{AvailabilityStatus, DateAvailability};

    #[test]
    fn test_loaded_content_indexes_availability() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let data = AvailabilityData {
            dates: vec![DateAvailability {
                date,
                price: 2_500_000.0,
                currency: "IDR".to_string(),
                status: AvailabilityStatus::Available,
            }],
            blocked_dates: vec![NaiveDate::from_ymd_opt(2025, 12, 2).unwrap()],
            reviews: Reviews::default(),
        };

        let loaded = LoadedContent::new(BookingConfig::with_engine_url("https://book.example.com/"), &data);

        assert!(loaded.index.is_bookable(date));
        assert_eq!(loaded.index.blocked_count(), 1);
    }

    #[test]
    fn test_index_handles_compare_by_identity() {
        let handle = IndexHandle::new(AvailabilityIndex::default());
        let same_contents = IndexHandle::new(AvailabilityIndex::default());

        assert_eq!(handle, handle.clone());
        assert_ne!(handle, same_contents);
        assert_eq!(*handle, *same_contents);
    }
}
