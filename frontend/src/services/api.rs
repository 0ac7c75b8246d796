use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use shared::{AvailabilityData, BookingConfig};

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// API client for the backend serving this page
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    /// Availability content: priced dates, blocked dates, reviews
    pub async fn get_availability(&self) -> Result<AvailabilityData, String> {
        self.get_json("/availability", "availability").await
    }

    /// Widget configuration
    pub async fn get_booking_config(&self) -> Result<BookingConfig, String> {
        self.get_json("/booking/config", "booking config").await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T, String> {
        match Request::get(&self.url(path)).send().await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<T>()
                        .await
                        .map_err(|e| format!("Failed to parse {}: {}", what, e))
                } else {
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    Err(format!("Failed to fetch {}: {}", what, error_text))
                }
            }
            Err(e) => Err(format!("Failed to fetch {}: {}", what, e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
