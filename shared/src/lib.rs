use serde::{Deserialize, Serialize};
use chrono::{Datelike, NaiveDate};

pub mod availability;
pub mod booking_link;
pub mod calendar;
pub mod formatting;
pub mod selection;

pub use availability::AvailabilityIndex;
pub use booking_link::{build_booking_url, BookingLinkError, BookingParams};
pub use calendar::CalendarError;
pub use selection::{StayRules, StayValidationError};

/// Adults selectable in the booking widget
pub const ADULTS_OPTIONS: [u32; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

/// Availability status shown as a coloured dot on a calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityStatus {
    /// Best available price
    Available,
    /// Only a few rooms left
    LastRooms,
    /// A minimum stay applies from this date
    MinimumStay,
}

/// Price and status of a single bookable night
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateAvailability {
    /// Calendar date, serialized as YYYY-MM-DD
    pub date: NaiveDate,
    /// Nightly price in `currency`
    pub price: f64,
    /// ISO 4217 currency code, e.g. "IDR"
    pub currency: String,
    pub status: AvailabilityStatus,
}

/// Rating summary from one review platform
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReviewScore {
    pub rating: f64,
    pub count: u32,
}

/// Review summaries shown in the booking widget header
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reviews {
    pub google: ReviewScore,
    pub tripadvisor: ReviewScore,
}

/// Content file feeding the booking widget (`availability-data.json`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityData {
    pub dates: Vec<DateAvailability>,
    #[serde(default)]
    pub blocked_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub reviews: Reviews,
}

/// Result of re-reading the content file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityReloadResponse {
    pub priced_dates: usize,
    pub blocked_dates: usize,
    pub success_message: String,
}

/// Configuration supplied by the page embedding the booking widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfig {
    #[serde(default = "BookingConfig::default_logo_url")]
    pub logo_url: String,
    /// Initial value of the adults selector
    #[serde(default = "BookingConfig::default_adults")]
    pub default_adults: u32,
    #[serde(default = "BookingConfig::default_min_nights")]
    pub min_nights: u32,
    #[serde(default = "BookingConfig::default_max_nights")]
    pub max_nights: u32,
    /// Base URL of the external booking engine; its query string is kept
    pub booking_engine_url: String,
    #[serde(default = "BookingConfig::default_accent_color")]
    pub accent_color: String,
    #[serde(default = "BookingConfig::default_background_color")]
    pub background_color: String,
}

impl BookingConfig {
    fn default_logo_url() -> String {
        "/logo.png".to_string()
    }

    fn default_adults() -> u32 {
        2
    }

    fn default_min_nights() -> u32 {
        1
    }

    fn default_max_nights() -> u32 {
        30
    }

    fn default_accent_color() -> String {
        "#C69C4D".to_string()
    }

    fn default_background_color() -> String {
        "#E8E4DC".to_string()
    }

    /// Build a config with every optional field at its default
    pub fn with_engine_url(booking_engine_url: impl Into<String>) -> Self {
        Self {
            logo_url: Self::default_logo_url(),
            default_adults: Self::default_adults(),
            min_nights: Self::default_min_nights(),
            max_nights: Self::default_max_nights(),
            booking_engine_url: booking_engine_url.into(),
            accent_color: Self::default_accent_color(),
            background_color: Self::default_background_color(),
        }
    }

    /// Night bounds used to validate a selected stay
    pub fn stay_rules(&self) -> StayRules {
        StayRules {
            min_nights: self.min_nights,
            max_nights: self.max_nights,
        }
    }

    /// Check the config for values the widget cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.booking_engine_url.trim().is_empty() {
            return Err(ConfigError::MissingBookingEngineUrl);
        }
        booking_link::parse_base_url(&self.booking_engine_url)
            .map_err(|e| ConfigError::InvalidBookingEngineUrl(e.to_string()))?;
        if self.min_nights == 0 {
            return Err(ConfigError::ZeroMinNights);
        }
        if self.min_nights > self.max_nights {
            return Err(ConfigError::NightBoundsInverted {
                min_nights: self.min_nights,
                max_nights: self.max_nights,
            });
        }
        if !ADULTS_OPTIONS.contains(&self.default_adults) {
            return Err(ConfigError::DefaultAdultsOutOfRange(self.default_adults));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("bookingEngineUrl must not be empty")]
    MissingBookingEngineUrl,
    #[error("bookingEngineUrl is not usable: {0}")]
    InvalidBookingEngineUrl(String),
    #[error("minNights must be at least 1")]
    ZeroMinNights,
    #[error("minNights ({min_nights}) is greater than maxNights ({max_nights})")]
    NightBoundsInverted { min_nights: u32, max_nights: u32 },
    #[error("defaultAdults must be between 1 and 8, got {0}")]
    DefaultAdultsOutOfRange(u32),
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding cell before the 1st of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
}

/// Represents a calendar month laid out on a Monday-first grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: i32,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Monday, 6 = Sunday
}

/// Represents a single cell in the calendar grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month, 0 for padding cells
    pub day: u32,
    pub date: Option<NaiveDate>,
    pub day_type: CalendarDayType,
    pub availability: Option<DateAvailability>,
    pub is_blocked: bool,
    pub is_past: bool,
    /// Past, blocked or without a price; disabled cells never accept clicks
    pub is_disabled: bool,
}

impl CalendarDay {
    pub fn padding() -> Self {
        Self {
            day: 0,
            date: None,
            day_type: CalendarDayType::PaddingBefore,
            availability: None,
            is_blocked: false,
            is_past: false,
            is_disabled: true,
        }
    }

    /// The date this cell dispatches when clicked, if it is clickable
    pub fn clickable_date(&self) -> Option<NaiveDate> {
        if self.is_disabled {
            None
        } else {
            self.date
        }
    }
}

/// Represents the current focus month for calendar navigation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: i32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year(),
        }
    }
}

/// Request to update the calendar focus month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusRequest {
    pub month: u32,
    pub year: i32,
}

/// Response after updating the calendar focus month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateCalendarFocusResponse {
    pub focus_date: CalendarFocusDate,
    pub success_message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub month: u32,
    pub year: i32,
    pub day: u32,
    pub formatted_date: String, // e.g., "December 1, 2025"
    pub iso_date: String, // e.g., "2025-12-01"
}

/// Which endpoint of the stay the selection is waiting for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPhase {
    NoSelection,
    ArrivalSelected,
    Complete,
}

/// Arrival/departure selection of one booking widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionState {
    pub arrival_date: Option<NaiveDate>,
    pub departure_date: Option<NaiveDate>,
    /// True when the next click sets the arrival date
    pub is_selecting_arrival: bool,
}

/// Night count of a complete selection and the first rule it breaks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StayValidation {
    pub nights: i64,
    pub error: Option<StayValidationError>,
}

impl StayValidation {
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Apply one day click to a selection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectDateRequest {
    pub state: SelectionState,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectDateResponse {
    pub state: SelectionState,
    pub phase: SelectionPhase,
    /// False when the clicked day is disabled and the state is unchanged
    pub accepted: bool,
    pub validation: Option<StayValidation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidateStayRequest {
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
}

/// Request for an outbound booking-engine link
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingLinkRequest {
    pub adults: u32,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
    #[serde(default)]
    pub promo_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingLinkResponse {
    pub url: String,
    pub nights: i64,
}

/// Log line forwarded from the frontend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_availability_data_parses_content_file_shape() {
        let json = r#"{
            "dates": [
                { "date": "2025-12-01", "price": 2500000, "currency": "IDR", "status": "available" },
                { "date": "2025-12-02", "price": 2750000, "currency": "IDR", "status": "last-rooms" },
                { "date": "2025-12-03", "price": 2750000, "currency": "IDR", "status": "minimum-stay" }
            ],
            "blockedDates": ["2025-12-24"],
            "reviews": {
                "google": { "rating": 4.9, "count": 1204 },
                "tripadvisor": { "rating": 5.0, "count": 868 }
            }
        }"#;

        let data: AvailabilityData = serde_json::from_str(json).unwrap();

        assert_eq!(data.dates.len(), 3);
        assert_eq!(data.dates[1].status, AvailabilityStatus::LastRooms);
        assert_eq!(data.dates[2].status, AvailabilityStatus::MinimumStay);
        assert_eq!(data.blocked_dates, vec![NaiveDate::from_ymd_opt(2025, 12, 24).unwrap()]);
        assert_eq!(data.reviews.tripadvisor.count, 868);
    }

    #[test]
    fn test_availability_data_without_blocked_dates_or_reviews() {
        let data: AvailabilityData = serde_json::from_str(r#"{ "dates": [] }"#).unwrap();
        assert!(data.blocked_dates.is_empty());
        assert_eq!(data.reviews, Reviews::default());
    }

    #[test]
    fn test_booking_config_defaults() {
        let config: BookingConfig =
            serde_json::from_str(r#"{ "bookingEngineUrl": "https://book.example.com/" }"#).unwrap();

        assert_eq!(config, BookingConfig::with_engine_url("https://book.example.com/"));
        assert_eq!(config.default_adults, 2);
        assert_eq!(config.min_nights, 1);
        assert_eq!(config.max_nights, 30);
        assert_eq!(config.accent_color, "#C69C4D");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_booking_config_validation() {
        let mut config = BookingConfig::with_engine_url("https://book.example.com/");
        config.min_nights = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroMinNights));

        config.min_nights = 15;
        config.max_nights = 14;
        assert_eq!(
            config.validate(),
            Err(ConfigError::NightBoundsInverted { min_nights: 15, max_nights: 14 })
        );

        config.min_nights = 2;
        config.default_adults = 9;
        assert_eq!(config.validate(), Err(ConfigError::DefaultAdultsOutOfRange(9)));

        let empty = BookingConfig::with_engine_url("  ");
        assert_eq!(empty.validate(), Err(ConfigError::MissingBookingEngineUrl));
    }

    #[test]
    fn test_booking_config_rejects_unusable_engine_url() {
        for engine_url in ["not a url", "ftp://book.example.com/", "/relative/path"] {
            let config = BookingConfig::with_engine_url(engine_url);
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidBookingEngineUrl(_))),
                "{} should be rejected",
                engine_url
            );
        }

        let with_query = BookingConfig::with_engine_url("https://book-secure.com/index.php?s=results&arrival=2025-11-15");
        assert!(with_query.validate().is_ok());
    }

    #[test]
    fn test_padding_cell_is_not_clickable() {
        assert_eq!(CalendarDay::padding().clickable_date(), None);
    }
}
