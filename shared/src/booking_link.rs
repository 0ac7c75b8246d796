//! Outbound link to the external booking engine.
//!
//! The base URL usually carries hotel and campaign parameters already. Those
//! are kept in order; the parameters this widget owns (`adults`, `arrival`,
//! `departure`, `promoCode`) replace any copy already present.

use chrono::NaiveDate;
use url::Url;

use crate::availability::date_key;
use crate::selection::validate_stay;
use crate::{AvailabilityIndex, SelectionState, StayRules, StayValidationError};

const MANAGED_PARAMS: [&str; 4] = ["adults", "arrival", "departure", "promoCode"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingLinkError {
    #[error("Invalid booking engine URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("At least one adult is required")]
    NoAdults,
    #[error("Departure {departure} must be after arrival {arrival}")]
    InvalidDateRange { arrival: NaiveDate, departure: NaiveDate },
    #[error("Select both an arrival and a departure date")]
    IncompleteSelection,
    #[error(transparent)]
    InvalidStay(#[from] StayValidationError),
}

fn is_managed(key: &str) -> bool {
    MANAGED_PARAMS.contains(&key)
}

/// Parameters forwarded to the booking engine
#[derive(Debug, Clone, PartialEq)]
pub struct BookingParams {
    pub adults: u32,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
    pub promo_code: Option<String>,
}

/// Upper-case and trim a promo code; blank codes are dropped
pub fn normalize_promo_code(input: &str) -> Option<String> {
    let code = input.trim().to_uppercase();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

impl BookingParams {
    /// Parameters for a complete selection that passes validation
    pub fn from_selection(
        state: &SelectionState,
        adults: u32,
        promo_code: Option<&str>,
        rules: StayRules,
        index: &AvailabilityIndex,
    ) -> Result<Self, BookingLinkError> {
        let (arrival, departure) = match (state.arrival_date, state.departure_date) {
            (Some(arrival), Some(departure)) => (arrival, departure),
            _ => return Err(BookingLinkError::IncompleteSelection),
        };

        if let Some(error) = validate_stay(arrival, departure, rules, index).error {
            return Err(error.into());
        }

        Ok(Self {
            adults,
            arrival,
            departure,
            promo_code: promo_code.and_then(normalize_promo_code),
        })
    }
}

/// Parse the engine's base URL; only http and https are accepted
pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, BookingLinkError> {
    let url = Url::parse(base_url.trim()).map_err(|e| BookingLinkError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(BookingLinkError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

/// Merge the booking parameters onto the engine's base URL
pub fn build_booking_url(base_url: &str, params: &BookingParams) -> Result<String, BookingLinkError> {
    if params.adults == 0 {
        return Err(BookingLinkError::NoAdults);
    }
    if params.departure <= params.arrival {
        return Err(BookingLinkError::InvalidDateRange {
            arrival: params.arrival,
            departure: params.departure,
        });
    }

    let mut url = parse_base_url(base_url)?;

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !is_managed(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    {
        let mut query = url.query_pairs_mut();
        query.clear();
        for (key, value) in &kept {
            query.append_pair(key, value);
        }
        query.append_pair("adults", &params.adults.to_string());
        query.append_pair("arrival", &date_key(params.arrival));
        query.append_pair("departure", &date_key(params.departure));
        if let Some(code) = params.promo_code.as_deref().and_then(normalize_promo_code) {
            query.append_pair("promoCode", &code);
        }
    }

    Ok(url.into())
}
