//! Booking selection, stay validation and the outbound booking link.
//!
//! Selection state is owned by the client. `select_date` is a pure reducer
//! over the state it is given, checked against the current availability
//! snapshot and today's date.

use chrono::NaiveDate;
use shared::selection::{nights_between, validate_stay};
use shared::{
    build_booking_url, BookingConfig, BookingLinkError, BookingLinkRequest, BookingLinkResponse,
    BookingParams, SelectionState, SelectDateResponse, StayValidation, StayValidationError,
    ADULTS_OPTIONS,
};
use thiserror::Error;
use tracing::{debug, info};

use super::{AvailabilityService, Clock};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("Departure {departure} must be after arrival {arrival}")]
    InvalidDateRange { arrival: NaiveDate, departure: NaiveDate },
    #[error("Adults must be between 1 and 8, got {0}")]
    AdultsOutOfRange(u32),
    #[error("Selection state is not reachable by day clicks: {0:?}")]
    InvalidSelection(SelectionState),
    #[error("{0} is not available for booking")]
    UnavailableDate(NaiveDate),
    #[error(transparent)]
    InvalidStay(#[from] StayValidationError),
    #[error(transparent)]
    Link(#[from] BookingLinkError),
}

#[derive(Clone)]
pub struct BookingService {
    config: BookingConfig,
    availability: AvailabilityService,
    clock: Clock,
}

impl BookingService {
    pub fn new(config: BookingConfig, availability: AvailabilityService, clock: Clock) -> Self {
        Self {
            config,
            availability,
            clock,
        }
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Apply one day click to `state`. Clicks on past, blocked or unpriced
    /// days leave the state unchanged and report `accepted: false`.
    pub fn select_date(
        &self,
        mut state: SelectionState,
        date: NaiveDate,
    ) -> Result<SelectDateResponse, BookingError> {
        if !state.is_consistent() {
            return Err(BookingError::InvalidSelection(state));
        }

        let snapshot = self.availability.snapshot();
        let accepted = state.click_date(date, &snapshot.index, self.clock.today());
        let validation = state.validation(self.config.stay_rules(), &snapshot.index);

        debug!(
            "Selection click on {} accepted={} phase={:?}",
            date,
            accepted,
            state.phase()
        );

        Ok(SelectDateResponse {
            phase: state.phase(),
            state,
            accepted,
            validation,
        })
    }

    /// Validate an arrival/departure pair against the configured night
    /// bounds and the blocked dates
    pub fn validate_stay(
        &self,
        arrival: NaiveDate,
        departure: NaiveDate,
    ) -> Result<StayValidation, BookingError> {
        if departure <= arrival {
            return Err(BookingError::InvalidDateRange { arrival, departure });
        }

        let snapshot = self.availability.snapshot();
        Ok(validate_stay(arrival, departure, self.config.stay_rules(), &snapshot.index))
    }

    /// Build the booking-engine URL for a stay whose arrival and departure
    /// could both have been clicked in the calendar
    pub fn build_link(&self, request: &BookingLinkRequest) -> Result<BookingLinkResponse, BookingError> {
        if !ADULTS_OPTIONS.contains(&request.adults) {
            return Err(BookingError::AdultsOutOfRange(request.adults));
        }
        if request.departure <= request.arrival {
            return Err(BookingError::InvalidDateRange {
                arrival: request.arrival,
                departure: request.departure,
            });
        }

        let snapshot = self.availability.snapshot();
        let today = self.clock.today();
        let mut selection = SelectionState::new();
        for date in [request.arrival, request.departure] {
            if !selection.click_date(date, &snapshot.index, today) {
                return Err(BookingError::UnavailableDate(date));
            }
        }

        let params = BookingParams::from_selection(
            &selection,
            request.adults,
            request.promo_code.as_deref(),
            self.config.stay_rules(),
            &snapshot.index,
        )
        .map_err(|e| match e {
            BookingLinkError::InvalidStay(stay) => BookingError::InvalidStay(stay),
            other => BookingError::Link(other),
        })?;
        let url = build_booking_url(&self.config.booking_engine_url, &params)?;
        let nights = nights_between(params.arrival, params.departure);

        info!("Built booking link for {} adult(s), {} night(s)", params.adults, nights);
        Ok(BookingLinkResponse { url, nights })
    }
}
