//! Two-step arrival/departure selection.
//!
//! The first click picks the arrival, the next later click picks the
//! departure. Clicking on or before the arrival while a departure is pending
//! moves the arrival instead. Validation is derived from the state and never
//! stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{AvailabilityIndex, CalendarDay, SelectionPhase, SelectionState, StayValidation};

/// Night bounds a stay must respect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRules {
    pub min_nights: u32,
    pub max_nights: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "reason", rename_all = "kebab-case")]
pub enum StayValidationError {
    #[error("Minimum stay is {min_nights} night(s)")]
    BelowMinimum { min_nights: u32 },
    #[error("Maximum stay is {max_nights} night(s)")]
    AboveMaximum { max_nights: u32 },
    #[error("Selected range contains blocked dates")]
    ContainsBlockedDate,
}

/// Whole nights between two dates
pub fn nights_between(arrival: NaiveDate, departure: NaiveDate) -> i64 {
    (departure - arrival).num_days()
}

/// Validate an arrival/departure pair; the first broken rule wins
pub fn validate_stay(
    arrival: NaiveDate,
    departure: NaiveDate,
    rules: StayRules,
    index: &AvailabilityIndex,
) -> StayValidation {
    let nights = nights_between(arrival, departure);

    let error = if nights < i64::from(rules.min_nights) {
        Some(StayValidationError::BelowMinimum { min_nights: rules.min_nights })
    } else if nights > i64::from(rules.max_nights) {
        Some(StayValidationError::AboveMaximum { max_nights: rules.max_nights })
    } else if index.has_blocked_between(arrival, departure) {
        Some(StayValidationError::ContainsBlockedDate)
    } else {
        None
    };

    StayValidation { nights, error }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            arrival_date: None,
            departure_date: None,
            is_selecting_arrival: true,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        match (self.arrival_date, self.departure_date) {
            (Some(_), Some(_)) => SelectionPhase::Complete,
            (Some(_), None) => SelectionPhase::ArrivalSelected,
            _ => SelectionPhase::NoSelection,
        }
    }

    /// True for states the click transitions can produce: a departure only
    /// after an earlier arrival, and `is_selecting_arrival` set exactly when
    /// the selection is empty or complete
    pub fn is_consistent(&self) -> bool {
        match (self.arrival_date, self.departure_date) {
            (None, None) => self.is_selecting_arrival,
            (Some(_), None) => !self.is_selecting_arrival,
            (Some(arrival), Some(departure)) => arrival < departure && self.is_selecting_arrival,
            (None, Some(_)) => false,
        }
    }

    /// Apply a click on an enabled day
    pub fn select_date(&mut self, date: NaiveDate) {
        if self.is_selecting_arrival {
            self.arrival_date = Some(date);
            self.departure_date = None;
            self.is_selecting_arrival = false;
            return;
        }

        match self.arrival_date {
            Some(arrival) if date <= arrival => {
                // re-anchor: still waiting for a departure
                self.arrival_date = Some(date);
                self.departure_date = None;
            }
            Some(_) => {
                self.departure_date = Some(date);
                self.is_selecting_arrival = true;
            }
            None => {
                self.arrival_date = Some(date);
                self.departure_date = None;
            }
        }
    }

    /// Apply a click on a grid cell. Disabled and padding cells are ignored
    /// and return false.
    pub fn click_day(&mut self, day: &CalendarDay) -> bool {
        match day.clickable_date() {
            Some(date) => {
                self.select_date(date);
                true
            }
            None => false,
        }
    }

    /// Apply a click on a date, checking it against the index first.
    /// Past dates relative to `today` are rejected like disabled cells.
    pub fn click_date(&mut self, date: NaiveDate, index: &AvailabilityIndex, today: NaiveDate) -> bool {
        let day = crate::calendar::calendar_day(date, index, today);
        self.click_day(&day)
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Nights of a complete selection
    pub fn nights(&self) -> Option<i64> {
        match (self.arrival_date, self.departure_date) {
            (Some(arrival), Some(departure)) => Some(nights_between(arrival, departure)),
            _ => None,
        }
    }

    /// Validation of a complete selection, `None` otherwise
    pub fn validation(&self, rules: StayRules, index: &AvailabilityIndex) -> Option<StayValidation> {
        match (self.arrival_date, self.departure_date) {
            (Some(arrival), Some(departure)) => Some(validate_stay(arrival, departure, rules, index)),
            _ => None,
        }
    }

    /// Date is the arrival or the departure
    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.arrival_date == Some(date) || self.departure_date == Some(date)
    }

    /// Date lies strictly inside a complete selection
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        match (self.arrival_date, self.departure_date) {
            (Some(arrival), Some(departure)) => date > arrival && date < departure,
            _ => false,
        }
    }
}
