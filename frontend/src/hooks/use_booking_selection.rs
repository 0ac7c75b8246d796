use shared::{
    build_booking_url, BookingConfig, BookingLinkError, BookingParams, AvailabilityIndex, CalendarDay,
    SelectionState, StayValidation,
};
use yew::prelude::*;

use crate::services::logging::Logger;

/// Selection and form inputs of one open booking modal
#[derive(Clone)]
pub struct BookingSelection {
    pub state: UseStateHandle<SelectionState>,
    pub adults: UseStateHandle<u32>,
    pub promo_code: UseStateHandle<String>,
}

pub struct UseBookingSelectionActions {
    pub on_day_click: Callback<CalendarDay>,
    pub on_adults_change: Callback<u32>,
    pub on_promo_code_change: Callback<String>,
    pub clear: Callback<()>,
}

pub struct UseBookingSelectionResult {
    pub selection: BookingSelection,
    pub actions: UseBookingSelectionActions,
}

/// State after clicking `day`, or `None` when the click is ignored
pub fn apply_day_click(state: &SelectionState, day: &CalendarDay) -> Option<SelectionState> {
    let mut next = state.clone();
    next.click_day(day).then_some(next)
}

/// Booking-engine URL for the current selection
pub fn booking_url(
    config: &BookingConfig,
    index: &AvailabilityIndex,
    state: &SelectionState,
    adults: u32,
    promo_code: &str,
) -> Result<String, BookingLinkError> {
    let params = BookingParams::from_selection(
        state,
        adults,
        Some(promo_code),
        config.stay_rules(),
        index,
    )?;
    build_booking_url(&config.booking_engine_url, &params)
}

#[hook]
pub fn use_booking_selection(default_adults: u32) -> UseBookingSelectionResult {
    let state = use_state(SelectionState::new);
    let adults = use_state(move || default_adults);
    let promo_code = use_state(String::new);

    let on_day_click = {
        let state = state.clone();
        use_callback((*state).clone(), move |day: CalendarDay, current| {
            if let Some(next) = apply_day_click(current, &day) {
                state.set(next);
            }
        })
    };

    let on_adults_change = {
        let adults = adults.clone();
        Callback::from(move |value: u32| adults.set(value))
    };

    let on_promo_code_change = {
        let promo_code = promo_code.clone();
        // upper-cased as typed; trimmed when the link is built
        Callback::from(move |value: String| promo_code.set(value.to_uppercase()))
    };

    let clear = {
        let state = state.clone();
        let promo_code = promo_code.clone();
        Callback::from(move |_: ()| {
            Logger::debug_with_component("use_booking_selection", "Selection cleared");
            state.set(SelectionState::new());
            promo_code.set(String::new());
        })
    };

    UseBookingSelectionResult {
        selection: BookingSelection {
            state,
            adults,
            promo_code,
        },
        actions: UseBookingSelectionActions {
            on_day_click,
            on_adults_change,
            on_promo_code_change,
            clear,
        },
    }
}

impl BookingSelection {
    pub fn validation(&self, config: &BookingConfig, index: &AvailabilityIndex) -> Option<StayValidation> {
        self.state.validation(config.stay_rules(), index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::calendar::calendar_day;
    use shared::{AvailabilityStatus, DateAvailability, SelectionPhase};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn index() -> AvailabilityIndex {
        let dates: Vec<DateAvailability> = (1..=10)
            .map(|d| DateAvailability {
                date: date(2025, 12, d),
                price: 100.0,
                currency: "USD".to_string(),
                status: AvailabilityStatus::Available,
            })
            .collect();
        AvailabilityIndex::new(&dates, &[date(2025, 12, 5)])
    }

    fn day(d: u32) -> CalendarDay {
        calendar_day(date(2025, 12, d), &index(), date(2025, 11, 20))
    }

    fn config() -> BookingConfig {
        let mut config = BookingConfig::with_engine_url("https://book.example.com/?hotel=X");
        config.min_nights = 2;
        config.max_nights = 14;
        config
    }

    #[test]
    fn test_apply_day_click() {
        let arrival = apply_day_click(&SelectionState::new(), &day(1)).unwrap();
        assert_eq!(arrival.phase(), SelectionPhase::ArrivalSelected);

        assert_eq!(apply_day_click(&arrival, &day(5)), None);
        assert_eq!(apply_day_click(&arrival, &day(12)), None);

        let complete = apply_day_click(&arrival, &day(3)).unwrap();
        assert_eq!(complete.phase(), SelectionPhase::Complete);
        assert_eq!(complete.nights(), Some(2));
    }

    #[test]
    fn test_booking_url_for_valid_selection() {
        let mut state = SelectionState::new();
        state.select_date(date(2025, 12, 1));
        state.select_date(date(2025, 12, 3));

        let url = booking_url(&config(), &index(), &state, 2, "  ").unwrap();
        assert_eq!(
            url,
            "https://book.example.com/?hotel=X&adults=2&arrival=2025-12-01&departure=2025-12-03"
        );
    }

    #[test]
    fn test_booking_url_rejects_incomplete_or_invalid() {
        let mut state = SelectionState::new();
        state.select_date(date(2025, 12, 1));
        assert_eq!(
            booking_url(&config(), &index(), &state, 2, ""),
            Err(BookingLinkError::IncompleteSelection)
        );

        state.select_date(date(2025, 12, 8));
        assert!(matches!(
            booking_url(&config(), &index(), &state, 2, ""),
            Err(BookingLinkError::InvalidStay(_))
        ));
    }
}
