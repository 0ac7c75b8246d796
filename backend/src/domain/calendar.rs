//! Calendar domain logic for the booking widget.
//!
//! Month grids are built from the current availability snapshot. The focus
//! month used for navigation is kept in memory only.

use chrono::Datelike;
use shared::calendar::{self as grid, month_name};
use shared::{AvailabilityIndex, CalendarError, CalendarFocusDate, CalendarMonth, CurrentDateResponse};
use std::sync::{Arc, Mutex};
use tracing::debug;

use super::Clock;

/// Calendar service that handles all calendar-related business logic
#[derive(Clone)]
pub struct CalendarService {
    clock: Clock,
    /// Current focus month for calendar navigation
    current_focus_date: Arc<Mutex<CalendarFocusDate>>,
}

impl CalendarService {
    /// Create a new CalendarService focused on the month of `clock.today()`
    pub fn new(clock: Clock) -> Self {
        let today = clock.today();
        Self {
            clock,
            current_focus_date: Arc::new(Mutex::new(CalendarFocusDate {
                month: today.month(),
                year: today.year(),
            })),
        }
    }

    /// Generate the Monday-first grid for one month, marking days before
    /// today as past
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: i32,
        index: &AvailabilityIndex,
    ) -> Result<CalendarMonth, CalendarError> {
        let calendar_month = grid::generate_calendar_month(year, month, index, self.clock.today())?;
        debug!(
            "Generated calendar for {}/{}: {} cells, first weekday {}",
            month,
            year,
            calendar_month.days.len(),
            calendar_month.first_day_of_week
        );
        Ok(calendar_month)
    }

    /// Get current date information
    pub fn get_current_date(&self) -> CurrentDateResponse {
        let today = self.clock.today();

        CurrentDateResponse {
            month: today.month(),
            year: today.year(),
            day: today.day(),
            formatted_date: shared::formatting::format_date_for_display(today),
            iso_date: today.format("%Y-%m-%d").to_string(),
        }
    }

    /// Get the current focus date for calendar navigation
    pub fn get_focus_date(&self) -> CalendarFocusDate {
        self.lock_focus_date().clone()
    }

    /// Set the focus date for calendar navigation
    pub fn set_focus_date(&self, month: u32, year: i32) -> Result<CalendarFocusDate, CalendarError> {
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth(month));
        }

        let new_focus_date = CalendarFocusDate { month, year };
        *self.lock_focus_date() = new_focus_date.clone();
        Ok(new_focus_date)
    }

    /// Navigate to the previous month
    pub fn navigate_previous_month(&self) -> CalendarFocusDate {
        self.navigate(grid::previous_month)
    }

    /// Navigate to the next month
    pub fn navigate_next_month(&self) -> CalendarFocusDate {
        self.navigate(grid::next_month)
    }

    pub fn month_name(&self, month: u32) -> &'static str {
        month_name(month)
    }

    fn navigate(&self, step: fn(i32, u32) -> (i32, u32)) -> CalendarFocusDate {
        let mut focus_date = self.lock_focus_date();
        let (year, month) = step(focus_date.year, focus_date.month);
        *focus_date = CalendarFocusDate { month, year };
        focus_date.clone()
    }

    fn lock_focus_date(&self) -> std::sync::MutexGuard<'_, CalendarFocusDate> {
        self.current_focus_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new(Clock::system())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{AvailabilityStatus, CalendarDayType, DateAvailability};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> CalendarService {
        CalendarService::new(Clock::fixed(date(2025, 12, 3)))
    }

    fn index() -> AvailabilityIndex {
        let dates: Vec<DateAvailability> = (1..=10)
            .map(|d| DateAvailability {
                date: date(2025, 12, d),
                price: 2_500_000.0,
                currency: "IDR".to_string(),
                status: AvailabilityStatus::Available,
            })
            .collect();
        AvailabilityIndex::new(&dates, &[date(2025, 12, 5)])
    }

    #[test]
    fn test_initial_focus_is_current_month() {
        let focus = service().get_focus_date();
        assert_eq!(focus, CalendarFocusDate { month: 12, year: 2025 });
    }

    #[test]
    fn test_generate_month_uses_clock_for_past_days() {
        let month = service().generate_calendar_month(12, 2025, &index()).unwrap();

        // 2025-12-01 is a Monday
        assert_eq!(month.first_day_of_week, 0);
        assert_eq!(month.days.len(), 31);
        assert_eq!(month.days[0].day_type, CalendarDayType::MonthDay);

        let first = &month.days[0];
        assert!(first.is_past);
        assert!(first.is_disabled);

        let third = &month.days[2];
        assert!(!third.is_past);
        assert!(!third.is_disabled);

        assert!(month.days[4].is_blocked);
        assert!(month.days[4].is_disabled);
        // no price after the 10th
        assert!(month.days[10].is_disabled);
    }

    #[test]
    fn test_generate_month_rejects_invalid_month() {
        assert_eq!(
            service().generate_calendar_month(13, 2025, &index()),
            Err(CalendarError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_current_date() {
        let current = service().get_current_date();
        assert_eq!(current.day, 3);
        assert_eq!(current.formatted_date, "December 3, 2025");
        assert_eq!(current.iso_date, "2025-12-03");
    }

    #[test]
    fn test_navigation_rolls_over_years() {
        let service = service();

        let next = service.navigate_next_month();
        assert_eq!(next, CalendarFocusDate { month: 1, year: 2026 });

        let back = service.navigate_previous_month();
        assert_eq!(back, CalendarFocusDate { month: 12, year: 2025 });

        service.set_focus_date(1, 2025).unwrap();
        assert_eq!(
            service.navigate_previous_month(),
            CalendarFocusDate { month: 12, year: 2024 }
        );
    }

    #[test]
    fn test_set_focus_date_validates_month() {
        let service = service();
        assert_eq!(service.set_focus_date(0, 2025), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(service.get_focus_date().month, 12);

        let focus = service.set_focus_date(6, 2026).unwrap();
        assert_eq!(focus, CalendarFocusDate { month: 6, year: 2026 });
        assert_eq!(service.month_name(focus.month), "June");
    }

    #[test]
    fn test_clones_share_focus() {
        let service = service();
        let clone = service.clone();
        clone.set_focus_date(3, 2026).unwrap();
        assert_eq!(service.get_focus_date(), CalendarFocusDate { month: 3, year: 2026 });
    }
}
