//! Month grid generation for the availability calendar.
//!
//! Grids are Monday-first with leading padding cells only; the last row may
//! be short. Every month day carries the availability flags the widget needs
//! to decide whether the cell can be clicked.

use chrono::{Datelike, NaiveDate};

use crate::{AvailabilityIndex, CalendarDay, CalendarDayType, CalendarMonth};

/// Weekday header for a Monday-first grid
pub const WEEKDAY_LABELS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {0}. Must be between 1 and 12")]
    InvalidMonth(u32),
    #[error("Year {0} is outside the supported calendar range")]
    InvalidYear(i32),
}

/// Get the number of days in a given month and year
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => if is_leap_year(year) { 29 } else { 28 },
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Get the human-readable name for a month number
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "Invalid Month",
    }
}

/// Header text of the widget calendar, e.g. "DECEMBER 2025"
pub fn month_heading(year: i32, month: u32) -> String {
    format!("{} {}", month_name(month).to_uppercase(), year)
}

/// Month before `(year, month)`, rolling over the year
pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Month after `(year, month)`, rolling over the year
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidYear(year))
}

/// Build the annotated cell for one date
pub fn calendar_day(date: NaiveDate, index: &AvailabilityIndex, today: NaiveDate) -> CalendarDay {
    let availability = index.availability(date).cloned();
    let is_blocked = index.is_blocked(date);
    let is_past = date < today;
    let is_disabled = is_past || is_blocked || availability.is_none();

    CalendarDay {
        day: date.day(),
        date: Some(date),
        day_type: CalendarDayType::MonthDay,
        availability,
        is_blocked,
        is_past,
        is_disabled,
    }
}

/// Generate the grid for one month
pub fn generate_calendar_month(
    year: i32,
    month: u32,
    index: &AvailabilityIndex,
    today: NaiveDate,
) -> Result<CalendarMonth, CalendarError> {
    let first = first_of_month(year, month)?;
    let first_day = first.weekday().num_days_from_monday();
    let month_days = days_in_month(year, month);

    let mut days = Vec::with_capacity((first_day + month_days) as usize);
    days.extend((0..first_day).map(|_| CalendarDay::padding()));
    days.extend(
        first
            .iter_days()
            .take(month_days as usize)
            .map(|date| calendar_day(date, index, today)),
    );

    Ok(CalendarMonth {
        month,
        year,
        days,
        first_day_of_week: first_day,
    })
}
