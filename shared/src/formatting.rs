//! Display strings used by the booking widget.

use chrono::{Datelike, NaiveDate};

use crate::calendar::month_name;
use crate::AvailabilityStatus;

/// Price as shown under a calendar day.
/// Rupiah prices are shown in millions (`IDR 2.5M`), others with
/// thousands separators (`USD 1,250`).
pub fn format_price(price: f64, currency: &str) -> String {
    if currency == "IDR" {
        return format!("IDR {:.1}M", price / 1_000_000.0);
    }
    format!("{} {}", currency, group_thousands(price))
}

fn group_thousands(value: f64) -> String {
    // at most three fraction digits, trailing zeros trimmed
    let rounded = format!("{:.3}", value.abs());
    let (whole, fraction) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && (whole != "0" || !fraction.is_empty()) { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, fraction)
    }
}

/// Legend label for an availability status
pub fn status_label(status: AvailabilityStatus) -> &'static str {
    match status {
        AvailabilityStatus::Available => "Best Price",
        AvailabilityStatus::LastRooms => "Last room(s)",
        AvailabilityStatus::MinimumStay => "Minimum stay",
    }
}

/// CSS modifier for the status dot
pub fn status_class(status: AvailabilityStatus) -> &'static str {
    match status {
        AvailabilityStatus::Available => "status-available",
        AvailabilityStatus::LastRooms => "status-last-rooms",
        AvailabilityStatus::MinimumStay => "status-minimum-stay",
    }
}

/// "1 night selected", "3 nights selected"
pub fn nights_label(nights: i64) -> String {
    if nights == 1 {
        "1 night selected".to_string()
    } else {
        format!("{} nights selected", nights)
    }
}

/// Format a date for human-readable display, e.g. "December 1, 2025"
pub fn format_date_for_display(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_idr_in_millions() {
        assert_eq!(format_price(2_500_000.0, "IDR"), "IDR 2.5M");
        assert_eq!(format_price(12_345_678.0, "IDR"), "IDR 12.3M");
        assert_eq!(format_price(750_000.0, "IDR"), "IDR 0.8M");
    }

    #[test]
    fn test_format_price_other_currencies() {
        assert_eq!(format_price(100.0, "USD"), "USD 100");
        assert_eq!(format_price(1250.0, "USD"), "USD 1,250");
        assert_eq!(format_price(1234567.5, "EUR"), "EUR 1,234,567.5");
        assert_eq!(format_price(999.999, "AUD"), "AUD 999.999");
    }

    #[test]
    fn test_labels() {
        assert_eq!(status_label(AvailabilityStatus::Available), "Best Price");
        assert_eq!(status_label(AvailabilityStatus::LastRooms), "Last room(s)");
        assert_eq!(status_label(AvailabilityStatus::MinimumStay), "Minimum stay");
        assert_eq!(nights_label(1), "1 night selected");
        assert_eq!(nights_label(7), "7 nights selected");
    }

    #[test]
    fn test_format_date_for_display() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(format_date_for_display(date), "December 1, 2025");
    }
}
