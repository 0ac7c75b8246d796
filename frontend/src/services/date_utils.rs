use chrono::NaiveDate;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    date_from_js_parts(now.get_full_year(), now.get_month(), now.get_date())
        .unwrap_or_default()
}

/// Build a date from JavaScript `Date` parts (month is zero-based)
pub fn date_from_js_parts(year: u32, zero_based_month: u32, day: u32) -> Option<NaiveDate> {
    let year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(year, zero_based_month + 1, day)
}

/// Short label for the arrival/departure summary, e.g. "Mon, 1 Dec"
pub fn short_date_label(date: NaiveDate) -> String {
    date.format("%a, %-d %b").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_from_js_parts() {
        assert_eq!(date_from_js_parts(2025, 11, 1), NaiveDate::from_ymd_opt(2025, 12, 1));
        assert_eq!(date_from_js_parts(2025, 1, 30), None);
    }

    #[test]
    fn test_short_date_label() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        assert_eq!(short_date_label(date), "Mon, 1 Dec");
    }
}
