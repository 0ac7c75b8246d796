//! O(1) lookups over the availability content.
//!
//! The content file lists one record per bookable night plus a separate list
//! of blocked dates. Both are folded into hash structures once, then queried
//! for every calendar cell.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::{AvailabilityData, DateAvailability};

/// Format a date as its ISO `YYYY-MM-DD` key
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Read-only index of priced and blocked dates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityIndex {
    by_date: HashMap<NaiveDate, DateAvailability>,
    blocked: HashSet<NaiveDate>,
}

impl AvailabilityIndex {
    /// Build the index; a later record for the same date replaces an earlier one
    pub fn new(dates: &[DateAvailability], blocked_dates: &[NaiveDate]) -> Self {
        let mut by_date = HashMap::with_capacity(dates.len());
        for record in dates {
            by_date.insert(record.date, record.clone());
        }

        Self {
            by_date,
            blocked: blocked_dates.iter().copied().collect(),
        }
    }

    pub fn from_data(data: &AvailabilityData) -> Self {
        Self::new(&data.dates, &data.blocked_dates)
    }

    pub fn availability(&self, date: NaiveDate) -> Option<&DateAvailability> {
        self.by_date.get(&date)
    }

    pub fn is_blocked(&self, date: NaiveDate) -> bool {
        self.blocked.contains(&date)
    }

    /// Priced and not blocked; blocked wins when a date is in both lists
    pub fn is_bookable(&self, date: NaiveDate) -> bool {
        !self.is_blocked(date) && self.by_date.contains_key(&date)
    }

    /// Whether any date strictly between `start` and `end` is blocked
    pub fn has_blocked_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start
            .iter_days()
            .skip(1)
            .take_while(|date| *date < end)
            .any(|date| self.is_blocked(date))
    }

    /// Number of priced dates
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AvailabilityStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(d: NaiveDate, price: f64) -> DateAvailability {
        DateAvailability {
            date: d,
            price,
            currency: "USD".to_string(),
            status: AvailabilityStatus::Available,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_index() {
        let index = AvailabilityIndex::new(&[], &[]);
        assert!(index.is_empty());
        assert_eq!(index.blocked_count(), 0);
        assert!(!index.is_bookable(date(2025, 12, 1)));
    }

    #[test]
    fn test_lookup_and_blocked() {
        let index = AvailabilityIndex::new(
            &[record(date(2025, 12, 1), 100.0), record(date(2025, 12, 2), 120.0)],
            &[date(2025, 12, 2), date(2025, 12, 9)],
        );

        assert_eq!(index.len(), 2);
        assert_eq!(index.availability(date(2025, 12, 1)).unwrap().price, 100.0);
        assert!(index.availability(date(2025, 12, 3)).is_none());
        assert!(index.is_blocked(date(2025, 12, 9)));
        assert!(index.is_bookable(date(2025, 12, 1)));
        // priced but blocked
        assert!(!index.is_bookable(date(2025, 12, 2)));
    }

    #[test]
    fn test_duplicate_dates_last_insert_wins() {
        let index = AvailabilityIndex::new(
            &[record(date(2025, 12, 1), 100.0), record(date(2025, 12, 1), 180.0)],
            &[],
        );
        assert_eq!(index.len(), 1);
        assert_eq!(index.availability(date(2025, 12, 1)).unwrap().price, 180.0);
    }

    #[test]
    fn test_has_blocked_between_excludes_endpoints() {
        let index = AvailabilityIndex::new(&[], &[date(2025, 12, 1), date(2025, 12, 5)]);

        assert!(!index.has_blocked_between(date(2025, 12, 1), date(2025, 12, 5)));
        assert!(index.has_blocked_between(date(2025, 12, 1), date(2025, 12, 6)));
        assert!(index.has_blocked_between(date(2025, 11, 30), date(2025, 12, 2)));
        assert!(!index.has_blocked_between(date(2025, 12, 2), date(2025, 12, 3)));
    }

    #[test]
    fn test_date_key_is_zero_padded() {
        assert_eq!(date_key(date(2025, 3, 7)), "2025-03-07");
    }
}
