//! Calendar month used to group expenses in the monthly summary

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month (e.g., "2025-01")
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// The month a date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_of_and_display() {
        let month = Month::of(date(2024, 1, 5));
        assert_eq!(month.to_string(), "2024-01");
        assert_eq!(Month::of(date(2024, 1, 31)), month);
        assert_ne!(Month::of(date(2024, 2, 1)), month);
    }

    #[test]
    fn test_chronological_order() {
        let dec = Month::of(date(2023, 12, 31));
        let jan = Month::of(date(2024, 1, 1));
        let feb = Month::of(date(2024, 2, 1));
        assert!(dec < jan);
        assert!(jan < feb);
    }
}
