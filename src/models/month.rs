//! Calendar month key used by the monthly summary

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month, displayed as `YYYY-MM`
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month a date falls in
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date_truncates() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        assert_eq!(YearMonth::from_date(date), YearMonth::new(2024, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(YearMonth::new(2024, 2).to_string(), "2024-02");
        assert_eq!(YearMonth::new(987, 11).to_string(), "0987-11");
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut months = vec![
            YearMonth::new(2024, 2),
            YearMonth::new(2023, 12),
            YearMonth::new(2024, 1),
        ];
        months.sort();
        assert_eq!(
            months,
            vec![
                YearMonth::new(2023, 12),
                YearMonth::new(2024, 1),
                YearMonth::new(2024, 2)
            ]
        );
    }
}
