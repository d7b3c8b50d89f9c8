//! Date range model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A period of work: start and end dates (both inclusive) and an optional
/// number of days within it.
///
/// # Example
///
/// ```
/// use payroll_expressions::models::DateRange;
/// use chrono::NaiveDate;
///
/// let period = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// );
/// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    /// The start date (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,
    /// The end date (inclusive).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
    /// Number of days in the period, when it differs from the calendar count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_count: Option<u32>,
}

impl DateRange {
    /// Creates a range from a start and end date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            days_count: None,
        }
    }

    /// Checks if a date falls within the range.
    ///
    /// An open end on either side is unbounded on that side.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start.is_none_or(|start| date >= start) && self.end.is_none_or(|end| date <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_contains_date_within_range() {
        let range = DateRange::new(make_date("2024-01-01"), make_date("2024-01-31"));
        assert!(range.contains(make_date("2024-01-01")));
        assert!(range.contains(make_date("2024-01-31")));
        assert!(!range.contains(make_date("2024-02-01")));
    }

    #[test]
    fn test_open_range_is_unbounded() {
        let range = DateRange {
            start: Some(make_date("2024-01-01")),
            end: None,
            days_count: None,
        };
        assert!(range.contains(make_date("2030-12-31")));
        assert!(!range.contains(make_date("2023-12-31")));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{ "start": "2024-01-01", "end": "2024-01-31", "daysCount": 22 }"#;
        let range: DateRange = serde_json::from_str(json).unwrap();
        assert_eq!(range.days_count, Some(22));
        assert_eq!(range.start, Some(make_date("2024-01-01")));
    }
}
