//! Pricing period buckets.
//!
//! Average hourly pay statistics are kept in quarterly buckets that lag the
//! calendar by a few months. A work period starting in May, June or July is
//! priced from the bucket starting in January of the same year, and so on:
//!
//! | Work start month | Bucket start        |
//! |------------------|---------------------|
//! | May - Jul        | Jan, same year      |
//! | Aug - Oct        | Apr, same year      |
//! | Nov - Dec        | Jul, same year      |
//! | Jan              | Jul, previous year  |
//! | Feb - Apr        | Oct, previous year  |

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{ExpressionError, ExpressionResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// First day of the pricing bucket for a work period starting on `date`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use payroll_expressions::expressions::bucket_start;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(bucket_start(start).unwrap(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// ```
pub fn bucket_start(date: NaiveDate) -> ExpressionResult<NaiveDate> {
    let (year, month) = bucket_anchor(date.year(), date.month());
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| ExpressionError::InvalidDate {
        input: date.format(DATE_FORMAT).to_string(),
        message: "pricing bucket falls outside the supported date range".to_string(),
    })
}

/// Bucket start for an optional `yyyy-MM-dd` work start date, as a
/// `yyyy-MM-dd` string.
///
/// Without a date the current local date is returned as is. Only the
/// `yyyy-MM` prefix of the input is used, but it must be well formed.
pub fn pricing_period_start(work_start_date: Option<&str>) -> ExpressionResult<String> {
    pricing_period_start_on(work_start_date, Local::now().date_naive())
}

/// [`pricing_period_start`] with an explicit "today".
pub fn pricing_period_start_on(
    work_start_date: Option<&str>,
    today: NaiveDate,
) -> ExpressionResult<String> {
    let input = match work_start_date {
        Some(input) if !input.is_empty() => input,
        _ => return Ok(today.format(DATE_FORMAT).to_string()),
    };

    let (year, month) = parse_year_month(input)?;
    let (bucket_year, bucket_month) = bucket_anchor(year, month);
    let start = NaiveDate::from_ymd_opt(bucket_year, bucket_month, 1).ok_or_else(|| {
        invalid_date(input, "pricing bucket falls outside the supported date range")
    })?;
    Ok(start.format(DATE_FORMAT).to_string())
}

fn bucket_anchor(year: i32, month: u32) -> (i32, u32) {
    match month {
        5..=7 => (year, 1),
        8..=10 => (year, 4),
        11 | 12 => (year, 7),
        1 => (year - 1, 7),
        // 2..=4
        _ => (year - 1, 10),
    }
}

fn parse_year_month(input: &str) -> ExpressionResult<(i32, u32)> {
    let prefix = input
        .get(..7)
        .ok_or_else(|| invalid_date(input, "expected a yyyy-MM-dd date"))?;
    let (year, month) = prefix
        .split_once('-')
        .ok_or_else(|| invalid_date(input, "expected a yyyy-MM-dd date"))?;

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
        return Err(invalid_date(input, "expected a yyyy-MM-dd date"));
    }

    let year: i32 = year
        .parse()
        .map_err(|_| invalid_date(input, "year is not a number"))?;
    let month: u32 = month
        .parse()
        .map_err(|_| invalid_date(input, "month is not a number"))?;
    if !(1..=12).contains(&month) {
        return Err(invalid_date(input, "month must be between 01 and 12"));
    }

    Ok((year, month))
}

fn invalid_date(input: &str, message: &str) -> ExpressionError {
    ExpressionError::InvalidDate {
        input: input.to_string(),
        message: message.to_string(),
    }
}
