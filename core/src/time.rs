use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};

/// Monday of the week containing `date`. A Sunday belongs to the week that
/// started six days earlier, matching the Monday-start convention used by
/// the weekly period sum.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - chrono::Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// Inclusive first and last day of a calendar year.
pub fn year_bounds(year: i32) -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
    )
}

/// Parse a user-supplied `YYYY-MM-DD` date string.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date '{}' (expected YYYY-MM-DD)", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_week_start_monday_rule() {
        // 2026-08-25 is a Tuesday
        assert_eq!(week_start(d(2026, 8, 25)), d(2026, 8, 24));
        // Monday maps to itself
        assert_eq!(week_start(d(2026, 8, 24)), d(2026, 8, 24));
        // Sunday backs up six days, not forward
        assert_eq!(week_start(d(2026, 8, 23)), d(2026, 8, 17));
    }

    #[test]
    fn test_week_start_crosses_month_boundary() {
        // 2026-09-01 is a Tuesday; its week starts in August
        assert_eq!(week_start(d(2026, 9, 1)), d(2026, 8, 31));
    }

    #[test]
    fn test_month_and_year_bounds() {
        assert_eq!(month_start(d(2026, 8, 25)), d(2026, 8, 1));
        let (start, end) = year_bounds(2026);
        assert_eq!(start, d(2026, 1, 1));
        assert_eq!(end, d(2026, 12, 31));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2026-08-25").unwrap(), d(2026, 8, 25));
        assert_eq!(parse_date(" 2026-01-02 ").unwrap(), d(2026, 1, 2));
        assert!(parse_date("08/25/2026").is_err());
        assert!(parse_date("2026-02-30").is_err());
    }
}
