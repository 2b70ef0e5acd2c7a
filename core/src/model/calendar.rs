use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct DayTotal {
    pub count: u32,
    pub hours: f64,
}

/// Per-day activity totals for one calendar year, keyed "YYYY-MM-DD".
/// Days without entries are simply absent; callers treat absence as zero.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct YearCalendar {
    pub year: i32,
    pub days: HashMap<String, DayTotal>,
}

impl YearCalendar {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            days: HashMap::new(),
        }
    }

    pub fn add(&mut self, date: NaiveDate, hours: f64) {
        let cell = self
            .days
            .entry(date.format("%Y-%m-%d").to_string())
            .or_default();
        cell.count += 1;
        cell.hours += hours;
    }

    pub fn get(&self, date: NaiveDate) -> DayTotal {
        self.days
            .get(&date.format("%Y-%m-%d").to_string())
            .copied()
            .unwrap_or_default()
    }

    pub fn total_hours(&self) -> f64 {
        self.days.values().map(|d| d.hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_day_accumulates() {
        let mut cal = YearCalendar::new(2026);
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        cal.add(date, 2.0);
        cal.add(date, 3.0);

        let cell = cal.get(date);
        assert_eq!(cell.count, 2);
        assert_eq!(cell.hours, 5.0);
    }

    #[test]
    fn test_absent_day_is_zero() {
        let cal = YearCalendar::new(2026);
        let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(cal.get(date).count, 0);
        assert_eq!(cal.get(date).hours, 0.0);
    }
}
