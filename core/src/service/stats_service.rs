use crate::model::entry::Entry;
use crate::repository::EntryRepository;
use crate::service::dto::StatsSnapshot;
use crate::time::{month_start, week_start, year_bounds};
use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use std::collections::HashMap;

pub struct StatsService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> StatsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Snapshot anchored at the local calendar date. All time-relative
    /// math lives in `compute_snapshot` so tests can pin "today".
    pub fn snapshot(&self) -> Result<StatsSnapshot> {
        let entries = self.repo.list()?;
        Ok(compute_snapshot(&entries, Local::now().date_naive()))
    }

    pub fn snapshot_at(&self, today: NaiveDate) -> Result<StatsSnapshot> {
        let entries = self.repo.list()?;
        Ok(compute_snapshot(&entries, today))
    }
}

// Standalone functions for pure logic

/// Derive the full statistics snapshot from the entry set. `today` is the
/// caller's reference date; week/month/year windows are recomputed from it
/// on every call, nothing is cached.
pub fn compute_snapshot(entries: &[Entry], today: NaiveDate) -> StatsSnapshot {
    let total_hours: f64 = entries.iter().map(|e| e.hours).sum();

    let mut category_breakdown = HashMap::new();
    for entry in entries {
        *category_breakdown.entry(entry.category).or_insert(0.0) += entry.hours;
    }

    let yesterday = today.pred_opt().unwrap();
    let today_hours = sum_hours(entries, |e| e.date == today);
    let yesterday_hours = sum_hours(entries, |e| e.date == yesterday);

    let dates: Vec<NaiveDate> = entries.iter().map(|e| e.date).collect();
    let streak = current_streak(&dates, today);

    let mut unique_dates = dates;
    unique_dates.sort_unstable();
    unique_dates.dedup();
    let active_days = unique_dates.len();

    let daily_average = if active_days > 0 {
        total_hours / active_days as f64
    } else {
        0.0
    };

    // Period windows. The week/month sums have no upper bound so a
    // forward-dated entry still counts toward its period; the year sum is
    // pinned to the current calendar year.
    let current_year = today.year();
    let week_from = week_start(today);
    let month_from = month_start(today);
    let (year_from, _) = year_bounds(current_year);

    let weekly_hours = sum_hours(entries, |e| e.date >= week_from);
    let monthly_hours = sum_hours(entries, |e| e.date >= month_from);
    let yearly_hours = sum_hours(entries, |e| {
        e.date >= year_from && e.date.year() == current_year
    });

    StatsSnapshot {
        total_hours,
        category_breakdown,
        today_hours,
        yesterday_hours,
        streak,
        daily_average,
        active_days,
        total_entries: entries.len(),
        weekly_hours,
        monthly_hours,
        yearly_hours,
        current_year,
        current_week_start: week_from.format("%Y-%m-%d").to_string(),
        current_month_start: month_from.format("%Y-%m-%d").to_string(),
    }
}

/// Consecutive active days counted backward from the most recent entry.
///
/// The chain must be anchored at today or yesterday; otherwise it is
/// already broken and the streak is 0. Several entries on one day count
/// as a single day.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut unique: Vec<NaiveDate> = dates.to_vec();
    unique.sort_unstable_by(|a, b| b.cmp(a));
    unique.dedup();

    let Some(&latest) = unique.first() else {
        return 0;
    };

    let yesterday = today.pred_opt().unwrap();
    if latest != today && latest != yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut anchor = latest;
    for &date in &unique[1..] {
        if anchor.pred_opt() == Some(date) {
            streak += 1;
            anchor = date;
        } else {
            break;
        }
    }

    streak
}

fn sum_hours<F: Fn(&Entry) -> bool>(entries: &[Entry], pred: F) -> f64 {
    entries.iter().filter(|e| pred(e)).map(|e| e.hours).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::Category;
    use chrono::Duration;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(date: NaiveDate, hours: f64, category: Category) -> Entry {
        Entry::new(date, hours, category, None)
    }

    // 2026-08-25 is a Tuesday.
    const TODAY: (i32, u32, u32) = (2026, 8, 25);

    fn today() -> NaiveDate {
        d(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn test_empty_set_yields_zeroes() {
        let snap = compute_snapshot(&[], today());
        assert_eq!(snap.total_hours, 0.0);
        assert_eq!(snap.streak, 0);
        assert_eq!(snap.active_days, 0);
        assert_eq!(snap.daily_average, 0.0);
        assert_eq!(snap.total_entries, 0);
        assert!(snap.category_breakdown.is_empty());
    }

    #[test]
    fn test_breakdown_sums_to_total() {
        let entries = vec![
            entry(today(), 2.0, Category::Software),
            entry(today() - Duration::days(1), 3.5, Category::Software),
            entry(today() - Duration::days(1), 1.5, Category::Ai),
            entry(today() - Duration::days(10), 4.0, Category::Design),
        ];
        let snap = compute_snapshot(&entries, today());

        let breakdown_sum: f64 = snap.category_breakdown.values().sum();
        assert!((breakdown_sum - snap.total_hours).abs() < 1e-9);
        assert_eq!(snap.total_hours, 11.0);
        assert_eq!(snap.category_breakdown[&Category::Software], 5.5);
        assert!(!snap.category_breakdown.contains_key(&Category::Cybersecurity));
    }

    #[test]
    fn test_today_yesterday_and_average() {
        let entries = vec![
            entry(today(), 2.0, Category::Software),
            entry(today(), 1.0, Category::Design),
            entry(today() - Duration::days(1), 4.0, Category::Software),
        ];
        let snap = compute_snapshot(&entries, today());

        assert_eq!(snap.today_hours, 3.0);
        assert_eq!(snap.yesterday_hours, 4.0);
        assert_eq!(snap.active_days, 2);
        assert_eq!(snap.total_entries, 3);
        assert!((snap.daily_average - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_streak_of_one_for_single_entry_today() {
        let dates = vec![today()];
        assert_eq!(current_streak(&dates, today()), 1);
    }

    #[test]
    fn test_streak_broken_when_latest_is_older_than_yesterday() {
        let dates = vec![today() - Duration::days(5), today() - Duration::days(6)];
        assert_eq!(current_streak(&dates, today()), 0);
    }

    #[test]
    fn test_streak_stops_at_first_gap() {
        let dates = vec![
            today(),
            today() - Duration::days(1),
            today() - Duration::days(2),
            // gap
            today() - Duration::days(5),
            today() - Duration::days(6),
        ];
        assert_eq!(current_streak(&dates, today()), 3);
    }

    #[test]
    fn test_streak_anchored_at_yesterday() {
        let dates = vec![today() - Duration::days(1), today() - Duration::days(2)];
        assert_eq!(current_streak(&dates, today()), 2);
    }

    #[test]
    fn test_streak_extends_by_one_when_yesterday_filled() {
        let mut dates = vec![today(), today() - Duration::days(2)];
        assert_eq!(current_streak(&dates, today()), 1);

        dates.push(today() - Duration::days(1));
        assert_eq!(current_streak(&dates, today()), 3);
    }

    #[test]
    fn test_duplicate_dates_count_once() {
        let dates = vec![today(), today(), today() - Duration::days(1)];
        assert_eq!(current_streak(&dates, today()), 2);

        let entries = vec![
            entry(today(), 1.0, Category::Ai),
            entry(today(), 1.0, Category::Ai),
        ];
        assert_eq!(compute_snapshot(&entries, today()).active_days, 1);
    }

    #[test]
    fn test_period_sums_respect_boundaries() {
        let entries = vec![
            entry(today(), 2.0, Category::Software),             // this week
            entry(d(2026, 8, 24), 3.0, Category::Software),      // Monday, this week
            entry(d(2026, 8, 23), 5.0, Category::Software),      // Sunday, last week / this month
            entry(d(2026, 8, 1), 7.0, Category::Software),       // this month
            entry(d(2026, 1, 2), 11.0, Category::Software),      // this year
            entry(d(2025, 12, 31), 13.0, Category::Software),    // last year
        ];
        let snap = compute_snapshot(&entries, today());

        assert_eq!(snap.weekly_hours, 5.0);
        assert_eq!(snap.monthly_hours, 17.0);
        assert_eq!(snap.yearly_hours, 28.0);
        assert_eq!(snap.current_year, 2026);
        assert_eq!(snap.current_week_start, "2026-08-24");
        assert_eq!(snap.current_month_start, "2026-08-01");
    }

    #[test]
    fn test_week_rolls_on_sunday_reference() {
        // Reference on a Sunday: the week still starts the previous Monday.
        let sunday = d(2026, 8, 23);
        let entries = vec![
            entry(d(2026, 8, 17), 1.0, Category::Ai), // that Monday
            entry(d(2026, 8, 16), 9.0, Category::Ai), // Sunday before
        ];
        let snap = compute_snapshot(&entries, sunday);
        assert_eq!(snap.weekly_hours, 1.0);
        assert_eq!(snap.current_week_start, "2026-08-17");
    }
}
