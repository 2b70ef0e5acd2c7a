use crate::model::calendar::YearCalendar;
use crate::repository::EntryRepository;
use crate::time::year_bounds;
use anyhow::Result;

/// Builds the contribution-calendar view for one year. Scoping happens at
/// the store (date-range query), so entries recorded this year but
/// attributed to another never leak in.
pub struct CalendarUseCase<'a, R: EntryRepository> {
    repo: &'a R,
}

impl<'a, R: EntryRepository> CalendarUseCase<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn year_view(&self, year: i32) -> Result<YearCalendar> {
        let (start, end) = year_bounds(year);
        let entries = self.repo.find_by_range(start, end)?;

        let mut calendar = YearCalendar::new(year);
        for entry in &entries {
            calendar.add(entry.date, entry.hours);
        }
        Ok(calendar)
    }
}
