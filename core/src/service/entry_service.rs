use crate::model::entry::{Category, Entry};
use crate::repository::EntryRepository;
use anyhow::{anyhow, Result};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Input-boundary CRUD over the entry store. Plausibility checks happen
/// here so the statistics engine can assume clean data.
pub struct EntryService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> EntryService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn log(
        &self,
        date: Option<NaiveDate>,
        hours: f64,
        category: Category,
        description: Option<String>,
    ) -> Result<Entry> {
        if hours <= 0.0 {
            return Err(anyhow!("Hours must be positive (got {})", hours));
        }
        if hours > 24.0 {
            return Err(anyhow!("A day only has 24 hours (got {})", hours));
        }

        let date = date.unwrap_or_else(|| Local::now().date_naive());
        self.repo.create(Entry::new(date, hours, category, description))
    }

    /// Most recently recorded entries first, optionally filtered to one
    /// attribution date. Ordering uses `created_at` (display order only).
    pub fn recent(&self, date: Option<NaiveDate>, limit: usize) -> Result<Vec<Entry>> {
        let mut entries = match date {
            Some(d) => self.repo.find_by_date(d)?,
            None => self.repo.list()?,
        };
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit);
        Ok(entries)
    }

    pub fn remove(&self, id: &Uuid) -> Result<()> {
        self.repo.delete(id)
    }
}
