use crate::model::entry::Entry;
use anyhow::Result;
use chrono::NaiveDate;
use uuid::Uuid;

/// Store contract for logged entries. Date queries filter on the
/// attribution `date`, never on `created_at`.
pub trait EntryRepository {
    fn create(&self, entry: Entry) -> Result<Entry>;
    fn list(&self) -> Result<Vec<Entry>>;
    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Entry>>;
    /// Entries with `start <= date <= end`, both bounds inclusive.
    fn find_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Entry>>;
    fn delete(&self, id: &Uuid) -> Result<()>;
}
