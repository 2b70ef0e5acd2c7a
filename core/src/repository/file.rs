use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use uuid::Uuid;

use crate::model::entry::Entry;
use crate::repository::traits::EntryRepository;

const DEFAULT_FILE_NAME: &str = "entries.json";

/// JSON-file backed store. Every operation is a full read-modify-write;
/// fine for a personal log, and it keeps the store trivially consistent
/// for the statistics readers.
#[derive(Clone)]
pub struct FileEntryRepository {
    file_path: PathBuf,
}

impl FileEntryRepository {
    pub fn new(base_dir: Option<PathBuf>) -> Result<Self> {
        let mut path = match base_dir {
            Some(dir) => dir,
            None => {
                let home_dir = dirs::home_dir()
                    .ok_or_else(|| anyhow!("Could not determine home directory"))?;
                home_dir.join(".mastery")
            }
        };
        fs::create_dir_all(&path)?;
        path.push(DEFAULT_FILE_NAME);

        if !path.exists() {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &Vec::<Entry>::new())?;
            writer.flush()?;
        }

        Ok(FileEntryRepository { file_path: path })
    }

    fn read_entries(&self) -> Result<Vec<Entry>> {
        let file = File::open(&self.file_path)?;
        let reader = BufReader::new(file);
        let entries = serde_json::from_reader(reader)?;
        Ok(entries)
    }

    fn write_entries(&self, entries: &[Entry]) -> Result<()> {
        let file = File::create(&self.file_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.flush()?;
        Ok(())
    }
}

impl EntryRepository for FileEntryRepository {
    fn create(&self, entry: Entry) -> Result<Entry> {
        let mut entries = self.read_entries()?;
        entries.push(entry.clone());
        self.write_entries(&entries)?;
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<Entry>> {
        self.read_entries()
    }

    fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Entry>> {
        let entries = self.read_entries()?;
        Ok(entries.into_iter().filter(|e| e.date == date).collect())
    }

    fn find_by_range(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Entry>> {
        let entries = self.read_entries()?;
        Ok(entries
            .into_iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect())
    }

    fn delete(&self, id: &Uuid) -> Result<()> {
        let mut entries = self.read_entries()?;
        let initial_len = entries.len();
        entries.retain(|e| e.id != *id);

        if entries.len() == initial_len {
            return Err(anyhow!("Entry with ID {} not found", id));
        }

        self.write_entries(&entries)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entry::Category;

    fn temp_repo() -> (FileEntryRepository, PathBuf) {
        let dir = std::env::temp_dir().join(format!("mastery-test-{}", Uuid::new_v4()));
        let repo = FileEntryRepository::new(Some(dir.clone())).unwrap();
        (repo, dir)
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_create_list_delete_roundtrip() {
        let (repo, dir) = temp_repo();

        let entry = repo
            .create(Entry::new(d(2026, 8, 25), 2.5, Category::Software, None))
            .unwrap();
        repo.create(Entry::new(d(2026, 8, 24), 1.0, Category::Ai, None))
            .unwrap();

        assert_eq!(repo.list().unwrap().len(), 2);
        assert_eq!(repo.find_by_date(d(2026, 8, 25)).unwrap().len(), 1);

        repo.delete(&entry.id).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
        assert!(repo.delete(&entry.id).is_err());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_find_by_range_is_inclusive_on_date() {
        let (repo, dir) = temp_repo();

        repo.create(Entry::new(d(2025, 12, 31), 1.0, Category::Design, None))
            .unwrap();
        repo.create(Entry::new(d(2026, 1, 1), 2.0, Category::Design, None))
            .unwrap();
        repo.create(Entry::new(d(2026, 12, 31), 3.0, Category::Design, None))
            .unwrap();

        let hits = repo
            .find_by_range(d(2026, 1, 1), d(2026, 12, 31))
            .unwrap();
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|e| e.date.format("%Y").to_string() == "2026"));

        fs::remove_dir_all(dir).unwrap();
    }
}
