pub mod file;
pub mod traits;

// Re-export
pub use file::FileEntryRepository;
pub use traits::EntryRepository;
