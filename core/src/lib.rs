pub mod model;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use model::calendar::{DayTotal, YearCalendar};
pub use model::catalog::{
    Achievement, AchievementKind, Level, ACHIEVEMENTS, CATEGORY_MASTERY_GOAL, LEVELS,
};
pub use model::entry::{Category, Entry};
pub use repository::{EntryRepository, FileEntryRepository};
pub use service::dto::{
    AchievementStatus, CategoryMastery, LevelInfo, LevelProgress, StatsSnapshot,
};
pub use service::entry_service::{EntryService, DEFAULT_LIST_LIMIT};
pub use service::progress::{category_mastery, current_level, evaluate_achievements, level_progress};
pub use service::stats_service::{compute_snapshot, current_streak, StatsService};
pub use usecase::calendar::CalendarUseCase;
