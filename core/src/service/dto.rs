use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::model::catalog::{AchievementKind, Level};
use crate::model::entry::Category;

/// Full derived-statistics snapshot. Recomputed from the entry set on
/// every request; field names match the JSON the clients consume.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub total_hours: f64,
    pub category_breakdown: HashMap<Category, f64>,
    pub today_hours: f64,
    pub yesterday_hours: f64,
    pub streak: u32,
    pub daily_average: f64,
    pub active_days: usize,
    pub total_entries: usize,
    pub weekly_hours: f64,
    pub monthly_hours: f64,
    pub yearly_hours: f64,
    pub current_year: i32,
    pub current_week_start: String,
    pub current_month_start: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelInfo {
    pub name: String,
    pub min_hours: f64,
    pub icon: String,
}

impl From<&Level> for LevelInfo {
    fn from(level: &Level) -> Self {
        Self {
            name: level.name.to_string(),
            min_hours: level.min_hours,
            icon: level.icon.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: LevelInfo,
    /// Percent of the way from the current tier to the next, clamped to 100.
    pub progress: f64,
    pub hours_to_next: f64,
    pub next_level: Option<LevelInfo>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStatus {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub requirement: f64,
    pub kind: AchievementKind,
    pub unlocked: bool,
    /// Percent toward the requirement, clamped to 100.
    pub progress: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMastery {
    pub category: Category,
    pub hours: f64,
    pub mastered: bool,
    pub remaining: f64,
}
