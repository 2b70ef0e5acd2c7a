//! Level classification, mastery tracking and achievement evaluation.
//!
//! All functions here are pure and take their catalog as a parameter, so
//! the tier ladder or achievement list can change without touching the
//! algorithms. The defaults live in `model::catalog`.

use crate::model::catalog::{Achievement, AchievementKind, Level};
use crate::model::entry::Category;
use crate::service::dto::{AchievementStatus, CategoryMastery, LevelProgress};
use std::collections::HashMap;

/// Highest tier whose threshold does not exceed `total_hours`. The catalog
/// must be non-empty with its first threshold at 0.
pub fn current_level<'a>(total_hours: f64, levels: &'a [Level]) -> &'a Level {
    levels
        .iter()
        .rev()
        .find(|l| total_hours >= l.min_hours)
        .unwrap_or(&levels[0])
}

pub fn level_progress(total_hours: f64, levels: &[Level]) -> LevelProgress {
    let index = levels
        .iter()
        .rposition(|l| total_hours >= l.min_hours)
        .unwrap_or(0);
    let current = &levels[index];

    match levels.get(index + 1) {
        None => LevelProgress {
            level: current.into(),
            progress: 100.0,
            hours_to_next: 0.0,
            next_level: None,
        },
        Some(next) => {
            let span = next.min_hours - current.min_hours;
            let progress = if span > 0.0 {
                ((total_hours - current.min_hours) / span * 100.0).min(100.0)
            } else {
                100.0
            };
            LevelProgress {
                level: current.into(),
                progress,
                hours_to_next: next.min_hours - total_hours,
                next_level: Some(next.into()),
            }
        }
    }
}

/// Per-category hours against a single mastery goal. Reported in catalog
/// order; categories without entries show up at 0 so the report is always
/// complete even though the breakdown itself omits them.
pub fn category_mastery(
    breakdown: &HashMap<Category, f64>,
    goal: f64,
) -> Vec<CategoryMastery> {
    Category::ALL
        .iter()
        .map(|&category| {
            let hours = breakdown.get(&category).copied().unwrap_or(0.0);
            CategoryMastery {
                category,
                hours,
                mastered: hours >= goal,
                remaining: (goal - hours).max(0.0),
            }
        })
        .collect()
}

/// Evaluate every achievement independently against the current totals.
pub fn evaluate_achievements(
    total_hours: f64,
    streak: u32,
    catalog: &[Achievement],
) -> Vec<AchievementStatus> {
    catalog
        .iter()
        .map(|a| {
            let current = match a.kind {
                AchievementKind::Hours => total_hours,
                AchievementKind::Streak => streak as f64,
            };
            let progress = if a.requirement > 0.0 {
                (current / a.requirement * 100.0).min(100.0)
            } else {
                100.0
            };
            AchievementStatus {
                id: a.id.to_string(),
                name: a.name.to_string(),
                icon: a.icon.to_string(),
                description: a.description.to_string(),
                requirement: a.requirement,
                kind: a.kind,
                unlocked: current >= a.requirement,
                progress,
            }
        })
        .collect()
}
