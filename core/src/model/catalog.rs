use serde::{Deserialize, Serialize};

/// A level tier. Thresholds in a catalog must be strictly increasing and
/// the first tier must start at 0 so every value classifies somewhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Level {
    pub name: &'static str,
    pub min_hours: f64,
    pub icon: &'static str,
}

/// Default tier ladder, scaled to the 10,000-hour mastery goal.
pub const LEVELS: &[Level] = &[
    Level { name: "Novice", min_hours: 0.0, icon: "🌱" },
    Level { name: "Apprentice", min_hours: 100.0, icon: "🔧" },
    Level { name: "Journeyman", min_hours: 500.0, icon: "⚡" },
    Level { name: "Expert", min_hours: 1500.0, icon: "🔥" },
    Level { name: "Specialist", min_hours: 3000.0, icon: "💎" },
    Level { name: "Master", min_hours: 6000.0, icon: "👑" },
    Level { name: "Legend", min_hours: 10000.0, icon: "🏆" },
];

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    /// Requirement compared against cumulative hours.
    Hours,
    /// Requirement compared against the current streak length in days.
    Streak,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub requirement: f64,
    pub kind: AchievementKind,
}

/// Static achievement catalog. Unlock state is recomputed on every
/// evaluation, never stored.
pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement { id: "first-hour", name: "First Hour", icon: "🎯", description: "Log your first hour", requirement: 1.0, kind: AchievementKind::Hours },
    Achievement { id: "ten-hours", name: "Getting Started", icon: "💪", description: "Reach 10 hours", requirement: 10.0, kind: AchievementKind::Hours },
    Achievement { id: "hundred-hours", name: "Centurion", icon: "🔥", description: "Reach 100 hours", requirement: 100.0, kind: AchievementKind::Hours },
    Achievement { id: "five-hundred", name: "Dedicated", icon: "⭐", description: "Reach 500 hours", requirement: 500.0, kind: AchievementKind::Hours },
    Achievement { id: "thousand", name: "Thousand Club", icon: "🌟", description: "Reach 1,000 hours", requirement: 1000.0, kind: AchievementKind::Hours },
    Achievement { id: "three-thousand", name: "Committed", icon: "🎖️", description: "Reach 3,000 hours", requirement: 3000.0, kind: AchievementKind::Hours },
    Achievement { id: "six-thousand", name: "Almost There", icon: "🏅", description: "Reach 6,000 hours", requirement: 6000.0, kind: AchievementKind::Hours },
    Achievement { id: "mastery", name: "10K Master", icon: "🏆", description: "Achieve 10,000 hours mastery", requirement: 10000.0, kind: AchievementKind::Hours },
    Achievement { id: "streak-7", name: "Week Warrior", icon: "📅", description: "7-day streak", requirement: 7.0, kind: AchievementKind::Streak },
    Achievement { id: "streak-30", name: "Monthly Master", icon: "🗓️", description: "30-day streak", requirement: 30.0, kind: AchievementKind::Streak },
];

/// Hours needed to master a single category.
pub const CATEGORY_MASTERY_GOAL: f64 = 10_000.0;
