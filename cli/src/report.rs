use mastery_core::{
    category_mastery, evaluate_achievements, level_progress, StatsSnapshot, ACHIEVEMENTS,
    CATEGORY_MASTERY_GOAL, LEVELS,
};

const BAR_WIDTH: usize = 30;

fn progress_bar(percent: f64) -> String {
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn show_report(snapshot: &StatsSnapshot) {
    println!("\n\x1b[1;36mMASTERY — STATS\x1b[0m");
    println!(
        "Total: {:.1}h across {} entries on {} active days",
        snapshot.total_hours, snapshot.total_entries, snapshot.active_days
    );
    println!(
        "Today: {:.1}h   Yesterday: {:.1}h   Daily average: {:.2}h",
        snapshot.today_hours, snapshot.yesterday_hours, snapshot.daily_average
    );
    println!("Streak: \x1b[1;33m{}\x1b[0m day(s)", snapshot.streak);
    println!(
        "Week (since {}): {:.1}h   Month (since {}): {:.1}h   Year {}: {:.1}h",
        snapshot.current_week_start,
        snapshot.weekly_hours,
        snapshot.current_month_start,
        snapshot.monthly_hours,
        snapshot.current_year,
        snapshot.yearly_hours
    );

    // Level
    let lp = level_progress(snapshot.total_hours, LEVELS);
    println!("\n\x1b[1;36mLEVEL\x1b[0m");
    match &lp.next_level {
        Some(next) => println!(
            "{} {}  [{}] {:.0}% — {:.1}h to {}",
            lp.level.icon,
            lp.level.name,
            progress_bar(lp.progress),
            lp.progress,
            lp.hours_to_next,
            next.name
        ),
        None => println!(
            "{} {}  [{}] top of the ladder",
            lp.level.icon,
            lp.level.name,
            progress_bar(100.0)
        ),
    }

    // Per-category mastery
    println!("\n\x1b[1;36mMASTERY PER CATEGORY\x1b[0m");
    for mastery in category_mastery(&snapshot.category_breakdown, CATEGORY_MASTERY_GOAL) {
        let marker = if mastery.mastered {
            "\x1b[1;32m✓\x1b[0m".to_string()
        } else {
            format!("{:>7.1}h left", mastery.remaining)
        };
        println!(
            "{} {:<22} {:>8.1}h / {:.0}h   {}",
            mastery.category.icon(),
            mastery.category.display_name(),
            mastery.hours,
            CATEGORY_MASTERY_GOAL,
            marker
        );
    }

    // Achievements
    println!("\n\x1b[1;36mACHIEVEMENTS\x1b[0m");
    for status in evaluate_achievements(snapshot.total_hours, snapshot.streak, ACHIEVEMENTS) {
        if status.unlocked {
            println!(
                "{} \x1b[1;32m{:<16}\x1b[0m {}",
                status.icon, status.name, status.description
            );
        } else {
            println!(
                "{} \x1b[2m{:<16} {} ({:.0}%)\x1b[0m",
                status.icon, status.name, status.description, status.progress
            );
        }
    }
    println!();
}
