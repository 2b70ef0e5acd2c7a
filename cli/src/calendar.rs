use chrono::{Datelike, Duration, NaiveDate};
use mastery_core::{time::week_start, YearCalendar};

// ANSI 256-color codes, no activity up to heavy days
const SHADES: [u8; 5] = [237, 22, 28, 34, 46];

fn shade(hours: f64) -> u8 {
    if hours <= 0.0 {
        SHADES[0]
    } else if hours < 1.0 {
        SHADES[1]
    } else if hours < 2.0 {
        SHADES[2]
    } else if hours < 4.0 {
        SHADES[3]
    } else {
        SHADES[4]
    }
}

fn cell(color: u8) -> String {
    format!("\x1b[38;5;{}m■\x1b[0m ", color)
}

/// GitHub-style contribution grid: one column per week (Monday start),
/// one row per weekday.
pub fn show_calendar(calendar: &YearCalendar) {
    let year = calendar.year;
    let jan1 = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let dec31 = NaiveDate::from_ymd_opt(year, 12, 31).unwrap();

    let first_week = week_start(jan1);
    let week_count = ((dec31 - first_week).num_days() / 7 + 1) as usize;

    println!("\n\x1b[1;36m{} — ACTIVITY\x1b[0m", year);

    // Month labels, placed above the column containing the 1st
    let mut labels = vec!["  ".to_string(); week_count];
    for month in 1..=12 {
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let col = ((week_start(first) - first_week).num_days() / 7) as usize;
        if col < week_count {
            labels[col] = first.format("%b").to_string()[..2].to_string();
        }
    }
    println!("    {}", labels.join(""));

    let weekday_labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    for (row, label) in weekday_labels.iter().enumerate() {
        let mut line = format!("{} ", label);
        for col in 0..week_count {
            let date = first_week + Duration::days((col * 7 + row) as i64);
            if date.year() == year {
                line.push_str(&cell(shade(calendar.get(date).hours)));
            } else {
                line.push_str("  ");
            }
        }
        println!("{}", line);
    }

    let active_days = calendar.days.len();
    println!(
        "\n{} active days, {:.1}h logged   less {} more",
        active_days,
        calendar.total_hours(),
        SHADES.map(cell).join("")
    );
}
