mod calendar;
mod dashboard;
mod list;
mod report;

use anyhow::Result;
use chrono::{Datelike, Local};
use clap::Parser;
use mastery_core::{
    time::parse_date, CalendarUseCase, Category, EntryService, FileEntryRepository, StatsService,
    DEFAULT_LIST_LIMIT,
};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "mastery")]
#[command(about = "A 10,000-hour mastery tracker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log a work session (usage: log 2.5 software "parser deep dive")
    Log {
        /// Duration in hours (fractions allowed)
        hours: f64,
        /// Category: software, design, ai or cybersecurity
        category: String,
        /// Optional free-text description
        description: Vec<String>,
        /// Attribution date (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List recent entries
    List {
        /// Only entries attributed to this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },
    /// Delete an entry by its full id
    Delete { id: Uuid },
    /// Print the current statistics snapshot
    Stats,
    /// Contribution calendar for a year
    Calendar {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Open the interactive dashboard
    Dashboard,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo = FileEntryRepository::new(None)?;

    match cli.command {
        Some(Commands::Log {
            hours,
            category,
            description,
            date,
        }) => {
            let category: Category = category.parse()?;
            let date = date.as_deref().map(parse_date).transpose()?;
            let description = if description.is_empty() {
                None
            } else {
                Some(description.join(" "))
            };

            let service = EntryService::new(repo);
            let entry = service.log(date, hours, category, description)?;
            println!(
                "Logged {:.2}h of {} on {} (ID: {})",
                entry.hours, entry.category, entry.date, entry.id
            );
        }
        Some(Commands::List { date, limit }) => {
            let date = date.as_deref().map(parse_date).transpose()?;
            let service = EntryService::new(repo);
            let entries = service.recent(date, limit)?;
            list::show_entries(&entries);
        }
        Some(Commands::Delete { id }) => {
            let service = EntryService::new(repo);
            service.remove(&id)?;
            println!("Deleted entry {}", id);
        }
        Some(Commands::Stats) => {
            let service = StatsService::new(repo);
            let snapshot = service.snapshot()?;
            report::show_report(&snapshot);
        }
        Some(Commands::Calendar { year }) => {
            let year = year.unwrap_or_else(|| Local::now().year());
            let usecase = CalendarUseCase::new(&repo);
            let calendar = usecase.year_view(year)?;
            calendar::show_calendar(&calendar);
        }
        Some(Commands::Dashboard) | None => {
            dashboard::run(&repo)?;
        }
    }
    Ok(())
}
