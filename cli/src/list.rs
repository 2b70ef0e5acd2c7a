use mastery_core::Entry;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

// Helper struct for Table Row
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Hours")]
    hours: String,
    #[tabled(rename = "Description")]
    description: String,
}

pub fn show_entries(entries: &[Entry]) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|entry| {
            let id_str = entry.id.to_string();
            let short_id = id_str[..8].to_string();
            EntryRow {
                id: short_id,
                date: entry.date.format("%Y-%m-%d").to_string(),
                category: format!("{} {}", entry.category.icon(), entry.category.id()),
                hours: format!("{:.2}", entry.hours),
                description: entry.description.clone(),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("{}", table);

    let total: f64 = entries.iter().map(|e| e.hours).sum();
    println!("{} entries, {:.2}h total", entries.len(), total);
}
