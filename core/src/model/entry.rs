use anyhow::anyhow;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The closed set of tracked skill categories. Anything else is rejected
/// at the input boundary; the statistics engine never sees an unknown one.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Software,
    Design,
    Ai,
    Cybersecurity,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Software,
        Category::Design,
        Category::Ai,
        Category::Cybersecurity,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Category::Software => "software",
            Category::Design => "design",
            Category::Ai => "ai",
            Category::Cybersecurity => "cybersecurity",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Software => "Software Engineering",
            Category::Design => "Design",
            Category::Ai => "AI Engineering",
            Category::Cybersecurity => "Cybersecurity",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Software => "💻",
            Category::Design => "🎨",
            Category::Ai => "🤖",
            Category::Cybersecurity => "🔒",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "software" => Ok(Category::Software),
            "design" => Ok(Category::Design),
            "ai" => Ok(Category::Ai),
            "cybersecurity" => Ok(Category::Cybersecurity),
            other => Err(anyhow!(
                "Unknown category '{}' (expected one of: software, design, ai, cybersecurity)",
                other
            )),
        }
    }
}

/// A single logged work session.
///
/// `date` is the day the hours are attributed to, which is independent of
/// `created_at` (you can backfill yesterday's session this morning).
/// Every derived statistic keys off `date`; `created_at` only orders lists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub hours: f64,
    pub category: Category,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        date: NaiveDate,
        hours: f64,
        category: Category,
        description: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            hours,
            category,
            description: description.unwrap_or_else(|| format!("{} session", category.id())),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("software".parse::<Category>().unwrap(), Category::Software);
        assert_eq!("AI".parse::<Category>().unwrap(), Category::Ai);
        assert!("gardening".parse::<Category>().is_err());
    }

    #[test]
    fn test_description_defaults_to_category_label() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let entry = Entry::new(date, 2.0, Category::Design, None);
        assert_eq!(entry.description, "design session");

        let entry = Entry::new(date, 2.0, Category::Design, Some("logo draft".to_string()));
        assert_eq!(entry.description, "logo draft");
    }
}
