use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub code: String,
    pub course_code: String,
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub site: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Group {
    /// Display label: `CODE (term) - COURSE`.
    pub fn label(&self) -> String {
        format!(
            "{} ({}) - {}",
            self.code,
            self.term.as_deref().unwrap_or(""),
            self.course_code
        )
    }
}
