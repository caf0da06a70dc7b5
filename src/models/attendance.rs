use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One batch write recording presence/absence (and an optional note) for
/// every enrollment in a group, for one class date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSheet {
    pub group_code: String,
    pub class_date: NaiveDate,
    pub entries: Vec<AttendanceEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    pub enrollment_id: i64,
    pub present: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
