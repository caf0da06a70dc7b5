use serde::{Deserialize, Serialize};

/// One enrolled student in a group's roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
    pub enrollment_id: i64,
    pub student_code: String,
    pub last_name: String,
    pub first_name: String,
    pub status: String,
}
