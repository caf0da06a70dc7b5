use serde::{Deserialize, Serialize};

/// Dashboard totals for the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub name: String,
    pub role: String,
    pub counts: RecordCounts,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordCounts {
    pub students: u64,
    pub groups: u64,
    pub enrollments: u64,
    pub payments: u64,
}
