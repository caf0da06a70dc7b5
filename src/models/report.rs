use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One outstanding-balance row: list price vs. total paid per enrollment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtRow {
    pub student: String,
    pub group_code: String,
    pub course: String,
    pub list_price: f64,
    pub paid: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRow {
    pub paid_on: NaiveDate,
    pub amount: f64,
    pub method: String,
    pub status: String,
    pub student_code: String,
    pub student: String,
    pub group_code: String,
}
