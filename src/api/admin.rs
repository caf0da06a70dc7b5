use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ApiClient;
use crate::error::ClientError;
use crate::session::Session;

#[derive(Debug, Clone, Serialize)]
pub struct NewStudent {
    pub code: String,
    pub last_name: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewGroup {
    pub code: String,
    pub course_code: String,
    pub term: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub capacity: u32,
    pub site: String,
    pub status: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPayment {
    pub enrollment_id: i64,
    pub amount: f64,
    pub method: String,
    pub status: String,
    pub reference: String,
    pub note: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub role: String,
    pub pin: String,
}

/// Enrollment result; `already_enrolled` is set when the backend matched an
/// existing enrollment instead of creating one.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollOutcome {
    pub enrollment_id: i64,
    #[serde(default)]
    pub already_enrolled: bool,
}

#[derive(Deserialize)]
struct CreatedStudent {
    student_id: i64,
}

#[derive(Deserialize)]
struct CreatedGroup {
    group_id: i64,
}

#[derive(Deserialize)]
struct CreatedPayment {
    payment_id: i64,
}

#[derive(Deserialize)]
struct CreatedUser {
    user_id: i64,
}

impl ApiClient {
    pub async fn create_student(
        &self,
        session: &Session,
        student: &NewStudent,
    ) -> Result<i64, ClientError> {
        let body = serde_json::to_value(student)
            .map_err(|e| ClientError::Invalid(format!("Unencodable student record: {e}")))?;
        let resp: CreatedStudent = self.post("createStudent", Some(&session.token), body).await?;
        Ok(resp.student_id)
    }

    pub async fn create_group(
        &self,
        session: &Session,
        group: &NewGroup,
    ) -> Result<i64, ClientError> {
        let body = serde_json::to_value(group)
            .map_err(|e| ClientError::Invalid(format!("Unencodable group record: {e}")))?;
        let resp: CreatedGroup = self.post("createGroup", Some(&session.token), body).await?;
        Ok(resp.group_id)
    }

    pub async fn enroll(
        &self,
        session: &Session,
        group_code: &str,
        student_code: &str,
    ) -> Result<EnrollOutcome, ClientError> {
        self.post(
            "enroll",
            Some(&session.token),
            json!({ "group_code": group_code, "student_code": student_code }),
        )
        .await
    }

    pub async fn record_payment(
        &self,
        session: &Session,
        payment: &NewPayment,
    ) -> Result<i64, ClientError> {
        let body = serde_json::to_value(payment)
            .map_err(|e| ClientError::Invalid(format!("Unencodable payment record: {e}")))?;
        let resp: CreatedPayment = self.post("recordPayment", Some(&session.token), body).await?;
        Ok(resp.payment_id)
    }

    pub async fn create_user(&self, session: &Session, user: &NewUser) -> Result<i64, ClientError> {
        let body = serde_json::to_value(user)
            .map_err(|e| ClientError::Invalid(format!("Unencodable user record: {e}")))?;
        let resp: CreatedUser = self.post("createUser", Some(&session.token), body).await?;
        Ok(resp.user_id)
    }
}
