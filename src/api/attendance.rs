use async_trait::async_trait;
use serde::Deserialize;

use super::ApiClient;
use crate::error::ClientError;
use crate::models::AttendanceSheet;
use crate::queue::{QueuedWrite, WriteOp};
use crate::session::Session;
use crate::sync::{DeliveryReceipt, DeliveryStatus, WriteBackend};

#[derive(Deserialize)]
struct RecordAttendanceResponse {
    #[serde(default)]
    inserted: u64,
}

impl ApiClient {
    /// Send one attendance sheet. Returns the number of newly inserted
    /// records as reported by the backend.
    pub async fn record_attendance(
        &self,
        session: &Session,
        sheet: &AttendanceSheet,
    ) -> Result<u64, ClientError> {
        let body = serde_json::to_value(sheet)
            .map_err(|e| ClientError::Invalid(format!("Unencodable attendance sheet: {e}")))?;
        let resp: RecordAttendanceResponse = self
            .post("recordAttendance", Some(&session.token), body)
            .await?;
        Ok(resp.inserted)
    }
}

/// Queue delivery seam backed by the live API client and one session.
pub struct ApiBackend {
    api: ApiClient,
    session: Session,
}

impl ApiBackend {
    pub fn new(api: ApiClient, session: Session) -> Self {
        ApiBackend { api, session }
    }
}

#[async_trait]
impl WriteBackend for ApiBackend {
    async fn deliver(&self, item: &QueuedWrite) -> Result<DeliveryReceipt, ClientError> {
        match &item.op {
            WriteOp::Attendance(sheet) => {
                match self.api.record_attendance(&self.session, sheet).await {
                    Ok(inserted) => Ok(DeliveryReceipt {
                        status: DeliveryStatus::Accepted,
                        inserted: Some(inserted),
                        reason: None,
                    }),
                    Err(ClientError::Rejected(reason)) => Ok(DeliveryReceipt {
                        status: DeliveryStatus::Rejected,
                        inserted: None,
                        reason: Some(reason),
                    }),
                    Err(e) => Err(e),
                }
            }
        }
    }
}
