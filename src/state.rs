use std::sync::Arc;

use crate::api::{ApiBackend, ApiClient};
use crate::config::Config;
use crate::connectivity::ConnectivityMonitor;
use crate::error::ClientError;
use crate::models::AttendanceSheet;
use crate::queue::{OfflineQueue, WriteOp};
use crate::session::{Session, SessionStore};
use crate::sync::SyncEngine;

pub type SharedClient = Arc<Client>;

/// Everything an embedding application needs: the API surface, the session
/// store and the offline queue, wired over one key-value store.
pub struct Client {
    pub config: Config,
    pub api: ApiClient,
    pub sessions: SessionStore,
    pub queue: OfflineQueue,
    pub connectivity: Arc<ConnectivityMonitor>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordOutcome {
    /// The backend confirmed the write; `inserted` is its reported count.
    Recorded { inserted: u64 },
    /// Delivery could not be confirmed; the sheet went to the offline queue.
    Queued,
}

impl Client {
    /// Record one attendance sheet. Falls back to the offline queue when the
    /// device is offline or the attempt dies in transport; a backend
    /// rejection is surfaced as an error and not queued.
    pub async fn record_attendance(
        &self,
        session: &Session,
        sheet: AttendanceSheet,
    ) -> Result<RecordOutcome, ClientError> {
        if !self.connectivity.is_online() {
            self.queue.enqueue(WriteOp::Attendance(sheet))?;
            return Ok(RecordOutcome::Queued);
        }

        match self.api.record_attendance(session, &sheet).await {
            Ok(inserted) => Ok(RecordOutcome::Recorded { inserted }),
            Err(ClientError::Transport(e)) => {
                tracing::warn!("Attendance send failed in transport, queueing: {e}");
                self.queue.enqueue(WriteOp::Attendance(sheet))?;
                Ok(RecordOutcome::Queued)
            }
            Err(e) => Err(e),
        }
    }

    /// Sync engine replaying this client's queue with the given session.
    pub fn sync_engine(&self, session: &Session) -> SyncEngine {
        SyncEngine::new(
            self.queue.clone(),
            Arc::new(ApiBackend::new(self.api.clone(), session.clone())),
            self.connectivity.clone(),
        )
    }
}
