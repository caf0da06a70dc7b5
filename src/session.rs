use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ClientError;
use crate::storage::KvStore;

pub const SESSION_KEY: &str = "session_v1";

/// An authenticated backend session. Callers hold it explicitly and pass it
/// to the API layer; nothing session-shaped lives in process-wide state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: String,
    pub name: String,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role == "ADMIN"
    }
}

/// Persists the session as one JSON record in the key-value store.
pub struct SessionStore {
    store: Arc<dyn KvStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        SessionStore { store }
    }

    pub fn save(&self, session: &Session) -> Result<(), ClientError> {
        let raw = serde_json::to_string(session)
            .map_err(|e| ClientError::Storage(format!("Failed to encode session: {e}")))?;
        self.store
            .set(SESSION_KEY, &raw)
            .map_err(ClientError::Storage)
    }

    /// Stored session, if any. An unreadable or unparseable record is treated
    /// as no session.
    pub fn load(&self) -> Option<Session> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!("Failed to read stored session: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Discarding unparseable stored session: {e}");
                None
            }
        }
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        self.store.remove(SESSION_KEY).map_err(ClientError::Storage)
    }
}
