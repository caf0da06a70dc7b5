use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ClientError;
use crate::models::AttendanceSheet;
use crate::storage::KvStore;

pub const QUEUE_KEY: &str = "queue_v1";

/// A write operation that must eventually reach the backend. One variant per
/// operation kind; the serialized shape is `{ "kind": ..., "payload": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum WriteOp {
    Attendance(AttendanceSheet),
}

/// A queued write. Immutable once enqueued: a sync pass either drops it on
/// confirmed delivery or carries it over unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedWrite {
    pub id: Uuid,
    pub queued_at: DateTime<Utc>,
    #[serde(flatten)]
    pub op: WriteOp,
}

/// Durable, ordered queue of pending writes, persisted as a single JSON array
/// under one key. Insertion order is replay order.
#[derive(Clone)]
pub struct OfflineQueue {
    store: Arc<dyn KvStore>,
}

impl OfflineQueue {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        OfflineQueue { store }
    }

    /// Append one write to the persisted queue. Storage failures surface to
    /// the caller instead of silently dropping the write.
    pub fn enqueue(&self, op: WriteOp) -> Result<QueuedWrite, ClientError> {
        let mut items = self.load_all();
        let item = QueuedWrite {
            id: Uuid::now_v7(),
            queued_at: Utc::now(),
            op,
        };
        items.push(item.clone());
        self.save(&items)?;
        tracing::debug!("Enqueued offline write {} ({} now pending)", item.id, items.len());
        Ok(item)
    }

    /// Full persisted queue in insertion order. Absent, unreadable, or
    /// unparseable state loads as an empty queue.
    pub fn load_all(&self) -> Vec<QueuedWrite> {
        let raw = match self.store.get(QUEUE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read offline queue: {e}");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("Discarding unparseable offline queue: {e}");
                Vec::new()
            }
        }
    }

    /// Replace the persisted queue wholesale.
    pub fn save(&self, items: &[QueuedWrite]) -> Result<(), ClientError> {
        let raw = serde_json::to_string(items)
            .map_err(|e| ClientError::Storage(format!("Failed to encode offline queue: {e}")))?;
        self.store.set(QUEUE_KEY, &raw).map_err(ClientError::Storage)
    }

    pub fn len(&self) -> usize {
        self.load_all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.load_all().is_empty()
    }
}
