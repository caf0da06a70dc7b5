use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::connectivity::ConnectivityMonitor;
use crate::error::ClientError;
use crate::queue::{OfflineQueue, QueuedWrite};

#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryStatus {
    Accepted,
    Rejected,
}

/// Outcome of one delivery attempt as reported by the backend.
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    pub status: DeliveryStatus,
    pub inserted: Option<u64>,
    pub reason: Option<String>,
}

/// Submission seam to the backend: one kind-tagged payload at a time. A
/// transport-level failure surfaces as `Err`; the sync pass treats it
/// identically to an explicit rejection.
#[async_trait]
pub trait WriteBackend: Send + Sync {
    async fn deliver(&self, item: &QueuedWrite) -> Result<DeliveryReceipt, ClientError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub delivered: usize,
    pub pending: usize,
}

#[derive(Debug, PartialEq)]
pub enum SyncOutcome {
    /// Connectivity was reported unavailable; the queue was left untouched.
    Offline,
    /// Another sync pass holds the in-flight guard; the queue was left untouched.
    InFlight,
    Finished(SyncReport),
}

/// Replays the offline queue against the backend: one attempt per item per
/// pass, strictly in insertion order, one in flight at a time.
pub struct SyncEngine {
    queue: OfflineQueue,
    backend: Arc<dyn WriteBackend>,
    connectivity: Arc<ConnectivityMonitor>,
    in_flight: Mutex<()>,
}

impl SyncEngine {
    pub fn new(
        queue: OfflineQueue,
        backend: Arc<dyn WriteBackend>,
        connectivity: Arc<ConnectivityMonitor>,
    ) -> Self {
        SyncEngine {
            queue,
            backend,
            connectivity,
            in_flight: Mutex::new(()),
        }
    }

    /// One sync pass: attempt every queued write in insertion order, drop the
    /// confirmed ones, persist the rest back as the new queue. A failing item
    /// never blocks the attempts behind it.
    pub async fn sync(&self) -> Result<SyncOutcome, ClientError> {
        let Ok(_guard) = self.in_flight.try_lock() else {
            tracing::debug!("Sync already in flight, skipping");
            return Ok(SyncOutcome::InFlight);
        };

        if !self.connectivity.is_online() {
            return Ok(SyncOutcome::Offline);
        }

        let items = self.queue.load_all();
        if items.is_empty() {
            return Ok(SyncOutcome::Finished(SyncReport {
                delivered: 0,
                pending: 0,
            }));
        }

        let mut delivered = 0usize;
        let mut retained = Vec::new();

        for item in items {
            match self.backend.deliver(&item).await {
                Ok(receipt) if receipt.status == DeliveryStatus::Accepted => {
                    tracing::debug!("Delivered queued write {}", item.id);
                    delivered += 1;
                }
                Ok(receipt) => {
                    tracing::warn!(
                        "Backend rejected queued write {}: {}",
                        item.id,
                        receipt.reason.as_deref().unwrap_or("no reason given")
                    );
                    retained.push(item);
                }
                Err(e) => {
                    tracing::warn!("Delivery attempt for queued write {} failed: {e}", item.id);
                    retained.push(item);
                }
            }
        }

        let report = SyncReport {
            delivered,
            pending: retained.len(),
        };
        self.queue.save(&retained)?;

        tracing::info!(
            "Sync pass finished: {} delivered, {} pending",
            report.delivered,
            report.pending
        );
        Ok(SyncOutcome::Finished(report))
    }
}
