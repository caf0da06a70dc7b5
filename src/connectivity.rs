use tokio::sync::watch;

/// Process-local online/offline signal. The embedding application (or the
/// sync agent's reachability probe) drives it; the queue and sync paths only
/// read it.
pub struct ConnectivityMonitor {
    tx: watch::Sender<bool>,
}

impl ConnectivityMonitor {
    pub fn new(online: bool) -> Self {
        let (tx, _) = watch::channel(online);
        ConnectivityMonitor { tx }
    }

    pub fn is_online(&self) -> bool {
        *self.tx.borrow()
    }

    pub fn set_online(&self, online: bool) {
        let was = self.tx.send_replace(online);
        if was != online {
            tracing::info!("Connectivity changed: {}", if online { "online" } else { "offline" });
        }
    }

    /// Change notifications: receivers wake on every online/offline flip.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}
