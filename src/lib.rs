pub mod api;
pub mod config;
pub mod connectivity;
pub mod error;
pub mod models;
pub mod queue;
pub mod session;
pub mod state;
pub mod storage;
pub mod sync;

use std::sync::Arc;
use std::time::Duration;

use crate::api::ApiClient;
use crate::config::Config;
use crate::connectivity::ConnectivityMonitor;
use crate::error::ClientError;
use crate::queue::OfflineQueue;
use crate::session::SessionStore;
use crate::state::Client;
use crate::storage::{FileStore, KvStore};

/// Assemble a client over a file-backed store at the configured data
/// directory.
pub fn build_client(config: Config) -> Result<Client, ClientError> {
    let store: Arc<dyn KvStore> =
        Arc::new(FileStore::open(&config.data_dir).map_err(ClientError::Storage)?);
    build_client_with_store(config, store)
}

/// Assemble a client over an explicit key-value store. The connectivity
/// monitor starts online; the embedder (or the sync agent's probe) flips it.
pub fn build_client_with_store(
    config: Config,
    store: Arc<dyn KvStore>,
) -> Result<Client, ClientError> {
    let api = ApiClient::new(
        &config.base_url,
        Duration::from_secs(config.http_timeout_secs),
    )?;

    Ok(Client {
        api,
        sessions: SessionStore::new(store.clone()),
        queue: OfflineQueue::new(store),
        connectivity: Arc::new(ConnectivityMonitor::new(true)),
        config,
    })
}
