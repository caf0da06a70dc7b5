use std::sync::Arc;

use tokio::signal;
use tracing_subscriber::EnvFilter;

use rollcall::config::Config;
use rollcall::state::SharedClient;
use rollcall::sync::SyncOutcome;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = Config::from_env().expect("Failed to load configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting rollcall sync agent");

    let interval = std::time::Duration::from_secs(config.sync_interval_secs);
    let client: SharedClient = Arc::new(rollcall::build_client(config)?);

    // Restore a stored session, or establish one with the configured PIN.
    let session = match client.sessions.load() {
        Some(session) => {
            tracing::info!("Restored session for {}", session.name);
            session
        }
        None => {
            let pin = client
                .config
                .pin
                .clone()
                .ok_or("No stored session and ROLLCALL_PIN is not set")?;
            let session = client.api.login(&pin).await?;
            client.sessions.save(&session)?;
            tracing::info!("Logged in as {} ({})", session.name, session.role);
            session
        }
    };

    let engine = client.sync_engine(&session);

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        client.connectivity.set_online(client.api.probe().await);

        match engine.sync().await {
            Ok(SyncOutcome::Finished(report)) => {
                if report.delivered > 0 || report.pending > 0 {
                    tracing::info!(
                        "Sync: {} delivered, {} pending",
                        report.delivered,
                        report.pending
                    );
                }
            }
            Ok(SyncOutcome::Offline) => tracing::debug!("Offline, sync pass skipped"),
            Ok(SyncOutcome::InFlight) => {}
            Err(e) => tracing::error!("Sync pass failed: {e}"),
        }

        tokio::select! {
            _ = tokio::time::sleep(interval) => {}
            _ = &mut shutdown => break,
        }
    }

    tracing::info!("Shutdown signal received, stopping sync agent");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
