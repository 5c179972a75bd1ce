//! Filedesk Server Library
//!
//! A session-gated file manager over one storage directory, with PDF text
//! extraction.

pub mod core;
pub mod extract;
pub mod files;
pub mod pages;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use crate::core::{router, AppState, Credentials, Error, ServerConfig};

/// Install the global tracing subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "filedesk_server=debug,tower_http=info,info".into());

    // Already set (e.g. by a test harness), ignore
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    info!("=== Filedesk ===");

    config.ensure_dirs().await?;
    info!("Storage directory: {:?}", config.storage_dir);

    let addr = config.bind_addr;
    let app = router(AppState::new(config));

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
