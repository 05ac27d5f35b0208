//! Newswire - news aggregation API bootstrap
//!
//! # Startup Sequence
//! 1. Load configuration from environment variables
//! 2. Install the tracing subscriber
//! 3. Open the PostgreSQL connection pool
//! 4. Create the shared application state (cache + pool)
//! 5. Start the background TTL cleanup task
//! 6. Serve HTTP on the configured port
//! 7. Handle graceful shutdown on SIGINT/SIGTERM

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use newswire::api::create_router;
use newswire::{db, logging, spawn_cleanup_task, AppState, Config, MemoryCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;

    logging::init(&config.logging);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.server.port,
        "starting newswire API"
    );

    let pool = db::connect(&config.database)
        .await
        .context("failed to connect to PostgreSQL")?;
    info!(database = %config.database.name, "connected to PostgreSQL");

    let state = AppState::new(MemoryCache::new(), pool);

    let cleanup_handle = spawn_cleanup_task(state.cache.clone(), config.cache.cleanup_interval);

    let app = create_router(state, &config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("server listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(
            cleanup_handle,
            config.server.shutdown_timeout,
        ))
        .await
        .context("HTTP server error")?;

    info!("newswire API stopped");
    Ok(())
}

/// Waits for SIGINT or SIGTERM, then begins graceful shutdown.
///
/// Aborts the cleanup task and gives in-flight connections the configured
/// drain window before forcing the process down.
async fn shutdown_signal(cleanup_handle: JoinHandle<()>, drain_window: Duration) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, initiating shutdown"),
        _ = terminate => info!("received SIGTERM, initiating shutdown"),
    }

    cleanup_handle.abort();

    tokio::spawn(async move {
        tokio::time::sleep(drain_window).await;
        warn!("graceful shutdown window elapsed, forcing exit");
        std::process::exit(1);
    });
}
