//! HTTP server initialization and runtime setup.
//!
//! Handles storage initialization, the Axum server lifecycle and storage
//! shutdown.

use crate::config::Config;
use crate::infrastructure::persistence::init_storage;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL pool and migrations, or in-memory)
/// - Axum HTTP server with graceful shutdown
///
/// Storage is closed exactly once after the server stops, whether it stopped
/// on a signal or on an error.
///
/// # Errors
///
/// Returns an error if:
/// - Storage initialization fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let storage = init_storage(&config.storage)
        .await
        .context("Failed to initialize storage")?;

    let state = AppState::new(storage.clone(), config.base_prefix.clone());
    let app = app_router(state);

    let served = serve(app, &config.listen_addr).await;

    match storage.close().await {
        Ok(()) => tracing::info!("Storage closed"),
        Err(e) => tracing::warn!("Failed to close storage: {}", e),
    }

    served
}

async fn serve(
    app: tower_http::normalize_path::NormalizePath<axum::Router>,
    listen_addr: &str,
) -> Result<()> {
    let addr: SocketAddr = listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{listen_addr}'"))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
