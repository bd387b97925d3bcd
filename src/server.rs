//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client, the share service and the Axum server, then
//! serves until Ctrl-C or SIGTERM.

use crate::application::services::ShareService;
use crate::config::Config;
use crate::infrastructure::playground::PlaygroundClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::net::TcpListener;

/// `User-Agent` sent to the upstream share service.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Builds the application state from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub fn build_state(config: &Config) -> Result<AppState> {
    let http = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")?;

    let upstream = Arc::new(PlaygroundClient::new(http, config.share_url.clone()));
    let share_service = ShareService::new(upstream, config.base_url.clone(), config.max_code_bytes);

    Ok(AppState::new(Arc::new(share_service)))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    let app = app_router(state);

    let addr = config.listen_addr()?;
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        log_level = %config.log_level,
        "Playground proxy starting"
    );
    tracing::info!(
        url = %format!("http://localhost:{}/?code={{code}}", local_addr.port()),
        "Usage"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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

    tracing::info!("Shutdown signal received");
}
