//! TangoMango HTTP server.
//!
//! Boots the in-memory store from the seed dataset and serves the event
//! catalog API. State lives for the process lifetime; a restart resets to
//! the seed.

mod config;

use anyhow::Context;
use axum::routing::get;
use config::Config;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tangomango_core::environment::SystemClock;
use tangomango_core::store::Database;
use tangomango_web::{build_router, metrics, AppState};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    let _ = dotenvy::dotenv();

    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting TangoMango HTTP server");

    // Initialize Prometheus metrics exporter
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install Prometheus recorder")?;
    metrics::register_api_metrics();

    // Build the seeded store and application state
    let db = Arc::new(Database::seeded());
    info!(
        areas = db.areas.len(),
        events = db.events.len(),
        "Store seeded"
    );
    let state = AppState::new(db, Arc::new(SystemClock));

    // Build router, exposing the Prometheus scrape endpoint alongside the API
    let app = build_router(state).route(
        "/metrics",
        get(move || {
            let handle = prometheus_handle.clone();
            async move { handle.render() }
        }),
    );

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

/// Graceful shutdown signal handler.
///
/// Waits for Ctrl+C (SIGINT) or, on Unix, SIGTERM.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
