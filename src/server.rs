//! HTTP server initialization and runtime setup.
//!
//! Wires the store, clock, and code generator into the services, spawns the
//! expiry sweeper, and runs the Axum server until shutdown.

use crate::application::services::{LinkService, StatsService};
use crate::config::Config;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::expiry_sweeper::run_expiry_sweeper;
use crate::infrastructure::memory::MemoryLinkStore;
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::CodeGenerator;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link store
/// - Background expiry sweeper
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if the listen address is invalid, the bind fails, or a
/// server runtime error occurs.
pub async fn run(config: Config) -> Result<()> {
    let store = Arc::new(MemoryLinkStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let link_service = Arc::new(LinkService::new(
        store.clone(),
        CodeGenerator::new(),
        clock.clone(),
        config.base_url.clone(),
        config.default_validity_minutes,
    ));
    let stats_service = Arc::new(StatsService::new(store.clone(), store.clone(), clock.clone()));

    tokio::spawn(run_expiry_sweeper(
        store,
        clock,
        Duration::from_secs(config.sweep_interval_seconds),
    ));
    tracing::info!(
        "Expiry sweeper started (every {}s)",
        config.sweep_interval_seconds
    );

    let state = AppState {
        link_service,
        stats_service,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
