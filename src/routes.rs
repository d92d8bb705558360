//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorturls`        - Create a short link
//! - `GET  /shorturls/{code}` - Statistics for a link
//! - `GET  /api/urls`         - List live links
//! - `GET  /health`           - Health check
//! - `GET  /{code}`           - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Path normalization** - trailing slash handling

use crate::api::handlers::{
    health_handler, list_links_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static segments win over the `/{code}` capture, so `/health` and
/// `/shorturls` are never mistaken for shortcodes.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = Router::new().route("/urls", get(list_links_handler));

    let router = Router::new()
        .route("/shorturls", post(shorten_handler))
        .route("/shorturls/{code}", get(stats_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
