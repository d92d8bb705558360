//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves statistics for a specific short link.
///
/// # Endpoint
///
/// `GET /shorturls/{code}`
///
/// # Response
///
/// The click counter, link metadata, and the full click log. Click entries
/// with no referrer read as "Direct"; the location always reads "Unknown".
///
/// # Errors
///
/// Returns 404 for an unknown code and 410 for an expired one (reading the
/// stats of an expired link removes it, same as the redirect path).
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code).await?;
    Ok(Json(StatsResponse::from(stats)))
}
