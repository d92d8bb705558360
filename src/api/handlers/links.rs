//! Handler for the active-links listing.

use axum::{Json, extract::State};

use crate::api::dto::links::ActiveLinkInfo;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all currently live links.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// Expired records are filtered out (even before the sweep has removed
/// them) but not deleted here; listing is read-only.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActiveLinkInfo>>, AppError> {
    let links = state.link_service.list_active().await?;

    let items = links
        .into_iter()
        .map(|link| {
            let short_link = state.link_service.short_url(&link.code);
            ActiveLinkInfo::from_link(link, short_link)
        })
        .collect();

    Ok(Json(items))
}
