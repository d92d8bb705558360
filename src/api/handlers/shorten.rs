//! Handler for short link creation.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::shorten::{CreateShortUrlRequest, CreateShortUrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 30,          // optional, minutes
///   "shortcode": "promo1"    // optional, 3-10 alphanumeric
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the addressable link and its expiry:
///
/// ```json
/// { "shortLink": "http://localhost:3000/promo1", "expiry": "2026-01-15T12:30:00Z" }
/// ```
///
/// # Errors
///
/// Returns 400 for an invalid URL, validity, or shortcode format, and 409
/// when the requested shortcode is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateShortUrlRequest>,
) -> Result<(StatusCode, Json<CreateShortUrlResponse>), AppError> {
    let link = state
        .link_service
        .create_short_url(payload.url, payload.validity, payload.shortcode)
        .await?;

    let short_link = state.link_service.short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(CreateShortUrlResponse {
            short_link,
            expiry: link.expires_at,
        }),
    ))
}
