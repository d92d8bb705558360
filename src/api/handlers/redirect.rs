//! Handler for short link redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its original URL and records the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Capture client metadata (peer IP, `User-Agent`, `Referer`)
/// 2. Resolve the code; an expired record is removed on the spot
/// 3. Append the click to the link's log
/// 4. Return `302 Found` with the original URL in `Location`
///
/// # Errors
///
/// Returns 404 for an unknown code and 410 for an expired one.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Response, AppError> {
    let event = ClickEvent::new(
        Some(addr.ip().to_string()),
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    let target = state.link_service.resolve_and_record(&code, event).await?;

    let location = HeaderValue::from_str(&target)
        .map_err(|_| AppError::internal(format!("stored URL is not a valid header value: {target}")))?;

    let mut response = StatusCode::FOUND.into_response();
    response.headers_mut().insert(header::LOCATION, location);
    Ok(response)
}
