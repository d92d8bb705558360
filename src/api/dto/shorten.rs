//! DTOs for the link creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request to create a short link.
#[derive(Debug, Deserialize)]
pub struct CreateShortUrlRequest {
    /// The original URL to shorten (must be absolute HTTP/HTTPS).
    pub url: String,

    /// Lifetime in minutes before the link expires. Defaults server-side
    /// when omitted.
    #[serde(default)]
    pub validity: Option<i64>,

    /// Optional custom shortcode (3-10 alphanumeric characters).
    #[serde(default)]
    pub shortcode: Option<String>,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateShortUrlResponse {
    pub short_link: String,
    pub expiry: DateTime<Utc>,
}
