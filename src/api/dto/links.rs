//! DTOs for the active-links listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// A live link as listed by the API. The click log is omitted; only the
/// counter is exposed.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveLinkInfo {
    pub short_code: String,
    pub original_url: String,
    pub short_link: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub clicks: u64,
}

impl ActiveLinkInfo {
    pub fn from_link(link: Link, short_link: String) -> Self {
        Self {
            short_code: link.code,
            original_url: link.original_url,
            short_link,
            created_at: link.created_at,
            expiry: link.expires_at,
            clicks: link.clicks,
        }
    }
}
