//! Click record wire shape.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

/// A single click as rendered in the stats response.
///
/// Missing metadata is defaulted here, at presentation time: a click with
/// no referrer reads as "Direct" and the (never-resolved) location reads as
/// "Unknown". The store keeps the raw optional values.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub location: String,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.clicked_at,
            referrer: click.referer.unwrap_or_else(|| "Direct".to_string()),
            location: click.location.unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}
