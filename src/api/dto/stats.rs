//! DTOs for the link statistics endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::repositories::DetailedStats;

/// Detailed statistics for a specific short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub clicks: u64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expiry: DateTime<Utc>,
    pub click_data: Vec<ClickInfo>,
}

impl From<DetailedStats> for StatsResponse {
    fn from(stats: DetailedStats) -> Self {
        Self {
            clicks: stats.link.clicks,
            original_url: stats.link.original_url,
            created_at: stats.link.created_at,
            expiry: stats.link.expires_at,
            click_data: stats.items.into_iter().map(ClickInfo::from).collect(),
        }
    }
}
