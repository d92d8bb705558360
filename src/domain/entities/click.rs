//! Click record captured on each successful redirect.

use chrono::{DateTime, Utc};

/// A single recorded redirect.
///
/// All client metadata is optional; missing headers are stored as `None`
/// and defaulted at presentation time ("Direct" for the referrer, "Unknown"
/// for the location), not at write time. Geolocation is never resolved, so
/// `location` stays empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    pub referer: Option<String>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
    pub location: Option<String>,
}
