//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Represents the mapping between a shortcode and its original URL. The
/// `clicks` field is a snapshot of the stored click-log length at the time
/// the entity was read from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub clicks: u64,
}

impl Link {
    /// Returns true if the link has passed its expiry time at `now`.
    ///
    /// A link is live strictly before its expiry instant; at the instant
    /// itself it is already expired.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
