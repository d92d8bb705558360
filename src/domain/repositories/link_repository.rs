//! Repository trait for short link data access.

use crate::domain::entities::{Click, Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for managing short links.
///
/// The store is keyed by shortcode; every method that judges liveness takes
/// the current instant explicitly so callers control the clock.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkStore`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link with an atomic insert-if-absent.
    ///
    /// A code held by an expired record counts as absent and is replaced.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortcodeCollision`] if the code is held by a
    /// live link at `new_link.created_at`.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its shortcode.
    ///
    /// Raw lookup: expired records are returned as-is. Liveness is the
    /// caller's decision (see [`Self::remove_if_expired`]).
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Appends a click to the link's log and returns the updated link.
    ///
    /// Returns `Ok(None)` if no record exists under `code` (it was removed
    /// between the caller's lookup and this append).
    async fn record_click(&self, code: &str, click: Click) -> Result<Option<Link>, AppError>;

    /// Removes the record under `code` if it is expired at `now`.
    ///
    /// Idempotent: re-checks expiry under the write lock, so a concurrent
    /// sweep or a second lazy-expiry read makes this a no-op. Returns `true`
    /// only when this call performed the removal.
    async fn remove_if_expired(&self, code: &str, now: DateTime<Utc>) -> Result<bool, AppError>;

    /// Lists all links live at `now`, ordered by creation time.
    ///
    /// Pure filtering: expired records encountered during the scan are left
    /// in place for the sweep.
    async fn list_active(&self, now: DateTime<Utc>) -> Result<Vec<Link>, AppError>;

    /// Removes every record expired at `now` in one pass and returns how
    /// many were removed.
    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError>;
}
