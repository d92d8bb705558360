//! Click statistics retrieval.

use std::sync::Arc;

use crate::domain::clock::Clock;
use crate::domain::repositories::{DetailedStats, LinkRepository, StatsRepository};
use crate::error::AppError;

/// Service for reading a link's click history.
///
/// Applies the same existence and expiry checks as the redirect path —
/// including the lazy removal of an expired record on first observation —
/// but never mutates a live record.
pub struct StatsService<S: StatsRepository, L: LinkRepository> {
    stats_repository: Arc<S>,
    link_repository: Arc<L>,
    clock: Arc<dyn Clock>,
}

impl<S: StatsRepository, L: LinkRepository> StatsService<S, L> {
    pub fn new(stats_repository: Arc<S>, link_repository: Arc<L>, clock: Arc<dyn Clock>) -> Self {
        Self {
            stats_repository,
            link_repository,
            clock,
        }
    }

    /// Retrieves the link and its full click log.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for an unknown code and
    /// [`AppError::Expired`] for a record past its expiry (which is removed
    /// on the spot).
    pub async fn get_stats(&self, code: &str) -> Result<DetailedStats, AppError> {
        let now = self.clock.now();

        let stats = self
            .stats_repository
            .get_stats_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))?;

        if stats.link.is_expired_at(now) {
            self.link_repository.remove_if_expired(code, now).await?;
            return Err(AppError::expired(code));
        }

        Ok(stats)
    }
}
