//! Repository trait for click statistics.

use crate::domain::entities::{Click, Link};
use crate::error::AppError;
use async_trait::async_trait;

/// Detailed statistics with individual click records.
///
/// `link.clicks` always equals `items.len()`; both come from the same
/// locked read of the store.
#[derive(Debug, Clone)]
pub struct DetailedStats {
    pub link: Link,
    pub items: Vec<Click>,
}

/// Repository interface for reading a link's click log.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkStore`] - in-memory implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StatsRepository: Send + Sync {
    /// Retrieves the link and its full click log.
    ///
    /// Raw lookup like [`crate::domain::repositories::LinkRepository::find_by_code`]:
    /// expired records are returned as-is and liveness is judged by the caller.
    async fn get_stats_by_code(&self, code: &str) -> Result<Option<DetailedStats>, AppError>;
}
