//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, StatsService};
use crate::infrastructure::memory::MemoryLinkStore;

/// Services shared across handlers. Cloning is cheap (all `Arc`s).
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<MemoryLinkStore>>,
    pub stats_service: Arc<StatsService<MemoryLinkStore, MemoryLinkStore>>,
}
