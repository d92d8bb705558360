//! In-memory link store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::{Click, Link, NewLink};
use crate::domain::repositories::{DetailedStats, LinkRepository, StatsRepository};
use crate::error::AppError;

/// A link as held by the store.
///
/// The click counter is not stored separately: it is always the length of
/// `clicks`, so the two can never drift apart.
#[derive(Debug, Clone)]
struct StoredLink {
    original_url: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    clicks: Vec<Click>,
}

impl StoredLink {
    fn is_live(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    fn to_link(&self, code: &str) -> Link {
        Link {
            code: code.to_string(),
            original_url: self.original_url.clone(),
            created_at: self.created_at,
            expires_at: self.expires_at,
            clicks: self.clicks.len() as u64,
        }
    }
}

/// The registry of shortcode → link record.
///
/// One coarse `RwLock` guards the whole map: key-set mutation is atomic
/// with respect to lookups, and no reader can observe a record mid-removal.
/// Lock hold times are bounded by the map operations themselves; nothing
/// awaits while holding the lock.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: RwLock<HashMap<String, StoredLink>>,
}

impl MemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held, expired ones included.
    pub async fn len(&self) -> usize {
        self.links.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.links.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkStore {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let NewLink {
            code,
            original_url,
            created_at,
            expires_at,
        } = new_link;

        let mut links = self.links.write().await;

        if let Some(existing) = links.get(&code) {
            if existing.is_live(created_at) {
                return Err(AppError::shortcode_collision(&code));
            }
        }

        let stored = StoredLink {
            original_url,
            created_at,
            expires_at,
            clicks: Vec::new(),
        };
        let link = stored.to_link(&code);

        // Replaces an expired occupant, if any.
        links.insert(code, stored);

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let links = self.links.read().await;
        Ok(links.get(code).map(|stored| stored.to_link(code)))
    }

    async fn record_click(&self, code: &str, click: Click) -> Result<Option<Link>, AppError> {
        let mut links = self.links.write().await;

        let Some(stored) = links.get_mut(code) else {
            return Ok(None);
        };

        stored.clicks.push(click);
        Ok(Some(stored.to_link(code)))
    }

    async fn remove_if_expired(&self, code: &str, now: DateTime<Utc>) -> Result<bool, AppError> {
        let mut links = self.links.write().await;

        match links.get(code) {
            Some(stored) if !stored.is_live(now) => {
                links.remove(code);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn list_active(&self, now: DateTime<Utc>) -> Result<Vec<Link>, AppError> {
        let links = self.links.read().await;

        let mut active: Vec<Link> = links
            .iter()
            .filter(|(_, stored)| stored.is_live(now))
            .map(|(code, stored)| stored.to_link(code))
            .collect();

        active.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.code.cmp(&b.code)));

        Ok(active)
    }

    async fn sweep_expired(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let mut links = self.links.write().await;

        let before = links.len();
        links.retain(|_, stored| stored.is_live(now));

        Ok(before - links.len())
    }
}

#[async_trait]
impl StatsRepository for MemoryLinkStore {
    async fn get_stats_by_code(&self, code: &str) -> Result<Option<DetailedStats>, AppError> {
        let links = self.links.read().await;

        Ok(links.get(code).map(|stored| DetailedStats {
            link: stored.to_link(code),
            items: stored.clicks.clone(),
        }))
    }
}
