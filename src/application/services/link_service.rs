//! Link creation, redirect resolution, and listing.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::click_event::ClickEvent;
use crate::domain::clock::Clock;
use crate::domain::entities::{Click, Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CodeGenerator, validate_custom_code};
use crate::utils::url_validator::validate_url;

/// Retry cap for random code generation. Collisions in a 62^6 space are
/// vanishingly rare, so hitting this cap means the keyspace is effectively
/// saturated or the RNG is broken.
const MAX_GENERATION_ATTEMPTS: usize = 1000;

/// Service for creating, resolving, and listing shortened links.
///
/// Owns the shortcode allocator (validation of custom codes, bounded random
/// generation) and the lazy-expiry discipline on the redirect path. The
/// clock and the random source are injected so every time- and
/// randomness-dependent behavior is testable deterministically.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    codes: CodeGenerator,
    clock: Arc<dyn Clock>,
    base_url: String,
    default_validity_minutes: i64,
}

impl<R: LinkRepository> LinkService<R> {
    pub fn new(
        repository: Arc<R>,
        codes: CodeGenerator,
        clock: Arc<dyn Clock>,
        base_url: String,
        default_validity_minutes: i64,
    ) -> Self {
        Self {
            repository,
            codes,
            clock,
            base_url,
            default_validity_minutes,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `url` - the original URL; stored and later returned verbatim
    /// - `validity_minutes` - lifetime before expiry; defaults when omitted
    /// - `custom_code` - optional caller-supplied shortcode
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `url` is not absolute HTTP/HTTPS
    /// - [`AppError::InvalidValidity`] if `validity_minutes` is not positive
    /// - [`AppError::InvalidShortcodeFormat`] for a malformed custom code
    /// - [`AppError::ShortcodeCollision`] if the custom code is already live
    /// - [`AppError::AllocatorExhausted`] if random generation keeps colliding
    pub async fn create_short_url(
        &self,
        url: String,
        validity_minutes: Option<i64>,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        validate_url(&url)?;

        let validity = validity_minutes.unwrap_or(self.default_validity_minutes);
        if validity <= 0 {
            return Err(AppError::invalid_validity(validity));
        }
        let lifetime =
            Duration::try_minutes(validity).ok_or_else(|| AppError::invalid_validity(validity))?;

        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(lifetime)
            .ok_or_else(|| AppError::invalid_validity(validity))?;

        if let Some(code) = custom_code {
            validate_custom_code(&code)?;

            // Uniqueness is settled by the store's insert-if-absent: taken
            // by a live link means collision, no auto-suffixing.
            self.repository
                .create(NewLink {
                    code,
                    original_url: url,
                    created_at: now,
                    expires_at,
                })
                .await
        } else {
            self.create_with_generated_code(url, now, expires_at).await
        }
    }

    /// Resolves a shortcode for redirecting and records the click.
    ///
    /// Appends a click built from the request metadata and increments the
    /// counter, then returns the original URL for the caller to redirect to.
    ///
    /// A record observed past its expiry is removed on the spot (lazy
    /// expiry) and reported as [`AppError::Expired`]; an unknown code is
    /// [`AppError::NotFound`].
    pub async fn resolve_and_record(
        &self,
        code: &str,
        event: ClickEvent,
    ) -> Result<String, AppError> {
        let now = self.clock.now();

        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))?;

        if link.is_expired_at(now) {
            self.repository.remove_if_expired(code, now).await?;
            return Err(AppError::expired(code));
        }

        let click = Click {
            clicked_at: now,
            referer: event.referer,
            user_agent: event.user_agent,
            ip: event.ip,
            location: None,
        };

        match self.repository.record_click(code, click).await? {
            Some(_) => Ok(link.original_url),
            // The sweep beat us to the record between lookup and append;
            // only expired records are ever swept.
            None => Err(AppError::expired(code)),
        }
    }

    /// Lists all currently live links, ordered by creation time.
    pub async fn list_active(&self) -> Result<Vec<Link>, AppError> {
        self.repository.list_active(self.clock.now()).await
    }

    /// Constructs the externally addressable short link for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Generates a random code and inserts atomically, retrying on
    /// collision up to [`MAX_GENERATION_ATTEMPTS`].
    async fn create_with_generated_code(
        &self,
        url: String,
        now: chrono::DateTime<chrono::Utc>,
        expires_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<Link, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let code = self.codes.generate();

            match self
                .repository
                .create(NewLink {
                    code,
                    original_url: url.clone(),
                    created_at: now,
                    expires_at,
                })
                .await
            {
                Err(AppError::ShortcodeCollision { .. }) => continue,
                result => return result,
            }
        }

        Err(AppError::allocator_exhausted(MAX_GENERATION_ATTEMPTS))
    }
}
