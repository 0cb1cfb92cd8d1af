//! Short code issuance service.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::application::events::{EventBus, LinkEvent};
use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{IssueError, StoreError};
use crate::utils::alias::{is_valid_alias_length, normalize_alias};
use crate::utils::code_generator::generate_code;
use crate::utils::url_sanitizer::sanitize_url;

/// Attempts to find an unused random code before failing closed.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Input for a single issuance.
#[derive(Debug, Clone)]
pub struct IssueRequest {
    /// Destination URL to shorten.
    pub url: String,
    /// Optional user-chosen alias, normalized before use.
    pub alias: Option<String>,
    /// Hidden bot-trap field. A populated value turns the call into a no-op
    /// that still looks successful to the caller.
    pub honeypot: Option<String>,
}

/// A successfully issued link together with its composed short URL.
#[derive(Debug, Clone)]
pub struct IssuedLink {
    pub link: ShortLink,
    pub short_url: String,
}

/// Service for issuing short links.
///
/// Sanitizes the destination URL, resolves the short code (normalized alias
/// with availability check, or random code with bounded collision retry), and
/// persists exactly one record per successful call.
pub struct IssueService {
    repository: Arc<dyn LinkRepository>,
    events: Arc<EventBus>,
    base_url: String,
    link_prefix: String,
}

impl IssueService {
    /// Creates a new issuance service.
    ///
    /// `base_url` is the application origin; `link_prefix` is the optional
    /// route prefix short URLs are composed under (may be empty).
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        events: Arc<EventBus>,
        base_url: String,
        link_prefix: String,
    ) -> Self {
        Self {
            repository,
            events,
            base_url,
            link_prefix,
        }
    }

    /// Issues a short link for a destination URL.
    ///
    /// # Errors
    ///
    /// - [`IssueError::InvalidUrl`] when the destination fails sanitization
    /// - [`IssueError::InvalidAlias`] when the normalized alias is outside 2-20 characters
    /// - [`IssueError::AliasTaken`] when the alias exists, whether detected by
    ///   the pre-write check or by the unique constraint at insert time
    /// - [`IssueError::CodeSpaceExhausted`] when random generation keeps colliding
    /// - [`IssueError::Store`] on other store failures
    pub async fn issue(&self, request: IssueRequest) -> Result<IssuedLink, IssueError> {
        if let Some(trap) = &request.honeypot
            && !trap.trim().is_empty()
        {
            return Ok(self.decoy_success(&request));
        }

        let original_url = sanitize_url(&request.url)?;

        let code = match request.alias.as_deref().filter(|a| !a.trim().is_empty()) {
            Some(alias) => self.claim_alias(alias).await?,
            None => self.generate_unused_code().await?,
        };

        let link = match self
            .repository
            .insert(NewShortLink {
                code,
                original_url,
            })
            .await
        {
            Ok(link) => link,
            // Lost the race between the availability check and the insert.
            Err(StoreError::DuplicateCode { code }) => {
                return Err(IssueError::AliasTaken { alias: code });
            }
            Err(e) => return Err(e.into()),
        };

        let short_url = self.short_url(&link.code);
        self.events.emit(LinkEvent::Created {
            code: link.code.clone(),
            short_url: short_url.clone(),
        });

        Ok(IssuedLink { link, short_url })
    }

    /// Composes the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.link_prefix.is_empty() {
            format!("{base}/{code}")
        } else {
            format!("{base}/{}/{code}", self.link_prefix)
        }
    }

    /// Builds a plausible response for a tripped honeypot without touching
    /// the store. Bots cannot distinguish it from a real success.
    fn decoy_success(&self, request: &IssueRequest) -> IssuedLink {
        debug!("honeypot field populated, skipping write");

        // A real success always echoes the sanitized URL; an unsanitizable
        // one falls back to the trimmed input rather than failing the decoy.
        let echoed_url =
            sanitize_url(&request.url).unwrap_or_else(|_| request.url.trim().to_string());

        let code = generate_code();
        let short_url = self.short_url(&code);
        let link = ShortLink::new(0, code, echoed_url, Utc::now(), 0);

        IssuedLink { link, short_url }
    }

    /// Normalizes an alias, checks its length bound, and verifies availability.
    async fn claim_alias(&self, alias: &str) -> Result<String, IssueError> {
        let normalized = normalize_alias(alias);

        if !is_valid_alias_length(&normalized) {
            return Err(IssueError::InvalidAlias { normalized });
        }

        if self.repository.find_by_code(&normalized).await?.is_some() {
            return Err(IssueError::AliasTaken { alias: normalized });
        }

        Ok(normalized)
    }

    /// Generates a random code that is not yet present in the store.
    ///
    /// Retries a bounded number of times and fails closed when exhausted.
    async fn generate_unused_code(&self) -> Result<String, IssueError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code();

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        Err(IssueError::CodeSpaceExhausted)
    }
}
