//! Short code resolution service.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::warn;

use crate::application::events::{EventBus, LinkEvent};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::ResolveError;
use crate::utils::url_sanitizer::sanitize_url;

/// Service for resolving short codes back to their destination URLs.
///
/// The stored URL is re-sanitized on every resolution as defense in depth: a
/// record inserted or corrupted out-of-band never becomes a redirect target.
/// Counter increments are queued fire-and-forget so a slow store cannot delay
/// the redirect.
pub struct ResolveService {
    repository: Arc<dyn LinkRepository>,
    events: Arc<EventBus>,
    click_tx: mpsc::Sender<ClickEvent>,
}

impl ResolveService {
    /// Creates a new resolution service.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        events: Arc<EventBus>,
        click_tx: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            repository,
            events,
            click_tx,
        }
    }

    /// Resolves a short code to the destination URL to navigate to.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::NotFound`] when the code has no record, or when the
    ///   stored URL fails sanitization (the two cases are deliberately not
    ///   distinguished)
    /// - [`ResolveError::Transient`] on store failures during lookup
    pub async fn resolve(&self, code: &str) -> Result<String, ResolveError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or(ResolveError::NotFound)?;

        let destination = match sanitize_url(&link.original_url) {
            Ok(url) => url,
            Err(e) => {
                warn!(code = %link.code, "stored URL failed sanitization: {e}");
                return Err(ResolveError::NotFound);
            }
        };

        // Queued before the redirect; a full queue drops the click rather
        // than delaying navigation.
        if self
            .click_tx
            .try_send(ClickEvent::new(link.id, link.code.clone()))
            .is_err()
        {
            warn!(code = %link.code, "click queue full, dropping click event");
        }

        self.events.emit(LinkEvent::Resolved { code: link.code });

        Ok(destination)
    }
}
