//! Repository trait for the short link mapping store.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::StoreError;
use async_trait::async_trait;

/// The external mapping store, treated as an opaque collaborator.
///
/// All store failures are wrapped in [`StoreError`] at this boundary; no raw
/// driver error crosses into the services.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link record with a server-assigned timestamp and
    /// a zero click counter.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateCode`] when the code is already taken
    /// (the store's unique constraint closes the check-then-write race) and
    /// [`StoreError::Database`] on other store failures.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, StoreError>;

    /// Finds a link by its short code via an equality lookup.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError>;

    /// Atomically increments the click counter of a record.
    ///
    /// `delta` is always positive; the counter never decreases.
    async fn increment_click_count(&self, id: i64, delta: i64) -> Result<(), StoreError>;

    /// Checks whether the store is reachable.
    ///
    /// Used by the health endpoint.
    async fn health_check(&self) -> bool;
}
