#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use axum::Router;
use chrono::Utc;
use tokio::sync::mpsc;

use neolink::application::events::EventBus;
use neolink::application::services::{IssueService, ResolveService};
use neolink::domain::click_event::ClickEvent;
use neolink::domain::entities::{NewShortLink, ShortLink};
use neolink::domain::repositories::LinkRepository;
use neolink::error::StoreError;
use neolink::state::AppState;

pub const TEST_BASE_URL: &str = "https://neo.link";

/// In-memory mapping store for handler tests.
///
/// Mirrors the store contract: unique codes, server-assigned timestamps,
/// atomic counter increments.
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<ShortLink>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn link_by_code(&self, code: &str) -> Option<ShortLink> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.code == code)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, StoreError> {
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|l| l.code == new_link.code) {
            return Err(StoreError::DuplicateCode {
                code: new_link.code,
            });
        }

        let link = ShortLink::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_link.code,
            new_link.original_url,
            Utc::now(),
            0,
        );
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, StoreError> {
        Ok(self.link_by_code(code))
    }

    async fn increment_click_count(&self, id: i64, delta: i64) -> Result<(), StoreError> {
        let mut links = self.links.lock().unwrap();

        if let Some(link) = links.iter_mut().find(|l| l.id == id) {
            link.click_count += delta;
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Store stub whose every operation fails, for transient-error paths.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn insert(&self, _new_link: NewShortLink) -> Result<ShortLink, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<ShortLink>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn increment_click_count(&self, _id: i64, _delta: i64) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Builds an [`AppState`] over the given repository, returning the receiving
/// end of the click queue for assertions.
pub fn create_test_state(
    repository: Arc<dyn LinkRepository>,
) -> (AppState, mpsc::Receiver<ClickEvent>) {
    create_test_state_with_prefix(repository, "")
}

/// Like [`create_test_state`], composing short URLs under a route prefix.
pub fn create_test_state_with_prefix(
    repository: Arc<dyn LinkRepository>,
    link_prefix: &str,
) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (click_tx, click_rx) = mpsc::channel(100);
    let events = Arc::new(EventBus::default());

    let issue_service = Arc::new(IssueService::new(
        repository.clone(),
        events.clone(),
        TEST_BASE_URL.to_string(),
        link_prefix.to_string(),
    ));
    let resolve_service = Arc::new(ResolveService::new(
        repository.clone(),
        events,
        click_tx.clone(),
    ));

    let state = AppState {
        issue_service,
        resolve_service,
        link_repository: repository,
        click_tx,
    };

    (state, click_rx)
}

/// Full application router over the given state.
pub fn test_router(state: AppState) -> Router {
    neolink::routes::router(state, "")
}

/// Full application router with a short-link route prefix.
pub fn test_router_with_prefix(state: AppState, link_prefix: &str) -> Router {
    neolink::routes::router(state, link_prefix)
}
