//! Shared application state injected into handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{IssueService, ResolveService};
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

#[derive(Clone)]
pub struct AppState {
    pub issue_service: Arc<IssueService>,
    pub resolve_service: Arc<ResolveService>,
    pub link_repository: Arc<dyn LinkRepository>,
    pub click_tx: mpsc::Sender<ClickEvent>,
}
