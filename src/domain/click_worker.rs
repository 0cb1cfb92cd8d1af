//! Background worker applying click counter increments.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tokio_retry::Retry;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;

/// Maximum increment attempts per event before it is dropped.
const MAX_ATTEMPTS: usize = 3;

/// Consumes click events and applies counter increments to the store.
///
/// Each event becomes one atomic `click_count + 1` at the store, retried with
/// jittered exponential backoff. An event whose retries are exhausted is
/// logged and dropped; lost clicks are not correctness-critical and must
/// never surface to the redirect path.
///
/// The worker exits when all senders are dropped.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn LinkRepository>,
) {
    while let Some(event) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(50)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(MAX_ATTEMPTS - 1);

        let result = Retry::spawn(strategy, || {
            repository.increment_click_count(event.link_id, 1)
        })
        .await;

        match result {
            Ok(()) => debug!(code = %event.code, "click recorded"),
            Err(e) => warn!(code = %event.code, "failed to record click: {e}"),
        }
    }

    debug!("click worker shutting down, channel closed");
}
