//! Click event model for asynchronous counter increments.

/// An in-memory representation of a successful resolution, queued for the
/// background increment worker.
///
/// Passing events through a channel decouples the HTTP redirect from the
/// counter write: a slow or failing store never delays navigation, and a full
/// queue drops the event rather than blocking.
///
/// # Usage Flow
///
/// 1. Created by [`crate::application::services::ResolveService`] after a
///    successful lookup and re-sanitization
/// 2. Sent to a bounded channel (non-blocking)
/// 3. Consumed by [`crate::domain::click_worker::run_click_worker`], which
///    issues the atomic increment with bounded retry
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub code: String,
}

impl ClickEvent {
    /// Creates a new click event for a resolved link.
    pub fn new(link_id: i64, code: impl Into<String>) -> Self {
        Self {
            link_id,
            code: code.into(),
        }
    }
}
