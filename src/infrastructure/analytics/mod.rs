//! Consent-gated analytics client.
//!
//! The client is an explicit dependency passed to whoever needs it, with a
//! single `configure(consent)` call made during startup; nothing analytics-
//! related happens as a module-load side effect.

mod log;
mod null;
mod service;

pub use log::LogAnalytics;
pub use null::NullAnalytics;
pub use service::{AnalyticsService, Consent};

#[cfg(test)]
pub use service::MockAnalyticsService;
