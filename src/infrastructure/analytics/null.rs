//! No-op analytics backend.

use super::service::{AnalyticsService, Consent};

/// Analytics backend that discards everything.
///
/// Used in tests and deployments with analytics turned off entirely.
pub struct NullAnalytics;

impl NullAnalytics {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullAnalytics {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsService for NullAnalytics {
    fn configure(&self, _consent: Consent) {}

    fn track_event(&self, _action: &str, _category: &str, _label: Option<&str>) {}

    fn is_enabled(&self) -> bool {
        false
    }
}
