//! Structured-log analytics backend.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::info;

use super::service::{AnalyticsService, Consent};

/// Analytics backend that emits events as structured log lines under the
/// `analytics` target.
///
/// Starts disabled; [`AnalyticsService::configure`] enables it only when
/// consent is granted.
pub struct LogAnalytics {
    enabled: AtomicBool,
}

impl LogAnalytics {
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
        }
    }
}

impl Default for LogAnalytics {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalyticsService for LogAnalytics {
    fn configure(&self, consent: Consent) {
        self.enabled
            .store(consent == Consent::Granted, Ordering::Relaxed);
        info!(consent = %consent, "analytics configured");
    }

    fn track_event(&self, action: &str, category: &str, label: Option<&str>) {
        if !self.is_enabled() {
            return;
        }

        info!(target: "analytics", action, category, label, "event");
    }

    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disabled() {
        assert!(!LogAnalytics::new().is_enabled());
    }

    #[test]
    fn test_configure_granted_enables() {
        let analytics = LogAnalytics::new();
        analytics.configure(Consent::Granted);
        assert!(analytics.is_enabled());
    }

    #[test]
    fn test_configure_denied_disables() {
        let analytics = LogAnalytics::new();
        analytics.configure(Consent::Granted);
        analytics.configure(Consent::Denied);
        assert!(!analytics.is_enabled());
    }
}
