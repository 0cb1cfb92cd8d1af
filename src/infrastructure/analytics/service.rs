//! Analytics service trait and consent state.

use std::fmt;
use std::str::FromStr;

/// User consent for analytics collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Granted,
    Denied,
}

impl fmt::Display for Consent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

impl FromStr for Consent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "granted" => Ok(Self::Granted),
            "denied" => Ok(Self::Denied),
            other => Err(format!("consent must be 'granted' or 'denied', got '{other}'")),
        }
    }
}

/// Trait for event tracking backends.
///
/// Implementations must be cheap to call on the hot path and must never fail
/// a request: tracking is strictly best-effort.
///
/// # Implementations
///
/// - [`crate::infrastructure::analytics::LogAnalytics`] - Structured-log backend
/// - [`crate::infrastructure::analytics::NullAnalytics`] - No-op implementation
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsService: Send + Sync {
    /// Applies the user's consent decision.
    ///
    /// Called exactly once during startup. While consent is denied (the
    /// initial state), every [`track_event`] call is a no-op.
    ///
    /// [`track_event`]: AnalyticsService::track_event
    fn configure(&self, consent: Consent);

    /// Records a single event.
    ///
    /// Silently does nothing when consent has not been granted.
    fn track_event<'a>(&self, action: &str, category: &str, label: Option<&'a str>);

    /// Returns whether tracking is currently active.
    fn is_enabled(&self) -> bool;
}
