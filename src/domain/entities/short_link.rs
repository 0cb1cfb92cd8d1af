//! Short link entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A persisted short link.
///
/// Created exactly once at issuance time; the only field that ever changes
/// afterwards is `click_count`, which the store increments atomically on each
/// successful resolution.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub click_count: i64,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            code,
            original_url,
            created_at,
            click_count,
        }
    }
}

/// Input data for creating a new short link.
///
/// `created_at` and the zero `click_count` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub original_url: String,
}
