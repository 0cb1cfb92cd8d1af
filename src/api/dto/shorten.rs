//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The destination URL (must be absolute HTTP/HTTPS; fully checked by
    /// the sanitizer, not here).
    #[validate(length(min = 1, max = 2048, message = "URL must be 1-2048 characters"))]
    pub url: String,

    /// Optional custom alias. Normalized (lowercased, stripped to
    /// `[a-z0-9-]`) before the availability check.
    #[validate(length(max = 64, message = "Alias is too long"))]
    pub alias: Option<String>,

    /// Honeypot field, hidden in the real form. Humans leave it empty; a
    /// populated value makes the request a silent no-op.
    pub website_url: Option<String>,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub code: String,
    pub original_url: String,
    pub short_url: String,
}
