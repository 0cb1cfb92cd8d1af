//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::application::services::IssueRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/a/b",
///   "alias": "my-cool-link",        // optional
///   "website_url": ""               // honeypot, leave empty
/// }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// {
///   "code": "my-cool-link",
///   "original_url": "https://example.com/a/b",
///   "short_url": "https://neo.link/my-cool-link"
/// }
/// ```
///
/// # Errors
///
/// - `400` - invalid URL or alias
/// - `409` - alias already taken
/// - `503` - store failure; the client may retry
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    // A tripped honeypot must look like a success, so it bypasses validation.
    let honeypot_tripped = payload
        .website_url
        .as_deref()
        .is_some_and(|v| !v.trim().is_empty());

    if !honeypot_tripped {
        payload.validate()?;
    }

    let issued = state
        .issue_service
        .issue(IssueRequest {
            url: payload.url,
            alias: payload.alias,
            honeypot: payload.website_url,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: issued.link.code,
            original_url: issued.link.original_url,
            short_url: issued.short_url,
        }),
    ))
}
