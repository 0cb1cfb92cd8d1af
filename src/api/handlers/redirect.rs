//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code through [`crate::application::services::ResolveService`]:
///    store lookup, defensive re-sanitization, click event enqueue
/// 2. Return `307 Temporary Redirect` to the sanitized destination
///
/// The click counter update happens in the background; its outcome never
/// affects the redirect.
///
/// # Errors
///
/// - `404` - unknown code, or a stored URL that fails sanitization
/// - `503` - store failure during lookup; the client may retry
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let destination = state.resolve_service.resolve(&code).await?;

    Ok(Redirect::temporary(&destination))
}
