//! API route definitions.

use axum::Router;
use axum::routing::post;

use crate::api::handlers::shorten_handler;
use crate::state::AppState;

/// Routes nested under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
