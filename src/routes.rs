//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`          - Short link redirect (public)
//! - `GET  /{prefix}/{code}` - Same redirect under the configured link prefix
//! - `GET  /health`          - Health check: DB, click queue (public)
//! - `POST /api/shorten`     - Link issuance
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Application routes without middleware.
///
/// When `link_prefix` is non-empty, issued short URLs carry it as a path
/// segment, so the redirect route is registered under the prefix as well.
pub fn router(state: AppState, link_prefix: &str) -> Router {
    let mut router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler));

    if !link_prefix.is_empty() {
        router = router.route(&format!("/{link_prefix}/{{code}}"), get(redirect_handler));
    }

    router.nest("/api", api::routes::routes()).with_state(state)
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, link_prefix: &str) -> NormalizePath<Router> {
    let router = router(state, link_prefix).layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
