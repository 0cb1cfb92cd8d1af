//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, worker spawning, analytics wiring, and the
//! Axum server lifecycle.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::mpsc;
use tracing::info;

use crate::application::events::{EventBus, EventSubscription, LinkEvent};
use crate::application::services::{IssueService, ResolveService};
use crate::config::Config;
use crate::domain::click_worker::run_click_worker;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::analytics::{AnalyticsService, LogAnalytics};
use crate::infrastructure::persistence::PgLinkRepository;
use crate::routes::app_router;
use crate::state::AppState;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Migrations
/// - Analytics client (consent applied once, here)
/// - Background click worker and analytics listener
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;
    info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let repository: Arc<dyn LinkRepository> = Arc::new(PgLinkRepository::new(Arc::new(pool)));

    let events = Arc::new(EventBus::default());

    let analytics: Arc<dyn AnalyticsService> = Arc::new(LogAnalytics::new());
    analytics.configure(config.analytics_consent);
    tokio::spawn(run_analytics_listener(events.subscribe(), analytics));

    let (click_tx, click_rx) = mpsc::channel(config.click_queue_capacity);
    tokio::spawn(run_click_worker(click_rx, repository.clone()));
    info!("Click worker started");

    let issue_service = Arc::new(IssueService::new(
        repository.clone(),
        events.clone(),
        config.base_url.clone(),
        config.short_link_prefix.clone(),
    ));
    let resolve_service = Arc::new(ResolveService::new(
        repository.clone(),
        events.clone(),
        click_tx.clone(),
    ));

    let state = AppState {
        issue_service,
        resolve_service,
        link_repository: repository,
        click_tx,
    };

    let app = app_router(state, &config.short_link_prefix);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

/// Forwards link lifecycle events to the analytics client.
///
/// The subscription ends with the server; the task exits once the bus is gone.
async fn run_analytics_listener(
    mut subscription: EventSubscription,
    analytics: Arc<dyn AnalyticsService>,
) {
    while let Some(event) = subscription.recv().await {
        match event {
            LinkEvent::Created { code, .. } => {
                analytics.track_event("link_shortened", "engagement", Some(&code));
            }
            LinkEvent::Resolved { code } => {
                analytics.track_event("link_redirect", "engagement", Some(&code));
            }
        }
    }
}
