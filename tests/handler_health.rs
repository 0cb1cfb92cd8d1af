mod common;

use std::sync::Arc;

use axum_test::TestServer;
use serde_json::Value;

use common::{FailingLinkRepository, InMemoryLinkRepository, create_test_state, test_router};

#[tokio::test]
async fn test_health_reports_healthy() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let (state, _click_rx) = create_test_state(repository);
    let server = TestServer::new(test_router(state)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["click_queue"]["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_health_degraded_when_database_unreachable() {
    let (state, _click_rx) = create_test_state(Arc::new(FailingLinkRepository));
    let server = TestServer::new(test_router(state)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
    assert_eq!(body["checks"]["click_queue"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_when_click_queue_closed() {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let (state, mut click_rx) = create_test_state(repository);

    // Simulates the worker having gone away.
    click_rx.close();
    drop(click_rx);

    let server = TestServer::new(test_router(state)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["click_queue"]["status"], "error");
}
