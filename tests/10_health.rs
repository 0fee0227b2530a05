mod common;

use axum::http::StatusCode;
use common::TestApp;

#[tokio::test]
async fn healthy_store_reports_healthy() {
    let app = TestApp::new();
    let res = app.get("/_health").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.text, "Healthy");
}

#[tokio::test]
async fn unreachable_store_reports_unhealthy() {
    let app = TestApp::new();
    app.store.set_healthy(false);
    let res = app.get("/_health").await;

    assert_eq!(res.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(res.text, "Unhealthy");
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = TestApp::new();
    assert_eq!(app.get("/api/caddies").await.status, StatusCode::NOT_FOUND);
}
