//! Integration tests for the health endpoint.

use std::sync::Arc;

use http::StatusCode;

use crate::helpers::{FailingFolderStore, TestApp};

#[tokio::test]
async fn test_health_ok() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}

#[tokio::test]
async fn test_health_reports_unavailable_database() {
    let app = TestApp::with_store(Arc::new(FailingFolderStore));
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["error"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new().await;
    let response = app.request("GET", "/folders", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
