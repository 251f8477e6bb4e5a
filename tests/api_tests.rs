//! API Integration Tests
//!
//! Tests for the HTTP surface around GraphQL: health, version, playground
//! and request IDs.

mod common;

use common::{assert_status, assert_success, parse_json, TestApp};
use fakedata_api::RouteConfig;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new().await;

    let response = app
        .client()
        .get(format!("{}/health", app.url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_success(&response);

    let body: Value = parse_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
    assert_eq!(body["counts"]["users"], 10);
    assert_eq!(body["counts"]["albums"], 100);
    assert_eq!(body["counts"]["photos"], 1000);
}

#[tokio::test]
async fn test_version_endpoint() {
    let app = TestApp::new().await;

    let response = app
        .client()
        .get(format!("{}/version", app.url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_success(&response);

    let body: Value = parse_json(response).await;
    assert!(body["version"].is_string());
    assert_eq!(body["name"], "fakedata-api");
}

#[tokio::test]
async fn test_playground() {
    let app = TestApp::new().await;

    let response = app
        .client()
        .get(format!("{}/graphql", app.url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_success(&response);
    let html = response.text().await.expect("Failed to read body");
    assert!(html.contains("Fake Data GraphQL Playground"));
}

#[tokio::test]
async fn test_playground_disabled() {
    let app = TestApp::with_routes(RouteConfig::new().with_playground(false)).await;

    let response = app
        .client()
        .get(format!("{}/graphql", app.url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_status(&response, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_request_id_header() {
    let app = TestApp::new().await;

    let response = app
        .client()
        .get(format!("{}/health", app.url()))
        .header("x-request-id", "integration-42")
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.headers()["x-request-id"], "integration-42");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new().await;

    let response = app
        .client()
        .get(format!("{}/nope", app.url()))
        .send()
        .await
        .expect("Failed to send request");

    assert_status(&response, StatusCode::NOT_FOUND);
}
