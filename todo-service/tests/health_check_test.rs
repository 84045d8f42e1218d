//! Health check integration tests for todo-service.

mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "todo-service-test");

    let timestamp = body["timestamp"].as_str().expect("Missing timestamp");
    chrono::DateTime::parse_from_rfc3339(timestamp).expect("Timestamp is not valid RFC 3339");

    app.cleanup().await;
}

#[tokio::test]
async fn health_check_assigns_request_id() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.headers().contains_key("x-request-id"));

    app.cleanup().await;
}
