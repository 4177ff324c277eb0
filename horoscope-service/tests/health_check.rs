mod common;

use common::TestApp;
use horoscope_service::services::{init_metrics, MemoryReadingStore, ReadingStore};
use reqwest::Client;
use std::sync::Arc;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn(None).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    assert!(response.headers().contains_key("x-request-id"));

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "horoscope-service");
}

#[tokio::test]
async fn diagnostics_endpoint_works_without_database() {
    let app = TestApp::spawn(None).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/test", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["connection_status"], "Not Connected");
}

#[tokio::test]
async fn generate_then_read_over_http() {
    let store: Arc<dyn ReadingStore> = Arc::new(MemoryReadingStore::new());
    let app = TestApp::spawn(Some(store)).await;
    let client = Client::new();

    let generated: serde_json::Value = client
        .post(&format!("{}/api/horoscope/generate", app.address))
        .json(&serde_json::json!({ "sign": "scorpio", "scope_date": "2025-10-31" }))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let listed: serde_json::Value = client
        .get(&format!(
            "{}/api/horoscope?sign=scorpio&scope_date=2025-10-31",
            app.address
        ))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let results = listed["results"].as_array().expect("results array");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["id"], generated["id"]);
    assert_eq!(results[0]["headline"], generated["reading"]["headline"]);
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let app = TestApp::spawn(None).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/", app.address))
        .header("origin", "https://example.com")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}

#[tokio::test]
async fn metrics_endpoint_returns_prometheus_format() {
    init_metrics();
    let app = TestApp::spawn(None).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/metrics", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Invalid content-type");
    assert!(content_type.starts_with("text/plain"));
}
