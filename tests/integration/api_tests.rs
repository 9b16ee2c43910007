//! API integration tests
//!
//! Expect a running server backed by the `crowd.sql` fixture data.

use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:3000";

async fn get_json(client: &Client, path: &str) -> (u16, Value) {
    let response = client
        .get(format!("{}{}", BASE_URL, path))
        .send()
        .await
        .expect("Failed to send request");

    let status = response.status().as_u16();
    let body: Value = response.json().await.expect("Failed to parse response");
    (status, body)
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let (status, body) = get_json(&Client::new(), "/health").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_check() {
    let (status, body) = get_json(&Client::new(), "/ready").await;

    assert_eq!(status, 200);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_list_destinations() {
    let (status, body) = get_json(&Client::new(), "/destinations").await;

    assert_eq!(status, 200);
    let destinations = body.as_array().expect("Expected an array");
    assert!(destinations.iter().all(|d| d["raw_count"].is_number()));
    assert!(destinations.iter().all(|d| d["type"].is_string()));
}

#[tokio::test]
#[ignore]
async fn test_list_destinations_is_stable() {
    let client = Client::new();

    let (_, first) = get_json(&client, "/destinations").await;
    let (_, second) = get_json(&client, "/destinations").await;

    assert_eq!(first, second);
}

#[tokio::test]
#[ignore]
async fn test_destination_metrics() {
    let (status, body) = get_json(&Client::new(), "/destinations/1/metrics?hours=24").await;

    assert_eq!(status, 200);
    let points = body.as_array().expect("Expected an array");
    let timestamps: Vec<&str> = points.iter().filter_map(|p| p["ts"].as_str()).collect();
    let mut sorted = timestamps.clone();
    sorted.sort();
    assert_eq!(timestamps, sorted);
}

#[tokio::test]
#[ignore]
async fn test_destination_metrics_not_found() {
    let (status, body) = get_json(&Client::new(), "/destinations/999999/metrics").await;

    assert_eq!(status, 404);
    assert_eq!(body["error"], "Destination not found or no capacity set");
}

#[tokio::test]
#[ignore]
async fn test_destination_metrics_invalid_id() {
    let (status, body) = get_json(&Client::new(), "/destinations/abc/metrics").await;

    assert_eq!(status, 400);
    assert_eq!(body["error"], "Invalid destination id");
}
