//! API integration tests
//!
//! Expect a running server seeded with at least one library that has seats.

use reqwest::Client;
use serde_json::Value;

const BASE_URL: &str = "http://localhost:8080/api/v1";

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_readiness_reflects_database_connectivity() {
    let client = Client::new();

    // The test server runs with a live database, so readiness must hold
    let response = client
        .get(format!("{}/ready", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
#[ignore]
async fn test_search_is_case_insensitive() {
    let client = Client::new();

    let lower: Vec<Value> = client
        .get(format!("{}/libraries?q=law", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let upper: Vec<Value> = client
        .get(format!("{}/libraries?q=LAW", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(lower, upper);
}

#[tokio::test]
#[ignore]
async fn test_search_empty_query_lists_all() {
    let client = Client::new();

    let all: Vec<Value> = client
        .get(format!("{}/libraries", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let filtered: Vec<Value> = client
        .get(format!("{}/libraries?q=law", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(filtered.len() <= all.len());
}

#[tokio::test]
#[ignore]
async fn test_seats_of_unknown_library_is_empty() {
    let client = Client::new();

    let response = client
        .get(format!("{}/libraries/999999/seats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let seats: Vec<Value> = response.json().await.expect("Failed to parse response");
    assert!(seats.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_grid_of_unknown_library_is_null_sentinel() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/libraries/999999/grid", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(body["width"].is_null());
    assert!(body["height"].is_null());
}

#[tokio::test]
#[ignore]
async fn test_occupancy_vacant_within_capacity() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/libraries/1/occupancy", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let capacity = body["capacity"].as_i64().expect("No capacity");
    let vacant = body["vacantSeats"].as_i64().expect("No vacantSeats");
    assert!(vacant >= 0);
    assert!(vacant <= capacity);
}

#[tokio::test]
#[ignore]
async fn test_history_has_24_chronological_entries() {
    let client = Client::new();

    let history: Vec<Value> = client
        .get(format!("{}/libraries/1/history", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(history.len(), 24);

    let times: Vec<&str> = history
        .iter()
        .map(|e| e["time"].as_str().expect("No time"))
        .collect();
    for pair in times.windows(2) {
        // RFC 3339 timestamps compare chronologically as strings
        assert!(pair[0] < pair[1]);
    }
}

#[tokio::test]
#[ignore]
async fn test_global_stats_shape() {
    let client = Client::new();

    let body: Value = client
        .get(format!("{}/stats", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(body["capacity"].is_number());
    assert!(body["vacantSeats"].is_number());
    assert_eq!(body["energyEfficiency"], 56);
}
