//! Integration tests for the fundboard web API.
//!
//! These tests require the `web` feature (enabled by default):
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use fundboard::app::Board;
use fundboard::config::Config;
use fundboard::web::{create_router, AppState};

mod fixtures;
use fixtures::sample_collection;

/// Creates a router over the sample campaigns with default config.
fn create_test_app() -> axum::Router {
    let state = AppState::new(Board::new(sample_collection()), Config::default());
    create_router(state)
}

/// Helper to make a GET request and return status and raw body.
async fn get(app: &axum::Router, uri: &str) -> (StatusCode, String, Option<String>) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8_lossy(&body).into_owned(), content_type)
}

/// Helper to make a GET request and get the response body as JSON.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let (status, body, _) = get(app, uri).await;
    let json: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    (status, json)
}

fn names(json: &Value) -> Vec<&str> {
    json["campaigns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

// ============================================================================
// Campaign Endpoint Tests
// ============================================================================

#[tokio::test]
async fn test_list_all_campaigns() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/campaigns").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["view"], "All games");
    assert_eq!(json["total"], 3);
    assert_eq!(
        names(&json),
        vec!["Emberfall Tactics", "Tidewarden", "Paper Orbit"]
    );
}

#[tokio::test]
async fn test_list_filtered_campaigns() {
    let app = create_test_app();

    let (_, funded) = get_json(&app, "/api/campaigns?filter=funded").await;
    assert_eq!(names(&funded), vec!["Tidewarden", "Paper Orbit"]);

    let (_, unfunded) = get_json(&app, "/api/campaigns?filter=unfunded").await;
    assert_eq!(names(&unfunded), vec!["Emberfall Tactics"]);
}

#[tokio::test]
async fn test_search_campaigns() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/campaigns?search=TIDE").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["view"], "Search: \"TIDE\"");
    assert_eq!(names(&json), vec!["Tidewarden"]);
}

#[tokio::test]
async fn test_requests_do_not_share_view() {
    let app = create_test_app();

    let _ = get_json(&app, "/api/campaigns?filter=unfunded").await;
    let (_, json) = get_json(&app, "/api/campaigns").await;

    assert_eq!(json["total"], 3);
}

#[tokio::test]
async fn test_empty_search_keeps_filter_view() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/campaigns?filter=funded&search=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["view"], "Funded games");
    assert_eq!(names(&json), vec!["Tidewarden", "Paper Orbit"]);
}

#[tokio::test]
async fn test_search_page_then_plain_list() {
    let app = create_test_app();

    let (status, body, _) = get(&app, "/?search=orbit").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.matches("class=\"game-card\"").count(), 1);
    assert!(body.contains("value=\"orbit\""));

    let (_, json) = get_json(&app, "/api/campaigns").await;
    assert_eq!(json["view"], "All games");
    assert_eq!(json["total"], 3);
}

#[tokio::test]
async fn test_invalid_filter_rejected() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/campaigns?filter=bogus").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("bogus"));
}

// ============================================================================
// Summary and Top Tests
// ============================================================================

#[tokio::test]
async fn test_summary() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/summary").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total_backers"], 40);
    assert_eq!(json["total_pledged"], 300);
    assert_eq!(json["count"], 3);
    assert_eq!(json["unfunded"], 1);
    assert!(json["blurb"].as_str().unwrap().contains("1 game remains unfunded"));
}

#[tokio::test]
async fn test_top_default() {
    let app = create_test_app();

    let (status, json) = get_json(&app, "/api/top").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&json), vec!["Tidewarden", "Paper Orbit"]);
}

#[tokio::test]
async fn test_top_with_count() {
    let app = create_test_app();

    let (_, json) = get_json(&app, "/api/top?n=1").await;
    assert_eq!(names(&json), vec!["Tidewarden"]);

    let (status, _) = get_json(&app, "/api/top?n=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ============================================================================
// Page and Static Asset Tests
// ============================================================================

#[tokio::test]
async fn test_index_page() {
    let app = create_test_app();

    let (status, body, content_type) = get(&app, "/?filter=funded").await;

    assert_eq!(status, StatusCode::OK);
    assert!(content_type.unwrap().starts_with("text/html"));
    assert!(body.contains("href=\"/static/style.css\""));
    assert!(body.contains("id=\"funded-btn\" href=\"?filter=funded\" class=\"active\""));
    assert_eq!(body.matches("class=\"game-card\"").count(), 2);
}

#[tokio::test]
async fn test_static_stylesheet() {
    let app = create_test_app();

    let (status, body, content_type) = get(&app, "/static/style.css").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("text/css"));
    assert!(body.contains(".game-card"));
}

#[tokio::test]
async fn test_static_missing_file() {
    let app = create_test_app();

    let (status, _, _) = get(&app, "/static/app.js").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
