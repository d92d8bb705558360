mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};
use shortlink_store::api::handlers::shorten_handler;

fn test_server(state: shortlink_store::state::AppState) -> TestServer {
    let app = Router::new()
        .route("/shorturls", post(shorten_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

fn expiry_of(body: &Value) -> DateTime<Utc> {
    body["expiry"].as_str().unwrap().parse().unwrap()
}

#[tokio::test]
async fn test_create_returns_201_with_short_link() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    let short_link = body["shortLink"].as_str().unwrap();

    let prefix = format!("{}/", common::TEST_BASE_URL);
    let code = short_link.strip_prefix(&prefix).unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[tokio::test]
async fn test_create_defaults_validity_to_30_minutes() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(
        expiry_of(&response.json()),
        common::start_time() + Duration::minutes(30)
    );
}

#[tokio::test]
async fn test_create_with_explicit_validity() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "validity": 5 }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(
        expiry_of(&response.json()),
        common::start_time() + Duration::minutes(5)
    );
}

#[tokio::test]
async fn test_create_with_custom_shortcode() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "promo1" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let body: Value = response.json();
    assert_eq!(
        body["shortLink"].as_str().unwrap(),
        format!("{}/promo1", common::TEST_BASE_URL)
    );
}

#[tokio::test]
async fn test_duplicate_custom_shortcode_conflicts() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    let first = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "abc" }))
        .await;
    assert_eq!(first.status_code(), 201);

    let second = server
        .post("/shorturls")
        .json(&json!({ "url": "https://other.com", "shortcode": "abc" }))
        .await;

    assert_eq!(second.status_code(), 409);

    let body: Value = second.json();
    assert_eq!(body["error"].as_str().unwrap(), "ShortcodeCollision");
    assert!(body["message"].as_str().unwrap().contains("abc"));
}

#[tokio::test]
async fn test_expired_custom_shortcode_is_reusable() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    let first = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "abc", "validity": 1 }))
        .await;
    assert_eq!(first.status_code(), 201);

    app.clock.advance(Duration::minutes(1));

    let second = server
        .post("/shorturls")
        .json(&json!({ "url": "https://other.com", "shortcode": "abc" }))
        .await;

    assert_eq!(second.status_code(), 201);
}

#[tokio::test]
async fn test_shortcode_too_short_is_rejected() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "ab" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "InvalidShortcodeFormat");
}

#[tokio::test]
async fn test_shortcode_with_punctuation_is_rejected() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "https://example.com", "shortcode": "my-code" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_non_http_url_is_rejected() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "ftp://x.com" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let body: Value = response.json();
    assert_eq!(body["error"].as_str().unwrap(), "InvalidUrl");
}

#[tokio::test]
async fn test_malformed_url_is_rejected() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    let response = server
        .post("/shorturls")
        .json(&json!({ "url": "not a url" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_non_positive_validity_is_rejected() {
    let app = common::create_test_state();
    let server = test_server(app.state);

    for validity in [0, -10] {
        let response = server
            .post("/shorturls")
            .json(&json!({ "url": "https://example.com", "validity": validity }))
            .await;

        assert_eq!(response.status_code(), 400);

        let body: Value = response.json();
        assert_eq!(body["error"].as_str().unwrap(), "InvalidValidity");
    }
}
