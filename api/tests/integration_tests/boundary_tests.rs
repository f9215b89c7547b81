//! Integration tests for request handling before the engine runs.
//!
//! Tests cover:
//! - Content type negotiation
//! - Empty and malformed bodies
//! - Undetectable payloads
//! - Request body size limits

use api::{create_router, AppState};
use axum::http::StatusCode;
use serde_json::{json, Value};
use shared::validation::Validator;

use super::common::{post_json, post_raw, test_app};

#[tokio::test]
async fn test_protobuf_content_type_is_rejected() {
    for uri in ["/api/validate", "/v1/traces", "/v1/logs", "/v1/metrics"] {
        let (status, response) =
            post_raw(test_app(), uri, Some("application/x-protobuf"), vec![0x0a_u8, 0x00]).await;
        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE, "{uri}");
        assert_eq!(response["success"], false);
    }
}

#[tokio::test]
async fn test_text_plain_is_rejected() {
    let (status, _) = post_raw(
        test_app(),
        "/api/validate",
        Some("text/plain"),
        r#"{"resourceSpans": []}"#,
    )
    .await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_missing_content_type_is_json() {
    let (status, response) =
        post_raw(test_app(), "/api/validate", None, r#"{"resourceMetrics": []}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["payloadType"], "metrics");
}

#[tokio::test]
async fn test_empty_body_is_required_error() {
    let (status, response) = post_raw(test_app(), "/v1/logs", Some("application/json"), "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["payloadType"], Value::Null);
    assert_eq!(response["errors"][0]["keyword"], "required");
}

#[tokio::test]
async fn test_malformed_json_is_format_error() {
    let (status, response) = post_raw(
        test_app(),
        "/api/validate",
        Some("application/json"),
        r#"{"resourceSpans": ["#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["errors"][0]["keyword"], "format");
    assert_eq!(response["errors"][0]["path"], "");
}

#[tokio::test]
async fn test_undetectable_payload() {
    let (status, response) =
        post_json(test_app(), "/api/validate", json!({"spans": [], "logs": []})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
    assert_eq!(response["payloadType"], Value::Null);

    let errors = response["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["keyword"], "detection");
    assert_eq!(errors[0]["path"], "");
}

#[tokio::test]
async fn test_body_over_limit() {
    let app = create_router(AppState::new(Validator::default(), 1024));
    let padding = "a".repeat(4096);
    let (status, _) = post_json(
        app,
        "/api/validate",
        json!({"resourceLogs": [], "padding": padding}),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}
