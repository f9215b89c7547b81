//! Common test utilities and helpers for integration tests.
//!
//! This module provides shared functionality used across all integration tests,
//! including test app setup, HTTP request helpers and payload builders.

use api::{create_router, AppState};
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};

/// A valid 32-character trace ID.
pub const TRACE_ID: &str = "5b8efff798038103d269b633813fc60c";

/// A valid 16-character span ID.
pub const SPAN_ID: &str = "eee19b7ec3c1b174";

/// Thirty-two zeros.
pub const ZERO_TRACE_ID: &str = "00000000000000000000000000000000";

/// Creates a test router with default state.
pub fn test_app() -> Router {
    create_router(AppState::default())
}

/// Helper to make a POST request with JSON body.
///
/// # Returns
///
/// A tuple containing the response status code and parsed JSON response body.
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(
        app,
        uri,
        Some("application/json"),
        serde_json::to_string(&body).unwrap(),
    )
    .await
}

/// Helper to make a POST request with an arbitrary body and content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let mut request = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        request = request.header(header::CONTENT_TYPE, content_type);
    }
    let response = tower::ServiceExt::oneshot(app, request.body(body.into()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Helper to make a GET request.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = tower::ServiceExt::oneshot(
        app,
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();

    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    (status, json)
}

/// Wraps spans in an `ExportTraceServiceRequest`.
pub fn traces_request(spans: Value) -> Value {
    json!({
        "resourceSpans": [{
            "resource": {
                "attributes": [{"key": "service.name", "value": {"stringValue": "checkout"}}]
            },
            "scopeSpans": [{
                "scope": {"name": "otel-instrumentation", "version": "1.0.0"},
                "spans": spans
            }]
        }]
    })
}

/// Wraps log records in an `ExportLogsServiceRequest`.
pub fn logs_request(records: Value) -> Value {
    json!({
        "resourceLogs": [{
            "resource": {
                "attributes": [{"key": "service.name", "value": {"stringValue": "checkout"}}]
            },
            "scopeLogs": [{"scope": {"name": "app-logger"}, "logRecords": records}]
        }]
    })
}

/// Wraps metrics in an `ExportMetricsServiceRequest`.
pub fn metrics_request(metrics: Value) -> Value {
    json!({
        "resourceMetrics": [{
            "resource": {
                "attributes": [{"key": "service.name", "value": {"stringValue": "checkout"}}]
            },
            "scopeMetrics": [{"scope": {"name": "meter"}, "metrics": metrics}]
        }]
    })
}

/// Returns the `path` of every error in a response body.
pub fn error_paths(response: &Value) -> Vec<&str> {
    response["errors"]
        .as_array()
        .map(|errors| errors.iter().filter_map(|e| e["path"].as_str()).collect())
        .unwrap_or_default()
}
