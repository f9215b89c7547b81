//! Integration tests for trace validation.
//!
//! Tests cover:
//! - Accepting a well-formed export request
//! - Structural errors with JSON Pointer locations
//! - All-zero identifiers and timestamp ordering
//! - Warnings that do not affect the status code

use axum::http::StatusCode;
use serde_json::json;

use super::common::{
    error_paths, post_json, test_app, traces_request, SPAN_ID, TRACE_ID, ZERO_TRACE_ID,
};

const SPAN: &str = "/resourceSpans/0/scopeSpans/0/spans/0";

fn span() -> serde_json::Value {
    json!({
        "traceId": TRACE_ID,
        "spanId": SPAN_ID,
        "parentSpanId": "",
        "name": "GET /cart",
        "kind": 2,
        "startTimeUnixNano": "1700000000000000000",
        "endTimeUnixNano": "1700000000250000000",
        "attributes": [
            {"key": "http.method", "value": {"stringValue": "GET"}},
            {"key": "http.status_code", "value": {"intValue": "200"}},
            {"key": "tags", "value": {"arrayValue": {"values": [{"stringValue": "a"}, {"boolValue": true}]}}}
        ],
        "events": [{"timeUnixNano": "1700000000100000000", "name": "cache-miss"}],
        "status": {"code": 1}
    })
}

#[tokio::test]
async fn test_valid_traces_on_both_endpoints() {
    for uri in ["/v1/traces", "/api/validate"] {
        let (status, response) = post_json(test_app(), uri, traces_request(json!([span()]))).await;
        assert_eq!(status, StatusCode::OK, "{uri}: {response}");
        assert_eq!(response["success"], true);
        assert_eq!(response["payloadType"], "traces");
    }
}

#[tokio::test]
async fn test_string_kind_is_reported_at_field() {
    let body = json!({"resourceSpans":[{"scopeSpans":[{"spans":[{"kind":"SERVER"}]}]}]});
    let (status, response) = post_json(test_app(), "/v1/traces", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
    assert_eq!(response["payloadType"], "traces");
    assert!(error_paths(&response).contains(&format!("{SPAN}/kind").as_str()));
}

#[tokio::test]
async fn test_all_zero_trace_id() {
    let mut span = span();
    span["traceId"] = json!(ZERO_TRACE_ID);

    let (status, response) = post_json(test_app(), "/v1/traces", traces_request(json!([span]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_paths(&response), vec![format!("{SPAN}/traceId")]);
    assert_eq!(response["errors"][0]["keyword"], "semantic");
}

#[tokio::test]
async fn test_malformed_ids_and_end_before_start() {
    let mut span = span();
    span["spanId"] = json!("xyz");
    span["endTimeUnixNano"] = json!("1600000000000000000");

    let (status, response) = post_json(test_app(), "/v1/traces", traces_request(json!([span]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let errors = response["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["keyword"], "pattern");
    assert_eq!(errors[0]["path"], format!("{SPAN}/spanId"));
    assert_eq!(errors[1]["keyword"], "semantic");
    assert_eq!(errors[1]["path"], format!("{SPAN}/endTimeUnixNano"));
}

#[tokio::test]
async fn test_future_span_is_valid_with_warning() {
    let mut span = span();
    span["startTimeUnixNano"] = json!("4000000000000000000");
    span["endTimeUnixNano"] = json!("4000000000100000000");
    span["events"] = json!([]);

    let (status, response) = post_json(test_app(), "/v1/traces", traces_request(json!([span]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["success"], true);
    assert_eq!(
        response["warnings"][0]["path"],
        format!("{SPAN}/startTimeUnixNano")
    );
}

#[tokio::test]
async fn test_bad_attribute_value_in_nested_array() {
    let mut span = span();
    span["attributes"] = json!([
        {"key": "tags", "value": {"arrayValue": {"values": [{"intValue": "12x"}]}}}
    ]);

    let (status, response) = post_json(test_app(), "/v1/traces", traces_request(json!([span]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_paths(&response),
        vec![format!(
            "{SPAN}/attributes/0/value/arrayValue/values/0/intValue"
        )]
    );
}
