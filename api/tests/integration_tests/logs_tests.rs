//! Integration tests for log validation.
//!
//! Tests cover:
//! - Accepting records with empty trace context
//! - Severity and body checks reported as warnings
//! - Enum ranges and all-zero identifiers reported as errors

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::common::{error_paths, logs_request, post_json, test_app, SPAN_ID, TRACE_ID};

const RECORD: &str = "/resourceLogs/0/scopeLogs/0/logRecords/0";

fn record() -> Value {
    json!({
        "timeUnixNano": "1700000000000000000",
        "observedTimeUnixNano": "1700000000000500000",
        "severityNumber": 17,
        "severityText": "ERROR",
        "body": {"stringValue": "payment declined"},
        "attributes": [{"key": "order.id", "value": {"intValue": 1234}}],
        "traceId": TRACE_ID,
        "spanId": SPAN_ID,
        "flags": 1
    })
}

#[tokio::test]
async fn test_valid_logs() {
    let (status, response) = post_json(test_app(), "/v1/logs", logs_request(json!([record()]))).await;
    assert_eq!(status, StatusCode::OK, "{response}");
    assert_eq!(response["payloadType"], "logs");
    assert!(response.get("warnings").is_none());
}

#[tokio::test]
async fn test_empty_trace_context_is_allowed() {
    let mut record = record();
    record["traceId"] = json!("");
    record["spanId"] = json!("");

    let (status, _) = post_json(test_app(), "/v1/logs", logs_request(json!([record]))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_severity_out_of_range() {
    let mut record = record();
    record["severityNumber"] = json!(25);

    let (status, response) = post_json(test_app(), "/v1/logs", logs_request(json!([record]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_paths(&response), vec![format!("{RECORD}/severityNumber")]);
    assert_eq!(response["errors"][0]["keyword"], "enum");
}

#[tokio::test]
async fn test_zero_span_id_is_error() {
    let mut record = record();
    record["spanId"] = json!("0000000000000000");

    let (status, response) = post_json(test_app(), "/v1/logs", logs_request(json!([record]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_paths(&response), vec![format!("{RECORD}/spanId")]);
}

#[tokio::test]
async fn test_advisory_findings_are_warnings() {
    let record = json!({
        "timeUnixNano": "1700000000000000000",
        "observedTimeUnixNano": "1690000000000000000",
        "severityText": "INFO"
    });
    let mismatched = json!({"severityNumber": 9, "severityText": "DEBUG"});

    let (status, response) =
        post_json(test_app(), "/v1/logs", logs_request(json!([record, mismatched]))).await;
    assert_eq!(status, StatusCode::OK);

    let warnings = response["warnings"].as_array().unwrap();
    let paths: Vec<&str> = warnings.iter().filter_map(|w| w["path"].as_str()).collect();
    assert!(paths.contains(&format!("{RECORD}/observedTimeUnixNano").as_str()));
    assert!(paths.contains(&RECORD));
    assert!(paths.contains(&"/resourceLogs/0/scopeLogs/0/logRecords/1/severityText"));
}

#[tokio::test]
async fn test_logs_sent_to_traces_endpoint() {
    let (status, response) =
        post_json(test_app(), "/v1/traces", logs_request(json!([record()]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["payloadType"], "logs");
    assert_eq!(response["errors"][0]["keyword"], "detection");
    assert_eq!(response["errors"][0]["path"], "");
}
