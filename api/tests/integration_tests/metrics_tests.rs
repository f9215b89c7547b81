//! Integration tests for metric validation.
//!
//! Tests cover:
//! - Every metric data shape in one valid request
//! - Exactly-one-of data shape errors
//! - Histogram bucket consistency
//! - 64-bit integers as strings or numbers

use axum::http::StatusCode;
use serde_json::{json, Value};

use super::common::{error_paths, metrics_request, post_json, test_app, SPAN_ID, TRACE_ID};

const METRIC: &str = "/resourceMetrics/0/scopeMetrics/0/metrics/0";

fn histogram(bucket_counts: Value, explicit_bounds: Value) -> Value {
    json!({
        "name": "http.server.duration",
        "unit": "ms",
        "histogram": {
            "aggregationTemporality": 2,
            "dataPoints": [{
                "startTimeUnixNano": "1700000000000000000",
                "timeUnixNano": "1700000060000000000",
                "count": "6",
                "sum": 420.5,
                "bucketCounts": bucket_counts,
                "explicitBounds": explicit_bounds
            }]
        }
    })
}

#[tokio::test]
async fn test_every_data_shape() {
    let metrics = json!([
        {"name": "cpu", "gauge": {"dataPoints": [{"asDouble": 0.42, "timeUnixNano": "1700000000000000000"}]}},
        {"name": "requests", "sum": {
            "aggregationTemporality": 2,
            "isMonotonic": true,
            "dataPoints": [{
                "asInt": "123456789012345",
                "startTimeUnixNano": "1700000000000000000",
                "timeUnixNano": 1_700_000_060_000_000_000_u64,
                "exemplars": [{"asInt": 7, "timeUnixNano": "1700000030000000000", "traceId": TRACE_ID, "spanId": SPAN_ID}]
            }]
        }},
        histogram(json!(["1", "2", "3"]), json!([10, 20])),
        {"name": "sizes", "exponentialHistogram": {
            "aggregationTemporality": 1,
            "dataPoints": [{
                "count": 3, "scale": 2, "zeroCount": "0",
                "positive": {"offset": -1, "bucketCounts": ["1", "2"]},
                "timeUnixNano": "1700000000000000000"
            }]
        }},
        {"name": "latency", "summary": {"dataPoints": [{
            "count": "10", "sum": 12.5,
            "quantileValues": [{"quantile": 0.5, "value": 1.1}, {"quantile": 0.99, "value": 4.2}]
        }]}}
    ]);

    let (status, response) = post_json(test_app(), "/v1/metrics", metrics_request(metrics)).await;
    assert_eq!(status, StatusCode::OK, "{response}");
    assert_eq!(response["payloadType"], "metrics");
}

#[tokio::test]
async fn test_metric_without_data() {
    let (status, response) = post_json(
        test_app(),
        "/v1/metrics",
        metrics_request(json!([{"name": "orphan", "unit": "1"}])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_paths(&response), vec![METRIC]);
    assert!(response["errors"][0]["message"]
        .as_str()
        .unwrap()
        .contains("none was found"));
}

#[tokio::test]
async fn test_metric_with_gauge_and_sum() {
    let metric = json!({"name": "both", "gauge": {"dataPoints": []}, "sum": {"dataPoints": []}});
    let (status, response) =
        post_json(test_app(), "/api/validate", metrics_request(json!([metric]))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let errors = response["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    let message = errors[0]["message"].as_str().unwrap();
    assert!(message.contains("gauge"));
    assert!(message.contains("sum"));
}

#[tokio::test]
async fn test_histogram_bucket_mismatch() {
    let (status, response) = post_json(
        test_app(),
        "/v1/metrics",
        metrics_request(json!([histogram(json!(["1", "2"]), json!([10, 20]))])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_paths(&response),
        vec![format!("{METRIC}/histogram/dataPoints/0/bucketCounts")]
    );
}

#[tokio::test]
async fn test_histogram_first_unordered_bound() {
    let (status, response) = post_json(
        test_app(),
        "/v1/metrics",
        metrics_request(json!([histogram(json!(["1", "2", "3", "4"]), json!([5, 3, 10]))])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        error_paths(&response),
        vec![format!("{METRIC}/histogram/dataPoints/0/explicitBounds/1")]
    );
}

#[tokio::test]
async fn test_invalid_temporality_and_quantile() {
    let metrics = json!([
        {"name": "a", "sum": {"aggregationTemporality": 3, "dataPoints": []}},
        {"name": "b", "summary": {"dataPoints": [{"quantileValues": [{"quantile": 1.5, "value": 1}]}]}}
    ]);
    let (status, response) = post_json(test_app(), "/v1/metrics", metrics_request(metrics)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let errors = response["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["keyword"], "enum");
    assert_eq!(errors[0]["path"], format!("{METRIC}/sum/aggregationTemporality"));
    assert_eq!(errors[1]["keyword"], "range");
}

#[tokio::test]
async fn test_monotonic_delta_sum_warns() {
    let metric = json!({"name": "hits", "sum": {"aggregationTemporality": 1, "isMonotonic": true, "dataPoints": []}});
    let (status, response) = post_json(test_app(), "/v1/metrics", metrics_request(json!([metric]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["warnings"][0]["path"], format!("{METRIC}/sum"));
}
