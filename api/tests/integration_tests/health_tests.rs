//! Integration tests for the health endpoint.

use axum::http::StatusCode;

use super::common::{get, test_app};

#[tokio::test]
async fn test_health_through_full_router() {
    let (status, response) = get(test_app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["status"], "healthy");
    assert_eq!(response["service"], "otlpcheck-api");
    assert_eq!(response["signals"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let (status, _) = get(test_app(), "/v1/profiles").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
