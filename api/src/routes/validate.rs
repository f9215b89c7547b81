//! OTLP/JSON validation endpoints.
//!
//! # Endpoints
//!
//! - `POST /api/validate` - Validate a payload of any signal
//! - `POST /v1/traces` - Validate an `ExportTraceServiceRequest`
//! - `POST /v1/logs` - Validate an `ExportLogsServiceRequest`
//! - `POST /v1/metrics` - Validate an `ExportMetricsServiceRequest`
//!
//! Only JSON is accepted. A request without a `Content-Type` header is
//! treated as JSON.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::models::PayloadType;
use shared::validation::{
    ErrorKeyword, ValidationError, ValidationResult, ValidationWarning, Validator,
};
use thiserror::Error;

const CONTENT_TYPE_JSON: &str = "application/json";

/// Response body for validation requests.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    /// True when the payload is valid.
    pub success: bool,
    /// Detected payload type, `null` when it could not be detected.
    pub payload_type: Option<PayloadType>,
    /// Summary for valid payloads.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Errors for invalid payloads.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
    /// Advisory findings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ValidationWarning>,
}

impl ValidateResponse {
    fn failure(payload_type: Option<PayloadType>, errors: Vec<ValidationError>) -> Self {
        Self {
            success: false,
            payload_type,
            message: None,
            errors,
            warnings: Vec::new(),
        }
    }
}

impl From<ValidationResult> for ValidateResponse {
    fn from(result: ValidationResult) -> Self {
        let message = match (result.valid, result.payload_type) {
            (true, Some(payload_type)) => Some(format!("Valid OTLP {payload_type} payload")),
            _ => None,
        };
        Self {
            success: result.valid,
            payload_type: result.payload_type,
            message,
            errors: result.errors,
            warnings: result.warnings,
        }
    }
}

/// Failures detected before or around the engine.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request is not JSON.
    #[error("Unsupported content type '{0}': only application/json is accepted")]
    UnsupportedMediaType(String),

    /// The body is empty or whitespace.
    #[error("Request body is empty")]
    EmptyBody,

    /// The body is not valid JSON.
    #[error("Request body is not valid JSON: {0}")]
    MalformedJson(String),

    /// The engine failed unexpectedly.
    #[error("Internal validation failure: {0}")]
    Internal(String),
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::EmptyBody | Self::MalformedJson(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    const fn keyword(&self) -> ErrorKeyword {
        match self {
            Self::UnsupportedMediaType(_) | Self::MalformedJson(_) => ErrorKeyword::Format,
            Self::EmptyBody => ErrorKeyword::Required,
            Self::Internal(_) => ErrorKeyword::Internal,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = ValidationError::new("", self.to_string(), self.keyword(), "#");
        (
            self.status(),
            Json(ValidateResponse::failure(None, vec![error])),
        )
            .into_response()
    }
}

/// Creates the validation routes with application state.
pub fn validate_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/validate", post(validate_any))
        .route("/v1/traces", post(validate_traces))
        .route("/v1/logs", post(validate_logs))
        .route("/v1/metrics", post(validate_metrics))
        .with_state(state)
}

async fn validate_any(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    respond(*state.validator(), &headers, &body, None).await
}

async fn validate_traces(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    respond(*state.validator(), &headers, &body, Some(PayloadType::Traces)).await
}

async fn validate_logs(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    respond(*state.validator(), &headers, &body, Some(PayloadType::Logs)).await
}

async fn validate_metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    respond(*state.validator(), &headers, &body, Some(PayloadType::Metrics)).await
}

async fn respond(
    validator: Validator,
    headers: &HeaderMap,
    body: &[u8],
    expected: Option<PayloadType>,
) -> Result<Response, ApiError> {
    check_content_type(headers)?;
    let document = decode_body(body)?;

    // Validation is CPU-bound; a panic in the engine surfaces as a JoinError.
    let result = tokio::task::spawn_blocking(move || match expected {
        Some(payload_type) => validator.validate_as(&document, payload_type),
        None => validator.validate(&document),
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Validation task failed");
        ApiError::Internal(e.to_string())
    })?;

    tracing::info!(
        payload_type = result.payload_type.as_ref().map(PayloadType::as_str),
        valid = result.valid,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "Validated OTLP payload"
    );

    let status = if result.valid {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    Ok((status, Json(ValidateResponse::from(result))).into_response())
}

/// Accepts a missing `Content-Type` or `application/json` with any parameters.
fn check_content_type(headers: &HeaderMap) -> Result<(), ApiError> {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return Ok(());
    };
    let content_type = value.to_str().unwrap_or_default();
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    if mime.eq_ignore_ascii_case(CONTENT_TYPE_JSON) {
        Ok(())
    } else {
        tracing::debug!(content_type, "Rejected unsupported content type");
        Err(ApiError::UnsupportedMediaType(content_type.to_string()))
    }
}

fn decode_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::EmptyBody);
    }
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Failed to decode JSON request body");
        ApiError::MalformedJson(e.to_string())
    })
}
