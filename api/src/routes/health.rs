//! Health check endpoint.
//!
//! Reports whether the structural schemas are loaded for every signal, so a
//! load balancer only routes to instances that can actually validate.

use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use shared::models::PayloadType;
use shared::schema::SchemaSet;

/// Health check response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// "healthy" when every signal can be validated, otherwise "degraded".
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Signals with a loaded root schema.
    pub signals: Vec<PayloadType>,
    /// Number of compiled schema definitions.
    pub schema_definitions: usize,
}

impl HealthResponse {
    fn from_schemas(set: &SchemaSet) -> Self {
        let signals: Vec<PayloadType> = PayloadType::ALL
            .into_iter()
            .filter(|&payload_type| set.supports(payload_type))
            .collect();
        let status = if signals.len() == PayloadType::ALL.len() {
            "healthy"
        } else {
            "degraded"
        };
        Self {
            status,
            service: "otlpcheck-api",
            version: env!("CARGO_PKG_VERSION"),
            signals,
            schema_definitions: set.len(),
        }
    }

    fn status_code(&self) -> StatusCode {
        if self.status == "healthy" {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}

/// Creates the health check routes.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    let health = HealthResponse::from_schemas(shared::schema::schemas());
    if health.status != "healthy" {
        tracing::warn!(signals = ?health.signals, "Schema set is incomplete");
    }
    (health.status_code(), Json(health))
}
