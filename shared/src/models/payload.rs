//! Payload type model.
//!
//! An OTLP/JSON document is exactly one of three export requests. The kind is
//! never declared by a tag field; it is inferred from the top-level shape.

use serde::{Deserialize, Serialize};

/// The signal carried by an OTLP export request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadType {
    /// `ExportTraceServiceRequest`.
    Traces,
    /// `ExportLogsServiceRequest`.
    Logs,
    /// `ExportMetricsServiceRequest`.
    Metrics,
}

impl PayloadType {
    /// All payload types, in detection priority order.
    pub const ALL: [Self; 3] = [Self::Traces, Self::Logs, Self::Metrics];

    /// Returns the top-level array field that identifies this payload type.
    #[must_use]
    pub const fn resource_field(&self) -> &'static str {
        match self {
            Self::Traces => "resourceSpans",
            Self::Logs => "resourceLogs",
            Self::Metrics => "resourceMetrics",
        }
    }

    /// Returns the scope container field inside each resource container.
    #[must_use]
    pub const fn scope_field(&self) -> &'static str {
        match self {
            Self::Traces => "scopeSpans",
            Self::Logs => "scopeLogs",
            Self::Metrics => "scopeMetrics",
        }
    }

    /// Returns the record array field inside each scope container.
    #[must_use]
    pub const fn record_field(&self) -> &'static str {
        match self {
            Self::Traces => "spans",
            Self::Logs => "logRecords",
            Self::Metrics => "metrics",
        }
    }

    /// Returns the lowercase name used on the wire.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Traces => "traces",
            Self::Logs => "logs",
            Self::Metrics => "metrics",
        }
    }
}

impl std::fmt::Display for PayloadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PayloadType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "traces" | "trace" => Ok(Self::Traces),
            "logs" | "log" => Ok(Self::Logs),
            "metrics" | "metric" => Ok(Self::Metrics),
            other => Err(format!("Unknown payload type: {other}")),
        }
    }
}
