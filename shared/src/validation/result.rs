//! Validation result types.
//!
//! These are the wire shapes returned by the engine and, unchanged, by the
//! HTTP and CLI front ends.

use crate::models::PayloadType;
use crate::validation::JsonPointer;
use serde::{Deserialize, Serialize};

/// Classifies the rule an error violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKeyword {
    /// Wrong JSON type.
    Type,
    /// String failed a pattern (hex identifier, decimal integer).
    Pattern,
    /// Number outside its allowed bounds.
    Range,
    /// Required field missing (also: empty request body).
    Required,
    /// Integer outside an enum's documented values.
    Enum,
    /// Payload type could not be detected, or was not the expected one.
    Detection,
    /// Domain invariant violated.
    Semantic,
    /// Request body is not valid JSON.
    Format,
    /// Unexpected failure inside the engine.
    Internal,
}

impl std::fmt::Display for ErrorKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Type => "type",
            Self::Pattern => "pattern",
            Self::Range => "range",
            Self::Required => "required",
            Self::Enum => "enum",
            Self::Detection => "detection",
            Self::Semantic => "semantic",
            Self::Format => "format",
            Self::Internal => "internal",
        };
        f.write_str(name)
    }
}

/// A single violation that makes a payload invalid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// JSON Pointer to the offending value.
    pub path: String,
    /// Human-readable description.
    pub message: String,
    /// Kind of violation.
    pub keyword: ErrorKeyword,
    /// Reference to the rule that was violated.
    pub schema_path: String,
}

impl ValidationError {
    /// Creates a new error.
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        message: impl Into<String>,
        keyword: ErrorKeyword,
        schema_path: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            keyword,
            schema_path: schema_path.into(),
        }
    }

    /// Creates the error reported when no payload type can be detected.
    #[must_use]
    pub fn undetected() -> Self {
        Self::new(
            "",
            "Unable to detect OTLP payload type: expected a top-level resourceSpans, resourceLogs, or resourceMetrics array",
            ErrorKeyword::Detection,
            "#",
        )
    }
}

/// An advisory finding that never affects validity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationWarning {
    /// JSON Pointer to the value the warning is about.
    pub path: String,
    /// Human-readable description.
    pub message: String,
    /// Optional hint for fixing the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationWarning {
    /// Creates a warning without a suggestion.
    #[must_use]
    pub fn new(path: &JsonPointer, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Attaches a suggestion.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when `errors` is empty.
    pub valid: bool,
    /// Detected payload type, reported even when the payload is invalid.
    pub payload_type: Option<PayloadType>,
    /// Structural errors followed by semantic errors.
    pub errors: Vec<ValidationError>,
    /// Advisory findings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Builds a result, deriving `valid` from the error list.
    #[must_use]
    pub fn new(
        payload_type: Option<PayloadType>,
        errors: Vec<ValidationError>,
        warnings: Vec<ValidationWarning>,
    ) -> Self {
        Self {
            valid: errors.is_empty(),
            payload_type,
            errors,
            warnings,
        }
    }

    /// The result for a document whose type could not be detected.
    #[must_use]
    pub fn undetected() -> Self {
        Self::new(None, vec![ValidationError::undetected()], Vec::new())
    }

    /// Returns the errors that carry `keyword`.
    pub fn errors_with(&self, keyword: ErrorKeyword) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.keyword == keyword)
    }
}
