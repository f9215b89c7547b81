//! The validation engine.

use super::{detect_payload_type, ErrorKeyword, ValidationError, ValidationResult};
use crate::config::ValidationOptions;
use crate::models::PayloadType;
use crate::schema::{schemas, SchemaSet};
use crate::semantic::{self, RuleContext};
use chrono::Utc;
use serde_json::Value;

/// Validates OTLP/JSON documents.
///
/// A validator holds a read-only handle to the process-wide schema set, so it
/// is cheap to clone and safe to share between threads.
///
/// # Example
///
/// ```
/// use shared::serde_json::json;
/// use shared::validation::Validator;
///
/// let validator = Validator::default();
/// let result = validator.validate(&json!({"resourceSpans": []}));
/// assert!(result.valid);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    schemas: &'static SchemaSet,
    options: ValidationOptions,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationOptions::default())
    }
}

impl Validator {
    /// Creates a validator using the shared schema set.
    #[must_use]
    pub fn new(options: ValidationOptions) -> Self {
        Self {
            schemas: schemas(),
            options,
        }
    }

    /// Returns the options this validator was built with.
    #[must_use]
    pub const fn options(&self) -> &ValidationOptions {
        &self.options
    }

    /// Validates `document` against the current wall clock.
    #[must_use]
    pub fn validate(&self, document: &Value) -> ValidationResult {
        self.validate_at(document, now_unix_nanos())
    }

    /// Validates `document` as if the current time were `now_unix_nanos`.
    #[must_use]
    pub fn validate_at(&self, document: &Value, now_unix_nanos: u64) -> ValidationResult {
        let Some(payload_type) = detect_payload_type(document) else {
            tracing::debug!("Payload type not detected");
            return ValidationResult::undetected();
        };

        let mut errors = self.schemas.check(payload_type, document);
        let structural = errors.len();

        let ctx = RuleContext {
            now_unix_nanos,
            clock_skew_tolerance_nanos: self.options.clock_skew_tolerance_nanos(),
        };
        let report = semantic::check(semantic::rules_for(payload_type), document, &ctx);
        errors.extend(report.errors);

        tracing::debug!(
            payload_type = %payload_type,
            structural_errors = structural,
            semantic_errors = errors.len() - structural,
            warnings = report.warnings.len(),
            "Validated payload"
        );

        ValidationResult::new(Some(payload_type), errors, report.warnings)
    }

    /// Validates `document` and requires it to be of type `expected`.
    ///
    /// A document of another type keeps its own findings and gains one
    /// `detection` error; an undetectable document is reported as usual.
    #[must_use]
    pub fn validate_as(&self, document: &Value, expected: PayloadType) -> ValidationResult {
        let mut result = self.validate(document);
        match result.payload_type {
            Some(actual) if actual != expected => {
                result.errors.insert(
                    0,
                    ValidationError::new(
                        "",
                        format!("Expected an OTLP {expected} payload, but detected {actual}"),
                        ErrorKeyword::Detection,
                        "#",
                    ),
                );
                result.valid = false;
            }
            _ => {}
        }
        result
    }
}

/// Validates `document` with default options.
#[must_use]
pub fn validate(document: &Value) -> ValidationResult {
    Validator::default().validate(document)
}

fn now_unix_nanos() -> u64 {
    Utc::now()
        .timestamp_nanos_opt()
        .and_then(|nanos| u64::try_from(nanos).ok())
        .unwrap_or(u64::MAX)
}
