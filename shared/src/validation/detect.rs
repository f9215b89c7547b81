//! Payload type detection.

use crate::models::PayloadType;
use serde_json::Value;

/// Classifies a document by its top-level shape.
///
/// Only the top level is inspected: the first of `resourceSpans`,
/// `resourceLogs`, `resourceMetrics` (in that order) whose value is an array
/// wins. Any non-object input, or an object with none of these arrays, yields
/// `None`.
#[must_use]
pub fn detect_payload_type(document: &Value) -> Option<PayloadType> {
    let object = document.as_object()?;
    PayloadType::ALL
        .into_iter()
        .find(|kind| object.get(kind.resource_field()).is_some_and(Value::is_array))
}
