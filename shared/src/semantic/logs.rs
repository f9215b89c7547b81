//! Log record rules.

use super::{enum_value, is_present, is_zero_span_id, is_zero_trace_id, timestamp};
use super::{RuleContext, SemanticReport, SemanticRules};
use crate::models::{PayloadType, SeverityBand};
use crate::validation::{JsonPointer, ValidationWarning};
use serde_json::Value;

/// Rules for log records in an `ExportLogsServiceRequest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRules;

impl SemanticRules for LogRules {
    fn signal(&self) -> PayloadType {
        PayloadType::Logs
    }

    fn check_record(
        &self,
        record: &Value,
        path: &JsonPointer,
        _ctx: &RuleContext,
        report: &mut SemanticReport,
    ) {
        if is_zero_trace_id(record, "traceId") {
            report.error(
                &path.field("traceId"),
                "traceIdNonZero",
                "traceId must not be all zeros; omit it or send an empty string when there is no trace context",
            );
        }
        if is_zero_span_id(record, "spanId") {
            report.error(
                &path.field("spanId"),
                "spanIdNonZero",
                "spanId must not be all zeros; omit it or send an empty string when there is no span context",
            );
        }

        if let (Some(time), Some(observed)) = (
            timestamp(record, "timeUnixNano"),
            timestamp(record, "observedTimeUnixNano"),
        ) {
            if observed < time {
                report.warn(
                    ValidationWarning::new(
                        &path.field("observedTimeUnixNano"),
                        format!(
                            "observedTimeUnixNano ({observed}) is earlier than timeUnixNano ({time})"
                        ),
                    )
                    .with_suggestion(
                        "observedTimeUnixNano should be when the event was observed by the collection system, at or after timeUnixNano",
                    ),
                );
            }
        }

        let severity = enum_value(record, "severityNumber");
        let text = record
            .get("severityText")
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty());
        if let (Some(number), Some(text)) = (severity, text) {
            if let Some(band) = SeverityBand::from_number(number) {
                if !band.matches_text(text) {
                    report.warn(
                        ValidationWarning::new(
                            &path.field("severityText"),
                            format!(
                                "severityText \"{text}\" does not match severityNumber {number} ({band})"
                            ),
                        )
                        .with_suggestion(format!("Use a severityText starting with {band}")),
                    );
                }
            }
        }

        if !is_present(record, "body") && !is_present(record, "severityNumber") {
            report.warn(
                ValidationWarning::new(path, "Log record has neither body nor severityNumber")
                    .with_suggestion("Set a body or a severityNumber so the record carries content"),
            );
        }
    }
}
