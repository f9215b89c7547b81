//! Span rules.

use super::{array_at, is_zero_span_id, is_zero_trace_id, timestamp};
use super::{RuleContext, SemanticReport, SemanticRules};
use crate::models::PayloadType;
use crate::validation::{JsonPointer, ValidationWarning};
use serde_json::Value;

/// Rules for spans in an `ExportTraceServiceRequest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceRules;

impl SemanticRules for TraceRules {
    fn signal(&self) -> PayloadType {
        PayloadType::Traces
    }

    fn check_record(
        &self,
        span: &Value,
        path: &JsonPointer,
        ctx: &RuleContext,
        report: &mut SemanticReport,
    ) {
        if is_zero_trace_id(span, "traceId") {
            report.error(
                &path.field("traceId"),
                "traceIdNonZero",
                "traceId must not be all zeros",
            );
        }
        if is_zero_span_id(span, "spanId") {
            report.error(
                &path.field("spanId"),
                "spanIdNonZero",
                "spanId must not be all zeros",
            );
        }

        let start = timestamp(span, "startTimeUnixNano");
        let end = timestamp(span, "endTimeUnixNano");

        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                report.error(
                    &path.field("endTimeUnixNano"),
                    "endAfterStart",
                    format!(
                        "endTimeUnixNano ({end}) must be greater than or equal to startTimeUnixNano ({start})"
                    ),
                );
            }
        }

        if let Some(start) = start {
            if start > ctx.future_limit() {
                report.warn(
                    ValidationWarning::new(
                        &path.field("startTimeUnixNano"),
                        format!(
                            "startTimeUnixNano is more than {}s in the future",
                            ctx.clock_skew_tolerance_nanos / 1_000_000_000
                        ),
                    )
                    .with_suggestion("Check clock synchronization on the host producing these spans"),
                );
            }
        }

        for (e, event) in array_at(span, "events") {
            let (Some(start), Some(end), Some(time)) =
                (start, end, timestamp(event, "timeUnixNano"))
            else {
                continue;
            };
            if time < start || time > end {
                report.warn(
                    ValidationWarning::new(
                        &path.field("events").index(e).field("timeUnixNano"),
                        format!("Event timestamp ({time}) falls outside the span's time range [{start}, {end}]"),
                    )
                    .with_suggestion("Record events between the span's start and end times"),
                );
            }
        }

        for (l, link) in array_at(span, "links") {
            let link_path = path.field("links").index(l);
            if is_zero_trace_id(link, "traceId") {
                report.error(
                    &link_path.field("traceId"),
                    "linkTraceIdNonZero",
                    "Link traceId must not be all zeros",
                );
            }
            if is_zero_span_id(link, "spanId") {
                report.error(
                    &link_path.field("spanId"),
                    "linkSpanIdNonZero",
                    "Link spanId must not be all zeros",
                );
            }
        }
    }
}
