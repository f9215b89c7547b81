//! Metric rules.

use super::{array_at, enum_value, is_zero_span_id, is_zero_trace_id, timestamp};
use super::{RuleContext, SemanticReport, SemanticRules};
use crate::models::{MetricData, PayloadType};
use crate::validation::{JsonPointer, ValidationWarning};
use serde_json::Value;

/// `AGGREGATION_TEMPORALITY_DELTA`.
const TEMPORALITY_DELTA: i64 = 1;

/// Rules for metrics in an `ExportMetricsServiceRequest`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricRules;

impl SemanticRules for MetricRules {
    fn signal(&self) -> PayloadType {
        PayloadType::Metrics
    }

    fn check_record(
        &self,
        metric: &Value,
        path: &JsonPointer,
        _ctx: &RuleContext,
        report: &mut SemanticReport,
    ) {
        // With zero or several shapes there is no single variant to inspect.
        let data = match MetricData::select(metric) {
            Ok(data) => data,
            Err(e) => {
                report.error(path, "exactlyOneDataType", e.to_string());
                return;
            }
        };
        let data_path = path.field(data.kind().field_name());

        if let MetricData::Sum(sum) = data {
            let monotonic = sum.get("isMonotonic").and_then(Value::as_bool) == Some(true);
            let temporality = enum_value(sum, "aggregationTemporality");
            if monotonic && temporality == Some(TEMPORALITY_DELTA) {
                report.warn(
                    ValidationWarning::new(
                        &data_path,
                        "Monotonic sum uses DELTA aggregation temporality, which is unusual",
                    )
                    .with_suggestion(
                        "Monotonic counters are usually reported with CUMULATIVE temporality (2)",
                    ),
                );
            }
        }

        for (d, point) in data.data_points().into_iter().flatten().enumerate() {
            let point_path = data_path.field("dataPoints").index(d);
            check_point_times(point, &point_path, report);

            if matches!(data, MetricData::Histogram(_)) {
                check_histogram_buckets(point, &point_path, report);
            }
            if data.has_exemplars() {
                check_exemplars(point, &point_path, report);
            }
        }
    }
}

fn check_point_times(point: &Value, path: &JsonPointer, report: &mut SemanticReport) {
    if let (Some(start), Some(time)) = (
        timestamp(point, "startTimeUnixNano"),
        timestamp(point, "timeUnixNano"),
    ) {
        if time < start {
            report.error(
                &path.field("timeUnixNano"),
                "timeAfterStart",
                format!(
                    "timeUnixNano ({time}) must be greater than or equal to startTimeUnixNano ({start})"
                ),
            );
        }
    }
}

fn check_histogram_buckets(point: &Value, path: &JsonPointer, report: &mut SemanticReport) {
    let bounds: &[Value] = point
        .get("explicitBounds")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    // An empty bucketCounts is only consistent with empty explicitBounds.
    if let Some(counts) = point.get("bucketCounts").and_then(Value::as_array) {
        if counts.len() != bounds.len() + 1 && !(counts.is_empty() && bounds.is_empty()) {
            report.error(
                &path.field("bucketCounts"),
                "bucketCountsLength",
                format!(
                    "bucketCounts length ({}) must equal explicitBounds length ({}) + 1",
                    counts.len(),
                    bounds.len()
                ),
            );
        }
    }

    // Only the first ordering violation is reported.
    for (i, pair) in bounds.windows(2).enumerate() {
        let (Some(previous), Some(current)) = (pair[0].as_f64(), pair[1].as_f64()) else {
            break;
        };
        if current <= previous {
            report.error(
                &path.field("explicitBounds").index(i + 1),
                "explicitBoundsIncreasing",
                format!(
                    "explicitBounds must be strictly increasing: value at index {} ({current}) is not greater than {previous}",
                    i + 1
                ),
            );
            break;
        }
    }
}

fn check_exemplars(point: &Value, path: &JsonPointer, report: &mut SemanticReport) {
    for (x, exemplar) in array_at(point, "exemplars") {
        let exemplar_path = path.field("exemplars").index(x);
        if is_zero_trace_id(exemplar, "traceId") {
            report.warn(
                ValidationWarning::new(
                    &exemplar_path.field("traceId"),
                    "Exemplar traceId is all zeros",
                )
                .with_suggestion("Omit traceId on exemplars that were not recorded inside a trace"),
            );
        }
        if is_zero_span_id(exemplar, "spanId") {
            report.warn(
                ValidationWarning::new(
                    &exemplar_path.field("spanId"),
                    "Exemplar spanId is all zeros",
                )
                .with_suggestion("Omit spanId on exemplars that were not recorded inside a span"),
            );
        }
    }
}
