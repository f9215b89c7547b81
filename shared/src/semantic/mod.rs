//! Semantic layer.
//!
//! Domain rules that a structural schema cannot express: all-zero
//! identifiers, timestamp ordering, the exactly-one-of metric data shape and
//! histogram bucket consistency. Each signal implements [`SemanticRules`] for a
//! single record; [`check`] walks resource containers, scopes and records in
//! document order, which fixes the order of reported issues.
//!
//! Rules fail open: a value that cannot be parsed (a malformed timestamp, an
//! identifier of the wrong width) is skipped here because the structural
//! layer has already reported it.

mod logs;
mod metrics;
mod traces;

pub use logs::LogRules;
pub use metrics::MetricRules;
pub use traces::TraceRules;

use crate::models::{json_integer, PayloadType, SpanId, TraceId};
use crate::validation::{ErrorKeyword, JsonPointer, ValidationError, ValidationWarning};
use serde_json::Value;

/// Inputs shared by every rule during one validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleContext {
    /// Current wall-clock time in nanoseconds since the Unix epoch.
    pub now_unix_nanos: u64,
    /// How far into the future a start time may be before it is flagged.
    pub clock_skew_tolerance_nanos: u64,
}

impl RuleContext {
    /// Latest timestamp that is not considered clock skew.
    #[must_use]
    pub const fn future_limit(&self) -> u64 {
        self.now_unix_nanos
            .saturating_add(self.clock_skew_tolerance_nanos)
    }
}

/// Errors and warnings produced by the semantic layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticReport {
    signal: PayloadType,
    /// Invariant violations; any one makes the payload invalid.
    pub errors: Vec<ValidationError>,
    /// Advisory findings.
    pub warnings: Vec<ValidationWarning>,
}

impl SemanticReport {
    /// Creates an empty report for `signal`.
    #[must_use]
    pub const fn new(signal: PayloadType) -> Self {
        Self {
            signal,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Records an error for `rule` at `path`.
    pub fn error(&mut self, path: &JsonPointer, rule: &str, message: impl Into<String>) {
        self.errors.push(ValidationError::new(
            path.to_string(),
            message,
            ErrorKeyword::Semantic,
            format!("#/semantic/{}/{rule}", self.signal),
        ));
    }

    /// Records a warning.
    pub fn warn(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// Domain rules for one signal's records.
pub trait SemanticRules: Send + Sync {
    /// The signal these rules apply to.
    fn signal(&self) -> PayloadType;

    /// Evaluates every rule against one record (span, log record or metric).
    fn check_record(
        &self,
        record: &Value,
        path: &JsonPointer,
        ctx: &RuleContext,
        report: &mut SemanticReport,
    );
}

/// Returns the rules for a payload type.
#[must_use]
pub fn rules_for(payload_type: PayloadType) -> &'static dyn SemanticRules {
    static TRACES: TraceRules = TraceRules;
    static LOGS: LogRules = LogRules;
    static METRICS: MetricRules = MetricRules;

    match payload_type {
        PayloadType::Traces => &TRACES,
        PayloadType::Logs => &LOGS,
        PayloadType::Metrics => &METRICS,
    }
}

/// Runs `rules` over every record of `document`.
///
/// Containers that are not arrays and records that are not objects are
/// skipped; the structural layer reports those.
#[must_use]
pub fn check(rules: &dyn SemanticRules, document: &Value, ctx: &RuleContext) -> SemanticReport {
    let signal = rules.signal();
    let mut report = SemanticReport::new(signal);
    let root = JsonPointer::root();

    for (r, resource) in array_at(document, signal.resource_field()) {
        let resource_path = root.field(signal.resource_field()).index(r);
        for (s, scope) in array_at(resource, signal.scope_field()) {
            let scope_path = resource_path.field(signal.scope_field()).index(s);
            for (i, record) in array_at(scope, signal.record_field()) {
                if !record.is_object() {
                    continue;
                }
                let record_path = scope_path.field(signal.record_field()).index(i);
                rules.check_record(record, &record_path, ctx, &mut report);
            }
        }
    }

    report
}

/// Enumerates the elements of `value[field]` if it is an array.
pub(crate) fn array_at<'a>(
    value: &'a Value,
    field: &str,
) -> impl Iterator<Item = (usize, &'a Value)> + 'a {
    value
        .get(field)
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .enumerate()
}

/// Parses a nanosecond timestamp from a decimal string or non-negative integer.
///
/// Numbers are read the way the structural layer accepts them, so `2000.0`
/// is the timestamp 2000.
pub(crate) fn timestamp(record: &Value, field: &str) -> Option<u64> {
    match record.get(field)? {
        Value::String(s) => s.parse().ok(),
        number @ Value::Number(_) => json_integer(number).and_then(|n| u64::try_from(n).ok()),
        _ => None,
    }
}

/// Reads an integer enum or flag field, accepting integral floats.
pub(crate) fn enum_value(record: &Value, field: &str) -> Option<i64> {
    record
        .get(field)
        .and_then(json_integer)
        .and_then(|n| i64::try_from(n).ok())
}

/// True if `record[field]` is a well-formed trace ID whose bytes are all zero.
pub(crate) fn is_zero_trace_id(record: &Value, field: &str) -> bool {
    record
        .get(field)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<TraceId>().ok())
        .is_some_and(|id| id.is_zero())
}

/// True if `record[field]` is a well-formed span ID whose bytes are all zero.
pub(crate) fn is_zero_span_id(record: &Value, field: &str) -> bool {
    record
        .get(field)
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<SpanId>().ok())
        .is_some_and(|id| id.is_zero())
}

/// True if `record[field]` is present and not null.
pub(crate) fn is_present(record: &Value, field: &str) -> bool {
    record.get(field).is_some_and(|v| !v.is_null())
}
