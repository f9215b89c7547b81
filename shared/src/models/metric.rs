//! Metric data shapes.
//!
//! A metric carries exactly one of five data shapes. The wire format spells
//! this as five optional sibling fields, so [`MetricData`] models the closed
//! sum type and [`MetricData::select`] re-establishes the exactly-one rule on
//! untyped input.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The five metric data shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    /// Instantaneous measurement.
    Gauge,
    /// Aggregated sum, optionally monotonic.
    Sum,
    /// Explicit-bucket histogram.
    Histogram,
    /// Base-2 exponential histogram.
    ExponentialHistogram,
    /// Quantile summary.
    Summary,
}

impl MetricKind {
    /// All kinds in wire declaration order.
    pub const ALL: [Self; 5] = [
        Self::Gauge,
        Self::Sum,
        Self::Histogram,
        Self::ExponentialHistogram,
        Self::Summary,
    ];

    /// Returns the metric field holding this shape.
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::Gauge => "gauge",
            Self::Sum => "sum",
            Self::Histogram => "histogram",
            Self::ExponentialHistogram => "exponentialHistogram",
            Self::Summary => "summary",
        }
    }
}

impl std::fmt::Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.field_name())
    }
}

/// Errors raised when a metric does not carry exactly one data shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricShapeError {
    /// No data shape field is populated.
    #[error("Metric must have exactly one data type (gauge, sum, histogram, exponentialHistogram, summary), but none was found")]
    Missing,

    /// More than one data shape field is populated.
    #[error("Metric must have exactly one data type, but found multiple: {}", join_kinds(.0))]
    Multiple(Vec<MetricKind>),
}

fn join_kinds(kinds: &[MetricKind]) -> String {
    kinds
        .iter()
        .map(MetricKind::field_name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The single data shape selected on a metric, borrowing its JSON body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricData<'a> {
    /// `gauge` body.
    Gauge(&'a Value),
    /// `sum` body.
    Sum(&'a Value),
    /// `histogram` body.
    Histogram(&'a Value),
    /// `exponentialHistogram` body.
    ExponentialHistogram(&'a Value),
    /// `summary` body.
    Summary(&'a Value),
}

impl<'a> MetricData<'a> {
    /// Builds the variant for `kind` around `body`.
    #[must_use]
    pub const fn new(kind: MetricKind, body: &'a Value) -> Self {
        match kind {
            MetricKind::Gauge => Self::Gauge(body),
            MetricKind::Sum => Self::Sum(body),
            MetricKind::Histogram => Self::Histogram(body),
            MetricKind::ExponentialHistogram => Self::ExponentialHistogram(body),
            MetricKind::Summary => Self::Summary(body),
        }
    }

    /// Selects the single populated data shape of a metric object.
    ///
    /// A shape field counts as populated when present and not `null`.
    ///
    /// # Errors
    ///
    /// Returns [`MetricShapeError::Missing`] when no shape is populated and
    /// [`MetricShapeError::Multiple`] (listing them) when more than one is.
    pub fn select(metric: &'a Value) -> Result<Self, MetricShapeError> {
        let present: Vec<(MetricKind, &Value)> = MetricKind::ALL
            .iter()
            .filter_map(|kind| {
                metric
                    .get(kind.field_name())
                    .filter(|body| !body.is_null())
                    .map(|body| (*kind, body))
            })
            .collect();

        match present.as_slice() {
            [] => Err(MetricShapeError::Missing),
            [(kind, body)] => Ok(Self::new(*kind, *body)),
            many => Err(MetricShapeError::Multiple(
                many.iter().map(|(kind, _)| *kind).collect(),
            )),
        }
    }

    /// Returns the kind of this shape.
    #[must_use]
    pub const fn kind(&self) -> MetricKind {
        match self {
            Self::Gauge(_) => MetricKind::Gauge,
            Self::Sum(_) => MetricKind::Sum,
            Self::Histogram(_) => MetricKind::Histogram,
            Self::ExponentialHistogram(_) => MetricKind::ExponentialHistogram,
            Self::Summary(_) => MetricKind::Summary,
        }
    }

    /// Returns the JSON body of this shape.
    #[must_use]
    pub const fn body(&self) -> &'a Value {
        match self {
            Self::Gauge(body)
            | Self::Sum(body)
            | Self::Histogram(body)
            | Self::ExponentialHistogram(body)
            | Self::Summary(body) => body,
        }
    }

    /// Returns the `dataPoints` array, if the body has one.
    #[must_use]
    pub fn data_points(&self) -> Option<&'a Vec<Value>> {
        self.body().get("dataPoints").and_then(Value::as_array)
    }

    /// Returns true if data points of this shape may carry exemplars.
    #[must_use]
    pub const fn has_exemplars(&self) -> bool {
        !matches!(self, Self::Summary(_))
    }
}
