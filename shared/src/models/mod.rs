//! Data models for the Otlpcheck validation engine.
//!
//! These are the small typed views over an OTLP/JSON document that the
//! detector and the semantic rules need: payload kinds, identifiers, severity
//! bands and the closed set of metric data shapes.

pub mod identifier;
pub mod metric;
pub mod number;
pub mod payload;
pub mod severity;

pub use identifier::{IdentifierError, SpanId, TraceId};
pub use metric::{MetricData, MetricKind, MetricShapeError};
pub use number::json_integer;
pub use payload::PayloadType;
pub use severity::SeverityBand;
