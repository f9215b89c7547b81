//! Definitions for `ExportMetricsServiceRequest`.

use super::{Definitions, Schema};

pub(super) const ROOT: &str = "ExportMetricsServiceRequest";

fn aggregation_temporality() -> Schema {
    Schema::enumeration(0, 2)
}

pub(super) fn register(defs: &mut Definitions) {
    defs.insert(
        ROOT,
        Schema::object()
            .required("resourceMetrics", Schema::array_of("ResourceMetrics"))
            .into(),
    );

    defs.insert(
        "ResourceMetrics",
        Schema::object()
            .property("resource", Schema::Ref("Resource"))
            .property("scopeMetrics", Schema::array_of("ScopeMetrics"))
            .property("schemaUrl", Schema::String)
            .into(),
    );

    defs.insert(
        "ScopeMetrics",
        Schema::object()
            .property("scope", Schema::Ref("InstrumentationScope"))
            .property("metrics", Schema::array_of("Metric"))
            .property("schemaUrl", Schema::String)
            .into(),
    );

    // Exactly-one-of over the data shapes is a semantic rule.
    defs.insert(
        "Metric",
        Schema::object()
            .property("name", Schema::String)
            .property("description", Schema::String)
            .property("unit", Schema::String)
            .property("metadata", Schema::array_of("KeyValue"))
            .property("gauge", Schema::Ref("Gauge"))
            .property("sum", Schema::Ref("Sum"))
            .property("histogram", Schema::Ref("Histogram"))
            .property("exponentialHistogram", Schema::Ref("ExponentialHistogram"))
            .property("summary", Schema::Ref("Summary"))
            .into(),
    );

    defs.insert(
        "Gauge",
        Schema::object()
            .property("dataPoints", Schema::array_of("NumberDataPoint"))
            .into(),
    );

    defs.insert(
        "Sum",
        Schema::object()
            .property("dataPoints", Schema::array_of("NumberDataPoint"))
            .property("aggregationTemporality", aggregation_temporality())
            .property("isMonotonic", Schema::Boolean)
            .into(),
    );

    defs.insert(
        "Histogram",
        Schema::object()
            .property("dataPoints", Schema::array_of("HistogramDataPoint"))
            .property("aggregationTemporality", aggregation_temporality())
            .into(),
    );

    defs.insert(
        "ExponentialHistogram",
        Schema::object()
            .property(
                "dataPoints",
                Schema::array_of("ExponentialHistogramDataPoint"),
            )
            .property("aggregationTemporality", aggregation_temporality())
            .into(),
    );

    defs.insert(
        "Summary",
        Schema::object()
            .property("dataPoints", Schema::array_of("SummaryDataPoint"))
            .into(),
    );

    defs.insert(
        "NumberDataPoint",
        Schema::object()
            .property("attributes", Schema::array_of("KeyValue"))
            .property("startTimeUnixNano", Schema::uint64())
            .property("timeUnixNano", Schema::uint64())
            .property("asDouble", Schema::number())
            .property("asInt", Schema::int64())
            .property("exemplars", Schema::array_of("Exemplar"))
            .property("flags", Schema::uint32())
            .into(),
    );

    defs.insert(
        "HistogramDataPoint",
        Schema::object()
            .property("attributes", Schema::array_of("KeyValue"))
            .property("startTimeUnixNano", Schema::uint64())
            .property("timeUnixNano", Schema::uint64())
            .property("count", Schema::uint64())
            .property("sum", Schema::number())
            .property("bucketCounts", Schema::array(Schema::uint64()))
            .property("explicitBounds", Schema::array(Schema::number()))
            .property("exemplars", Schema::array_of("Exemplar"))
            .property("flags", Schema::uint32())
            .property("min", Schema::number())
            .property("max", Schema::number())
            .into(),
    );

    defs.insert(
        "ExponentialHistogramDataPoint",
        Schema::object()
            .property("attributes", Schema::array_of("KeyValue"))
            .property("startTimeUnixNano", Schema::uint64())
            .property("timeUnixNano", Schema::uint64())
            .property("count", Schema::uint64())
            .property("sum", Schema::number())
            .property("scale", Schema::sint32())
            .property("zeroCount", Schema::uint64())
            .property("positive", Schema::Ref("Buckets"))
            .property("negative", Schema::Ref("Buckets"))
            .property("flags", Schema::uint32())
            .property("exemplars", Schema::array_of("Exemplar"))
            .property("min", Schema::number())
            .property("max", Schema::number())
            .property("zeroThreshold", Schema::number())
            .into(),
    );

    defs.insert(
        "Buckets",
        Schema::object()
            .property("offset", Schema::sint32())
            .property("bucketCounts", Schema::array(Schema::uint64()))
            .into(),
    );

    defs.insert(
        "SummaryDataPoint",
        Schema::object()
            .property("attributes", Schema::array_of("KeyValue"))
            .property("startTimeUnixNano", Schema::uint64())
            .property("timeUnixNano", Schema::uint64())
            .property("count", Schema::uint64())
            .property("sum", Schema::number())
            .property("quantileValues", Schema::array_of("ValueAtQuantile"))
            .property("flags", Schema::uint32())
            .into(),
    );

    defs.insert(
        "ValueAtQuantile",
        Schema::object()
            .property(
                "quantile",
                Schema::Number {
                    min: Some(0.0),
                    max: Some(1.0),
                },
            )
            .property("value", Schema::number())
            .into(),
    );

    defs.insert(
        "Exemplar",
        Schema::object()
            .property("filteredAttributes", Schema::array_of("KeyValue"))
            .property("timeUnixNano", Schema::uint64())
            .property("asDouble", Schema::number())
            .property("asInt", Schema::int64())
            .property("spanId", Schema::optional_span_id())
            .property("traceId", Schema::optional_trace_id())
            .into(),
    );
}
