//! Definitions for `ExportTraceServiceRequest`.

use super::{Definitions, Schema};

pub(super) const ROOT: &str = "ExportTraceServiceRequest";

pub(super) fn register(defs: &mut Definitions) {
    defs.insert(
        ROOT,
        Schema::object()
            .required("resourceSpans", Schema::array_of("ResourceSpans"))
            .into(),
    );

    defs.insert(
        "ResourceSpans",
        Schema::object()
            .property("resource", Schema::Ref("Resource"))
            .property("scopeSpans", Schema::array_of("ScopeSpans"))
            .property("schemaUrl", Schema::String)
            .into(),
    );

    defs.insert(
        "ScopeSpans",
        Schema::object()
            .property("scope", Schema::Ref("InstrumentationScope"))
            .property("spans", Schema::array_of("Span"))
            .property("schemaUrl", Schema::String)
            .into(),
    );

    defs.insert(
        "Span",
        Schema::object()
            .property("traceId", Schema::trace_id())
            .property("spanId", Schema::span_id())
            .property("traceState", Schema::String)
            // Root spans commonly carry an empty parent.
            .property("parentSpanId", Schema::optional_span_id())
            .property("flags", Schema::uint32())
            .property("name", Schema::String)
            .property("kind", Schema::enumeration(0, 5))
            .property("startTimeUnixNano", Schema::uint64())
            .property("endTimeUnixNano", Schema::uint64())
            .property("attributes", Schema::array_of("KeyValue"))
            .property("droppedAttributesCount", Schema::uint32())
            .property("events", Schema::array_of("SpanEvent"))
            .property("droppedEventsCount", Schema::uint32())
            .property("links", Schema::array_of("SpanLink"))
            .property("droppedLinksCount", Schema::uint32())
            .property("status", Schema::Ref("Status"))
            .into(),
    );

    defs.insert(
        "SpanEvent",
        Schema::object()
            .property("timeUnixNano", Schema::uint64())
            .property("name", Schema::String)
            .property("attributes", Schema::array_of("KeyValue"))
            .property("droppedAttributesCount", Schema::uint32())
            .into(),
    );

    defs.insert(
        "SpanLink",
        Schema::object()
            .property("traceId", Schema::trace_id())
            .property("spanId", Schema::span_id())
            .property("traceState", Schema::String)
            .property("attributes", Schema::array_of("KeyValue"))
            .property("droppedAttributesCount", Schema::uint32())
            .property("flags", Schema::uint32())
            .into(),
    );

    defs.insert(
        "Status",
        Schema::object()
            .property("message", Schema::String)
            .property("code", Schema::enumeration(0, 2))
            .into(),
    );
}
