//! Definitions for `ExportLogsServiceRequest`.

use super::{Definitions, Schema};

pub(super) const ROOT: &str = "ExportLogsServiceRequest";

pub(super) fn register(defs: &mut Definitions) {
    defs.insert(
        ROOT,
        Schema::object()
            .required("resourceLogs", Schema::array_of("ResourceLogs"))
            .into(),
    );

    defs.insert(
        "ResourceLogs",
        Schema::object()
            .property("resource", Schema::Ref("Resource"))
            .property("scopeLogs", Schema::array_of("ScopeLogs"))
            .property("schemaUrl", Schema::String)
            .into(),
    );

    defs.insert(
        "ScopeLogs",
        Schema::object()
            .property("scope", Schema::Ref("InstrumentationScope"))
            .property("logRecords", Schema::array_of("LogRecord"))
            .property("schemaUrl", Schema::String)
            .into(),
    );

    // Trace context is optional on logs; exporters send "" when absent.
    defs.insert(
        "LogRecord",
        Schema::object()
            .property("timeUnixNano", Schema::uint64())
            .property("observedTimeUnixNano", Schema::uint64())
            .property("severityNumber", Schema::enumeration(0, 24))
            .property("severityText", Schema::String)
            .property("body", Schema::Ref("AnyValue"))
            .property("attributes", Schema::array_of("KeyValue"))
            .property("droppedAttributesCount", Schema::uint32())
            .property("flags", Schema::uint32())
            .property("traceId", Schema::optional_trace_id())
            .property("spanId", Schema::optional_span_id())
            .property("eventName", Schema::String)
            .into(),
    );
}
