//! Definitions shared by every signal: attributes, resource and scope.

use super::{Definitions, Schema};

pub(super) fn register(defs: &mut Definitions) {
    // Value fields are not mutually exclusive here; several populated at once
    // is accepted.
    defs.insert(
        "AnyValue",
        Schema::object()
            .property("stringValue", Schema::String)
            .property("boolValue", Schema::Boolean)
            .property("intValue", Schema::int64())
            .property("doubleValue", Schema::number())
            .property(
                "arrayValue",
                Schema::object().property("values", Schema::array_of("AnyValue")),
            )
            .property(
                "kvlistValue",
                Schema::object().property("values", Schema::array_of("KeyValue")),
            )
            .property("bytesValue", Schema::String)
            .into(),
    );

    defs.insert(
        "KeyValue",
        Schema::object()
            .required("key", Schema::String)
            .property("value", Schema::Ref("AnyValue"))
            .into(),
    );

    defs.insert(
        "Resource",
        Schema::object()
            .property("attributes", Schema::array_of("KeyValue"))
            .property("droppedAttributesCount", Schema::uint32())
            .into(),
    );

    defs.insert(
        "InstrumentationScope",
        Schema::object()
            .property("name", Schema::String)
            .property("version", Schema::String)
            .property("attributes", Schema::array_of("KeyValue"))
            .property("droppedAttributesCount", Schema::uint32())
            .into(),
    );
}
