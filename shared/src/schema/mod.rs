//! Structural schema layer.
//!
//! Describes the OTLP/JSON wire encoding as a small declarative schema model
//! and checks documents against it. The rules are purely about shape: field
//! types, enum ranges, hex identifiers and 64-bit integer encodings. Domain
//! invariants live in [`crate::semantic`].
//!
//! Definitions are registered by name and referenced lazily through
//! [`Schema::Ref`], which is how the recursive `AnyValue` / `KeyValue` pair is
//! expressed without expanding it eagerly. The full [`SchemaSet`] is built
//! once per process (see [`schemas`]) and is read-only afterwards.
//!
//! Unknown fields are tolerated at every level.

mod check;
mod common;
mod logs;
mod metrics;
mod traces;

use crate::models::PayloadType;
use crate::validation::{JsonPointer, ValidationError};
use regex::Regex;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::{LazyLock, OnceLock};

/// Named schema definitions.
pub(crate) type Definitions = BTreeMap<&'static str, Schema>;

/// A node in the structural schema.
#[derive(Debug, Clone)]
pub enum Schema {
    /// JSON object with known properties.
    Object(ObjectSchema),
    /// JSON array whose items all match the inner schema.
    Array(Box<Schema>),
    /// JSON string.
    String,
    /// JSON boolean.
    Boolean,
    /// JSON number, optionally bounded (inclusive).
    Number {
        /// Lower bound.
        min: Option<f64>,
        /// Upper bound.
        max: Option<f64>,
    },
    /// JSON integer within inclusive bounds.
    Integer {
        /// Lower bound.
        min: i64,
        /// Upper bound.
        max: i64,
    },
    /// Enum encoded as an integer within inclusive bounds.
    Enum {
        /// Lowest defined value.
        min: i64,
        /// Highest defined value.
        max: i64,
    },
    /// 64-bit integer encoded as a decimal string or a JSON number.
    Int64 {
        /// Whether negative values are allowed.
        signed: bool,
    },
    /// String matching a regular expression.
    Pattern(Pattern),
    /// Reference to a named definition, resolved at check time.
    Ref(&'static str),
}

/// A compiled string pattern with a readable description.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    regex: &'static Regex,
    description: &'static str,
}

static TRACE_ID: LazyLock<Regex> = LazyLock::new(|| hex_regex(32, false));
static SPAN_ID: LazyLock<Regex> = LazyLock::new(|| hex_regex(16, false));
static OPTIONAL_TRACE_ID: LazyLock<Regex> = LazyLock::new(|| hex_regex(32, true));
static OPTIONAL_SPAN_ID: LazyLock<Regex> = LazyLock::new(|| hex_regex(16, true));

/// Hex identifier of exactly `len` characters; optionally also the empty
/// string, which OTLP/JSON uses for "unset".
fn hex_regex(len: usize, allow_empty: bool) -> Regex {
    let source = if allow_empty {
        format!("^([0-9a-fA-F]{{{len}}})?$")
    } else {
        format!("^[0-9a-fA-F]{{{len}}}$")
    };
    Regex::new(&source).expect("hex identifier pattern is a valid regex")
}

impl Pattern {
    /// 32 hex characters.
    #[must_use]
    pub fn trace_id() -> Self {
        Self {
            regex: &TRACE_ID,
            description: "32 hex characters",
        }
    }

    /// 16 hex characters.
    #[must_use]
    pub fn span_id() -> Self {
        Self {
            regex: &SPAN_ID,
            description: "16 hex characters",
        }
    }

    /// 32 hex characters or the empty string.
    #[must_use]
    pub fn optional_trace_id() -> Self {
        Self {
            regex: &OPTIONAL_TRACE_ID,
            description: "32 hex characters",
        }
    }

    /// 16 hex characters or the empty string.
    #[must_use]
    pub fn optional_span_id() -> Self {
        Self {
            regex: &OPTIONAL_SPAN_ID,
            description: "16 hex characters",
        }
    }

    /// Returns true if `text` matches.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Returns the regular expression source.
    #[must_use]
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns the human-readable description.
    #[must_use]
    pub const fn description(&self) -> &str {
        self.description
    }
}

/// An object schema: ordered properties plus required property names.
#[derive(Debug, Clone, Default)]
pub struct ObjectSchema {
    properties: Vec<(&'static str, Schema)>,
    required: Vec<&'static str>,
}

impl ObjectSchema {
    /// Adds an optional property.
    #[must_use]
    pub fn property(mut self, name: &'static str, schema: impl Into<Schema>) -> Self {
        self.properties.push((name, schema.into()));
        self
    }

    /// Adds a required property.
    #[must_use]
    pub fn required(mut self, name: &'static str, schema: impl Into<Schema>) -> Self {
        self.required.push(name);
        self.property(name, schema)
    }

    /// Returns the properties in declaration order.
    #[must_use]
    pub fn properties(&self) -> &[(&'static str, Schema)] {
        &self.properties
    }

    /// Returns the required property names.
    #[must_use]
    pub fn required_names(&self) -> &[&'static str] {
        &self.required
    }
}

impl From<ObjectSchema> for Schema {
    fn from(object: ObjectSchema) -> Self {
        Self::Object(object)
    }
}

impl Schema {
    /// Starts an object schema.
    #[must_use]
    pub fn object() -> ObjectSchema {
        ObjectSchema::default()
    }

    /// Array of `items`.
    #[must_use]
    pub fn array(items: impl Into<Schema>) -> Self {
        Self::Array(Box::new(items.into()))
    }

    /// Array of a named definition.
    #[must_use]
    pub fn array_of(name: &'static str) -> Self {
        Self::array(Self::Ref(name))
    }

    /// Unbounded JSON number.
    #[must_use]
    pub const fn number() -> Self {
        Self::Number {
            min: None,
            max: None,
        }
    }

    /// `fixed32` / `uint32`.
    #[must_use]
    pub const fn uint32() -> Self {
        Self::Integer {
            min: 0,
            max: u32::MAX as i64,
        }
    }

    /// `sint32`.
    #[must_use]
    pub const fn sint32() -> Self {
        Self::Integer {
            min: i32::MIN as i64,
            max: i32::MAX as i64,
        }
    }

    /// `fixed64` / `uint64`, e.g. timestamps and counts.
    #[must_use]
    pub const fn uint64() -> Self {
        Self::Int64 { signed: false }
    }

    /// `int64` / `sfixed64`.
    #[must_use]
    pub const fn int64() -> Self {
        Self::Int64 { signed: true }
    }

    /// Integer enum with values `min..=max`.
    #[must_use]
    pub const fn enumeration(min: i64, max: i64) -> Self {
        Self::Enum { min, max }
    }

    /// 32-character trace identifier.
    #[must_use]
    pub fn trace_id() -> Self {
        Self::Pattern(Pattern::trace_id())
    }

    /// 16-character span identifier.
    #[must_use]
    pub fn span_id() -> Self {
        Self::Pattern(Pattern::span_id())
    }

    /// Trace identifier that may also be the empty string.
    #[must_use]
    pub fn optional_trace_id() -> Self {
        Self::Pattern(Pattern::optional_trace_id())
    }

    /// Span identifier that may also be the empty string.
    #[must_use]
    pub fn optional_span_id() -> Self {
        Self::Pattern(Pattern::optional_span_id())
    }
}

/// The compiled set of structural schemas for all payload types.
#[derive(Debug)]
pub struct SchemaSet {
    definitions: Definitions,
}

impl SchemaSet {
    /// Builds every definition.
    #[must_use]
    pub fn build() -> Self {
        let mut definitions = Definitions::new();
        common::register(&mut definitions);
        traces::register(&mut definitions);
        logs::register(&mut definitions);
        metrics::register(&mut definitions);

        tracing::debug!(
            definitions = definitions.len(),
            "Compiled structural schemas"
        );
        Self { definitions }
    }

    /// Returns the name of the root definition for a payload type.
    #[must_use]
    pub const fn root_name(payload_type: PayloadType) -> &'static str {
        match payload_type {
            PayloadType::Traces => traces::ROOT,
            PayloadType::Logs => logs::ROOT,
            PayloadType::Metrics => metrics::ROOT,
        }
    }

    /// Looks up a named definition.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&Schema> {
        self.definitions.get(name)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if no definitions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// True if a root definition exists for `payload_type`.
    #[must_use]
    pub fn supports(&self, payload_type: PayloadType) -> bool {
        self.definition(Self::root_name(payload_type)).is_some()
    }

    /// Checks `document` against the root schema for `payload_type`.
    ///
    /// Every violation is collected; checking never stops at the first one.
    #[must_use]
    pub fn check(&self, payload_type: PayloadType, document: &Value) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check::SchemaChecker::new(self).check(
            document,
            &Schema::Ref(Self::root_name(payload_type)),
            &JsonPointer::root(),
            "#",
            &mut errors,
        );
        errors
    }

    /// Returns every referenced definition name that is not defined.
    #[must_use]
    pub fn unresolved_references(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        for schema in self.definitions.values() {
            self.collect_unresolved(schema, &mut missing);
        }
        missing.sort_unstable();
        missing.dedup();
        missing
    }

    fn collect_unresolved(&self, schema: &Schema, missing: &mut Vec<&'static str>) {
        match schema {
            Schema::Ref(name) if !self.definitions.contains_key(name) => missing.push(*name),
            Schema::Array(items) => self.collect_unresolved(items, missing),
            Schema::Object(object) => {
                for (_, property) in object.properties() {
                    self.collect_unresolved(property, missing);
                }
            }
            _ => {}
        }
    }
}

/// Returns the process-wide schema set, building it on first use.
pub fn schemas() -> &'static SchemaSet {
    static SCHEMAS: OnceLock<SchemaSet> = OnceLock::new();
    SCHEMAS.get_or_init(SchemaSet::build)
}

/// Forces the schema set to be built now rather than on the first request.
pub fn init() -> &'static SchemaSet {
    let set = schemas();
    tracing::info!(
        definitions = set.definitions.len(),
        "Structural schemas ready"
    );
    set
}
