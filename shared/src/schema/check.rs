//! Walks a document alongside a schema and records violations.

use super::{ObjectSchema, Schema, SchemaSet};
use crate::models::json_integer;
use crate::validation::{ErrorKeyword, JsonPointer, ValidationError};
use serde_json::Value;

pub(super) struct SchemaChecker<'s> {
    set: &'s SchemaSet,
}

impl<'s> SchemaChecker<'s> {
    pub(super) const fn new(set: &'s SchemaSet) -> Self {
        Self { set }
    }

    pub(super) fn check(
        &self,
        value: &Value,
        schema: &Schema,
        path: &JsonPointer,
        schema_path: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        match schema {
            Schema::Object(object) => self.check_object(value, object, path, schema_path, errors),
            Schema::Array(items) => {
                let Some(elements) = value.as_array() else {
                    errors.push(type_error(path, schema_path, "an array", value));
                    return;
                };
                let items_path = format!("{schema_path}/items");
                for (i, element) in elements.iter().enumerate() {
                    self.check(element, items, &path.index(i), &items_path, errors);
                }
            }
            Schema::String => {
                if !value.is_string() {
                    errors.push(type_error(path, schema_path, "a string", value));
                }
            }
            Schema::Boolean => {
                if !value.is_boolean() {
                    errors.push(type_error(path, schema_path, "a boolean", value));
                }
            }
            Schema::Number { min, max } => {
                let Some(number) = value.as_f64() else {
                    errors.push(type_error(path, schema_path, "a number", value));
                    return;
                };
                let below = min.is_some_and(|min| number < min);
                let above = max.is_some_and(|max| number > max);
                if below || above {
                    errors.push(ValidationError::new(
                        path.to_string(),
                        format!(
                            "must be between {} and {}, got {number}",
                            min.map_or_else(|| "-inf".to_string(), |m| m.to_string()),
                            max.map_or_else(|| "inf".to_string(), |m| m.to_string()),
                        ),
                        ErrorKeyword::Range,
                        format!("{schema_path}/range"),
                    ));
                }
            }
            Schema::Integer { min, max } => {
                let Some(number) = json_integer(value) else {
                    errors.push(type_error(path, schema_path, "an integer", value));
                    return;
                };
                if number < i128::from(*min) || number > i128::from(*max) {
                    errors.push(ValidationError::new(
                        path.to_string(),
                        format!("must be between {min} and {max}, got {number}"),
                        ErrorKeyword::Range,
                        format!("{schema_path}/range"),
                    ));
                }
            }
            Schema::Enum { min, max } => {
                let Some(number) = json_integer(value) else {
                    let expected = format!("an integer enum value between {min} and {max}");
                    errors.push(type_error(path, schema_path, &expected, value));
                    return;
                };
                if number < i128::from(*min) || number > i128::from(*max) {
                    errors.push(ValidationError::new(
                        path.to_string(),
                        format!("must be one of {min}..={max}, got {number}"),
                        ErrorKeyword::Enum,
                        format!("{schema_path}/enum"),
                    ));
                }
            }
            Schema::Int64 { signed } => check_int64(value, *signed, path, schema_path, errors),
            Schema::Pattern(pattern) => {
                let Some(text) = value.as_str() else {
                    errors.push(type_error(path, schema_path, "a string", value));
                    return;
                };
                if !pattern.is_match(text) {
                    errors.push(ValidationError::new(
                        path.to_string(),
                        format!(
                            "must match pattern {} ({}), got \"{text}\"",
                            pattern.source(),
                            pattern.description()
                        ),
                        ErrorKeyword::Pattern,
                        format!("{schema_path}/pattern"),
                    ));
                }
            }
            Schema::Ref(name) => match self.set.definition(name) {
                Some(definition) => {
                    let definition_path = format!("#/definitions/{name}");
                    self.check(value, definition, path, &definition_path, errors);
                }
                None => {
                    tracing::error!(definition = *name, "Unresolved schema reference");
                }
            },
        }
    }

    fn check_object(
        &self,
        value: &Value,
        object: &ObjectSchema,
        path: &JsonPointer,
        schema_path: &str,
        errors: &mut Vec<ValidationError>,
    ) {
        let Some(map) = value.as_object() else {
            errors.push(type_error(path, schema_path, "an object", value));
            return;
        };

        for name in object.required_names() {
            if map.get(*name).is_none_or(Value::is_null) {
                errors.push(ValidationError::new(
                    path.to_string(),
                    format!("missing required property '{name}'"),
                    ErrorKeyword::Required,
                    format!("{schema_path}/required"),
                ));
            }
        }

        // A null optional field is treated as absent.
        for (name, property) in object.properties() {
            let Some(child) = map.get(*name).filter(|v| !v.is_null()) else {
                continue;
            };
            let property_path = format!("{schema_path}/properties/{name}");
            self.check(child, property, &path.field(name), &property_path, errors);
        }
    }
}

fn check_int64(
    value: &Value,
    signed: bool,
    path: &JsonPointer,
    schema_path: &str,
    errors: &mut Vec<ValidationError>,
) {
    let kind = if signed { "int64" } else { "uint64" };
    match value {
        Value::String(text) => {
            let text = text.as_str();
            let digits = if signed {
                text.strip_prefix('-').unwrap_or(text)
            } else {
                text
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                let pattern = if signed { "^-?[0-9]+$" } else { "^[0-9]+$" };
                errors.push(ValidationError::new(
                    path.to_string(),
                    format!("must be a decimal {kind} string matching {pattern}, got \"{text}\""),
                    ErrorKeyword::Pattern,
                    format!("{schema_path}/pattern"),
                ));
            }
        }
        Value::Number(_) => {
            let Some(number) = json_integer(value) else {
                errors.push(type_error(
                    path,
                    schema_path,
                    &format!("an {kind} (decimal string or integer)"),
                    value,
                ));
                return;
            };
            if !signed && number < 0 {
                errors.push(ValidationError::new(
                    path.to_string(),
                    format!("must be a non-negative {kind}, got {number}"),
                    ErrorKeyword::Range,
                    format!("{schema_path}/range"),
                ));
            }
        }
        _ => errors.push(type_error(
            path,
            schema_path,
            &format!("an {kind} (decimal string or integer)"),
            value,
        )),
    }
}

fn type_error(
    path: &JsonPointer,
    schema_path: &str,
    expected: &str,
    actual: &Value,
) -> ValidationError {
    ValidationError::new(
        path.to_string(),
        format!("must be {expected}, got {}", describe(actual)),
        ErrorKeyword::Type,
        format!("{schema_path}/type"),
    )
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "boolean".to_string(),
        Value::Number(n) if n.is_f64() => "number".to_string(),
        Value::Number(_) => "integer".to_string(),
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(schema: &Schema, value: &Value) -> Vec<ValidationError> {
        let set = SchemaSet::build();
        let mut errors = Vec::new();
        SchemaChecker::new(&set).check(value, schema, &JsonPointer::root(), "#", &mut errors);
        errors
    }

    #[test]
    fn test_int64_accepts_string_and_number() {
        let schema = Schema::int64();
        assert!(run(&schema, &json!("123456789012345")).is_empty());
        assert!(run(&schema, &json!(123_456_789_012_345_i64)).is_empty());
        assert!(run(&schema, &json!("-42")).is_empty());
        assert!(run(&schema, &json!(-42)).is_empty());
    }

    #[test]
    fn test_int64_rejects_other_types() {
        let schema = Schema::int64();
        let errors = run(&schema, &json!(true));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].keyword, ErrorKeyword::Type);

        let errors = run(&schema, &json!(1.5));
        assert_eq!(errors[0].keyword, ErrorKeyword::Type);

        let errors = run(&schema, &json!("12a"));
        assert_eq!(errors[0].keyword, ErrorKeyword::Pattern);
        assert_eq!(errors[0].schema_path, "#/pattern");
    }

    #[test]
    fn test_uint64_rejects_negative() {
        let schema = Schema::uint64();
        let errors = run(&schema, &json!(-1));
        assert_eq!(errors[0].keyword, ErrorKeyword::Range);

        let errors = run(&schema, &json!("-1"));
        assert_eq!(errors[0].keyword, ErrorKeyword::Pattern);

        assert!(run(&schema, &json!("18446744073709551615")).is_empty());
    }

    #[test]
    fn test_enum_string_is_type_error() {
        let schema = Schema::enumeration(0, 5);
        let errors = run(&schema, &json!("SERVER"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].keyword, ErrorKeyword::Type);
        assert!(errors[0].message.contains("SERVER"));
    }

    #[test]
    fn test_enum_out_of_range() {
        let schema = Schema::enumeration(0, 2);
        let errors = run(&schema, &json!(3));
        assert_eq!(errors[0].keyword, ErrorKeyword::Enum);
        assert_eq!(errors[0].schema_path, "#/enum");
        assert!(run(&schema, &json!(2)).is_empty());
        assert!(run(&schema, &json!(2.0)).is_empty());
    }

    #[test]
    fn test_uint32_range() {
        let schema = Schema::uint32();
        assert_eq!(run(&schema, &json!(-1))[0].keyword, ErrorKeyword::Range);
        assert_eq!(
            run(&schema, &json!(4_294_967_296_u64))[0].keyword,
            ErrorKeyword::Range
        );
        assert!(run(&schema, &json!(4_294_967_295_u64)).is_empty());
    }

    #[test]
    fn test_object_required_and_unknown_fields() {
        let schema: Schema = Schema::object()
            .required("key", Schema::String)
            .property("value", Schema::Boolean)
            .into();

        let errors = run(&schema, &json!({"value": true, "extra": [1, 2, 3]}));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].keyword, ErrorKeyword::Required);
        assert_eq!(errors[0].path, "/");
        assert_eq!(errors[0].schema_path, "#/required");

        assert!(run(&schema, &json!({"key": "k", "unknown": {}})).is_empty());
    }

    #[test]
    fn test_null_optional_field_is_absent() {
        let schema: Schema = Schema::object().property("name", Schema::String).into();
        assert!(run(&schema, &json!({"name": null})).is_empty());
    }

    #[test]
    fn test_array_items_paths() {
        let schema = Schema::array(Schema::String);
        let errors = run(&schema, &json!(["a", 1, "b", false]));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].path, "/1");
        assert_eq!(errors[1].path, "/3");
        assert_eq!(errors[0].schema_path, "#/items/type");
    }

    #[test]
    fn test_ref_restarts_schema_path() {
        let errors = run(&Schema::Ref("KeyValue"), &json!({"key": 5}));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].path, "/key");
        assert_eq!(
            errors[0].schema_path,
            "#/definitions/KeyValue/properties/key/type"
        );
    }

    #[test]
    fn test_bounded_number() {
        let schema = Schema::Number {
            min: Some(0.0),
            max: Some(1.0),
        };
        assert!(run(&schema, &json!(0.5)).is_empty());
        assert_eq!(run(&schema, &json!(1.5))[0].keyword, ErrorKeyword::Range);
        assert_eq!(run(&schema, &json!("0.5"))[0].keyword, ErrorKeyword::Type);
    }
}
