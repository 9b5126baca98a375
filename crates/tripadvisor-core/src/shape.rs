//! Declarative object shapes and the validator that interprets them.
//!
//! A [`Shape`] lists the fields an object is expected to carry. The same
//! validator checks outbound request parameters and inbound response bodies;
//! only the [`Direction`] recorded on failure differs.
//!
//! ```rust
//! use serde_json::json;
//! use tripadvisor_core::shape::{validate, Field, FieldType, Shape};
//! use tripadvisor_core::Direction;
//!
//! static GREETING: Shape = Shape::new(
//!     "greeting",
//!     &[
//!         Field::required("name", FieldType::String),
//!         Field::with_default("lang", "en"),
//!     ],
//! );
//!
//! let value = validate(&GREETING, &json!({"name": "Ada"}), Direction::Request).unwrap();
//! assert_eq!(value, json!({"name": "Ada", "lang": "en"}));
//! ```

use crate::error::{Direction, Result, TripAdvisorError};
use serde_json::{Map, Value};
use std::fmt;

/// Expected fields of a JSON object
#[derive(Debug)]
pub struct Shape {
    /// Name used in error messages
    pub name: &'static str,
    /// Declared fields, in declaration order
    pub fields: &'static [Field],
    /// Reject fields that are not declared
    pub deny_unknown: bool,
}

impl Shape {
    /// A shape that lets undeclared fields pass through unchanged
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self {
            name,
            fields,
            deny_unknown: false,
        }
    }

    /// A shape that rejects undeclared fields
    #[must_use]
    pub const fn strict(name: &'static str, fields: &'static [Field]) -> Self {
        Self {
            name,
            fields,
            deny_unknown: true,
        }
    }

    /// Look up a declared field by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// One declared field of a [`Shape`]
#[derive(Debug)]
pub struct Field {
    /// JSON key
    pub name: &'static str,
    /// Expected value type
    pub ty: FieldType,
    /// Whether the field must be present
    pub presence: Presence,
}

impl Field {
    /// A field that must be present and non-null
    #[must_use]
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            presence: Presence::Required,
        }
    }

    /// A field that may be absent or null
    #[must_use]
    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            presence: Presence::Optional,
        }
    }

    /// A string field that takes `default` when absent or null
    #[must_use]
    pub const fn with_default(name: &'static str, default: &'static str) -> Self {
        Self {
            name,
            ty: FieldType::String,
            presence: Presence::Default(DefaultValue::Str(default)),
        }
    }

    /// An integer field that takes `default` when absent or null
    #[must_use]
    pub const fn with_int_default(name: &'static str, default: i64) -> Self {
        Self {
            name,
            ty: FieldType::Integer,
            presence: Presence::Default(DefaultValue::Int(default)),
        }
    }

    /// A boolean field that takes `default` when absent or null
    #[must_use]
    pub const fn with_bool_default(name: &'static str, default: bool) -> Self {
        Self {
            name,
            ty: FieldType::Boolean,
            presence: Presence::Default(DefaultValue::Bool(default)),
        }
    }
}

/// Presence rule for a field
#[derive(Debug, Clone, Copy)]
pub enum Presence {
    /// Must be present and non-null
    Required,
    /// May be absent or null
    Optional,
    /// Filled with the given value when absent or null
    Default(DefaultValue),
}

/// Value applied for a defaulted field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DefaultValue {
    /// A string default
    Str(&'static str),
    /// An integer default
    Int(i64),
    /// A boolean default
    Bool(bool),
}

impl DefaultValue {
    fn to_value(self) -> Value {
        match self {
            Self::Str(s) => Value::String(s.to_string()),
            Self::Int(i) => Value::from(i),
            Self::Bool(b) => Value::Bool(b),
        }
    }
}

/// Expected type of a field value
#[derive(Debug)]
pub enum FieldType {
    /// Any JSON string
    String,
    /// A JSON number without a fractional part
    Integer,
    /// Any JSON number
    Number,
    /// `true` or `false`
    Boolean,
    /// A string or an integer; the API is inconsistent about ids and counts
    StringOrInteger,
    /// One of a fixed set of strings
    Enum(&'static [&'static str]),
    /// An array whose elements all have the given type
    Array(&'static FieldType),
    /// A nested object
    Object(&'static Shape),
    /// Anything, including null
    Any,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Integer => write!(f, "integer"),
            Self::Number => write!(f, "number"),
            Self::Boolean => write!(f, "boolean"),
            Self::StringOrInteger => write!(f, "string or integer"),
            Self::Enum(allowed) => write!(f, "one of [{}]", allowed.join(", ")),
            Self::Array(elem) => write!(f, "array of {elem}"),
            Self::Object(shape) => write!(f, "{} object", shape.name),
            Self::Any => write!(f, "any value"),
        }
    }
}

/// Validate `value` against `shape`.
///
/// Returns the validated object: declared fields are type-checked, defaults
/// are filled in after the fields that were present, and undeclared fields
/// pass through untouched unless the shape is strict. Field order of the
/// input is preserved.
pub fn validate(shape: &Shape, value: &Value, direction: Direction) -> Result<Value> {
    check_object(shape, value, "").map_err(|message| TripAdvisorError::Validation {
        direction,
        message,
    })
}

fn check_object(shape: &Shape, value: &Value, path: &str) -> std::result::Result<Value, String> {
    let Value::Object(input) = value else {
        return Err(format!(
            "{}: expected {} object, found {}",
            display_path(path),
            shape.name,
            kind_of(value)
        ));
    };

    for field in shape.fields {
        if matches!(field.presence, Presence::Required)
            && input.get(field.name).map_or(true, Value::is_null)
        {
            return Err(format!(
                "{}: missing required field",
                join(path, field.name)
            ));
        }
    }

    let mut output = Map::with_capacity(input.len());
    for (name, item) in input {
        let Some(field) = shape.field(name) else {
            if shape.deny_unknown {
                return Err(format!("{}: unknown field", join(path, name)));
            }
            output.insert(name.clone(), item.clone());
            continue;
        };

        let checked = match (item, field.presence) {
            (Value::Null, Presence::Default(default)) => default.to_value(),
            (Value::Null, _) => Value::Null,
            _ => check_value(&field.ty, item, &join(path, name))?,
        };
        output.insert(name.clone(), checked);
    }

    for field in shape.fields {
        if let Presence::Default(default) = field.presence {
            if !output.contains_key(field.name) {
                output.insert(field.name.to_string(), default.to_value());
            }
        }
    }

    Ok(Value::Object(output))
}

fn check_value(ty: &FieldType, value: &Value, path: &str) -> std::result::Result<Value, String> {
    match (ty, value) {
        (FieldType::Any, _)
        | (FieldType::String | FieldType::StringOrInteger, Value::String(_))
        | (FieldType::Number, Value::Number(_))
        | (FieldType::Boolean, Value::Bool(_)) => Ok(value.clone()),
        (FieldType::Integer | FieldType::StringOrInteger, Value::Number(n))
            if n.is_i64() || n.is_u64() =>
        {
            Ok(value.clone())
        }
        (FieldType::Enum(allowed), Value::String(s)) => {
            if allowed.contains(&s.as_str()) {
                Ok(value.clone())
            } else {
                Err(format!("{path}: expected {ty}, found \"{s}\""))
            }
        }
        (FieldType::Array(elem), Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| check_value(elem, item, &format!("{path}[{i}]")))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(Value::Array),
        (FieldType::Object(shape), Value::Object(_)) => check_object(shape, value, path),
        _ => Err(format!("{path}: expected {ty}, found {}", kind_of(value))),
    }
}

fn join(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "<root>"
    } else {
        path
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    static INNER: Shape = Shape::new(
        "inner",
        &[
            Field::required("id", FieldType::StringOrInteger),
            Field::optional("label", FieldType::String),
        ],
    );

    static OUTER: Shape = Shape::new(
        "outer",
        &[
            Field::required("query", FieldType::String),
            Field::optional("limit", FieldType::Integer),
            Field::optional("radius", FieldType::Number),
            Field::optional("unit", FieldType::Enum(&["km", "mi", "m"])),
            Field::optional("items", FieldType::Array(&FieldType::Object(&INNER))),
            Field::with_default("language", "en"),
        ],
    );

    static PAGE: Shape = Shape::new(
        "page",
        &[
            Field::with_int_default("limit", 5),
            Field::with_bool_default("expand", false),
        ],
    );

    static STRICT: Shape = Shape::strict("strict", &[Field::optional("a", FieldType::Boolean)]);

    fn request(shape: &Shape, value: &Value) -> Result<Value> {
        validate(shape, value, Direction::Request)
    }

    #[test]
    fn test_applies_default_after_present_fields() {
        let out = request(&OUTER, &json!({"query": "Paris", "limit": 5})).unwrap();
        let keys: Vec<&String> = out.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["query", "limit", "language"]);
        assert_eq!(out["language"], "en");
    }

    #[test]
    fn test_explicit_value_beats_default() {
        let out = request(&OUTER, &json!({"language": "fr", "query": "Lyon"})).unwrap();
        assert_eq!(out, json!({"language": "fr", "query": "Lyon"}));
    }

    #[test]
    fn test_null_default_is_filled_in_place() {
        let out = request(&OUTER, &json!({"language": null, "query": "Rome"})).unwrap();
        assert_eq!(out, json!({"language": "en", "query": "Rome"}));
    }

    #[test]
    fn test_missing_required_field() {
        let err = request(&OUTER, &json!({"limit": 3})).unwrap_err();
        assert_eq!(
            err,
            TripAdvisorError::Validation {
                direction: Direction::Request,
                message: "query: missing required field".into(),
            }
        );
    }

    #[test]
    fn test_null_required_field_counts_as_missing() {
        let err = request(&OUTER, &json!({"query": null})).unwrap_err();
        assert!(err.to_string().contains("query: missing required field"));
    }

    #[test]
    fn test_type_mismatch() {
        let err = request(&OUTER, &json!({"query": 42})).unwrap_err();
        assert!(err.to_string().ends_with("query: expected string, found number"));

        let err = request(&OUTER, &json!({"query": "x", "limit": 2.5})).unwrap_err();
        assert!(err.to_string().ends_with("limit: expected integer, found number"));
    }

    #[test]
    fn test_enum_rejects_unlisted_value() {
        let err = request(&OUTER, &json!({"query": "x", "unit": "furlong"})).unwrap_err();
        assert!(err
            .to_string()
            .ends_with("unit: expected one of [km, mi, m], found \"furlong\""));
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let out = request(&OUTER, &json!({"query": "x", "extra": {"nested": true}})).unwrap();
        assert_eq!(out["extra"], json!({"nested": true}));
    }

    #[test]
    fn test_strict_shape_rejects_unknown_fields() {
        let err = request(&STRICT, &json!({"a": true, "b": 1})).unwrap_err();
        assert!(err.to_string().ends_with("b: unknown field"));
    }

    #[test]
    fn test_nested_paths_in_errors() {
        let value = json!({"query": "x", "items": [{"id": 1}, {"label": "no id"}]});
        let err = validate(&OUTER, &value, Direction::Response).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid response payload: items[1].id: missing required field"
        );
    }

    #[test]
    fn test_string_or_integer() {
        assert!(request(&INNER, &json!({"id": "60745"})).is_ok());
        assert!(request(&INNER, &json!({"id": 60745})).is_ok());
        assert!(request(&INNER, &json!({"id": 1.5})).is_err());
    }

    #[test]
    fn test_non_object_root() {
        let err = request(&OUTER, &json!([1, 2])).unwrap_err();
        assert!(err
            .to_string()
            .ends_with("<root>: expected outer object, found array"));
    }

    #[test]
    fn test_optional_null_is_kept_absent() {
        let out = request(&OUTER, &json!({"query": "x", "limit": null})).unwrap();
        assert_eq!(out["limit"], Value::Null);
    }

    #[test]
    fn test_typed_defaults() {
        let out = request(&PAGE, &json!({})).unwrap();
        assert_eq!(out, json!({"limit": 5, "expand": false}));

        let err = request(&PAGE, &json!({"limit": "five"})).unwrap_err();
        assert!(err.to_string().ends_with("limit: expected integer, found string"));

        let err = request(&PAGE, &json!({"expand": 1})).unwrap_err();
        assert!(err.to_string().ends_with("expand: expected boolean, found number"));
    }
}
