use serde_json::Value;
use thiserror::Error;

/// The six JSON shapes, used to report what a value actually was when a
/// union rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl std::fmt::Display for JsonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by the union value types.
///
/// `Format` is raised eagerly while parsing a JSON value whose shape matches
/// none of the union's arms. `TypeMismatch` is raised lazily, only when an
/// accessor asks for a view the stored arm cannot provide. A value that
/// parsed cleanly can always be re-serialized without hitting either.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("expected {expected}, got {found}")]
    Format {
        expected: &'static str,
        found: JsonKind,
    },

    #[error("value stored as {stored} cannot be read as {requested}")]
    TypeMismatch {
        stored: &'static str,
        requested: &'static str,
    },
}

impl ValueError {
    pub(crate) fn format(expected: &'static str, value: &Value) -> Self {
        ValueError::Format {
            expected,
            found: JsonKind::of(value),
        }
    }

    pub(crate) fn mismatch(stored: &'static str, requested: &'static str) -> Self {
        ValueError::TypeMismatch { stored, requested }
    }
}

#[cfg(test)]
mod tests {
    use super::{JsonKind, ValueError};
    use serde_json::json;

    #[test]
    fn kind_classification_covers_all_shapes() {
        let cases = [
            (json!(null), JsonKind::Null),
            (json!(true), JsonKind::Bool),
            (json!(7), JsonKind::Number),
            (json!("a"), JsonKind::String),
            (json!([1]), JsonKind::Array),
            (json!({}), JsonKind::Object),
        ];

        for (value, kind) in cases {
            assert_eq!(JsonKind::of(&value), kind);
        }
    }

    #[test]
    fn messages_name_both_sides() {
        let err = ValueError::format("string or number", &json!({}));
        assert_eq!(err.to_string(), "expected string or number, got object");

        let err = ValueError::mismatch("string", "number");
        assert_eq!(
            err.to_string(),
            "value stored as string cannot be read as number"
        );
    }
}
