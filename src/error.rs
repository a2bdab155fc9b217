//! Pipeline errors.
//!
//! Every stage fails with an [`AddError`]. Nothing is recovered: the first
//! error aborts the run and is reported by the binary with exit status 1.
//!
//! | Variant | Kind |
//! |---------|------|
//! | [`AddError::Read`] | [`ErrorKind::Read`] |
//! | [`AddError::Write`] | [`ErrorKind::Write`] |
//! | [`AddError::Parse`] | [`ErrorKind::Parse`] |
//! | [`AddError::MissingField`] | [`ErrorKind::MissingField`] |
//! | [`AddError::Type`] | [`ErrorKind::Type`] |
//! | [`AddError::NotAnObject`] | [`ErrorKind::Type`] |

use serde_json::Value;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddError {
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to parse input as JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("field '{field}' is {found}, expected a number")]
    Type {
        field: &'static str,
        found: JsonKind,
    },

    #[error("input document is {found}, expected an object")]
    NotAnObject { found: JsonKind },
}

/// Coarse error category, one per failure class of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Read,
    Write,
    Parse,
    MissingField,
    Type,
}

impl AddError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Read(_) => ErrorKind::Read,
            Self::Write(_) => ErrorKind::Write,
            Self::Parse(_) => ErrorKind::Parse,
            Self::MissingField(_) => ErrorKind::MissingField,
            Self::Type { .. } | Self::NotAnObject { .. } => ErrorKind::Type,
        }
    }
}

/// The JSON type of a value, used in type error messages.
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
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Bool,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "a boolean",
            Self::Number => "a number",
            Self::String => "a string",
            Self::Array => "an array",
            Self::Object => "an object",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_kind_of_each_value() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(false)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&json!(1)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([1])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn messages_name_the_field() {
        assert_eq!(AddError::MissingField("b").to_string(), "missing field 'b'");

        let err = AddError::Type {
            field: "a",
            found: JsonKind::String,
        };
        assert_eq!(err.to_string(), "field 'a' is a string, expected a number");

        let err = AddError::NotAnObject {
            found: JsonKind::Array,
        };
        assert_eq!(err.to_string(), "input document is an array, expected an object");
    }

    #[test]
    fn not_an_object_is_a_type_error() {
        let err = AddError::NotAnObject {
            found: JsonKind::Null,
        };
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn parse_error_converts_from_serde_json() {
        let err: AddError = serde_json::from_str::<Value>("{").unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(err.to_string().starts_with("failed to parse input as JSON"));
    }
}
