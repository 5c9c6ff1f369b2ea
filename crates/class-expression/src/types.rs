use crate::error::DecodeError;
use serde_json::Value;

/// A single value of the encoded input sequence.
///
/// The wire format carries only three primitive kinds; anything else a host
/// might hold (null, arrays, objects) is rejected at the conversion boundary
/// rather than during decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Num(f64),
    Str(String),
    Bool(bool),
}

impl Primitive {
    /// Returns the kind name of this primitive, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Num(_) => "number",
            Primitive::Str(_) => "string",
            Primitive::Bool(_) => "boolean",
        }
    }
}

impl From<f64> for Primitive {
    fn from(n: f64) -> Self {
        Primitive::Num(n)
    }
}

impl From<i64> for Primitive {
    fn from(n: i64) -> Self {
        Primitive::Num(n as f64)
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Primitive::Str(s)
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::Str(s.to_string())
    }
}

impl TryFrom<Value> for Primitive {
    type Error = DecodeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => Ok(Primitive::Num(n.as_f64().unwrap_or(f64::NAN))),
            Value::String(s) => Ok(Primitive::Str(s)),
            Value::Bool(b) => Ok(Primitive::Bool(b)),
            Value::Null => Err(DecodeError::TypeMismatch {
                expected: "number, string, or boolean",
                found: "null",
            }),
            Value::Array(_) => Err(DecodeError::TypeMismatch {
                expected: "number, string, or boolean",
                found: "array",
            }),
            Value::Object(_) => Err(DecodeError::TypeMismatch {
                expected: "number, string, or boolean",
                found: "object",
            }),
        }
    }
}
