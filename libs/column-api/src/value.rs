use serde_json::Value;

use crate::error::{CoercionError, Target};

/// One node of a parsed semi-structured document.
///
/// This is the only view column appenders have of their input. Coercions are
/// strict: a number is never read as a string and a string is never parsed
/// as a number.
///
/// A missing field is modelled by the caller as `None`, not as a node.
pub trait Node {
    /// `true` for an explicit `null`.
    fn is_null(&self) -> bool;

    /// Read the node as a signed 32-bit integer.
    fn as_int(&self) -> Result<i32, CoercionError>;

    /// Read the node as a signed 64-bit integer.
    fn as_int64(&self) -> Result<i64, CoercionError>;

    /// Borrow the node as a string.
    fn as_string(&self) -> Result<&str, CoercionError>;
}

/// Short name of a JSON node type, used in coercion errors.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Node for Value {
    fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    fn as_int(&self) -> Result<i32, CoercionError> {
        let wide = integer(self, Target::Int32)?;
        i32::try_from(wide).map_err(|_| CoercionError::OutOfRange {
            expected: Target::Int32,
            value: wide.to_string(),
        })
    }

    fn as_int64(&self) -> Result<i64, CoercionError> {
        integer(self, Target::Int64)
    }

    fn as_string(&self) -> Result<&str, CoercionError> {
        match self {
            Value::String(s) => Ok(s),
            other => Err(CoercionError::Mismatch {
                expected: Target::String,
                found: type_name(other),
            }),
        }
    }
}

/// Integer nodes only; floats (even `3.0`) are a type mismatch.
fn integer(value: &Value, expected: Target) -> Result<i64, CoercionError> {
    match value {
        Value::Number(n) if !n.is_f64() => n.as_i64().ok_or_else(|| CoercionError::OutOfRange {
            expected,
            value: n.to_string(),
        }),
        other => Err(CoercionError::Mismatch {
            expected,
            found: type_name(other),
        }),
    }
}

#[cfg(test)]
#[path = "value_test.rs"]
mod value_test;
