//! Leaf coercions beyond floats.

use param_core::{Instance, Value};
use tracing::debug;

use crate::error::{TransformError, TransformResult};
use crate::numeric::parse_integer;
use crate::transformation::Transformation;

/// Converts input into an integer. Floats are truncated toward zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsInteger;

impl AsInteger {
    fn coerce(value: &Value) -> Option<i64> {
        match value {
            Value::Int(i) => Some(*i),
            Value::Float(f) => {
                let whole = f.trunc();
                // i64::MAX as f64 rounds up to 2^63, which is out of range
                let in_range = whole >= i64::MIN as f64 && whole < i64::MAX as f64;
                (f.is_finite() && in_range).then_some(whole as i64)
            }
            Value::String(s) => parse_integer(s),
            _ => None,
        }
    }
}

impl Transformation for AsInteger {
    fn transform(
        &self,
        parameter: &str,
        value: Value,
        _instance: &dyn Instance,
    ) -> TransformResult<Value> {
        if value.is_null() {
            return Ok(value);
        }
        match Self::coerce(&value) {
            Some(i) => Ok(Value::Int(i)),
            None => {
                debug!(event = "coercion_failed", parameter, target = "Int", value = %value);
                Err(TransformError::coercion(parameter, value, "Int"))
            }
        }
    }
}

pub fn as_integer() -> AsInteger {
    AsInteger
}

/// Converts scalars into their string form. Lists are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AsString;

impl Transformation for AsString {
    fn transform(
        &self,
        parameter: &str,
        value: Value,
        _instance: &dyn Instance,
    ) -> TransformResult<Value> {
        match value {
            Value::Null | Value::String(_) => Ok(value),
            Value::Bool(b) => Ok(Value::String(b.to_string())),
            Value::Int(i) => Ok(Value::String(i.to_string())),
            Value::Float(f) => Ok(Value::String(f.to_string())),
            Value::List(_) => {
                debug!(event = "coercion_failed", parameter, target = "String", value = %value);
                Err(TransformError::coercion(parameter, value, "String"))
            }
        }
    }
}

pub fn as_string() -> AsString {
    AsString
}
