//! Float coercion.

use std::sync::{Arc, OnceLock};

use param_core::{Instance, Value};
use tracing::debug;

use crate::error::{TransformError, TransformResult};
use crate::numeric::parse_float;
use crate::transformation::Transformation;

static SHARED: OnceLock<Arc<AsFloat>> = OnceLock::new();

/// Converts numeric input into a float.
///
/// Ints and numeric-looking strings are accepted; null passes through
/// unchanged. The type is stateless, so one process-wide instance is shared
/// by every parameter that asks for it.
///
/// ```
/// use param_core::{params, Parameters, Value};
/// use param_transform::{as_float, Transformation};
///
/// let piece: Parameters = params!();
/// assert_eq!(as_float().transform("param", Value::Null, &piece), Ok(Value::Null));
/// assert_eq!(as_float().transform("param", Value::from("23.0"), &piece), Ok(Value::Float(23.0)));
/// ```
#[derive(Debug)]
pub struct AsFloat {
    _private: (),
}

impl AsFloat {
    /// The shared instance.
    pub fn shared() -> Arc<AsFloat> {
        Arc::clone(SHARED.get_or_init(|| Arc::new(AsFloat { _private: () })))
    }

    fn coerce(value: &Value) -> Option<f64> {
        match value {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            Value::String(s) => parse_float(s),
            _ => None,
        }
    }
}

impl Transformation for AsFloat {
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
            Some(f) => Ok(Value::Float(f)),
            None => {
                debug!(
                    event = "coercion_failed",
                    parameter,
                    target = "Float",
                    value = %value,
                );
                Err(TransformError::coercion(parameter, value, "Float"))
            }
        }
    }
}

/// The shared float transformation.
pub fn as_float() -> Arc<AsFloat> {
    AsFloat::shared()
}
