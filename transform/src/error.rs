//! Transformation error types.

use param_core::Value;
use thiserror::Error;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Errors that can occur while transforming a parameter value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("Cannot coerce {value} into {target} for parameter {parameter}")]
    Coercion {
        parameter: String,
        value: Value,
        target: &'static str,
    },
}

impl TransformError {
    pub fn coercion(parameter: impl Into<String>, value: Value, target: &'static str) -> Self {
        Self::Coercion {
            parameter: parameter.into(),
            value,
            target,
        }
    }

    /// The parameter the failure was raised for.
    pub fn parameter(&self) -> &str {
        match self {
            Self::Coercion { parameter, .. } => parameter,
        }
    }

    /// The raw value that could not be transformed.
    pub fn value(&self) -> &Value {
        match self {
            Self::Coercion { value, .. } => value,
        }
    }
}
