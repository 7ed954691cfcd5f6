//! Error types for the parameter pipeline.

use param_constraint::ConstraintError;
use param_transform::TransformError;
use thiserror::Error;

/// Result type for parameter resolution.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Errors raised while resolving a parameter value.
///
/// Unit failures are carried unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// The transformation could not coerce the raw value.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// The transformed value was rejected by the constraint.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

impl ParameterError {
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint(_))
    }

    pub fn is_transform(&self) -> bool {
        matches!(self, Self::Transform(_))
    }
}
