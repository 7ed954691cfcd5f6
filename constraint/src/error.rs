//! Constraint error types.

use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Errors that can occur during constraint checking.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConstraintError {
    #[error("Invalid value for parameter {parameter}{}", describe(.description))]
    Violated {
        parameter: String,
        description: Option<String>,
    },

    #[error("Invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}

fn describe(description: &Option<String>) -> String {
    match description {
        Some(d) => format!(": {}", d),
        None => String::new(),
    }
}

impl ConstraintError {
    /// A violation without a description.
    pub fn violated(parameter: impl Into<String>) -> Self {
        Self::Violated {
            parameter: parameter.into(),
            description: None,
        }
    }

    /// A violation carrying a human-readable description.
    pub fn violated_with(parameter: impl Into<String>, description: impl Into<String>) -> Self {
        Self::Violated {
            parameter: parameter.into(),
            description: Some(description.into()),
        }
    }

    pub fn invalid_pattern(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// The parameter a violation was raised for.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::Violated { parameter, .. } => Some(parameter),
            Self::InvalidPattern { .. } => None,
        }
    }

    /// The description attached to a violation, if any.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Violated { description, .. } => description.as_deref(),
            Self::InvalidPattern { .. } => None,
        }
    }
}
