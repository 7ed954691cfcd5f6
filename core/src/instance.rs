//! The owning instance a parameter belongs to.
//!
//! Constraints and transformations are evaluated against a value in the
//! context of the object that declares the parameter, so a unit can look at
//! sibling parameters of the same object. The instance is always passed in
//! explicitly.

use crate::{Parameters, Value};

/// An object owning named parameters.
pub trait Instance: Send + Sync {
    /// Name of the declaring type, used in diagnostics.
    fn type_name(&self) -> &str {
        "Instance"
    }

    /// Get the current value of a sibling parameter.
    fn parameter(&self, name: &str) -> Option<&Value>;

    /// Check whether a sibling parameter is present and not null.
    fn has_parameter(&self, name: &str) -> bool {
        self.parameter(name).is_some_and(|v| !v.is_null())
    }
}

impl Instance for Parameters {
    fn type_name(&self) -> &str {
        "Parameters"
    }

    fn parameter(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }
}
