//! Guards decide whether a constraint applies to a value at all.

use param_core::{Instance, Value};

/// A predicate deciding applicability of a constraint.
///
/// Any closure `Fn(&str, &Value, &dyn Instance) -> bool` is a guard.
pub trait Guard: Send + Sync {
    /// Returns true if the guarded constraint should run.
    fn test(&self, parameter: &str, value: &Value, instance: &dyn Instance) -> bool;
}

impl<F> Guard for F
where
    F: Fn(&str, &Value, &dyn Instance) -> bool + Send + Sync,
{
    fn test(&self, parameter: &str, value: &Value, instance: &dyn Instance) -> bool {
        self(parameter, value, instance)
    }
}

/// Guard that always applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Any;

impl Guard for Any {
    fn test(&self, _parameter: &str, _value: &Value, _instance: &dyn Instance) -> bool {
        true
    }
}

/// Guard that applies only to non-null values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Present;

impl Guard for Present {
    fn test(&self, _parameter: &str, value: &Value, _instance: &dyn Instance) -> bool {
        !value.is_null()
    }
}

/// The always-applies guard.
pub fn any() -> Any {
    Any
}

/// Pins a closure to the guard call shape so its argument types are inferred.
pub fn guard_fn<F>(f: F) -> F
where
    F: Fn(&str, &Value, &dyn Instance) -> bool + Send + Sync,
{
    f
}
