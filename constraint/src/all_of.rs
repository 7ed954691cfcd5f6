//! Aggregate constraint.

use param_core::{Instance, Value};
use tracing::debug;

use crate::constraint::Constraint;
use crate::error::ConstraintResult;
use crate::guard::{Any, Guard};

/// Requires every contained constraint to accept the value.
///
/// Units run in declaration order, each through its own `evaluate`, so a
/// sub-unit's guard is honored individually. The first failure is returned
/// as-is and the remaining units are not invoked.
///
/// ```
/// use param_constraint::{all_of, not_nil, satisfies, Constraint};
/// use param_core::{params, Parameters, Value};
///
/// let moderate = all_of(vec![
///     Box::new(not_nil()),
///     Box::new(satisfies("Should be moderate", |v| v.lt(&Value::Int(100)))),
/// ]);
/// let piece: Parameters = params!();
///
/// assert!(moderate.evaluate("param1", &Value::Int(50), &piece).is_ok());
/// assert!(moderate.evaluate("param1", &Value::Null, &piece).is_err());
/// assert!(moderate.evaluate("param1", &Value::Int(200), &piece).is_err());
/// ```
pub struct AllOf {
    constraints: Vec<Box<dyn Constraint>>,
    guard: Box<dyn Guard>,
}

impl AllOf {
    /// Create an aggregate over `constraints`. Its own guard always applies.
    pub fn new(constraints: Vec<Box<dyn Constraint>>) -> Self {
        Self {
            constraints,
            guard: Box::new(Any),
        }
    }

    /// Append a constraint to the sequence.
    pub fn with(mut self, constraint: impl Constraint + 'static) -> Self {
        self.constraints.push(Box::new(constraint));
        self
    }

    /// Replace the aggregate's guard.
    pub fn when(mut self, guard: impl Guard + 'static) -> Self {
        self.guard = Box::new(guard);
        self
    }

    /// The contained constraints in evaluation order.
    pub fn constraints(&self) -> &[Box<dyn Constraint>] {
        &self.constraints
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }
}

impl Default for AllOf {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Constraint for AllOf {
    fn guard(&self) -> Option<&dyn Guard> {
        Some(self.guard.as_ref())
    }

    fn check(
        &self,
        parameter: &str,
        value: &Value,
        instance: &dyn Instance,
    ) -> ConstraintResult<()> {
        for (index, constraint) in self.constraints.iter().enumerate() {
            if let Err(e) = constraint.evaluate(parameter, value, instance) {
                debug!(
                    event = "all_of_failed",
                    parameter,
                    unit = index,
                    units = self.constraints.len(),
                    error = %e,
                );
                return Err(e);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for AllOf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AllOf")
            .field("constraints", &self.constraints.len())
            .finish()
    }
}

/// Build an aggregate constraint.
pub fn all_of(constraints: Vec<Box<dyn Constraint>>) -> AllOf {
    AllOf::new(constraints)
}
