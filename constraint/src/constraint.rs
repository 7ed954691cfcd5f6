//! The constraint contract.

use param_core::{Instance, Value};
use tracing::trace;

use crate::error::ConstraintResult;
use crate::guard::Guard;

/// A unit validating a candidate value for a named parameter.
///
/// Constraints are built once when a parameter is declared and shared by
/// every instance of the declaring type, so they must not hold mutable state.
/// Any closure `Fn(&str, &Value, &dyn Instance) -> ConstraintResult<()>` is a
/// constraint without a guard.
pub trait Constraint: Send + Sync {
    /// The guard deciding applicability. `None` means the constraint always applies.
    fn guard(&self) -> Option<&dyn Guard> {
        None
    }

    /// Evaluate the guard for this value.
    fn applies(&self, parameter: &str, value: &Value, instance: &dyn Instance) -> bool {
        match self.guard() {
            Some(guard) => guard.test(parameter, value, instance),
            None => true,
        }
    }

    /// Validation logic. Only meaningful when `applies` is true.
    fn check(
        &self,
        _parameter: &str,
        _value: &Value,
        _instance: &dyn Instance,
    ) -> ConstraintResult<()> {
        Ok(())
    }

    /// Run `check` if the constraint applies, succeed trivially otherwise.
    fn evaluate(
        &self,
        parameter: &str,
        value: &Value,
        instance: &dyn Instance,
    ) -> ConstraintResult<()> {
        if !self.applies(parameter, value, instance) {
            trace!(
                event = "constraint_skipped",
                parameter,
                instance = instance.type_name(),
            );
            return Ok(());
        }
        self.check(parameter, value, instance)
    }
}

impl<F> Constraint for F
where
    F: Fn(&str, &Value, &dyn Instance) -> ConstraintResult<()> + Send + Sync,
{
    fn check(
        &self,
        parameter: &str,
        value: &Value,
        instance: &dyn Instance,
    ) -> ConstraintResult<()> {
        self(parameter, value, instance)
    }
}

/// Pins a closure to the constraint call shape so its argument types are inferred.
pub fn constraint_fn<F>(f: F) -> F
where
    F: Fn(&str, &Value, &dyn Instance) -> ConstraintResult<()> + Send + Sync,
{
    f
}

/// A constraint paired with a guard.
///
/// The guard is tested first; the inner constraint is then evaluated with its
/// own guard, if it has one.
pub struct Guarded<C> {
    inner: C,
    guard: Box<dyn Guard>,
}

impl<C: Constraint> Guarded<C> {
    pub fn new(inner: C, guard: impl Guard + 'static) -> Self {
        Self {
            inner,
            guard: Box::new(guard),
        }
    }

    /// The wrapped constraint.
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Constraint> Constraint for Guarded<C> {
    fn guard(&self) -> Option<&dyn Guard> {
        Some(self.guard.as_ref())
    }

    fn check(
        &self,
        parameter: &str,
        value: &Value,
        instance: &dyn Instance,
    ) -> ConstraintResult<()> {
        self.inner.evaluate(parameter, value, instance)
    }
}

impl<C> std::fmt::Debug for Guarded<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guarded").field("guard", &"<guard>").finish()
    }
}

/// Combinators available on every constraint.
pub trait ConstraintExt: Constraint + Sized {
    /// Apply this constraint only when `guard` holds.
    fn when(self, guard: impl Guard + 'static) -> Guarded<Self> {
        Guarded::new(self, guard)
    }
}

impl<C: Constraint> ConstraintExt for C {}
