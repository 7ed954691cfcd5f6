//! The transformation contract.

use std::sync::Arc;

use param_core::{Instance, Value};

use crate::error::TransformResult;

/// A unit coercing a raw parameter value into its canonical representation.
///
/// Transformations always apply; there is no guard. Any closure
/// `Fn(&str, Value, &dyn Instance) -> TransformResult<Value>` is a transformation.
pub trait Transformation: Send + Sync {
    /// Returns the input unchanged unless overridden.
    fn transform(
        &self,
        _parameter: &str,
        value: Value,
        _instance: &dyn Instance,
    ) -> TransformResult<Value> {
        Ok(value)
    }
}

impl<F> Transformation for F
where
    F: Fn(&str, Value, &dyn Instance) -> TransformResult<Value> + Send + Sync,
{
    fn transform(
        &self,
        parameter: &str,
        value: Value,
        instance: &dyn Instance,
    ) -> TransformResult<Value> {
        self(parameter, value, instance)
    }
}

/// Pins a closure to the transformation call shape so its argument types are inferred.
pub fn transform_fn<F>(f: F) -> F
where
    F: Fn(&str, Value, &dyn Instance) -> TransformResult<Value> + Send + Sync,
{
    f
}

/// The identity transformation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl Transformation for Identity {}

/// Applies transformations in order, feeding each output into the next.
#[derive(Default)]
pub struct AsChain {
    steps: Vec<Arc<dyn Transformation>>,
}

impl AsChain {
    pub fn new(steps: Vec<Arc<dyn Transformation>>) -> Self {
        Self { steps }
    }

    /// Append an owned step.
    pub fn then(mut self, step: impl Transformation + 'static) -> Self {
        self.steps.push(Arc::new(step));
        self
    }

    /// Append a shared step such as [`AsFloat::shared`](crate::AsFloat::shared).
    pub fn then_shared(mut self, step: Arc<dyn Transformation>) -> Self {
        self.steps.push(step);
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Transformation for AsChain {
    fn transform(
        &self,
        parameter: &str,
        value: Value,
        instance: &dyn Instance,
    ) -> TransformResult<Value> {
        self.steps
            .iter()
            .try_fold(value, |acc, step| step.transform(parameter, acc, instance))
    }
}

impl std::fmt::Debug for AsChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsChain").field("steps", &self.steps.len()).finish()
    }
}

pub fn as_chain(steps: Vec<Arc<dyn Transformation>>) -> AsChain {
    AsChain::new(steps)
}
