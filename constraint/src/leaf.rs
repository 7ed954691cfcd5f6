//! Leaf constraints.

use param_core::{Instance, Value};
use regex_lite::Regex;

use crate::constraint::Constraint;
use crate::error::{ConstraintError, ConstraintResult};
use crate::guard::{Guard, Present};

/// Rejects null values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotNil;

impl Constraint for NotNil {
    fn check(
        &self,
        parameter: &str,
        value: &Value,
        _instance: &dyn Instance,
    ) -> ConstraintResult<()> {
        if value.is_null() {
            return Err(ConstraintError::violated_with(parameter, "can't be nil"));
        }
        Ok(())
    }
}

pub fn not_nil() -> NotNil {
    NotNil
}

type Predicate = dyn Fn(&Value, &dyn Instance) -> bool + Send + Sync;

/// Accepts values for which a predicate holds; the description is reported on failure.
pub struct Satisfies {
    description: String,
    predicate: Box<Predicate>,
}

impl Satisfies {
    /// Predicate over the value alone.
    pub fn new<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Box::new(move |value: &Value, _: &dyn Instance| predicate(value)),
        }
    }

    /// Predicate that can also read sibling parameters.
    pub fn with_instance<F>(description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&Value, &dyn Instance) -> bool + Send + Sync + 'static,
    {
        Self {
            description: description.into(),
            predicate: Box::new(predicate),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl Constraint for Satisfies {
    fn check(
        &self,
        parameter: &str,
        value: &Value,
        instance: &dyn Instance,
    ) -> ConstraintResult<()> {
        if (self.predicate)(value, instance) {
            Ok(())
        } else {
            Err(ConstraintError::violated_with(parameter, self.description.clone()))
        }
    }
}

impl std::fmt::Debug for Satisfies {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Satisfies")
            .field("description", &self.description)
            .finish()
    }
}

pub fn satisfies<F>(description: impl Into<String>, predicate: F) -> Satisfies
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    Satisfies::new(description, predicate)
}

/// Requires string values to match a regular expression.
///
/// Null values are skipped by the default guard; combine with [`NotNil`] to
/// require presence.
#[derive(Debug)]
pub struct Matches {
    regex: Regex,
    guard: Present,
}

impl Matches {
    pub fn new(pattern: &str) -> ConstraintResult<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| ConstraintError::invalid_pattern(pattern, e.to_string()))?;
        Ok(Self {
            regex,
            guard: Present,
        })
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Constraint for Matches {
    fn guard(&self) -> Option<&dyn Guard> {
        Some(&self.guard)
    }

    fn check(
        &self,
        parameter: &str,
        value: &Value,
        _instance: &dyn Instance,
    ) -> ConstraintResult<()> {
        match value.as_str() {
            Some(s) if self.regex.is_match(s) => Ok(()),
            Some(_) => Err(ConstraintError::violated_with(
                parameter,
                format!("should match /{}/", self.pattern()),
            )),
            None => Err(ConstraintError::violated_with(
                parameter,
                format!("expected String, got {}", value.type_name()),
            )),
        }
    }
}

pub fn matches(pattern: &str) -> ConstraintResult<Matches> {
    Matches::new(pattern)
}
