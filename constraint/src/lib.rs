//! Param Constraint
//!
//! Validate parameter values against declared constraints.
//!
//! Responsibilities:
//! - Define the constraint contract (`applies` / `check` / `evaluate`)
//! - Decide applicability through guards held by composition
//! - Aggregate constraints with fail-fast conjunction (`AllOf`)
//! - Produce meaningful violation messages

mod all_of;
mod constraint;
mod error;
mod guard;
mod leaf;

pub use all_of::{all_of, AllOf};
pub use constraint::{constraint_fn, Constraint, ConstraintExt, Guarded};
pub use error::{ConstraintError, ConstraintResult};
pub use guard::{any, guard_fn, Any, Guard, Present};
pub use leaf::{matches, not_nil, satisfies, Matches, NotNil, Satisfies};
