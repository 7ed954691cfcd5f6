//! Param Transform
//!
//! Coerce raw parameter values into their canonical representation before
//! constraints are checked.
//!
//! # Module Structure
//!
//! - `transformation` - The Transformation trait, identity and chaining
//! - `as_float` - The shared float coercion
//! - `leaf` - Integer and string coercions
//! - `numeric` - Strict parsing of numeric text
//! - `error` - Error types for coercion failures

mod as_float;
mod error;
mod leaf;
mod numeric;
mod transformation;

pub use as_float::{as_float, AsFloat};
pub use error::{TransformError, TransformResult};
pub use leaf::{as_integer, as_string, AsInteger, AsString};
pub use transformation::{as_chain, transform_fn, AsChain, Identity, Transformation};
