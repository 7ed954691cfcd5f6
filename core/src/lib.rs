//! Param Core Types
//!
//! This crate provides the foundational types shared by constraints and
//! transformations:
//! - Value types (the Value enum with all scalar and list types)
//! - Parameter maps and the `params!` macro
//! - The `Instance` trait through which units see sibling parameters

mod instance;
mod value;

pub use instance::*;
pub use value::*;
