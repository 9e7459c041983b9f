//! Tamper Core Types
//!
//! This crate provides the request-parameter model shared by every tamper component:
//! - Value types (the `Value` enum holding a parameter's concrete scalar)
//! - Parameter nodes (`Parameter`) with a closed `ParameterKind` variant
//! - Constraint descriptions (`StringConstraints`, `NumberConstraints`)
//! - Validation errors for parameters loaded from outside

mod error;
mod parameter;
mod value;

pub use error::*;
pub use parameter::*;
pub use value::*;
