//! Tamper Mutation
//!
//! Assign parameter values that violate their declared constraints.
//!
//! Responsibilities:
//! - Decide whether a parameter carries a violable constraint
//! - Escape enum value sets
//! - Resize strings outside their length bounds
//! - Move numbers outside their bounds
//! - Report and count each attempt
//!
//! # Module Structure
//!
//! - `mutator` - `ConstraintViolationMutator` and the `ParameterMutator` trait
//! - `classify` - Mutability classification and dispatch priority
//! - `ops/` - One violation strategy per constraint kind
//! - `config` - Mutator configuration
//! - `error` - Error types for mutation failures
//! - `result` - Outcomes and counters

mod classify;
mod config;
mod error;
mod mutator;
mod ops;
mod result;
#[cfg(test)]
mod testing;

pub use classify::{is_mutable, violable_constraint, ViolableConstraint};
pub use config::{ConfigError, MutatorConfig, NumericStrategy};
pub use error::{MutationError, MutationErrorKind, MutationResult};
pub use mutator::{ConstraintViolationMutator, ParameterMutator};
pub use ops::{violate_bounds, violate_enum, violate_length};
pub use result::{BoundDirection, LengthDirection, MutationOutcome, MutationStats, SkipReason};
