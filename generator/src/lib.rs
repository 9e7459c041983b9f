//! Tamper Generator
//!
//! Randomness and value generation consumed by the mutators.
//!
//! # Module Structure
//!
//! - `random` - `RandomSource` trait and the seeded `ExtendedRandom`
//! - `provider` - `ValueProvider` trait and the generic `RandomValueProvider`

mod provider;
mod random;

pub use provider::{RandomValueProvider, ValueProvider};
pub use random::{ExtendedRandom, RandomSource};
