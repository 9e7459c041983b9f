//! Constraint-violation mutator - dispatches a parameter to the strategy
//! for the constraint it declares.
//!
//! The mutator owns its random source and value provider:
//! - `random` drives every draw (lengths, numbers, branch choices)
//! - `provider` supplies fresh values for enum escapes
//!
//! Mutations happen in place. Failures leave the parameter untouched and
//! are reported through `try_mutate` and the running `MutationStats`.

use log::{debug, error, warn};
use tamper_core::Parameter;
use tamper_generator::{ExtendedRandom, RandomSource, RandomValueProvider, ValueProvider};

use crate::classify::{violable_constraint, ViolableConstraint};
use crate::config::{ConfigError, MutatorConfig};
use crate::error::MutationResult;
use crate::ops;
use crate::result::{MutationOutcome, MutationStats, SkipReason};

/// A mutator of parameter values.
pub trait ParameterMutator {
    /// Returns true if `mutate` can change the value of `parameter`.
    fn is_parameter_mutable(&self, parameter: &Parameter) -> bool;

    /// Mutate the value of `parameter` in place and return it.
    fn mutate<'p>(&mut self, parameter: &'p mut Parameter) -> &'p mut Parameter;

    /// Returns true if the values this mutator produces are expected to be
    /// rejected by the target.
    fn is_error_mutator(&self) -> bool {
        false
    }
}

/// Mutator that assigns values violating the declared constraints.
pub struct ConstraintViolationMutator<R = ExtendedRandom, P = RandomValueProvider> {
    random: R,
    provider: P,
    config: MutatorConfig,
    stats: MutationStats,
}

impl ConstraintViolationMutator {
    /// Create a mutator over a seeded `ExtendedRandom` and the default provider.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ExtendedRandom::seeded(seed), RandomValueProvider::new())
    }
}

impl<R: RandomSource, P: ValueProvider> ConstraintViolationMutator<R, P> {
    pub fn new(random: R, provider: P) -> Self {
        Self {
            random,
            provider,
            config: MutatorConfig::default(),
            stats: MutationStats::new(),
        }
    }

    /// Create a mutator with a validated configuration.
    pub fn with_config(random: R, provider: P, config: MutatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            random,
            provider,
            config,
            stats: MutationStats::new(),
        })
    }

    pub fn config(&self) -> &MutatorConfig {
        &self.config
    }

    /// Counters over every attempt made through this mutator.
    pub fn stats(&self) -> &MutationStats {
        &self.stats
    }

    /// Mutate `parameter` and report what happened.
    ///
    /// Parameters without a violable constraint are skipped with
    /// `SkipReason::NotMutable`. On error the value is unchanged.
    pub fn try_mutate(&mut self, parameter: &mut Parameter) -> MutationResult<MutationOutcome> {
        let result = match violable_constraint(parameter) {
            Some(ViolableConstraint::Enumeration) => ops::violate_enum(
                parameter,
                &self.provider,
                &mut self.random,
                &self.config,
            ),
            Some(ViolableConstraint::Length) => {
                ops::violate_length(parameter, &mut self.random, &self.config)
            }
            Some(ViolableConstraint::Bounds) => {
                ops::violate_bounds(parameter, &mut self.random, &self.config)
            }
            None => {
                warn!(
                    "Parameter {} cannot be mutated because it does not provide constraints to violate",
                    parameter.name
                );
                Ok(MutationOutcome::skipped(SkipReason::NotMutable))
            }
        };
        if let Ok(outcome) = &result {
            debug!("{}: {:?}", parameter.name, outcome);
        }
        self.stats.record(&result);
        result
    }
}

impl<R: RandomSource, P: ValueProvider> ParameterMutator for ConstraintViolationMutator<R, P> {
    fn is_parameter_mutable(&self, parameter: &Parameter) -> bool {
        violable_constraint(parameter).is_some()
    }

    fn mutate<'p>(&mut self, parameter: &'p mut Parameter) -> &'p mut Parameter {
        if let Err(e) = self.try_mutate(parameter) {
            error!("{}", e);
        }
        parameter
    }

    fn is_error_mutator(&self) -> bool {
        true
    }
}
