//! Enum escape - replace the value with one outside the allowed set.

use log::debug;
use tamper_core::{Parameter, Value};
use tamper_generator::{RandomSource, ValueProvider};

use crate::config::MutatorConfig;
use crate::error::{MutationError, MutationResult};
use crate::result::MutationOutcome;

/// Assign a freshly provided value to an enum parameter.
///
/// The provider ignores enum values, so a collision with the allowed set is
/// unlikely but possible. With `exclude_enum_members` colliding draws are
/// retried up to `enum_attempts` times; without it the first draw is used
/// unchecked.
pub fn violate_enum<P: ValueProvider, R: RandomSource>(
    parameter: &mut Parameter,
    provider: &P,
    random: &mut R,
    config: &MutatorConfig,
) -> MutationResult<MutationOutcome> {
    let attempts = if config.exclude_enum_members {
        config.enum_attempts.max(1)
    } else {
        1
    };

    for attempt in 1..=attempts {
        let candidate = provider.provide_value(parameter, random);
        if config.exclude_enum_members && is_allowed(parameter, &candidate) {
            debug!(
                "enum escape for {} drew allowed value {} (attempt {})",
                parameter.name, candidate, attempt
            );
            continue;
        }
        let previous = parameter.set_value(candidate.clone());
        return Ok(MutationOutcome::EnumEscaped {
            previous,
            value: candidate,
            attempts: attempt,
        });
    }

    Err(MutationError::enum_escape_exhausted(&parameter.name, attempts))
}

fn is_allowed(parameter: &Parameter, value: &Value) -> bool {
    parameter.enum_values.iter().any(|v| v.loosely_equals(value))
}
