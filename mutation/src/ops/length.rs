//! Length violation - resize a string outside its length bounds.

use log::warn;
use std::cmp::Ordering;
use tamper_core::{Parameter, Value};
use tamper_generator::RandomSource;

use crate::config::MutatorConfig;
use crate::error::{MutationError, MutationResult};
use crate::result::{LengthDirection, MutationOutcome, SkipReason};

/// Truncate or pad the string value to a length outside `[minLength, maxLength]`.
///
/// One candidate length is drawn per usable bound: `[0, minLength)` when
/// `minLength > 1`, and `(maxLength, maxLength + overflow_window]` (capped
/// at `max_string_length`) when `maxLength < max_string_length - 1`. One
/// candidate is then picked uniformly. Lengths count characters.
pub fn violate_length<R: RandomSource>(
    parameter: &mut Parameter,
    random: &mut R,
    config: &MutatorConfig,
) -> MutationResult<MutationOutcome> {
    let constraints = *parameter
        .string_constraints()
        .ok_or_else(|| MutationError::missing_constraints(&parameter.name, "length"))?;

    let current = match parameter.value() {
        Value::String(s) => s,
        other => {
            return Err(MutationError::unexpected_value(
                &parameter.name,
                "String",
                other.type_name(),
            ))
        }
    };
    let current_len = current.chars().count();

    let mut lengths = Vec::with_capacity(2);
    if let Some(min) = constraints.min_length.filter(|&min| min > 1) {
        lengths.push((LengthDirection::TooShort, random.next_length(0, min)));
    }
    if let Some(max) = constraints
        .max_length
        .filter(|&max| max < config.max_string_length.saturating_sub(1))
    {
        let ceiling = max
            .saturating_add(config.overflow_window.max(1))
            .min(config.max_string_length);
        lengths.push((
            LengthDirection::TooLong,
            random.next_length(max + 1, ceiling.saturating_add(1)),
        ));
    }

    let Some(&(direction, target)) = random.next_element(&lengths) else {
        warn!(
            "no violating length for {} (minLength {:?}, maxLength {:?})",
            parameter.name, constraints.min_length, constraints.max_length
        );
        return Ok(MutationOutcome::skipped(SkipReason::NoViolatingLength));
    };

    let resized = match target.cmp(&current_len) {
        Ordering::Less => Some(current.chars().take(target).collect::<String>()),
        Ordering::Greater => {
            let mut padded = current.clone();
            padded.push_str(&random.next_random_string(target - current_len));
            Some(padded)
        }
        Ordering::Equal => None,
    };
    if let Some(resized) = resized {
        parameter.set_value(resized);
    }

    Ok(MutationOutcome::Resized {
        from: current_len,
        to: target,
        direction,
    })
}
