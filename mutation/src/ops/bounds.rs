//! Bound violation - replace a number according to its declared bounds.

use log::warn;
use tamper_core::{NumberConstraints, NumberFormat, Parameter, Value};
use tamper_generator::RandomSource;

use crate::config::{MutatorConfig, NumericStrategy};
use crate::error::{MutationError, MutationResult};
use crate::result::{BoundDirection, MutationOutcome, SkipReason};

/// 2^63, the first float past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Lower bound used by the fallback window when no minimum is declared.
const FALLBACK_LOWER: f64 = 0.0;
/// Upper bound used by the fallback window when no maximum is declared.
const FALLBACK_UPPER: f64 = 1.0;

/// Replace the value of a numeric parameter.
///
/// Declared bounds must be finite and, when both are present, the minimum
/// must be strictly below the maximum; otherwise an error is returned and
/// the value is left alone.
pub fn violate_bounds<R: RandomSource>(
    parameter: &mut Parameter,
    random: &mut R,
    config: &MutatorConfig,
) -> MutationResult<MutationOutcome> {
    let constraints = *parameter
        .number_constraints()
        .ok_or_else(|| MutationError::missing_constraints(&parameter.name, "numeric"))?;

    if constraints.minimum.is_some_and(|m| !m.is_finite()) {
        return Err(MutationError::non_finite_bound(&parameter.name, "minimum"));
    }
    if constraints.maximum.is_some_and(|m| !m.is_finite()) {
        return Err(MutationError::non_finite_bound(&parameter.name, "maximum"));
    }
    if let (Some(min), Some(max)) = (constraints.minimum, constraints.maximum) {
        if min >= max {
            return Err(MutationError::degenerate_bounds(&parameter.name, min, max));
        }
    }

    let (direction, value) = match config.numeric_strategy {
        NumericStrategy::OutsideBounds => {
            match outside_bounds(&constraints, config.numeric_span, random) {
                Some(picked) => picked,
                None => {
                    warn!(
                        "no representable value outside the bounds of {} (minimum {:?}, maximum {:?})",
                        parameter.name, constraints.minimum, constraints.maximum
                    );
                    return Ok(MutationOutcome::skipped(SkipReason::NoViolatingValue));
                }
            }
        }
        NumericStrategy::FallbackWindow => fallback_window(parameter, &constraints, random)?,
    };

    let previous = parameter.set_value(value.clone());
    Ok(MutationOutcome::BoundViolated {
        previous,
        value,
        direction,
    })
}

/// Range a violating value is drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Window {
    /// Closed integer range.
    Integer(i64, i64),
    /// Half-open real range.
    Float(f64, f64),
}

fn outside_bounds<R: RandomSource>(
    constraints: &NumberConstraints,
    span: f64,
    random: &mut R,
) -> Option<(BoundDirection, Value)> {
    let mut windows = Vec::with_capacity(2);
    if let Some(min) = constraints.minimum {
        if let Some(window) = below(min, constraints.format, span) {
            windows.push((BoundDirection::BelowMinimum, window));
        }
    }
    if let Some(max) = constraints.maximum {
        if let Some(window) = above(max, constraints.format, span) {
            windows.push((BoundDirection::AboveMaximum, window));
        }
    }

    let &(direction, window) = random.next_element(&windows)?;
    let value = match window {
        Window::Integer(low, high) => Value::Int(random.next_int(low, high)),
        Window::Float(low, high) => {
            let v = random.next_double(low, high);
            // [max, upper) may hit max itself
            if direction == BoundDirection::AboveMaximum && v <= low {
                Value::Float(high)
            } else {
                Value::Float(v)
            }
        }
    };
    Some((direction, value))
}

/// Window of values strictly below `min`.
fn below(min: f64, format: NumberFormat, span: f64) -> Option<Window> {
    let spread = span.max(min.abs());
    match format {
        NumberFormat::Float => {
            let mut low = min - spread;
            if !low.is_finite() {
                low = f64::MIN;
            }
            (low < min).then_some(Window::Float(low, min))
        }
        NumberFormat::Integer => {
            let ceil = min.ceil();
            if ceil <= -I64_LIMIT {
                return None;
            }
            let high = if ceil >= I64_LIMIT {
                i64::MAX
            } else {
                ceil as i64 - 1
            };
            Some(Window::Integer(high.saturating_sub(spread as i64), high))
        }
    }
}

/// Window of values strictly above `max`.
fn above(max: f64, format: NumberFormat, span: f64) -> Option<Window> {
    let spread = span.max(max.abs());
    match format {
        NumberFormat::Float => {
            let mut high = max + spread;
            if !high.is_finite() {
                high = f64::MAX;
            }
            (high > max).then_some(Window::Float(max, high))
        }
        NumberFormat::Integer => {
            let floor = max.floor();
            if floor >= I64_LIMIT - 1.0 {
                return None;
            }
            let low = if floor < -I64_LIMIT {
                i64::MIN
            } else {
                floor as i64 + 1
            };
            Some(Window::Integer(low, low.saturating_add(spread as i64)))
        }
    }
}

/// Legacy resampling inside `[minimum or 0, maximum or 1)`.
fn fallback_window<R: RandomSource>(
    parameter: &Parameter,
    constraints: &NumberConstraints,
    random: &mut R,
) -> MutationResult<(BoundDirection, Value)> {
    let lower = constraints.minimum.unwrap_or(FALLBACK_LOWER);
    let upper = constraints.maximum.unwrap_or(FALLBACK_UPPER);
    if lower >= upper {
        return Err(MutationError::degenerate_bounds(&parameter.name, lower, upper));
    }
    Ok((
        BoundDirection::FallbackWindow,
        Value::Float(random.next_double(lower, upper)),
    ))
}
