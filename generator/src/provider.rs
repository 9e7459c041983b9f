//! Value providers.

use tamper_core::{NumberFormat, Parameter, ParameterKind, Value};

use crate::random::RandomSource;

/// Strategy that produces a concrete value for a leaf parameter.
pub trait ValueProvider {
    /// Produce a value for `parameter` without assigning it.
    fn provide_value<R: RandomSource>(&self, parameter: &Parameter, random: &mut R) -> Value;

    /// Produce a value and assign it to `parameter`, returning the previous value.
    fn assign<R: RandomSource>(&self, parameter: &mut Parameter, random: &mut R) -> Value {
        let value = self.provide_value(parameter, random);
        parameter.set_value(value)
    }
}

/// Generic provider that only looks at the parameter's kind.
///
/// Declared constraints and enum values are ignored, which makes the
/// output unlikely to land inside a finite set of allowed values.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomValueProvider;

impl RandomValueProvider {
    pub const MIN_STRING_LENGTH: usize = 3;
    pub const MAX_STRING_LENGTH: usize = 15;
    pub const NUMBER_SPAN: f64 = 1000.0;
    pub const INTEGER_SPAN: i64 = 1000;

    pub fn new() -> Self {
        Self
    }
}

impl ValueProvider for RandomValueProvider {
    fn provide_value<R: RandomSource>(&self, parameter: &Parameter, random: &mut R) -> Value {
        match &parameter.kind {
            ParameterKind::String(_) => {
                let len = random.next_length(Self::MIN_STRING_LENGTH, Self::MAX_STRING_LENGTH + 1);
                Value::String(random.next_random_string(len))
            }
            ParameterKind::Number(c) => match c.format {
                NumberFormat::Integer => {
                    Value::Int(random.next_int(-Self::INTEGER_SPAN, Self::INTEGER_SPAN))
                }
                NumberFormat::Float => {
                    Value::Float(random.next_double(-Self::NUMBER_SPAN, Self::NUMBER_SPAN))
                }
            },
            ParameterKind::Boolean => Value::Bool(random.next_bool()),
            // Composite parameters carry no scalar
            ParameterKind::Object { .. } | ParameterKind::Array { .. } => Value::Null,
        }
    }
}
