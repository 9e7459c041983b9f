//! Parameter validation errors.

use thiserror::Error;

/// Result type for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

/// Errors found while validating a parameter description.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("Inverted length bounds on {parameter}: minLength {min} > maxLength {max}")]
    InvertedLengthBounds {
        parameter: String,
        min: usize,
        max: usize,
    },

    #[error("Non-finite {bound} bound on {parameter}")]
    NonFiniteBound { parameter: String, bound: String },

    #[error("Enum values declared on composite parameter {parameter}")]
    EnumOnComposite { parameter: String },

    #[error("Value kind mismatch on {parameter}: expected {expected}, got {actual}")]
    ValueKindMismatch {
        parameter: String,
        expected: String,
        actual: String,
    },
}

impl ParameterError {
    pub fn inverted_length_bounds(parameter: impl Into<String>, min: usize, max: usize) -> Self {
        Self::InvertedLengthBounds {
            parameter: parameter.into(),
            min,
            max,
        }
    }

    pub fn non_finite_bound(parameter: impl Into<String>, bound: impl Into<String>) -> Self {
        Self::NonFiniteBound {
            parameter: parameter.into(),
            bound: bound.into(),
        }
    }

    pub fn enum_on_composite(parameter: impl Into<String>) -> Self {
        Self::EnumOnComposite {
            parameter: parameter.into(),
        }
    }

    pub fn value_kind_mismatch(
        parameter: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::ValueKindMismatch {
            parameter: parameter.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}
