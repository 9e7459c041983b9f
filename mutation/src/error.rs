//! Mutation error types.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type for mutation operations.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors a violation strategy reports instead of mutating.
///
/// Whenever one of these is returned the parameter's value is unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MutationError {
    #[error("Degenerate bounds on {parameter}: lower {lower} is not below upper {upper}")]
    DegenerateBounds {
        parameter: String,
        lower: f64,
        upper: f64,
    },

    #[error("Non-finite {bound} bound on {parameter}")]
    NonFiniteBound { parameter: String, bound: String },

    #[error("Could not escape enum of {parameter} after {attempts} attempts")]
    EnumEscapeExhausted { parameter: String, attempts: usize },

    #[error("Unexpected value on {parameter}: expected {expected}, got {actual}")]
    UnexpectedValue {
        parameter: String,
        expected: String,
        actual: String,
    },

    #[error("Parameter {parameter} has no {constraint} constraints")]
    MissingConstraints {
        parameter: String,
        constraint: String,
    },
}

/// Classification of `MutationError` for counting and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationErrorKind {
    DegenerateBounds,
    NonFiniteBound,
    EnumEscapeExhausted,
    UnexpectedValue,
    MissingConstraints,
}

impl MutationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MutationErrorKind::DegenerateBounds => "degenerate_bounds",
            MutationErrorKind::NonFiniteBound => "non_finite_bound",
            MutationErrorKind::EnumEscapeExhausted => "enum_escape_exhausted",
            MutationErrorKind::UnexpectedValue => "unexpected_value",
            MutationErrorKind::MissingConstraints => "missing_constraints",
        }
    }
}

impl fmt::Display for MutationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl MutationError {
    pub fn degenerate_bounds(parameter: impl Into<String>, lower: f64, upper: f64) -> Self {
        Self::DegenerateBounds {
            parameter: parameter.into(),
            lower,
            upper,
        }
    }

    pub fn non_finite_bound(parameter: impl Into<String>, bound: impl Into<String>) -> Self {
        Self::NonFiniteBound {
            parameter: parameter.into(),
            bound: bound.into(),
        }
    }

    pub fn enum_escape_exhausted(parameter: impl Into<String>, attempts: usize) -> Self {
        Self::EnumEscapeExhausted {
            parameter: parameter.into(),
            attempts,
        }
    }

    pub fn unexpected_value(
        parameter: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UnexpectedValue {
            parameter: parameter.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_constraints(
        parameter: impl Into<String>,
        constraint: impl Into<String>,
    ) -> Self {
        Self::MissingConstraints {
            parameter: parameter.into(),
            constraint: constraint.into(),
        }
    }

    pub fn kind(&self) -> MutationErrorKind {
        match self {
            MutationError::DegenerateBounds { .. } => MutationErrorKind::DegenerateBounds,
            MutationError::NonFiniteBound { .. } => MutationErrorKind::NonFiniteBound,
            MutationError::EnumEscapeExhausted { .. } => MutationErrorKind::EnumEscapeExhausted,
            MutationError::UnexpectedValue { .. } => MutationErrorKind::UnexpectedValue,
            MutationError::MissingConstraints { .. } => MutationErrorKind::MissingConstraints,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            MutationError::degenerate_bounds("p", 5.0, 5.0).kind(),
            MutationErrorKind::DegenerateBounds
        );
        assert_eq!(
            MutationError::enum_escape_exhausted("p", 3).kind().as_str(),
            "enum_escape_exhausted"
        );
    }

    #[test]
    fn test_degenerate_bounds_message() {
        let e = MutationError::degenerate_bounds("ratio", 5.0, 5.0);
        assert_eq!(
            e.to_string(),
            "Degenerate bounds on ratio: lower 5 is not below upper 5"
        );
    }
}
