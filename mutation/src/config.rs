//! Configuration for constraint-violation mutators

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How numeric bounds are violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericStrategy {
    /// Pick a value strictly below the minimum or strictly above the maximum
    #[default]
    OutsideBounds,
    /// Resample inside `[minimum or 0, maximum or 1)`
    ///
    /// Kept for reproducing runs of earlier tooling. The value it produces
    /// usually satisfies the declared bounds.
    FallbackWindow,
}

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("numeric_span must be finite and positive, got {0}")]
    InvalidNumericSpan(f64),
    #[error("overflow_window must be at least 1")]
    InvalidOverflowWindow,
    #[error("max_string_length must be at least 2, got {0}")]
    InvalidMaxStringLength(usize),
    #[error("enum_attempts must be at least 1")]
    InvalidEnumAttempts,
}

/// Configuration for `ConstraintViolationMutator`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutatorConfig {
    /// Numeric violation mode
    pub numeric_strategy: NumericStrategy,
    /// Minimum distance window used when stepping outside a numeric bound
    pub numeric_span: f64,
    /// How far past `maxLength` a too-long string may grow
    pub overflow_window: usize,
    /// Largest representable string length
    pub max_string_length: usize,
    /// Redraw enum escapes that land on an allowed value
    pub exclude_enum_members: bool,
    /// Draws allowed before an enum escape gives up
    pub enum_attempts: usize,
}

impl Default for MutatorConfig {
    fn default() -> Self {
        Self {
            numeric_strategy: NumericStrategy::OutsideBounds,
            numeric_span: 1000.0,
            overflow_window: 64,
            max_string_length: i32::MAX as usize,
            exclude_enum_members: true,
            enum_attempts: 16,
        }
    }
}

impl MutatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behaviour of earlier tooling: fallback-window numbers and a single
    /// unchecked enum draw.
    pub fn legacy() -> Self {
        Self {
            numeric_strategy: NumericStrategy::FallbackWindow,
            exclude_enum_members: false,
            enum_attempts: 1,
            ..Self::default()
        }
    }

    pub fn with_numeric_strategy(mut self, strategy: NumericStrategy) -> Self {
        self.numeric_strategy = strategy;
        self
    }

    pub fn with_numeric_span(mut self, span: f64) -> Self {
        self.numeric_span = span;
        self
    }

    pub fn with_overflow_window(mut self, window: usize) -> Self {
        self.overflow_window = window;
        self
    }

    pub fn with_max_string_length(mut self, max: usize) -> Self {
        self.max_string_length = max;
        self
    }

    pub fn with_enum_exclusion(mut self, exclude: bool) -> Self {
        self.exclude_enum_members = exclude;
        self
    }

    pub fn with_enum_attempts(mut self, attempts: usize) -> Self {
        self.enum_attempts = attempts;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.numeric_span.is_finite() || self.numeric_span <= 0.0 {
            return Err(ConfigError::InvalidNumericSpan(self.numeric_span));
        }
        if self.overflow_window == 0 {
            return Err(ConfigError::InvalidOverflowWindow);
        }
        if self.max_string_length < 2 {
            return Err(ConfigError::InvalidMaxStringLength(self.max_string_length));
        }
        if self.enum_attempts == 0 {
            return Err(ConfigError::InvalidEnumAttempts);
        }
        Ok(())
    }
}
