//! Mutation result types.

use serde::Serialize;
use std::collections::BTreeMap;
use tamper_core::Value;

use crate::error::{MutationErrorKind, MutationResult};

/// Which side of the length bounds a resized string lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthDirection {
    /// Shorter than `minLength`.
    TooShort,
    /// Longer than `maxLength`.
    TooLong,
}

/// Where a numeric replacement was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundDirection {
    /// Strictly below the minimum.
    BelowMinimum,
    /// Strictly above the maximum.
    AboveMaximum,
    /// Inside the fallback window (legacy numeric strategy).
    FallbackWindow,
}

/// Why a parameter was left untouched without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// No constraint to violate.
    NotMutable,
    /// Length bounds admit no violating length.
    NoViolatingLength,
    /// Numeric bounds admit no representable violating value.
    NoViolatingValue,
}

/// Outcome of a successful mutation attempt.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum MutationOutcome {
    /// Enum parameter received a value outside its allowed set.
    EnumEscaped {
        previous: Value,
        value: Value,
        attempts: usize,
    },
    /// String truncated or padded to a length outside its bounds.
    ///
    /// `from == to` is possible when the drawn length equals the current one.
    Resized {
        from: usize,
        to: usize,
        direction: LengthDirection,
    },
    /// Numeric parameter received a new value.
    BoundViolated {
        previous: Value,
        value: Value,
        direction: BoundDirection,
    },
    /// Value left unchanged.
    Skipped { reason: SkipReason },
}

impl MutationOutcome {
    pub fn skipped(reason: SkipReason) -> Self {
        Self::Skipped { reason }
    }

    /// Returns true if a violation strategy ran to completion.
    pub fn is_mutation(&self) -> bool {
        !self.is_skipped()
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, MutationOutcome::Skipped { .. })
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            MutationOutcome::Skipped { reason } => Some(*reason),
            _ => None,
        }
    }
}

/// Running counters over mutation attempts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MutationStats {
    pub mutated: usize,
    pub skipped: BTreeMap<SkipReason, usize>,
    pub failed: BTreeMap<MutationErrorKind, usize>,
}

impl MutationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one attempt.
    pub fn record(&mut self, result: &MutationResult<MutationOutcome>) {
        match result {
            Ok(MutationOutcome::Skipped { reason }) => {
                *self.skipped.entry(*reason).or_default() += 1;
            }
            Ok(_) => self.mutated += 1,
            Err(e) => *self.failed.entry(e.kind()).or_default() += 1,
        }
    }

    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &MutationStats) {
        self.mutated += other.mutated;
        for (reason, count) in &other.skipped {
            *self.skipped.entry(*reason).or_default() += count;
        }
        for (kind, count) in &other.failed {
            *self.failed.entry(*kind).or_default() += count;
        }
    }

    pub fn skipped_for(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    pub fn failures(&self, kind: MutationErrorKind) -> usize {
        self.failed.get(&kind).copied().unwrap_or(0)
    }

    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    pub fn total_failed(&self) -> usize {
        self.failed.values().sum()
    }

    pub fn total(&self) -> usize {
        self.mutated + self.total_skipped() + self.total_failed()
    }
}
