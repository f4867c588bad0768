//! RepeatCount value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A validated, non-negative number of repetitions.
///
/// Any non-negative `i64` is accepted, so the count never caps below what a
/// caller can express.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepeatCount(u64);

impl RepeatCount {
    /// No repetitions.
    pub const ZERO: Self = Self(0);

    /// Creates a RepeatCount from an unsigned value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Creates a RepeatCount, rejecting negative values.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::out_of_range("repeat_count", 0, i64::MAX, value))
    }

    /// Returns the count as u64.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Checks the count against an inclusive upper bound.
    pub fn ensure_at_most(self, max: u32) -> Result<Self, ValidationError> {
        if self.0 > u64::from(max) {
            return Err(ValidationError::out_of_range(
                "repeat_count",
                0,
                i64::from(max),
                i64::try_from(self.0).unwrap_or(i64::MAX),
            ));
        }
        Ok(self)
    }
}

impl Default for RepeatCount {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for RepeatCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
