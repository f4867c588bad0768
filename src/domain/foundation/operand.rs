//! Operand value object (finite floating point number).

use serde::Serialize;
use std::fmt;

use super::ValidationError;

/// A finite number accepted by the arithmetic component.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Operand(f64);

impl Operand {
    /// Creates an Operand, rejecting NaN and infinities.
    pub fn try_new(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                field,
                format!("expected a finite number, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the wrapped value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the operand is exactly zero (either sign).
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
