//! Calculator - the four basic operations on two operands.

use serde::Serialize;

use crate::domain::foundation::{Operand, ValidationError};

use super::errors::ArithmeticError;

/// Results of the four operations for one pair of operands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ArithmeticResult {
    pub sum: f64,
    pub difference: f64,
    pub quotient: f64,
    pub product: f64,
}

impl ArithmeticResult {
    /// Rejects results that overflowed to infinity for finite operands.
    fn ensure_finite(self) -> Result<Self, ValidationError> {
        let results = [
            ("sum", self.sum),
            ("difference", self.difference),
            ("quotient", self.quotient),
            ("product", self.product),
        ];
        match results.iter().find(|(_, value)| !value.is_finite()) {
            Some((field, _)) => Err(ValidationError::invalid_format(
                *field,
                "result is out of the representable range",
            )),
            None => Ok(self),
        }
    }
}

/// Stateless calculator.
pub struct Calculator;

impl Calculator {
    /// Computes sum, difference, quotient and product of `a` and `b`.
    ///
    /// # Errors
    /// - `ArithmeticError::InvalidArgument` if either input is NaN or infinite
    /// - `ArithmeticError::DivisionByZero` if `b` is zero
    /// - `ArithmeticError::InvalidArgument` if any result overflows
    pub fn compute(a: f64, b: f64) -> Result<ArithmeticResult, ArithmeticError> {
        let a = Operand::try_new("a", a)?;
        let b = Operand::try_new("b", b)?;
        Self::compute_operands(a, b)
    }

    /// Same as [`Calculator::compute`] for already validated operands.
    pub fn compute_operands(a: Operand, b: Operand) -> Result<ArithmeticResult, ArithmeticError> {
        if b.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let (a, b) = (a.value(), b.value());
        let result = ArithmeticResult {
            sum: a + b,
            difference: a - b,
            quotient: a / b,
            product: a * b,
        };
        result.ensure_finite().map_err(ArithmeticError::from)
    }
}
