//! Arithmetic error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised by the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),

    #[error("Division by zero")]
    DivisionByZero,
}

impl ArithmeticError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ArithmeticError::InvalidArgument(_) => ErrorCode::InvalidArgument,
            ArithmeticError::DivisionByZero => ErrorCode::DivisionByZero,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let invalid = ArithmeticError::from(ValidationError::empty_field("val1"));
        assert_eq!(invalid.code(), ErrorCode::InvalidArgument);
        assert_eq!(ArithmeticError::DivisionByZero.code(), ErrorCode::DivisionByZero);
    }
}
