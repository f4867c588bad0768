//! Arithmetic Module - sum, difference, quotient and product of two numbers.

mod calculator;
mod errors;

pub use calculator::{ArithmeticResult, Calculator};
pub use errors::ArithmeticError;
