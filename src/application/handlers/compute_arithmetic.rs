//! ComputeArithmeticHandler - Command handler for the calculator.

use tracing::{debug, info};

use crate::domain::arithmetic::{ArithmeticError, ArithmeticResult, Calculator};
use crate::domain::foundation::Operand;

/// Command carrying two validated operands.
#[derive(Debug, Clone, Copy)]
pub struct ComputeArithmeticCommand {
    pub a: Operand,
    pub b: Operand,
}

impl ComputeArithmeticCommand {
    /// Builds a command from raw numbers, rejecting non-finite values.
    pub fn from_values(a: f64, b: f64) -> Result<Self, ArithmeticError> {
        Ok(Self {
            a: Operand::try_new("a", a)?,
            b: Operand::try_new("b", b)?,
        })
    }
}

#[derive(Default)]
pub struct ComputeArithmeticHandler;

impl ComputeArithmeticHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: ComputeArithmeticCommand) -> Result<ArithmeticResult, ArithmeticError> {
        match Calculator::compute_operands(cmd.a, cmd.b) {
            Ok(result) => {
                debug!(a = cmd.a.value(), b = cmd.b.value(), "Computed arithmetic results");
                Ok(result)
            }
            Err(e) => {
                info!(a = cmd.a.value(), b = cmd.b.value(), error = %e, "Arithmetic request rejected");
                Err(e)
            }
        }
    }
}
