//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, input parsing, and error types that form the
//! vocabulary shared by every form component.

mod errors;
mod form_input;
mod operand;
mod repeat_count;

pub use errors::{ErrorCode, ValidationError};
pub use form_input::{parse_integer, parse_number, require_field};
pub use operand::Operand;
pub use repeat_count::RepeatCount;
