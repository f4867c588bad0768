//! Style cycling error types.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised by the style cycler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

impl StyleError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StyleError::InvalidArgument(_) => ErrorCode::InvalidArgument,
        }
    }
}
