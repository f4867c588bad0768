//! Greeting Module - greets a submitted name.

use serde::Serialize;
use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors raised by the greeter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GreetingError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] ValidationError),
}

impl GreetingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GreetingError::InvalidArgument(_) => ErrorCode::InvalidArgument,
        }
    }
}

/// A greeting for one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Greeting {
    pub name: String,
    pub text: String,
}

pub struct Greeter;

impl Greeter {
    /// Builds the greeting for `name`, trimmed. Blank names are rejected.
    pub fn greet(name: &str) -> Result<Greeting, GreetingError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name").into());
        }

        Ok(Greeting {
            name: name.to_string(),
            text: format!("Hola como estas {}", name),
        })
    }
}
