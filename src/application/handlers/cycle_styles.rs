//! CycleStylesHandler - Command handler for the style cycler.

use tracing::{debug, warn};

use crate::domain::foundation::RepeatCount;
use crate::domain::styling::{StyleCycler, StyleError, StyledLine};

/// Command to repeat a message with rotating styles.
#[derive(Debug, Clone)]
pub struct CycleStylesCommand {
    pub message: String,
    pub repeat_count: i64,
}

/// Result of a successful cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleStylesResult {
    pub lines: Vec<StyledLine>,
}

/// Handler for style cycling requests.
///
/// Applies the service-wide repeat limit before handing off to the domain.
pub struct CycleStylesHandler {
    max_repeat_count: u32,
}

impl CycleStylesHandler {
    pub fn new(max_repeat_count: u32) -> Self {
        Self { max_repeat_count }
    }

    pub fn max_repeat_count(&self) -> u32 {
        self.max_repeat_count
    }

    pub fn handle(&self, cmd: CycleStylesCommand) -> Result<CycleStylesResult, StyleError> {
        let count = RepeatCount::try_new(cmd.repeat_count)
            .and_then(|count| count.ensure_at_most(self.max_repeat_count))
            .map_err(|e| {
                warn!(repeat_count = cmd.repeat_count, error = %e, "Rejected style cycle request");
                StyleError::from(e)
            })?;

        let lines: Vec<StyledLine> = StyleCycler::lines(&cmd.message, count).collect();

        debug!(
            repeat_count = count.value(),
            message_len = cmd.message.len(),
            "Cycled message through palette"
        );

        Ok(CycleStylesResult { lines })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ValidationError;
    use crate::domain::styling::StyleName;

    fn command(message: &str, repeat_count: i64) -> CycleStylesCommand {
        CycleStylesCommand {
            message: message.to_string(),
            repeat_count,
        }
    }

    #[test]
    fn handle_returns_requested_lines() {
        let handler = CycleStylesHandler::new(100);
        let result = handler.handle(command("Hola", 11)).unwrap();
        assert_eq!(result.lines.len(), 11);
        assert_eq!(result.lines[10].style, StyleName::Secondary);
    }

    #[test]
    fn handle_accepts_count_equal_to_limit() {
        let handler = CycleStylesHandler::new(5);
        assert_eq!(handler.handle(command("x", 5)).unwrap().lines.len(), 5);
    }

    #[test]
    fn handle_rejects_count_above_limit() {
        let handler = CycleStylesHandler::new(5);
        let err = handler.handle(command("x", 6)).unwrap_err();
        match err {
            StyleError::InvalidArgument(ValidationError::OutOfRange { max, actual, .. }) => {
                assert_eq!(max, 5);
                assert_eq!(actual, 6);
            }
            other => panic!("Expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn handle_rejects_negative_count() {
        let handler = CycleStylesHandler::new(5);
        assert!(handler.handle(command("x", -2)).is_err());
    }
}
