//! GreetHandler - Command handler for the greeter.

use tracing::debug;

use crate::domain::greeting::{Greeter, Greeting, GreetingError};

#[derive(Debug, Clone)]
pub struct GreetCommand {
    pub name: String,
}

#[derive(Default)]
pub struct GreetHandler;

impl GreetHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: GreetCommand) -> Result<Greeting, GreetingError> {
        let greeting = Greeter::greet(&cmd.name)?;
        debug!(name_len = greeting.name.len(), "Greeted visitor");
        Ok(greeting)
    }
}
