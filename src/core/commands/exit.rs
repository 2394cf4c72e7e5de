use super::{Command, CommandError, Outcome};
use crate::core::env::System;

/// Ends the session. Arguments are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _args: &[String], _system: &mut dyn System) -> Result<Outcome, CommandError> {
        Ok(Outcome::Terminate)
    }
}
