use super::{Command, CommandError, Outcome};
use crate::core::env::System;

const SETENV_USAGE: &str = "Expected usage: setenv <variable> <value>";
const UNSETENV_USAGE: &str = "Expected usage: unsetenv <variable>";

/// `setenv NAME VALUE`, overwriting any previous value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetEnvCommand;

impl Command for SetEnvCommand {
    fn execute(&self, args: &[String], system: &mut dyn System) -> Result<Outcome, CommandError> {
        let [name, value] = args else {
            return Err(CommandError::Usage(SETENV_USAGE));
        };

        system.set_var(name, value)?;
        Ok(Outcome::Continue)
    }
}

/// `unsetenv NAME`. Unsetting a missing variable is fine.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsetEnvCommand;

impl Command for UnsetEnvCommand {
    fn execute(&self, args: &[String], system: &mut dyn System) -> Result<Outcome, CommandError> {
        let [name] = args else {
            return Err(CommandError::Usage(UNSETENV_USAGE));
        };

        system.remove_var(name)?;
        Ok(Outcome::Continue)
    }
}
