use std::path::Path;

use super::{Command, CommandError, Outcome};
use crate::core::env::System;

const CD_USAGE: &str = "Expected usage: cd <path>";

/// `cd PATH`. A failed change is reported, never fatal.
#[derive(Debug, Clone, Copy, Default)]
pub struct CdCommand;

impl Command for CdCommand {
    fn execute(&self, args: &[String], system: &mut dyn System) -> Result<Outcome, CommandError> {
        let [path] = args else {
            return Err(CommandError::Usage(CD_USAGE));
        };

        system
            .set_current_dir(Path::new(path))
            .map_err(|e| CommandError::ExecutionError(format!("cd: {}: {}", path, e)))?;
        Ok(Outcome::Continue)
    }
}
