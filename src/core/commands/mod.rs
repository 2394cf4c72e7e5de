use std::fmt;

use tracing::debug;

mod cd;
mod env;
mod exit;

pub use cd::CdCommand;
pub use env::{SetEnvCommand, UnsetEnvCommand};
pub use exit::ExitCommand;

use crate::console::Console;
use crate::core::env::{EnvError, System};
use crate::input::Tokens;
use crate::process::ProcessError;

#[derive(Debug)]
pub enum CommandError {
    /// Wrong number of arguments; carries the usage line.
    Usage(&'static str),
    Env(EnvError),
    ExecutionError(String),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Usage(usage) => write!(f, "{}", usage),
            CommandError::Env(e) => write!(f, "{}", e),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::Env(err)
    }
}

/// What the session does after a command.
#[derive(Debug)]
pub enum Outcome {
    Continue,
    Terminate,
    Failure(ProcessError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    External,
    SetEnv,
    UnsetEnv,
    ChangeDirectory,
    Exit,
}

impl CommandKind {
    /// Exact match only: `cdfoo` is an external program, not `cd`.
    pub fn classify(word: &str) -> Self {
        match word {
            "setenv" => CommandKind::SetEnv,
            "unsetenv" => CommandKind::UnsetEnv,
            "cd" => CommandKind::ChangeDirectory,
            "exit" => CommandKind::Exit,
            _ => CommandKind::External,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match self {
            CommandKind::External => None,
            CommandKind::SetEnv => Some("setenv"),
            CommandKind::UnsetEnv => Some("unsetenv"),
            CommandKind::ChangeDirectory => Some("cd"),
            CommandKind::Exit => Some("exit"),
        }
    }

    pub fn is_builtin(&self) -> bool {
        !matches!(self, CommandKind::External)
    }
}

pub trait Command {
    fn execute(&self, args: &[String], system: &mut dyn System) -> Result<Outcome, CommandError>;
}

#[derive(Clone, Copy)]
enum CommandType {
    SetEnv(SetEnvCommand),
    UnsetEnv(UnsetEnvCommand),
    Cd(CdCommand),
    Exit(ExitCommand),
}

impl CommandType {
    fn for_kind(kind: CommandKind) -> Option<Self> {
        match kind {
            CommandKind::External => None,
            CommandKind::SetEnv => Some(CommandType::SetEnv(SetEnvCommand)),
            CommandKind::UnsetEnv => Some(CommandType::UnsetEnv(UnsetEnvCommand)),
            CommandKind::ChangeDirectory => Some(CommandType::Cd(CdCommand)),
            CommandKind::Exit => Some(CommandType::Exit(ExitCommand)),
        }
    }
}

impl Command for CommandType {
    fn execute(&self, args: &[String], system: &mut dyn System) -> Result<Outcome, CommandError> {
        match self {
            CommandType::SetEnv(cmd) => cmd.execute(args, system),
            CommandType::UnsetEnv(cmd) => cmd.execute(args, system),
            CommandType::Cd(cmd) => cmd.execute(args, system),
            CommandType::Exit(cmd) => cmd.execute(args, system),
        }
    }
}

/// Runs one tokenized command: a builtin in-process, anything else as a child.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor;

impl CommandExecutor {
    pub fn new() -> Self {
        CommandExecutor
    }

    pub fn execute(&self, tokens: &Tokens, system: &mut dyn System, console: &mut Console) -> Outcome {
        let kind = CommandKind::classify(tokens.command());
        debug!(command = tokens.command(), ?kind, args = tokens.args().len(), "dispatch");

        let Some(builtin) = CommandType::for_kind(kind) else {
            return self.launch(tokens, system, console);
        };

        match builtin.execute(tokens.args(), system) {
            Ok(outcome) => outcome,
            Err(CommandError::Usage(usage)) => {
                console.usage(usage);
                Outcome::Continue
            }
            Err(e) => {
                console.error(&e);
                Outcome::Continue
            }
        }
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        CommandKind::classify(command).is_builtin()
    }

    fn launch(&self, tokens: &Tokens, system: &mut dyn System, console: &mut Console) -> Outcome {
        match system.launch(tokens.as_slice()) {
            Ok(exit) => {
                if !exit.success() {
                    debug!(command = tokens.command(), status = %exit, "command did not succeed");
                }
                Outcome::Continue
            }
            Err(e) if e.is_fatal() => {
                console.error(&e);
                Outcome::Failure(e)
            }
            Err(e) => {
                console.error(&e);
                Outcome::Continue
            }
        }
    }
}
