use std::fmt;
use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;

pub mod executor;
pub mod signal;

pub use executor::ProcessLauncher;
pub use signal::{InterruptGuard, InterruptPolicy};

#[derive(Debug)]
pub enum ProcessError {
    /// No child could be created. Fatal to the session.
    ForkFailed { program: String, source: io::Error },
    /// The child was created but the program image could not be started.
    ExecFailed { program: String, source: io::Error },
    WaitFailed(io::Error),
    SignalError(String),
}

impl ProcessError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessError::ForkFailed { .. })
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::ForkFailed { program, source } => {
                write!(f, "Error forking. ({}: {})", program, source)
            }
            ProcessError::ExecFailed { program, source } => {
                write!(f, "Error creating new process. ({}: {})", program, source)
            }
            ProcessError::WaitFailed(e) => write!(f, "Error waiting for process: {}", e),
            ProcessError::SignalError(msg) => write!(f, "Signal error: {}", msg),
        }
    }
}

impl std::error::Error for ProcessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProcessError::ForkFailed { source, .. } | ProcessError::ExecFailed { source, .. } => {
                Some(source)
            }
            ProcessError::WaitFailed(e) => Some(e),
            ProcessError::SignalError(_) => None,
        }
    }
}

/// How a launched program ended. Not fed back into the session outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    Exited(i32),
    Signaled(i32),
    Unknown,
}

impl ChildExit {
    pub fn success(&self) -> bool {
        matches!(self, ChildExit::Exited(0))
    }
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        match (status.code(), status.signal()) {
            (Some(code), _) => ChildExit::Exited(code),
            (None, Some(signal)) => ChildExit::Signaled(signal),
            (None, None) => ChildExit::Unknown,
        }
    }
}

impl fmt::Display for ChildExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildExit::Exited(code) => write!(f, "exit status {}", code),
            ChildExit::Signaled(signal) => write!(f, "killed by signal {}", signal),
            ChildExit::Unknown => write!(f, "unknown status"),
        }
    }
}
