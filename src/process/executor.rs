use std::io;
use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};

use tracing::debug;

use super::{signal, ChildExit, InterruptPolicy, ProcessError};

/// Starts external programs and waits for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher {
    interrupt: InterruptPolicy,
}

impl ProcessLauncher {
    pub fn new(interrupt: InterruptPolicy) -> Self {
        ProcessLauncher { interrupt }
    }

    /// `argv[0]` is looked up on `PATH` and passed as the program's own `argv[0]`.
    ///
    /// If the program image cannot be started the child exits inside the spawn
    /// call and the failure comes back here as `ExecFailed`, so no child ever
    /// returns into the caller.
    pub fn launch(&self, argv: &[String]) -> Result<ChildExit, ProcessError> {
        let Some((program, args)) = argv.split_first() else {
            return Err(ProcessError::ExecFailed {
                program: String::new(),
                source: io::Error::new(io::ErrorKind::InvalidInput, "empty command"),
            });
        };

        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        if self.interrupt.resets_child() {
            unsafe {
                command.pre_exec(signal::restore_default_interrupt);
            }
        }

        let mut child = command
            .spawn()
            .map_err(|e| classify_spawn_error(program, e))?;
        debug!(pid = child.id(), program = %program, "spawned");

        let status = child.wait().map_err(ProcessError::WaitFailed)?;
        let exit = ChildExit::from(status);
        debug!(program = %program, status = %exit, "child finished");
        Ok(exit)
    }
}

/// `EAGAIN` and `ENOMEM` are taken as `fork` failures; everything else means
/// the child existed but could not become the requested program.
///
/// `Command::spawn` reports fork and exec errors through the same `io::Error`,
/// so the two cannot be told apart by origin. `execve` can also fail with
/// `EAGAIN` (`RLIMIT_NPROC`) or `ENOMEM`; such an exec failure is treated as
/// fatal too, since it signals the same resource exhaustion.
fn classify_spawn_error(program: &str, source: io::Error) -> ProcessError {
    let program = program.to_string();
    match source.raw_os_error() {
        Some(libc::EAGAIN) | Some(libc::ENOMEM) => ProcessError::ForkFailed { program, source },
        _ => ProcessError::ExecFailed { program, source },
    }
}
