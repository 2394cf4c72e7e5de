use std::io;

use libc::{sighandler_t, signal, SIGINT, SIG_DFL, SIG_ERR, SIG_IGN};

use crate::process::ProcessError;

/// What Ctrl-C does while a session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptPolicy {
    /// The shell and every program it starts ignore SIGINT.
    #[default]
    Ignore,
    /// The shell ignores SIGINT, started programs get the default action.
    Forward,
    /// Leave the disposition alone.
    Inherit,
}

impl InterruptPolicy {
    pub(crate) fn resets_child(&self) -> bool {
        matches!(self, InterruptPolicy::Forward)
    }
}

/// Holds the SIGINT disposition for the lifetime of a session and puts the
/// previous one back on drop.
#[derive(Debug)]
pub struct InterruptGuard {
    previous: Option<sighandler_t>,
}

impl InterruptGuard {
    pub fn install(policy: InterruptPolicy) -> Result<Self, ProcessError> {
        match policy {
            InterruptPolicy::Inherit => Ok(Self { previous: None }),
            InterruptPolicy::Ignore | InterruptPolicy::Forward => {
                let previous = unsafe { signal(SIGINT, SIG_IGN) };
                if previous == SIG_ERR {
                    return Err(ProcessError::SignalError(
                        io::Error::last_os_error().to_string(),
                    ));
                }
                Ok(Self {
                    previous: Some(previous),
                })
            }
        }
    }
}

impl Drop for InterruptGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            unsafe {
                signal(SIGINT, previous);
            }
        }
    }
}

/// Runs in the forked child between fork and exec; must stay async-signal-safe.
pub(crate) fn restore_default_interrupt() -> io::Result<()> {
    if unsafe { signal(SIGINT, SIG_DFL) } == SIG_ERR {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn current_interrupt_disposition() -> sighandler_t {
    unsafe {
        let mut current: libc::sigaction = std::mem::zeroed();
        libc::sigaction(SIGINT, std::ptr::null(), &mut current);
        current.sa_sigaction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::{ChildExit, ProcessLauncher};

    fn sh(script: &str) -> Vec<String> {
        vec!["sh".to_string(), "-c".to_string(), script.to_string()]
    }

    // Everything that touches SIGINT lives in this one test so parallel
    // tests never observe a half-installed disposition.
    #[test]
    fn test_interrupt_policies() -> Result<(), ProcessError> {
        let before = current_interrupt_disposition();

        {
            let _guard = InterruptGuard::install(InterruptPolicy::Ignore)?;
            assert_eq!(current_interrupt_disposition(), SIG_IGN);

            let ignoring = ProcessLauncher::new(InterruptPolicy::Ignore);
            let status = ignoring.launch(&sh("kill -INT $$; exit 3"))?;
            assert_eq!(status, ChildExit::Exited(3));

            let forwarding = ProcessLauncher::new(InterruptPolicy::Forward);
            let status = forwarding.launch(&sh("kill -INT $$; exit 3"))?;
            assert_eq!(status, ChildExit::Signaled(SIGINT));
        }
        assert_eq!(current_interrupt_disposition(), before);

        {
            let _guard = InterruptGuard::install(InterruptPolicy::Inherit)?;
            assert_eq!(current_interrupt_disposition(), before);
        }
        assert_eq!(current_interrupt_disposition(), before);
        Ok(())
    }
}
