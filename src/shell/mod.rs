use std::io::BufRead;

use tracing::{debug, info, warn};

use crate::{
    console::Console,
    core::{
        commands::{CommandExecutor, Outcome},
        config::{startup_path, SessionConfig, StartupFile, StartupScript},
        env::{RealSystem, System},
    },
    error::ShellError,
    highlight::Highlighter,
    input::{InputError, Line, LineSource, Tokenizer},
    process::{InterruptGuard, ProcessError, ProcessLauncher},
};

/// Why a session stopped.
#[derive(Debug)]
pub enum SessionEnd {
    Exit,
    EndOfInput,
    Failure(ProcessError),
}

impl SessionEnd {
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionEnd::Exit | SessionEnd::EndOfInput => 0,
            SessionEnd::Failure(_) => 1,
        }
    }
}

pub struct Shell<S = RealSystem> {
    config: SessionConfig,
    system: S,
    console: Console,
    executor: CommandExecutor,
    tokenizer: Tokenizer,
}

impl Shell<RealSystem> {
    pub fn new(config: SessionConfig) -> Self {
        let system = RealSystem::new(ProcessLauncher::new(config.interrupt));
        Shell::with_parts(config, system, Console::stdio(Highlighter::for_stderr()))
    }
}

impl<S: System> Shell<S> {
    pub fn with_parts(config: SessionConfig, system: S, console: Console) -> Self {
        let tokenizer = match config.max_tokens {
            Some(limit) => Tokenizer::with_limit(limit),
            None => Tokenizer::new(),
        };

        Shell {
            config,
            system,
            console,
            executor: CommandExecutor::new(),
            tokenizer,
        }
    }

    pub fn system(&self) -> &S {
        &self.system
    }

    /// Startup file first, then `input` until `exit`, end of input or a fatal error.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<SessionEnd, ShellError> {
        let _interrupts = InterruptGuard::install(self.config.interrupt)?;
        self.bootstrap();
        self.run_interactive(input)
    }

    /// Runs every command of the startup file, each independently of the others.
    /// Returns how many commands were executed.
    pub fn bootstrap(&mut self) -> usize {
        let path = match &self.config.startup {
            StartupFile::Disabled => return 0,
            StartupFile::Path(path) => path.clone(),
            StartupFile::Default => match startup_path(&self.system) {
                Some(path) => path,
                None => {
                    debug!("no home directory, skipping startup file");
                    return 0;
                }
            },
        };

        let mut script = match StartupScript::open(&path, self.tokenizer) {
            Ok(Some(script)) => script,
            Ok(None) => {
                debug!(path = %path.display(), "no startup file");
                return 0;
            }
            Err(e) => {
                self.console
                    .warning(format!("kapish: cannot open {}: {}", path.display(), e));
                return 0;
            }
        };

        info!(path = %script.path().display(), "running startup file");
        let mut executed = 0;
        loop {
            let tokens = match script.source().next_line() {
                Ok(Line::Command(tokens)) => tokens,
                Ok(Line::Blank) => continue,
                Ok(Line::EndOfInput) => break,
                Err(InputError::Tokenize(e)) => {
                    let line = script.source().line_number();
                    self.console
                        .warning(format!("{}:{}: {}", path.display(), line, e));
                    continue;
                }
                Err(InputError::Io(e)) => {
                    self.console
                        .warning(format!("kapish: cannot read {}: {}", path.display(), e));
                    break;
                }
            };

            executed += 1;
            match self
                .executor
                .execute(&tokens, &mut self.system, &mut self.console)
            {
                Outcome::Continue => {}
                Outcome::Terminate => {
                    info!(line = script.source().line_number(), "exit in startup file ignored");
                }
                Outcome::Failure(e) => {
                    warn!(line = script.source().line_number(), error = %e, "startup command failed");
                }
            }
        }
        executed
    }

    pub fn run_interactive<R: BufRead>(&mut self, input: R) -> Result<SessionEnd, ShellError> {
        let mut source = LineSource::new(input, self.tokenizer);

        loop {
            if self.config.show_prompt {
                self.console.prompt(&self.config.prompt)?;
            }

            let tokens = match source.next_line() {
                Ok(Line::Command(tokens)) => tokens,
                Ok(Line::Blank) => continue,
                Ok(Line::EndOfInput) => {
                    if self.config.show_prompt {
                        self.console.newline()?;
                    }
                    debug!("end of input");
                    return Ok(SessionEnd::EndOfInput);
                }
                Err(InputError::Tokenize(e)) => {
                    self.console.error(e);
                    continue;
                }
                Err(InputError::Io(e)) => return Err(ShellError::Io(e)),
            };

            match self
                .executor
                .execute(&tokens, &mut self.system, &mut self.console)
            {
                Outcome::Continue => {}
                Outcome::Terminate => return Ok(SessionEnd::Exit),
                Outcome::Failure(e) => return Ok(SessionEnd::Failure(e)),
            }
        }
    }
}
