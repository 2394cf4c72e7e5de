use std::fmt;
use std::path::PathBuf;

mod loader;
mod paths;

pub use loader::StartupScript;
pub use paths::{startup_path, STARTUP_FILE_NAME};

use crate::flags::Flags;
use crate::process::InterruptPolicy;

pub const DEFAULT_PROMPT: &str = "? ";

/// Which startup file the session reads before going interactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupFile {
    /// `.kapishrc` in the user's home directory.
    Default,
    Path(PathBuf),
    Disabled,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub prompt: String,
    pub show_prompt: bool,
    pub startup: StartupFile,
    pub interrupt: InterruptPolicy,
    pub max_tokens: Option<usize>,
    pub debug: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            prompt: DEFAULT_PROMPT.to_string(),
            show_prompt: true,
            startup: StartupFile::Default,
            interrupt: InterruptPolicy::Ignore,
            max_tokens: None,
            debug: false,
        }
    }
}

impl SessionConfig {
    pub fn from_flags(flags: &Flags) -> Result<Self, ConfigError> {
        let startup = if flags.is_set("norc") {
            StartupFile::Disabled
        } else if let Some(path) = flags.get_value("rc") {
            StartupFile::Path(PathBuf::from(path))
        } else {
            StartupFile::Default
        };

        let interrupt = if flags.is_set("forward-interrupt") {
            InterruptPolicy::Forward
        } else {
            InterruptPolicy::Ignore
        };

        let max_tokens = flags
            .get_value("max-tokens")
            .map(|value| parse_limit("--max-tokens", value))
            .transpose()?;

        Ok(SessionConfig {
            show_prompt: !flags.is_set("quiet"),
            startup,
            interrupt,
            max_tokens,
            debug: flags.is_set("debug"),
            ..SessionConfig::default()
        })
    }
}

fn parse_limit(flag: &'static str, value: &str) -> Result<usize, ConfigError> {
    match value.parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(ConfigError::InvalidValue {
            flag,
            value: value.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { flag: &'static str, value: String },
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { flag, value } => {
                write!(f, "invalid value for {}: {:?}", flag, value)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;

    fn config(args: &[&str]) -> Result<SessionConfig, ShellError> {
        let mut flags = Flags::new();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        flags.parse(&args)?;
        Ok(SessionConfig::from_flags(&flags)?)
    }

    #[test]
    fn test_defaults() -> Result<(), ShellError> {
        let config = config(&[])?;
        assert_eq!(config.prompt, "? ");
        assert!(config.show_prompt);
        assert_eq!(config.startup, StartupFile::Default);
        assert_eq!(config.interrupt, InterruptPolicy::Ignore);
        assert_eq!(config.max_tokens, None);
        assert!(!config.debug);
        Ok(())
    }

    #[test]
    fn test_flags_map_onto_config() -> Result<(), ShellError> {
        let config = config(&["-q", "-f", "-d", "--rc", "/etc/kapishrc", "--max-tokens", "8"])?;
        assert!(!config.show_prompt);
        assert_eq!(config.interrupt, InterruptPolicy::Forward);
        assert_eq!(config.startup, StartupFile::Path(PathBuf::from("/etc/kapishrc")));
        assert_eq!(config.max_tokens, Some(8));
        assert!(config.debug);
        Ok(())
    }

    #[test]
    fn test_norc_wins_over_rc() -> Result<(), ShellError> {
        let config = config(&["--rc", "/etc/kapishrc", "--norc"])?;
        assert_eq!(config.startup, StartupFile::Disabled);
        Ok(())
    }

    #[test]
    fn test_bad_token_limit() {
        for bad in ["0", "-3", "many"] {
            assert!(matches!(
                config(&["--max-tokens", bad]),
                Err(ShellError::ConfigError(ConfigError::InvalidValue { .. }))
            ));
        }
    }
}
