//! Access to process-wide OS state.
//!
//! Builtins and the launcher never touch `std::env` directly; they go through
//! a [`System`] so tests can run against an in-memory fake.

mod system;

#[cfg(test)]
pub(crate) mod fake;

pub use system::RealSystem;

use std::path::{Path, PathBuf};

use crate::process::{ChildExit, ProcessError};

pub trait System {
    fn var(&self, name: &str) -> Option<String>;
    fn set_var(&mut self, name: &str, value: &str) -> Result<(), EnvError>;
    /// Removing a variable that is not set succeeds.
    fn remove_var(&mut self, name: &str) -> Result<(), EnvError>;
    fn current_dir(&self) -> Result<PathBuf, EnvError>;
    fn set_current_dir(&mut self, path: &Path) -> Result<(), EnvError>;
    /// Runs `argv[0]` with `argv` as its argument vector and blocks until it exits.
    fn launch(&mut self, argv: &[String]) -> Result<ChildExit, ProcessError>;
}

#[derive(Debug)]
pub enum EnvError {
    InvalidName(String),
    InvalidValue(String),
    IoError(std::io::Error),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::InvalidName(name) => write!(f, "invalid variable name: {:?}", name),
            EnvError::InvalidValue(name) => write!(f, "invalid value for {}", name),
            EnvError::IoError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EnvError {}

impl From<std::io::Error> for EnvError {
    fn from(e: std::io::Error) -> Self {
        EnvError::IoError(e)
    }
}

/// Names the OS refuses (and `std::env::set_var` panics on).
pub(crate) fn check_name(name: &str) -> Result<(), EnvError> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return Err(EnvError::InvalidName(name.to_string()));
    }
    Ok(())
}

pub(crate) fn check_value(name: &str, value: &str) -> Result<(), EnvError> {
    if value.contains('\0') {
        return Err(EnvError::InvalidValue(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_name() {
        assert!(check_name("FOO").is_ok());
        assert!(check_name("lower_case1").is_ok());
        assert!(matches!(check_name(""), Err(EnvError::InvalidName(_))));
        assert!(matches!(check_name("A=B"), Err(EnvError::InvalidName(_))));
        assert!(matches!(check_name("A\0"), Err(EnvError::InvalidName(_))));
    }

    #[test]
    fn test_check_value() {
        assert!(check_value("FOO", "a=b c").is_ok());
        assert!(matches!(check_value("FOO", "a\0"), Err(EnvError::InvalidValue(_))));
    }

    #[test]
    fn test_env_error_display() {
        let errors = vec![
            EnvError::InvalidName("A=B".to_string()),
            EnvError::InvalidValue("FOO".to_string()),
            EnvError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        ];

        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
