use std::env;
use std::path::{Path, PathBuf};

use super::{check_name, check_value, EnvError, System};
use crate::process::{ChildExit, ProcessError, ProcessLauncher};

/// The live process environment.
#[derive(Debug, Clone, Default)]
pub struct RealSystem {
    launcher: ProcessLauncher,
}

impl RealSystem {
    pub fn new(launcher: ProcessLauncher) -> Self {
        Self { launcher }
    }
}

impl System for RealSystem {
    fn var(&self, name: &str) -> Option<String> {
        env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    }

    fn set_var(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        check_name(name)?;
        check_value(name, value)?;
        env::set_var(name, value);
        Ok(())
    }

    fn remove_var(&mut self, name: &str) -> Result<(), EnvError> {
        check_name(name)?;
        env::remove_var(name);
        Ok(())
    }

    fn current_dir(&self) -> Result<PathBuf, EnvError> {
        Ok(env::current_dir()?)
    }

    fn set_current_dir(&mut self, path: &Path) -> Result<(), EnvError> {
        Ok(env::set_current_dir(path)?)
    }

    fn launch(&mut self, argv: &[String]) -> Result<ChildExit, ProcessError> {
        self.launcher.launch(argv)
    }
}
