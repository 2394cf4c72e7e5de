use std::collections::{HashMap, HashSet, VecDeque};
use std::io;
use std::path::{Path, PathBuf};

use super::{check_name, check_value, EnvError, System};
use crate::process::{ChildExit, ProcessError};

/// In-memory `System` for tests: nothing here touches the real process.
#[derive(Debug)]
pub(crate) struct FakeSystem {
    pub vars: HashMap<String, String>,
    pub cwd: PathBuf,
    pub dirs: HashSet<PathBuf>,
    pub launched: Vec<Vec<String>>,
    pub launch_results: VecDeque<Result<ChildExit, ProcessError>>,
}

impl FakeSystem {
    pub fn new() -> Self {
        let root = PathBuf::from("/");
        Self {
            vars: HashMap::new(),
            cwd: root.clone(),
            dirs: HashSet::from([root]),
            launched: Vec::new(),
            launch_results: VecDeque::new(),
        }
    }

    pub fn with_dir(mut self, dir: &str) -> Self {
        self.dirs.insert(PathBuf::from(dir));
        self
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn push_launch_result(&mut self, result: Result<ChildExit, ProcessError>) {
        self.launch_results.push_back(result);
    }
}

impl System for FakeSystem {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn set_var(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        check_name(name)?;
        check_value(name, value)?;
        self.vars.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn remove_var(&mut self, name: &str) -> Result<(), EnvError> {
        check_name(name)?;
        self.vars.remove(name);
        Ok(())
    }

    fn current_dir(&self) -> Result<PathBuf, EnvError> {
        Ok(self.cwd.clone())
    }

    fn set_current_dir(&mut self, path: &Path) -> Result<(), EnvError> {
        let target = self.cwd.join(path);
        if !self.dirs.contains(&target) {
            return Err(EnvError::IoError(io::Error::new(
                io::ErrorKind::NotFound,
                "No such file or directory",
            )));
        }
        self.cwd = target;
        Ok(())
    }

    fn launch(&mut self, argv: &[String]) -> Result<ChildExit, ProcessError> {
        self.launched.push(argv.to_vec());
        self.launch_results
            .pop_front()
            .unwrap_or(Ok(ChildExit::Exited(0)))
    }
}
