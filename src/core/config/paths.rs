use std::path::PathBuf;

use crate::core::env::System;

pub const STARTUP_FILE_NAME: &str = ".kapishrc";

/// Location of the per-user startup file, if a home directory can be found.
pub fn startup_path(system: &dyn System) -> Option<PathBuf> {
    home_dir(system).map(|home| home.join(STARTUP_FILE_NAME))
}

fn home_dir(system: &dyn System) -> Option<PathBuf> {
    if let Some(home) = non_empty(system.var("HOME")) {
        return Some(PathBuf::from(home));
    }

    // Fall back to the login name, then to the password database.
    non_empty(system.var("LOGNAME"))
        .or_else(|| non_empty(system.var("USER")))
        .map(|login| PathBuf::from("/home").join(login))
        .or_else(dirs::home_dir)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::fake::FakeSystem;

    #[test]
    fn test_home_directory() {
        let system = FakeSystem::new().with_var("HOME", "/home/testuser");
        assert_eq!(
            startup_path(&system),
            Some(PathBuf::from("/home/testuser/.kapishrc"))
        );
    }

    #[test]
    fn test_login_name_fallback() {
        let system = FakeSystem::new()
            .with_var("HOME", "")
            .with_var("LOGNAME", "alice")
            .with_var("USER", "bob");
        assert_eq!(
            startup_path(&system),
            Some(PathBuf::from("/home/alice/.kapishrc"))
        );

        let system = FakeSystem::new().with_var("USER", "bob");
        assert_eq!(startup_path(&system), Some(PathBuf::from("/home/bob/.kapishrc")));
    }
}
