use crate::error::ShellError;
use std::collections::BTreeMap;

#[derive(Debug, Clone)]
pub struct Flags {
    flags: BTreeMap<String, Flag>,
}

#[derive(Debug, Clone)]
pub struct Flag {
    pub short: String,
    pub long: String,
    pub description: String,
    pub takes_value: bool,
    pub value: Option<String>,
}

impl Flag {
    fn switch(short: &str, long: &str, description: &str) -> Self {
        Flag {
            short: short.to_string(),
            long: long.to_string(),
            description: description.to_string(),
            takes_value: false,
            value: None,
        }
    }

    fn option(short: &str, long: &str, description: &str) -> Self {
        Flag {
            takes_value: true,
            ..Flag::switch(short, long, description)
        }
    }
}

impl Default for Flags {
    fn default() -> Self {
        Self::new()
    }
}

impl Flags {
    pub fn new() -> Self {
        let mut flags = BTreeMap::new();

        flags.insert(
            "help".to_string(),
            Flag::switch("-h", "--help", "Print this help message"),
        );
        flags.insert(
            "version".to_string(),
            Flag::switch("-v", "--version", "Show version information"),
        );
        flags.insert(
            "quiet".to_string(),
            Flag::switch("-q", "--quiet", "Do not print a prompt"),
        );
        flags.insert(
            "debug".to_string(),
            Flag::switch("-d", "--debug", "Enable debug output"),
        );
        flags.insert(
            "rc".to_string(),
            Flag::option("-r", "--rc", "Read startup commands from this file"),
        );
        flags.insert(
            "norc".to_string(),
            Flag::switch("-n", "--norc", "Skip the startup file"),
        );
        flags.insert(
            "forward-interrupt".to_string(),
            Flag::switch(
                "-f",
                "--forward-interrupt",
                "Let Ctrl-C stop running programs (the shell still ignores it)",
            ),
        );
        flags.insert(
            "max-tokens".to_string(),
            Flag::option("-m", "--max-tokens", "Reject lines with more words than this"),
        );

        Flags { flags }
    }

    pub fn parse(&mut self, args: &[String]) -> Result<(), ShellError> {
        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];

            let flag = self
                .flags
                .values_mut()
                .find(|flag| arg == &flag.short || arg == &flag.long)
                .ok_or_else(|| ShellError::FlagError(format!("Unknown flag {}", arg)))?;

            if flag.takes_value {
                match args.get(i + 1) {
                    Some(value) => {
                        flag.value = Some(value.clone());
                        i += 1;
                    }
                    None => {
                        return Err(ShellError::FlagError(format!(
                            "Flag {} requires a value",
                            arg
                        )));
                    }
                }
            } else {
                flag.value = Some("true".to_string());
            }
            i += 1;
        }
        Ok(())
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags
            .get(name)
            .and_then(|f| f.value.as_ref())
            .is_some()
    }

    pub fn get_value(&self, name: &str) -> Option<&String> {
        self.flags.get(name).and_then(|f| f.value.as_ref())
    }

    pub fn help(&self) -> String {
        let mut help = String::from("Usage: kapish [OPTIONS]\n\nOptions:\n");
        for flag in self.flags.values() {
            let long = if flag.takes_value {
                format!("{} <value>", flag.long)
            } else {
                flag.long.clone()
            };
            help.push_str(&format!("  {}, {:<27} {}\n", flag.short, long, flag.description));
        }
        help
    }

    pub fn print_help(&self) {
        print!("{}", self.help());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Flags, ShellError> {
        let mut flags = Flags::new();
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        flags.parse(&args)?;
        Ok(flags)
    }

    #[test]
    fn test_short_and_long_switches() -> Result<(), ShellError> {
        let flags = parse(&["-q", "--norc"])?;
        assert!(flags.is_set("quiet"));
        assert!(flags.is_set("norc"));
        assert!(!flags.is_set("debug"));
        Ok(())
    }

    #[test]
    fn test_options_take_values() -> Result<(), ShellError> {
        let flags = parse(&["--rc", "/tmp/rc", "-m", "64"])?;
        assert_eq!(flags.get_value("rc").map(String::as_str), Some("/tmp/rc"));
        assert_eq!(flags.get_value("max-tokens").map(String::as_str), Some("64"));
        Ok(())
    }

    #[test]
    fn test_missing_value() {
        assert!(matches!(parse(&["--rc"]), Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_unknown_flag() {
        assert!(matches!(parse(&["--bogus"]), Err(ShellError::FlagError(_))));
    }

    #[test]
    fn test_help_lists_every_flag() {
        let help = Flags::new().help();
        for long in ["--help", "--version", "--quiet", "--debug", "--rc", "--norc", "--max-tokens"] {
            assert!(help.contains(long), "{}", long);
        }
    }
}
