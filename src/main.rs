use kapish::core::config::SessionConfig;
use kapish::error::ShellError;
use kapish::flags::Flags;
use kapish::shell::Shell;
use std::env;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("kapish: {}", e);
            if e.is_usage() {
                eprintln!("Try 'kapish --help' for more information.");
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run() -> Result<u8, ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(0);
    }

    if flags.is_set("version") {
        println!("kapish {}", env!("CARGO_PKG_VERSION"));
        return Ok(0);
    }

    let config = SessionConfig::from_flags(&flags)?;
    init_logging(config.debug);

    let mut shell = Shell::new(config);
    let end = shell.run(io::stdin().lock())?;
    Ok(end.exit_code())
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("KAPISH_LOG").unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
