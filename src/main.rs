use std::ffi::OsString;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;

/// A keypad calculator for the desktop.
#[derive(Parser, Debug)]
#[command(name = "calcpad", version, about)]
struct Cli {}

/// What to do after reading the command line.
#[derive(Debug)]
enum Startup {
    /// Open the window. Unrecognized arguments are reported and skipped.
    Run { ignored: Option<clap::Error> },
    /// `--help` or `--version` was asked for.
    Exit(clap::Error),
}

fn startup<I, T>(args: I) -> Startup
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(_) => Startup::Run { ignored: None },
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Startup::Exit(err)
        }
        Err(err) => Startup::Run { ignored: Some(err) },
    }
}

fn main() {
    let ignored = match startup(std::env::args_os()) {
        Startup::Run { ignored } => ignored,
        Startup::Exit(err) => err.exit(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("calcpad=info")),
        )
        .init();

    if let Some(err) = ignored {
        tracing::warn!(kind = ?err.kind(), "Ignoring command line arguments");
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting calculator");

    calcpad::ui::run();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_runs() {
        assert!(matches!(startup(["calcpad"]), Startup::Run { ignored: None }));
    }

    #[test]
    fn test_unknown_arguments_still_run() {
        assert!(matches!(
            startup(["calcpad", "--bogus"]),
            Startup::Run { ignored: Some(_) }
        ));
        assert!(matches!(
            startup(["calcpad", "2+2"]),
            Startup::Run { ignored: Some(_) }
        ));
    }

    #[test]
    fn test_help_and_version_exit() {
        assert!(matches!(startup(["calcpad", "--help"]), Startup::Exit(_)));
        assert!(matches!(startup(["calcpad", "--version"]), Startup::Exit(_)));
    }
}
