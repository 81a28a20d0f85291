//! CLI module for the scaled-props binary.
//!
//! - Argument parsing
//! - Version and help display
//! - One-shot JSON output
//!
//! The interactive viewer is not a CLI command: `run_cli_command` returns
//! `None` for it and `main` starts the viewer.

pub mod args;
pub mod once;
pub mod version;

pub use args::{parse_args, CliCommand, USAGE};
pub use once::{build_report, handle_once_command, OnceReport};
pub use version::{handle_version_command, VERSION};

use color_eyre::eyre::eyre;
use color_eyre::Result;

/// Run a CLI command if applicable.
///
/// * `None` - the command is `RunTui`
/// * `Some(Ok(()))` - a CLI command executed successfully
/// * `Some(Err(e))` - a CLI command failed
///
/// `Version` never returns.
pub fn run_cli_command(command: CliCommand) -> Option<Result<()>> {
    match command {
        CliCommand::Version => handle_version_command(),
        CliCommand::Help => {
            println!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Once { config } => Some(handle_once_command(config.as_deref())),
        CliCommand::Invalid(message) => Some(Err(eyre!("{}\n\n{}", message, USAGE))),
        CliCommand::RunTui { .. } => None,
    }
}
