//! Command-line argument parsing for the scaled-props viewer.
//!
//! Parses flags and determines which CLI command to execute.

use std::path::PathBuf;

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: scaled-props [OPTIONS]

Shows props scaled to the current terminal size.

Options:
  --config <PATH>  Read the config document from PATH
  --once           Print the scaled props as JSON and exit
  -h, --help       Print this help
  -V, --version    Print the version

Environment:
  SCALED_PROPS_LOG  Log filter (default: info)";

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Compute once against the current terminal and print JSON
    Once { config: Option<PathBuf> },
    /// Run the interactive viewer (default)
    RunTui { config: Option<PathBuf> },
    /// Arguments could not be parsed
    Invalid(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use scaled_props::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["scaled-props".to_string(), "--once".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Once { config: None });
///
/// let args = ["scaled-props", "--config", "props.json"].map(String::from);
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::RunTui { config: Some(PathBuf::from("props.json")) }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut config = None;
    let mut once = false;
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--once" => once = true,
            "--config" => match args.next() {
                Some(path) => config = Some(PathBuf::from(path)),
                None => return CliCommand::Invalid("--config requires a path".to_string()),
            },
            other => {
                if let Some(path) = other.strip_prefix("--config=") {
                    config = Some(PathBuf::from(path));
                } else {
                    return CliCommand::Invalid(format!("unknown argument: {}", other));
                }
            }
        }
    }

    if once {
        CliCommand::Once { config }
    } else {
        CliCommand::RunTui { config }
    }
}
