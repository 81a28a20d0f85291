use std::path::PathBuf;

use color_eyre::Result;
use scaled_props::app::run_viewer;
use scaled_props::cli::{parse_args, run_cli_command, CliCommand};
use scaled_props::config::ScaleConfig;
use scaled_props::logging::{init_logging, LogTarget};
use scaled_props::terminal::setup_panic_hook;

fn main() -> Result<()> {
    color_eyre::install()?;

    match parse_args(std::env::args()) {
        CliCommand::RunTui { config } => run_tui(config),
        command => {
            if matches!(command, CliCommand::Once { .. }) {
                let _ = init_logging(LogTarget::Stderr);
            }
            run_cli_command(command).unwrap_or(Ok(()))
        }
    }
}

fn run_tui(config_path: Option<PathBuf>) -> Result<()> {
    // Logging must never touch the screen the viewer draws on.
    let log_path = match init_logging(LogTarget::File) {
        Ok(path) => path,
        Err(err) => {
            eprintln!("Warning: logging disabled: {}", err.user_message());
            None
        }
    };

    let config = ScaleConfig::load_or_default(config_path.as_deref())?;
    let source = match &config_path {
        Some(path) => path.display().to_string(),
        None => match ScaleConfig::default_path() {
            Ok(path) if path.is_file() => path.display().to_string(),
            _ => "built-in".to_string(),
        },
    };

    setup_panic_hook();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_viewer(config, source, log_path))
}
