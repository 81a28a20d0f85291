//! Tracing subscriber setup for the binary.
//!
//! The filter comes from `SCALED_PROPS_LOG` (same syntax as `RUST_LOG`),
//! defaulting to `info`. The interactive viewer owns the screen, so it logs
//! to a file under the cache directory; one-shot mode logs to stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{classify_io_error, ScaleResult, SystemError};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SCALED_PROPS_LOG";

/// Filter used when `SCALED_PROPS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// `<cache dir>/scaled-props/scaled-props.log`
    File,
}

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn log_file_path() -> Result<PathBuf, SystemError> {
    dirs::cache_dir()
        .map(|dir| dir.join("scaled-props").join("scaled-props.log"))
        .ok_or(SystemError::NoCacheDirectory)
}

/// Install the global subscriber. Returns the log file path for
/// [`LogTarget::File`].
///
/// A subscriber installed earlier (by a test harness, say) is left in place.
pub fn init_logging(target: LogTarget) -> ScaleResult<Option<PathBuf>> {
    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
            Ok(None)
        }
        LogTarget::File => {
            let path = log_file_path()?;
            if let Some(dir) = path.parent() {
                fs::create_dir_all(dir)
                    .map_err(|err| classify_io_error(err, Some(dir.to_path_buf()), "create log directory"))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|err| classify_io_error(err, Some(path.clone()), "open log file"))?;

            let _ = tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
            Ok(Some(path))
        }
    }
}
