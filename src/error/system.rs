//! System-related error types.
//!
//! Errors raised while locating and reading configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// System-specific error variants.
#[derive(Debug, Error)]
pub enum SystemError {
    /// Config file not found.
    #[error("File not found: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// Permission denied reading a file.
    #[error("Permission denied: {operation} '{}'", path.display())]
    PermissionDenied { path: PathBuf, operation: String },

    /// Could not determine configuration directory.
    #[error("Could not determine configuration directory")]
    NoConfigDirectory,

    /// Could not determine cache directory.
    #[error("Could not determine cache directory")]
    NoCacheDirectory,

    /// Generic I/O error.
    #[error("I/O error during {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl SystemError {
    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SystemError::FileNotFound { path } => {
                format!("File not found: '{}'", path.display())
            }
            SystemError::PermissionDenied { path, operation } => format!(
                "Permission denied: Cannot {} '{}'.\nTry checking file permissions.",
                operation,
                path.display()
            ),
            SystemError::NoConfigDirectory => {
                "Could not determine configuration directory. Please pass --config explicitly."
                    .to_string()
            }
            SystemError::NoCacheDirectory => {
                "Could not determine cache directory. Please check your environment.".to_string()
            }
            SystemError::Io { operation, .. } => format!("Failed to {}", operation),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SystemError::FileNotFound { .. } => "E_SYS_FILE_NOT_FOUND",
            SystemError::PermissionDenied { .. } => "E_SYS_PERM",
            SystemError::NoConfigDirectory => "E_SYS_NO_CONFIG",
            SystemError::NoCacheDirectory => "E_SYS_NO_CACHE",
            SystemError::Io { .. } => "E_SYS_IO",
        }
    }
}

/// Classify an I/O error into a SystemError.
pub fn classify_io_error(err: std::io::Error, path: Option<PathBuf>, operation: &str) -> SystemError {
    use std::io::ErrorKind;

    match (err.kind(), path) {
        (ErrorKind::NotFound, Some(path)) => SystemError::FileNotFound { path },
        (ErrorKind::PermissionDenied, Some(path)) => SystemError::PermissionDenied {
            path,
            operation: operation.to_string(),
        },
        _ => SystemError::Io {
            operation: operation.to_string(),
            source: err,
        },
    }
}
