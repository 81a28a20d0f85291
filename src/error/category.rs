//! Error category classification for unified error handling.
//!
//! Categories let callers decide how to surface an error without matching
//! on every concrete variant.

use std::fmt;

/// High-level categorization of errors for handling decisions.
///
/// Nothing in this crate fails transiently: configuration mistakes are
/// deterministic, and a missing viewing surface is a valid state rather
/// than an error. No category is therefore retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Invalid scalable prop definitions, unresolved or degenerate bounds,
    /// unknown axes, malformed config documents.
    /// Fixed by correcting the configuration.
    Configuration,

    /// Filesystem and environment errors while locating or reading config.
    System,
}

impl ErrorCategory {
    /// Returns true if errors in this category are generally transient.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "Configuration problem",
            ErrorCategory::System => "System error",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => {
                "Check the scalable prop definitions and the screen bounds"
            }
            ErrorCategory::System => "Check that the config file exists and is readable",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
