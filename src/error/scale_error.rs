//! Unified error type for the crate.
//!
//! `ScaleError` wraps every domain error so the binary (and any host that
//! loads configuration) can handle failures through one type.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::context::ErrorContext;
use super::system::SystemError;

/// Unified error type.
#[derive(Debug)]
pub enum ScaleError {
    /// Prop definition, bound resolution, or config document errors.
    Config(ConfigError),

    /// Filesystem/environment errors.
    System(SystemError),

    /// Wrapped error with additional context.
    WithContext {
        error: Box<ScaleError>,
        context: ErrorContext,
    },
}

impl ScaleError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ScaleError::Config(_) => ErrorCategory::Configuration,
            ScaleError::System(_) => ErrorCategory::System,
            ScaleError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ScaleError::Config(err) => err.user_message(),
            ScaleError::System(err) => err.user_message(),
            ScaleError::WithContext { error, context } => {
                format!("{}\n\nContext: {}", error.user_message(), context)
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ScaleError::Config(err) => err.error_code(),
            ScaleError::System(err) => err.error_code(),
            ScaleError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        ScaleError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            ScaleError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &ScaleError {
        match self {
            ScaleError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// The configuration error at the core of this error, if it is one.
    pub fn as_config(&self) -> Option<&ConfigError> {
        match self.inner() {
            ScaleError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaleError::Config(err) => write!(f, "{}", err),
            ScaleError::System(err) => write!(f, "{}", err),
            ScaleError::WithContext { error, context } => {
                write!(f, "{} ({})", error, context)
            }
        }
    }
}

impl std::error::Error for ScaleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScaleError::Config(err) => Some(err),
            ScaleError::System(err) => Some(err),
            ScaleError::WithContext { error, .. } => error.source(),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<ConfigError> for ScaleError {
    fn from(err: ConfigError) -> Self {
        ScaleError::Config(err)
    }
}

impl From<SystemError> for ScaleError {
    fn from(err: SystemError) -> Self {
        ScaleError::System(err)
    }
}

impl From<std::io::Error> for ScaleError {
    fn from(err: std::io::Error) -> Self {
        use super::system::classify_io_error;
        ScaleError::System(classify_io_error(err, None, "I/O operation"))
    }
}

impl From<serde_json::Error> for ScaleError {
    fn from(err: serde_json::Error) -> Self {
        ScaleError::Config(ConfigError::Parse {
            source: "document".to_string(),
            message: err.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_config_error_category() {
        let err = ScaleError::Config(ConfigError::InvalidRefreshRate { millis: 0 });
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_system_error_category() {
        let err = ScaleError::System(SystemError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        });
        assert_eq!(err.category(), ErrorCategory::System);
        assert_eq!(err.error_code(), "E_SYS_FILE_NOT_FOUND");
    }

    #[test]
    fn test_with_context_preserves_category_and_code() {
        let err: ScaleError = ConfigError::InvalidAxis {
            property: "gap".to_string(),
            value: "depth".to_string(),
        }
        .into();

        let with_ctx = err.with_context(ErrorContext::new("compute_scaled_props"));

        assert!(matches!(with_ctx, ScaleError::WithContext { .. }));
        assert_eq!(with_ctx.category(), ErrorCategory::Configuration);
        assert_eq!(with_ctx.error_code(), "E_CFG_AXIS");
        assert_eq!(
            with_ctx.context().map(|c| c.operation.as_str()),
            Some("compute_scaled_props")
        );
        assert!(matches!(
            with_ctx.as_config(),
            Some(ConfigError::InvalidAxis { .. })
        ));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ScaleError = json_err.into();
        assert!(matches!(err, ScaleError::Config(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_source_chain() {
        let err: ScaleError = ConfigError::InvalidRefreshRate { millis: 0 }.into();
        assert!(err.source().is_some());
    }
}
