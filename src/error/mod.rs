//! Error handling for scaled props.
//!
//! - **Error Categories**: classification for handling decisions
//! - **Configuration Errors**: invalid prop definitions, unresolved or
//!   degenerate bounds, unknown axes, malformed documents
//! - **System Errors**: config file access
//! - **Unified Error Type**: `ScaleError` consolidates both
//! - **Result Type Alias**: `ScaleResult<T>`
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Configuration | Prop or bound misconfiguration | No |
//! | System | Filesystem/environment | No |

mod category;
mod config;
mod context;
mod result;
mod scale_error;
mod system;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use context::ErrorContext;
pub use result::{ResultExt, ScaleResult};
pub use scale_error::ScaleError;
pub use system::{classify_io_error, SystemError};

#[cfg(test)]
mod integration_tests {
    use super::*;
    use crate::models::{Axis, BoundSide};

    /// Every configuration error funnels into the same category.
    #[test]
    fn test_config_errors_unify() {
        let errors: Vec<ScaleError> = vec![
            ConfigError::InvalidValueRange {
                property: "a".to_string(),
                min_value: 2.0,
                max_value: 1.0,
            }
            .into(),
            ConfigError::UnresolvedBound {
                property: "b".to_string(),
                axis: Axis::Width,
                side: BoundSide::Min,
            }
            .into(),
            ConfigError::DegenerateBounds {
                property: "c".to_string(),
                axis: Axis::Height,
                lower: 5.0,
                upper: 5.0,
            }
            .into(),
            ConfigError::InvalidAxis {
                property: "d".to_string(),
                value: "depth".to_string(),
            }
            .into(),
        ];

        for err in errors {
            assert_eq!(err.category(), ErrorCategory::Configuration);
            assert!(!err.is_retryable(), "Expected {:?} to not be retryable", err);
            assert!(err.error_code().starts_with("E_CFG_"));
            assert!(!err.user_message().is_empty());
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: ScaleError = io_err.into();

        assert_eq!(err.category(), ErrorCategory::System);
        assert!(matches!(err, ScaleError::System(_)));
    }
}
