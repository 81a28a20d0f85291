//! Configuration error types.
//!
//! Every error in this module is deterministic given the prop definitions and
//! the publisher's bounds. They are meant to be caught while developing, not
//! retried at runtime.

use std::fmt;

use crate::models::{Axis, BoundSide};

/// Configuration error variants.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A scalable prop declared `min_value >= max_value`.
    ///
    /// Raised when the prop is added to a set, before any scaling happens.
    InvalidValueRange {
        property: String,
        min_value: f64,
        max_value: f64,
    },

    /// A scalable prop declared a NaN or infinite number.
    NonFiniteValue {
        property: String,
        field: &'static str,
    },

    /// Neither a global bound nor a per-prop override resolved for the axis.
    ///
    /// Raised the first time the prop is computed, not at declaration.
    UnresolvedBound {
        property: String,
        axis: Axis,
        side: BoundSide,
    },

    /// The resolved bounds do not satisfy `lower < upper`.
    DegenerateBounds {
        property: String,
        axis: Axis,
        lower: f64,
        upper: f64,
    },

    /// The prop asked to be scaled by something other than width or height.
    InvalidAxis { property: String, value: String },

    /// A config document could not be parsed.
    Parse { source: String, message: String },

    /// A refresh interval of zero was configured.
    InvalidRefreshRate { millis: u64 },
}

impl ConfigError {
    /// Name of the prop this error is about, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValueRange { property, .. }
            | ConfigError::NonFiniteValue { property, .. }
            | ConfigError::UnresolvedBound { property, .. }
            | ConfigError::DegenerateBounds { property, .. }
            | ConfigError::InvalidAxis { property, .. } => Some(property),
            ConfigError::Parse { .. } | ConfigError::InvalidRefreshRate { .. } => None,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            ConfigError::InvalidValueRange { property, .. } => format!(
                "Scalable prop '{}' must declare a `minValue` smaller than its `maxValue`.",
                property
            ),
            ConfigError::NonFiniteValue { property, field } => format!(
                "Scalable prop '{}' has a `{}` that is not a finite number.",
                property, field
            ),
            ConfigError::UnresolvedBound { property, axis, .. } => {
                let (global_min, global_max) = axis.global_bound_names();
                format!(
                    "Scalable prop '{}' does not have valid bounds. Either set a global `{}` and `{}` on the provider, \
                     or set `minScreenSizeOverride` and `maxScreenSizeOverride` on the prop.",
                    property, global_min, global_max
                )
            }
            ConfigError::DegenerateBounds { property, axis, .. } => format!(
                "Scalable prop '{}' resolved a lower screen {} bound that is not below the upper one.",
                property, axis
            ),
            ConfigError::InvalidAxis { property, value } => format!(
                "Scalable prop '{}' specified `scaledBy: {}`. Valid values are \"width\" and \"height\". \
                 Default value is \"width\".",
                property, value
            ),
            ConfigError::Parse { source, .. } => {
                format!("Could not read the scaling config from {}.", source)
            }
            ConfigError::InvalidRefreshRate { .. } => {
                "The `refreshRate` must be at least one millisecond.".to_string()
            }
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidValueRange { .. } => "E_CFG_VALUE_RANGE",
            ConfigError::NonFiniteValue { .. } => "E_CFG_NON_FINITE",
            ConfigError::UnresolvedBound { .. } => "E_CFG_UNRESOLVED_BOUND",
            ConfigError::DegenerateBounds { .. } => "E_CFG_DEGENERATE_BOUNDS",
            ConfigError::InvalidAxis { .. } => "E_CFG_AXIS",
            ConfigError::Parse { .. } => "E_CFG_PARSE",
            ConfigError::InvalidRefreshRate { .. } => "E_CFG_REFRESH_RATE",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValueRange {
                property,
                min_value,
                max_value,
            } => write!(
                f,
                "Scalable prop '{}' specified a minValue ({}) that is >= its maxValue ({})",
                property, min_value, max_value
            ),
            ConfigError::NonFiniteValue { property, field } => {
                write!(f, "Scalable prop '{}' has a non-finite {}", property, field)
            }
            ConfigError::UnresolvedBound {
                property,
                axis,
                side,
            } => write!(
                f,
                "Scalable prop '{}' has no {} screen {} bound (global or override)",
                property, side, axis
            ),
            ConfigError::DegenerateBounds {
                property,
                axis,
                lower,
                upper,
            } => write!(
                f,
                "Scalable prop '{}' resolved degenerate screen {} bounds [{}, {}]",
                property, axis, lower, upper
            ),
            ConfigError::InvalidAxis { property, value } => write!(
                f,
                "Scalable prop '{}' specified scaledBy '{}'; expected \"width\" or \"height\"",
                property, value
            ),
            ConfigError::Parse { source, message } => {
                write!(f, "Failed to parse config from {}: {}", source, message)
            }
            ConfigError::InvalidRefreshRate { millis } => {
                write!(f, "Invalid refresh rate: {}ms", millis)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
