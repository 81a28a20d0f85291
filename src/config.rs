//! Publisher options and config documents.
//!
//! A config document is JSON with two sections: `provider` (global screen
//! bounds and refresh policy) and `props` (named scalable props). Keys use the
//! camelCase names hosts already write (`minScreenWidth`, `refreshBehavior`,
//! `minValue`, `scaledBy`, ...).
//!
//! ```
//! use scaled_props::config::{RefreshBehavior, ScaleConfig};
//!
//! let config = ScaleConfig::from_json(
//!     "inline",
//!     r#"{
//!         "provider": { "minScreenWidth": 400, "maxScreenWidth": 1200, "refreshBehavior": "onResizeComplete" },
//!         "props": { "fontSize": { "minValue": 20, "maxValue": 40 } }
//!     }"#,
//! )?;
//! assert_eq!(config.provider.refresh_behavior, RefreshBehavior::OnResizeComplete);
//! assert_eq!(config.props.len(), 1);
//! # Ok::<(), scaled_props::error::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::SurfaceUnit;
use crate::error::{classify_io_error, ConfigError, ScaleResult, SystemError};
use crate::models::{Axis, ScalableProp, ScalablePropSet, SurfaceBounds};

/// Refresh interval used when `refreshRate` is not set, in milliseconds.
pub const DEFAULT_REFRESH_RATE_MS: u64 = 200;

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "scaled-props";

/// File name of the default config document.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// How resize notifications are rate limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RefreshBehavior {
    /// Leading-edge throttle: refresh immediately, then at most once per
    /// interval while resizing continues.
    #[default]
    #[serde(rename = "onResize")]
    OnResize,
    /// Trailing-edge debounce: refresh once, after resizing has been quiet
    /// for the interval.
    #[serde(rename = "onResizeComplete")]
    OnResizeComplete,
}

impl RefreshBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            RefreshBehavior::OnResize => "onResize",
            RefreshBehavior::OnResizeComplete => "onResizeComplete",
        }
    }
}

/// Options recognized by a surface publisher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublisherConfig {
    #[serde(flatten)]
    pub bounds: SurfaceBounds,
    #[serde(default)]
    pub refresh_behavior: RefreshBehavior,
    /// Interval in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_rate: Option<u64>,
}

impl PublisherConfig {
    pub fn new(bounds: SurfaceBounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    pub fn with_refresh_behavior(mut self, behavior: RefreshBehavior) -> Self {
        self.refresh_behavior = behavior;
        self
    }

    pub fn with_refresh_rate(mut self, millis: u64) -> Self {
        self.refresh_rate = Some(millis);
        self
    }

    /// The configured interval, or the default for either policy.
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_rate.unwrap_or(DEFAULT_REFRESH_RATE_MS))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.refresh_rate {
            Some(0) => Err(ConfigError::InvalidRefreshRate { millis: 0 }),
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawScaleConfig {
    #[serde(default)]
    provider: PublisherConfig,
    #[serde(default)]
    props: BTreeMap<String, ScalableProp>,
    #[serde(default)]
    surface_unit: SurfaceUnit,
}

/// A complete, validated config document.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleConfig {
    pub provider: PublisherConfig,
    pub props: ScalablePropSet,
    pub surface_unit: SurfaceUnit,
}

impl ScaleConfig {
    /// Parse and validate a JSON document. `source` names it in errors.
    pub fn from_json(source: &str, text: &str) -> Result<Self, ConfigError> {
        let raw: RawScaleConfig = serde_json::from_str(text).map_err(|err| ConfigError::Parse {
            source: source.to_string(),
            message: err.to_string(),
        })?;

        raw.provider.validate()?;
        let props = ScalablePropSet::try_from(raw.props)?;

        Ok(Self {
            provider: raw.provider,
            props,
            surface_unit: raw.surface_unit,
        })
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> ScaleResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| classify_io_error(err, Some(path.to_path_buf()), "read config"))?;
        let config = Self::from_json(&path.display().to_string(), &text)?;
        tracing::info!(
            path = %path.display(),
            props = config.props.len(),
            refresh = config.provider.refresh_behavior.as_str(),
            "loaded scaling config"
        );
        Ok(config)
    }

    /// `<config dir>/scaled-props/config.json`.
    pub fn default_path() -> Result<PathBuf, SystemError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(SystemError::NoConfigDirectory)
    }

    /// Load `path` if given (it must exist); otherwise the default path if a
    /// file is there; otherwise the built-in document.
    pub fn load_or_default(path: Option<&Path>) -> ScaleResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Ok(path) if path.is_file() => Self::load(&path),
            Ok(_) | Err(SystemError::NoConfigDirectory) => {
                tracing::debug!("no config file found, using built-in props");
                Ok(Self::builtin()?)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Terminal-sized defaults, measured in cells.
    pub fn builtin() -> Result<Self, ConfigError> {
        let provider = PublisherConfig::new(
            SurfaceBounds::new()
                .with_width(40.0, 200.0)
                .with_height(10.0, 60.0),
        );

        let props = ScalablePropSet::new()
            .with("padding", ScalableProp::new(0.0, 4.0))?
            .with("columns", ScalableProp::new(1.0, 4.0))?
            .with(
                "sidebarPercent",
                ScalableProp::new(20.0, 35.0).with_bounds_override(80.0, 240.0),
            )?
            .with("visibleRows", ScalableProp::new(5.0, 40.0).scaled_by(Axis::Height))?;

        Ok(Self {
            provider,
            props,
            surface_unit: SurfaceUnit::Cells,
        })
    }
}
