//! Viewing surface dimensions, bounds, and the context handed to binders.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which tracked dimension a scalable prop responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Width,
    Height,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Width => "width",
            Axis::Height => "height",
        }
    }

    /// Names of the global provider bounds for this axis, as they appear in
    /// config documents.
    pub fn global_bound_names(&self) -> (&'static str, &'static str) {
        match self {
            Axis::Width => ("minScreenWidth", "maxScreenWidth"),
            Axis::Height => ("minScreenHeight", "maxScreenHeight"),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lower or upper end of a bound pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundSide {
    Min,
    Max,
}

impl fmt::Display for BoundSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundSide::Min => f.write_str("min"),
            BoundSide::Max => f.write_str("max"),
        }
    }
}

/// Global dimension bounds configured on a publisher.
///
/// Each bound is optional. A missing bound only matters to props that
/// scale on that axis without their own override.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceBounds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_screen_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_screen_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_screen_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_screen_height: Option<f64>,
}

impl SurfaceBounds {
    /// Bounds with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both width bounds.
    pub fn with_width(mut self, min: f64, max: f64) -> Self {
        self.min_screen_width = Some(min);
        self.max_screen_width = Some(max);
        self
    }

    /// Set both height bounds.
    pub fn with_height(mut self, min: f64, max: f64) -> Self {
        self.min_screen_height = Some(min);
        self.max_screen_height = Some(max);
        self
    }

    /// The global lower bound for `axis`, if configured.
    pub fn min_for(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Width => self.min_screen_width,
            Axis::Height => self.min_screen_height,
        }
    }

    /// The global upper bound for `axis`, if configured.
    pub fn max_for(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Width => self.max_screen_width,
            Axis::Height => self.max_screen_height,
        }
    }
}

/// Last observed surface dimensions.
///
/// `None` means "not yet sampled" or "no viewing surface present".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SurfaceState {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl SurfaceState {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// State for an environment without a viewing surface.
    pub fn unavailable() -> Self {
        Self::default()
    }

    /// The tracked dimension for `axis`.
    pub fn dimension(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Width => self.width,
            Axis::Height => self.height,
        }
    }

    /// True when at least one dimension was measured.
    pub fn is_available(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }
}

impl fmt::Display for SurfaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn dim(v: Option<f64>) -> String {
            v.map(|v| v.to_string()).unwrap_or_else(|| "?".to_string())
        }
        write!(f, "{}x{}", dim(self.width), dim(self.height))
    }
}

/// The value a publisher exposes to every binder below it: the configured
/// global bounds plus the last sampled dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SurfaceContext {
    pub bounds: SurfaceBounds,
    pub state: SurfaceState,
}

impl SurfaceContext {
    pub fn new(bounds: SurfaceBounds, state: SurfaceState) -> Self {
        Self { bounds, state }
    }

    pub fn min_screen_width(&self) -> Option<f64> {
        self.bounds.min_screen_width
    }

    pub fn max_screen_width(&self) -> Option<f64> {
        self.bounds.max_screen_width
    }

    pub fn min_screen_height(&self) -> Option<f64> {
        self.bounds.min_screen_height
    }

    pub fn max_screen_height(&self) -> Option<f64> {
        self.bounds.max_screen_height
    }

    pub fn screen_width(&self) -> Option<f64> {
        self.state.width
    }

    pub fn screen_height(&self) -> Option<f64> {
        self.state.height
    }
}
