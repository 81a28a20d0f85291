//! Surface sampler backed by the controlling terminal.

use std::io::{self, IsTerminal};

use serde::{Deserialize, Serialize};

use crate::models::SurfaceState;
use crate::traits::SurfaceSampler;

/// Unit the terminal surface is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceUnit {
    /// Character cells (columns x rows).
    #[default]
    Cells,
    /// Pixels, as reported by the terminal. Many terminals report zero,
    /// which is treated as "no measurement".
    Pixels,
}

/// Samples the terminal attached to stdout.
///
/// Returns [`SurfaceState::unavailable`] when stdout is not a terminal or the
/// size query fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalSampler {
    unit: SurfaceUnit,
}

impl TerminalSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unit(unit: SurfaceUnit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> SurfaceUnit {
        self.unit
    }

    fn sample_cells() -> io::Result<SurfaceState> {
        let (columns, rows) = crossterm::terminal::size()?;
        Ok(SurfaceState {
            width: non_zero(columns),
            height: non_zero(rows),
        })
    }

    fn sample_pixels() -> io::Result<SurfaceState> {
        let size = crossterm::terminal::window_size()?;
        Ok(SurfaceState {
            width: non_zero(size.width),
            height: non_zero(size.height),
        })
    }
}

fn non_zero(extent: u16) -> Option<f64> {
    (extent > 0).then_some(f64::from(extent))
}

impl SurfaceSampler for TerminalSampler {
    fn sample(&self) -> SurfaceState {
        if !io::stdout().is_terminal() {
            return SurfaceState::unavailable();
        }

        let sampled = match self.unit {
            SurfaceUnit::Cells => Self::sample_cells(),
            SurfaceUnit::Pixels => Self::sample_pixels(),
        };

        sampled.unwrap_or_else(|err| {
            tracing::debug!(unit = ?self.unit, error = %err, "terminal size query failed");
            SurfaceState::unavailable()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_zero() {
        assert_eq!(non_zero(0), None);
        assert_eq!(non_zero(80), Some(80.0));
    }

    #[test]
    fn test_sample_never_panics() {
        // Under a test harness stdout is usually captured, so this mostly
        // exercises the "no surface" path; either way it must not fail.
        let state = TerminalSampler::new().sample();
        if let Some(width) = state.width {
            assert!(width > 0.0);
        }
    }

    #[test]
    fn test_unit_serde() {
        let unit: SurfaceUnit = serde_json::from_str("\"pixels\"").unwrap();
        assert_eq!(unit, SurfaceUnit::Pixels);
        assert_eq!(TerminalSampler::with_unit(unit).unit(), SurfaceUnit::Pixels);
    }
}
