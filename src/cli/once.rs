//! One-shot mode: scale against the current terminal and print JSON.

use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde::Serialize;

use crate::adapters::TerminalSampler;
use crate::binder::compute_scaled_props;
use crate::config::ScaleConfig;
use crate::error::ScaleResult;
use crate::models::{ScaledPropertySet, SurfaceContext, SurfaceState};
use crate::traits::SurfaceSampler;

/// What `--once` prints.
#[derive(Debug, Serialize)]
pub struct OnceReport {
    pub surface: SurfaceState,
    #[serde(rename = "scaledProps")]
    pub scaled_props: ScaledPropertySet,
}

/// Scale `config` against whatever `sampler` reports.
pub fn build_report(config: &ScaleConfig, sampler: &dyn SurfaceSampler) -> ScaleResult<OnceReport> {
    let ctx = SurfaceContext::new(config.provider.bounds, sampler.sample());
    let scaled_props = compute_scaled_props(&config.props, &ctx)?;
    Ok(OnceReport {
        surface: ctx.state,
        scaled_props,
    })
}

/// Handle the --once command.
pub fn handle_once_command(config_path: Option<&Path>) -> Result<()> {
    let config = ScaleConfig::load_or_default(config_path).wrap_err("failed to load config")?;
    let sampler = TerminalSampler::with_unit(config.surface_unit);

    let report = build_report(&config, &sampler).map_err(|err| {
        tracing::error!(code = err.error_code(), "{}", err);
        color_eyre::eyre::eyre!("{}", err.user_message())
    })?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockSampler;

    #[test]
    fn test_report_for_sized_surface() {
        let config = ScaleConfig::builtin().unwrap();
        let report = build_report(&config, &MockSampler::with_size(200.0, 60.0)).unwrap();
        assert_eq!(report.scaled_props.get("padding"), Some(4.0));
        assert_eq!(report.scaled_props.get("visibleRows"), Some(40.0));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["surface"]["width"], 200.0);
        assert_eq!(json["scaledProps"]["columns"], 4.0);
    }

    #[test]
    fn test_report_without_surface_uses_min_values() {
        let config = ScaleConfig::builtin().unwrap();
        let report = build_report(&config, &MockSampler::new()).unwrap();
        for (name, value) in report.scaled_props.iter() {
            assert_eq!(Some(value), config.props.get(name).map(|p| p.min_value));
        }
    }
}
