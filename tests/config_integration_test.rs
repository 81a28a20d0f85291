// Integration tests for config documents
// Covers:
// - Loading the documented format from disk
// - Error classification for bad documents and missing files
// - Driving a publisher and binder from a loaded config

mod common;

use std::io::Write;

use common::*;
use scaled_props::binder::ScaledPropsBinder;
use scaled_props::config::{RefreshBehavior, ScaleConfig};
use scaled_props::error::{ErrorCategory, ErrorContext, ResultExt};
use scaled_props::models::ScaledBy;
use scaled_props::publisher::SurfacePublisher;

const DOCUMENT: &str = r#"{
  "provider": {
    "minScreenWidth": 40, "maxScreenWidth": 200,
    "minScreenHeight": 10, "maxScreenHeight": 60,
    "refreshBehavior": "onResizeComplete", "refreshRate": 150
  },
  "props": {
    "padding": { "minValue": 0, "maxValue": 6 },
    "columns": { "minValue": 1, "maxValue": 4, "scaledBy": "height",
                 "minScreenSizeOverride": 20, "maxScreenSizeOverride": 50 }
  }
}"#;

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_documented_format() {
    let file = write_config(DOCUMENT);
    let config = ScaleConfig::load(file.path()).unwrap();

    assert_eq!(config.provider.refresh_behavior, RefreshBehavior::OnResizeComplete);
    assert_eq!(config.provider.refresh_interval().as_millis(), 150);
    assert_eq!(config.provider.bounds.max_screen_height, Some(60.0));

    let columns = config.props.get("columns").unwrap();
    assert_eq!(columns.scaled_by, ScaledBy::Height);
    assert_eq!(columns.min_bound_override, Some(20.0));
    assert_eq!(columns.max_bound_override, Some(50.0));
}

#[test]
fn test_load_or_default_prefers_explicit_path() {
    let file = write_config(DOCUMENT);
    let config = ScaleConfig::load_or_default(Some(file.path())).unwrap();
    assert_eq!(config.props.len(), 2);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_malformed_json_is_configuration_error() {
    let file = write_config("{ not json");
    let err = ScaleConfig::load(file.path()).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert_eq!(err.error_code(), "E_CFG_PARSE");
}

#[test]
fn test_missing_file_is_system_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ScaleConfig::load(&dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::System);
    assert!(!err.is_retryable());
}

#[test]
fn test_context_attached_to_load_error() {
    let file = write_config(r#"{"props": {"gap": {"minValue": 3, "maxValue": 1}}}"#);
    let err = ScaleConfig::load(file.path())
        .context(ErrorContext::new("load config").with_component("config"))
        .unwrap_err();

    assert_eq!(err.error_code(), "E_CFG_VALUE_RANGE");
    let ctx = err.context().unwrap();
    assert_eq!(ctx.operation, "load config");
    assert_eq!(ctx.component.as_deref(), Some("config"));
}

#[test]
fn test_zero_refresh_rate_rejected() {
    let file = write_config(r#"{"provider": {"refreshRate": 0}}"#);
    let err = ScaleConfig::load(file.path()).unwrap_err();
    assert_eq!(err.error_code(), "E_CFG_REFRESH_RATE");
}

// =============================================================================
// End to end
// =============================================================================

#[test]
fn test_loaded_config_drives_binder() {
    let file = write_config(DOCUMENT);
    let config = ScaleConfig::load(file.path()).unwrap();

    let sampler = MockSampler::with_size(120.0, 35.0);
    let clock = ManualClock::new();
    let mut publisher = SurfacePublisher::with_clock(config.provider, sampler.clone(), clock.clone());
    let binder = ScaledPropsBinder::attach(config.props, &mut publisher);
    publisher.activate();

    let scaled = binder.scaled_props().unwrap();
    assert_eq!(scaled["padding"], 3.0);
    assert_eq!(scaled["columns"], 2.5);

    // Debounced: nothing changes until 150ms of quiet.
    sampler.resize(200.0, 60.0);
    publisher.handle_resize();
    assert_eq!(binder.scaled_props().unwrap()["padding"], 3.0);

    clock.advance_millis(150);
    publisher.poll_timers();
    let scaled = binder.scaled_props().unwrap();
    assert_eq!(scaled["padding"], 6.0);
    assert_eq!(scaled["columns"], 4.0);
}
