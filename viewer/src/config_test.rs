#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_zoom_limits_match_constants() {
    let limits = ZoomLimits::default();
    assert_eq!(limits.min, 0.5);
    assert_eq!(limits.max, 3.0);
    assert_eq!(limits.step, 0.25);
}

#[test]
fn default_config_is_valid() {
    let config = ViewerConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.scroll_lock_class, "image-viewer-open");
    assert_eq!(config.fallback_filename, "image");
}

#[test]
fn clamp_respects_bounds() {
    let limits = ZoomLimits::default();
    assert_eq!(limits.clamp(0.1), 0.5);
    assert_eq!(limits.clamp(9.0), 3.0);
    assert_eq!(limits.clamp(1.5), 1.5);
}

// =============================================================
// from_json
// =============================================================

#[test]
fn from_json_empty_object_uses_defaults() {
    let config = ViewerConfig::from_json("{}").unwrap();
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn from_json_partial_zoom_keeps_other_defaults() {
    let config = ViewerConfig::from_json(r#"{"zoom":{"max":4.0}}"#).unwrap();
    assert_eq!(config.zoom.max, 4.0);
    assert_eq!(config.zoom.min, 0.5);
    assert_eq!(config.zoom.step, 0.25);
}

#[test]
fn from_json_reads_camel_case_names() {
    let config = ViewerConfig::from_json(r#"{"scrollLockClass":"no-scroll","fallbackFilename":"photo"}"#).unwrap();
    assert_eq!(config.scroll_lock_class, "no-scroll");
    assert_eq!(config.fallback_filename, "photo");
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = ViewerConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ViewerError::InvalidConfig(_)));
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_rejects_range_excluding_one() {
    let err = ViewerConfig::from_json(r#"{"zoom":{"min":1.5,"max":3.0}}"#).unwrap_err();
    assert!(err.to_string().contains("must contain"));
}

#[test]
fn validate_rejects_non_positive_min() {
    let err = ViewerConfig::from_json(r#"{"zoom":{"min":0.0}}"#).unwrap_err();
    assert!(err.to_string().contains("zoom.min"));
}

#[test]
fn validate_rejects_zero_step() {
    let err = ViewerConfig::from_json(r#"{"zoom":{"step":0.0}}"#).unwrap_err();
    assert!(err.to_string().contains("zoom.step"));
}

#[test]
fn validate_rejects_blank_scroll_lock_class() {
    let err = ViewerConfig::from_json(r#"{"scrollLockClass":"  "}"#).unwrap_err();
    assert!(err.to_string().contains("scrollLockClass"));
}
