//! Viewer configuration.
//!
//! Hosts may pass a JSON blob (for example embedded in the page) to tune zoom
//! limits and integration names. Missing fields take their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ZOOM, FALLBACK_FILENAME, MAX_ZOOM, MIN_ZOOM, SCROLL_LOCK_CLASS, ZOOM_STEP};
use crate::error::ViewerError;

/// Zoom bounds and step size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: MIN_ZOOM, max: MAX_ZOOM, step: ZOOM_STEP }
    }
}

impl ZoomLimits {
    /// Clamp a zoom factor into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

/// Host-tunable viewer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewerConfig {
    /// Zoom bounds and step.
    pub zoom: ZoomLimits,
    /// Body class applied while the viewer is open.
    pub scroll_lock_class: String,
    /// Download filename used when no better name can be derived.
    pub fallback_filename: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomLimits::default(),
            scroll_lock_class: SCROLL_LOCK_CLASS.to_owned(),
            fallback_filename: FALLBACK_FILENAME.to_owned(),
        }
    }
}

impl ViewerConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidConfig`] if the JSON is malformed or the
    /// values fail [`ViewerConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ViewerError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ViewerError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the zoom range contains the default zoom and the names are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidConfig`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), ViewerError> {
        let ZoomLimits { min, max, step } = self.zoom;
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(ViewerError::InvalidConfig("zoom values must be finite".into()));
        }
        if min <= 0.0 {
            return Err(ViewerError::InvalidConfig(format!("zoom.min must be positive, got {min}")));
        }
        if !(min <= DEFAULT_ZOOM && DEFAULT_ZOOM <= max) {
            return Err(ViewerError::InvalidConfig(format!(
                "zoom range [{min}, {max}] must contain {DEFAULT_ZOOM}"
            )));
        }
        if step <= 0.0 {
            return Err(ViewerError::InvalidConfig(format!("zoom.step must be positive, got {step}")));
        }
        if self.scroll_lock_class.trim().is_empty() {
            return Err(ViewerError::InvalidConfig("scrollLockClass must not be empty".into()));
        }
        if self.fallback_filename.trim().is_empty() {
            return Err(ViewerError::InvalidConfig("fallbackFilename must not be empty".into()));
        }
        Ok(())
    }
}
