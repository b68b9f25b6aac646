#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::config::ZoomLimits;
use crate::consts::DEFAULT_ZOOM;

/// A pointer position in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Image translation in CSS pixels, applied before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f64,
    pub y: f64,
}

impl PanOffset {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

/// Zoom and pan of the displayed image.
///
/// Rendered as `translate(x, y) scale(zoom)`, so the stored offset is in
/// unscaled pixels and stays put when the zoom changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub zoom: f64,
    pub pan: PanOffset,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { zoom: DEFAULT_ZOOM, pan: PanOffset::ZERO }
    }
}

impl ViewTransform {
    /// Whether the image is magnified past its fitted size. Panning is only
    /// allowed in this state.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom > DEFAULT_ZOOM
    }

    /// Add one step, capped at `limits.max`. Returns `true` if the zoom changed.
    pub fn zoom_in(&mut self, limits: &ZoomLimits) -> bool {
        let before = *self;
        self.zoom = limits.clamp(self.zoom + limits.step);
        *self != before
    }

    /// Remove one step, floored at `limits.min`. Dropping to the default zoom
    /// or below recentres the image.
    pub fn zoom_out(&mut self, limits: &ZoomLimits) -> bool {
        let before = *self;
        self.zoom = limits.clamp(self.zoom - limits.step);
        if !self.is_zoomed() {
            self.pan = PanOffset::ZERO;
        }
        *self != before
    }

    /// Back to the default zoom, centred. Returns `true` if anything changed.
    pub fn reset(&mut self) -> bool {
        let before = *self;
        *self = Self::default();
        *self != before
    }

    /// Shift the pan offset by a pointer delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Value for the image element's CSS `transform` property.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.pan.x, self.pan.y, self.zoom)
    }

    /// Zoom as a whole percentage for the readout, e.g. `125`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }
}
