//! Shared constants for the viewer crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Zoom factor applied on open and after every slide change.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Smallest zoom factor reachable with `zoom_out`.
pub const MIN_ZOOM: f64 = 0.5;

/// Largest zoom factor reachable with `zoom_in`.
pub const MAX_ZOOM: f64 = 3.0;

/// Amount added or removed by one zoom step.
pub const ZOOM_STEP: f64 = 0.25;

// ── Host integration ────────────────────────────────────────────

/// Class put on `<body>` while the viewer is open to stop page scrolling.
pub const SCROLL_LOCK_CLASS: &str = "image-viewer-open";

/// Download name used when neither a label nor a URL segment is usable.
pub const FALLBACK_FILENAME: &str = "image";
