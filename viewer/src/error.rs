//! Viewer error type.

/// Errors surfaced to the host page.
///
/// All of these are caller bugs rather than user-facing failures: navigation
/// and zoom requests never fail, they clamp.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewerError {
    /// `open` was called with no images.
    #[error("cannot open the image viewer with an empty gallery")]
    InvalidGallery,
    /// `open` was called while a gallery is already showing.
    #[error("image viewer is already open")]
    AlreadyOpen,
    /// Viewer configuration failed to parse or validate.
    #[error("invalid viewer config: {0}")]
    InvalidConfig(String),
}
