//! Download href and filename derivation.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::gallery::ImageDescriptor;

/// What the host should download and under which name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub href: String,
    pub filename: String,
}

impl DownloadRequest {
    /// Build the request for one image.
    #[must_use]
    pub fn for_image(image: &ImageDescriptor, fallback: &str) -> Self {
        Self { href: image.href().to_owned(), filename: filename_for(image, fallback) }
    }
}

/// The label if present, else the last path segment of the href.
///
/// Query strings and fragments are dropped; an empty segment (trailing slash or
/// empty href) yields `fallback`.
#[must_use]
pub fn filename_for(image: &ImageDescriptor, fallback: &str) -> String {
    if let Some(label) = image.display_label() {
        return label.to_owned();
    }
    let href = image.href();
    let path = href.split(['?', '#']).next().unwrap_or(href);
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment.to_owned(),
        _ => fallback.to_owned(),
    }
}
