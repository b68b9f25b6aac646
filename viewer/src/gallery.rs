//! Gallery model: image descriptors, start resolution, and clamped navigation.
//!
//! A [`Gallery`] is the ordered set of images one viewer session can step
//! through. Insertion order is display order. The current index always points
//! at a real image, and navigation stops at both ends instead of wrapping.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use serde::{Deserialize, Serialize};

use crate::error::ViewerError;

/// One image the viewer can show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    /// Source passed to the image element. Opaque; never validated.
    pub url: String,
    /// Caption, also preferred as the download filename.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Alternate URL to download (e.g. full resolution) instead of `url`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl ImageDescriptor {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), label: None, download_url: None }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_download_url(mut self, download_url: impl Into<String>) -> Self {
        self.download_url = Some(download_url.into());
        self
    }

    /// The URL a download should fetch.
    #[must_use]
    pub fn href(&self) -> &str {
        self.download_url.as_deref().unwrap_or(&self.url)
    }

    /// The caption to show, if any non-empty label was supplied.
    #[must_use]
    pub fn display_label(&self) -> Option<&str> {
        self.label.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}

/// Which image to show first when the viewer opens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StartAt {
    /// The first image.
    #[default]
    First,
    /// A zero-based index; out of range falls back to the first image.
    Index(usize),
    /// An exact URL; if absent it is prepended to the gallery.
    Url(String),
}

impl From<usize> for StartAt {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for StartAt {
    fn from(url: &str) -> Self {
        Self::Url(url.to_owned())
    }
}

impl From<String> for StartAt {
    fn from(url: String) -> Self {
        Self::Url(url)
    }
}

impl<T: Into<StartAt>> From<Option<T>> for StartAt {
    fn from(start: Option<T>) -> Self {
        start.map_or(Self::First, Into::into)
    }
}

/// A non-empty ordered image list with a current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<ImageDescriptor>,
    current: usize,
}

impl Gallery {
    /// Build a gallery and resolve its starting image.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidGallery`] if `images` is empty.
    pub fn new(mut images: Vec<ImageDescriptor>, start: impl Into<StartAt>) -> Result<Self, ViewerError> {
        if images.is_empty() {
            return Err(ViewerError::InvalidGallery);
        }
        let current = match start.into() {
            StartAt::First => 0,
            StartAt::Index(index) if index < images.len() => index,
            StartAt::Index(index) => {
                log::debug!("start index {index} out of range for {} images; using 0", images.len());
                0
            }
            StartAt::Url(url) => match images.iter().position(|image| image.url == url) {
                Some(index) => index,
                None => {
                    log::debug!("start url {url} not in gallery; prepending");
                    images.insert(0, ImageDescriptor::new(url));
                    0
                }
            },
        };
        Ok(Self { images, current })
    }

    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> &ImageDescriptor {
        &self.images[self.current]
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.images.len()
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    /// Step forward. Returns `false` at the last image.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step back. Returns `false` at the first image.
    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// One-based counter text, e.g. `"2 / 5"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }
}
