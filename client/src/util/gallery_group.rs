//! Gallery group collection for host pages.
//!
//! Result and template grids tag each rendered image with a group id
//! (a ceremony, a category, one face-swap batch). Opening the viewer on an
//! image shows every image sharing its group, in grid order.

#[cfg(test)]
#[path = "gallery_group_test.rs"]
mod gallery_group_test;

use serde::{Deserialize, Serialize};
use viewer::ImageDescriptor;

/// One rendered grid image and the group it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub group: String,
    #[serde(flatten)]
    pub image: ImageDescriptor,
}

impl GalleryItem {
    pub fn new(group: impl Into<String>, image: ImageDescriptor) -> Self {
        Self { group: group.into(), image }
    }
}

/// Descriptors of every item in `group`, preserving order.
pub fn collect_group(items: &[GalleryItem], group: &str) -> Vec<ImageDescriptor> {
    items
        .iter()
        .filter(|item| item.group == group)
        .map(|item| item.image.clone())
        .collect()
}

/// Distinct group ids in first-seen order.
pub fn group_names(items: &[GalleryItem]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for item in items {
        if !names.contains(&item.group) {
            names.push(item.group.clone());
        }
    }
    names
}
