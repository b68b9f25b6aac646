//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the viewer overlay and host galleries while reading the
//! shared `ViewerHandle` from Leptos context.

pub mod gallery_grid;
pub mod image_viewer;
pub mod viewer_root;
