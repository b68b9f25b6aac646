//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (listeners, body classes,
//! downloads) from components so the viewer state stays testable off the
//! browser.

pub mod download;
pub mod gallery_group;
pub mod global_listeners;
pub mod scroll_lock;
#[cfg(feature = "hydrate")]
pub mod viewer_input;
