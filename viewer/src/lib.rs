//! Image viewer core for the wedding-photo gallery.
//!
//! This crate holds every state transition of the fullscreen image viewer:
//! the ordered gallery and its current slide, the zoom/pan transform, the
//! keyboard map, the drag gesture, and download naming. It never touches the
//! DOM. Hosts (the Leptos `client` crate, or any other shell) translate raw
//! browser events into calls on [`engine::ViewerCore`] and perform the
//! [`engine::Action`]s it returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `ViewerCore` state machine and host `Action`s |
//! | [`gallery`] | Image descriptors, start resolution, clamped navigation |
//! | [`transform`] | Zoom level, pan offset, CSS transform |
//! | [`input`] | Key map, commands, and the pan gesture |
//! | [`download`] | Download href and filename derivation |
//! | [`config`] | `ViewerConfig` and zoom limits |
//! | [`error`] | `ViewerError` |
//! | [`consts`] | Default numeric limits and names |

pub mod config;
pub mod consts;
pub mod download;
pub mod engine;
pub mod error;
pub mod gallery;
pub mod input;
pub mod transform;

pub use config::{ViewerConfig, ZoomLimits};
pub use engine::{Action, ViewerCore};
pub use error::ViewerError;
pub use gallery::{Gallery, ImageDescriptor, StartAt};
