//! Shared client-side state modules.

pub mod viewer;
