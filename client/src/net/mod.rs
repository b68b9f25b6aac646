//! Network helpers for host pages.

pub mod api;
