//! Leptos client for the wedding face-swap gallery viewer.
//!
//! MODULES
//! =======
//! - `components`: the overlay, the page-level provider, thumbnail grids.
//! - `net`: gallery listing fetches.
//! - `state`: the page-wide `ViewerHandle` over `viewer::ViewerCore`.
//! - `util`: browser side effects (listeners, scroll lock, downloads).
//!
//! Host pages wrap their content in `ViewerRoot` and render `GalleryGrid`s
//! (or call `ViewerHandle::open` directly) below it.

pub mod components;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Browser entry point: panic hook and console logging.
#[cfg(feature = "hydrate")]
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("viewer: console logger already installed");
    }
}
