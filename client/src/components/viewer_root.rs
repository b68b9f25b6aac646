//! Page-level viewer provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wrap a page (or the whole app) once. Every gallery below opens the same
//! overlay through the `ViewerHandle` in context. A nested `ViewerRoot` reuses
//! the outer handle and does not mount a second overlay.

use leptos::prelude::*;
use viewer::ViewerConfig;

use crate::components::image_viewer::ImageViewer;
use crate::state::viewer::ViewerHandle;

/// Provide a `ViewerHandle` and mount the overlay once.
#[component]
pub fn ViewerRoot(#[prop(optional)] config: Option<ViewerConfig>, children: Children) -> impl IntoView {
    let outer = use_context::<ViewerHandle>();
    let overlay = if outer.is_none() {
        provide_context(ViewerHandle::new(config.unwrap_or_default()));
        Some(view! { <ImageViewer /> })
    } else {
        if config.is_some() {
            log::debug!("viewer: nested root ignores its config; the outer viewer is reused");
        }
        None
    };

    view! {
        {children()}
        {overlay}
    }
}
