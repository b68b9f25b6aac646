//! Fullscreen image viewer overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders whatever the page-wide `ViewerHandle` holds. Buttons dispatch the
//! same commands as the keyboard, and press handlers on the image only start a
//! pan; movement and release are tracked by the document listeners the handle
//! registers while the viewer is open.

use leptos::prelude::*;
use viewer::input::Command;

use crate::state::viewer::{ViewerHandle, alt_text, zoom_label};
#[cfg(feature = "hydrate")]
use crate::util::viewer_input::{is_primary_button, mouse_point, touch_point};

/// Overlay bound to the `ViewerHandle` in context.
#[component]
pub fn ImageViewer() -> impl IntoView {
    let handle = expect_context::<ViewerHandle>();
    on_cleanup(move || handle.close());

    let command = move |command: Command| move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        handle.dispatch(command);
    };
    let on_backdrop = move |_| handle.close();
    let stop = move |ev: leptos::ev::MouseEvent| ev.stop_propagation();

    let on_mouse_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::MouseEvent| {
                if !is_primary_button(&ev) {
                    return;
                }
                // Suppress the browser's native image drag.
                ev.prevent_default();
                handle.start_pan(mouse_point(&ev));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::MouseEvent| {}
        }
    };
    let on_touch_start = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::TouchEvent| {
                if let Some(at) = touch_point(&ev) {
                    if handle.start_pan(at) {
                        ev.prevent_default();
                    }
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::TouchEvent| {}
        }
    };

    let src = move || handle.with(|core| core.current().map(|image| image.url.clone()).unwrap_or_default());
    let alt = move || handle.with(|core| alt_text(core.current()));
    let caption = move || handle.with(|core| core.current().and_then(|i| i.display_label().map(str::to_owned)));
    let transform = move || handle.with(|core| core.transform_css());
    let position = move || handle.with(|core| core.position_label());
    let zoom_text = move || handle.with(|core| zoom_label(core.view().zoom_percent()));
    let is_broken = move || handle.with(|core| core.is_current_broken());
    let is_zoomed = move || handle.with(|core| core.is_zoomed());
    let is_dragging = move || handle.with(|core| core.is_dragging());
    let no_previous = move || !handle.with(|core| core.has_previous());
    let no_next = move || !handle.with(|core| core.has_next());
    let can_zoom_out = move || handle.with(|core| core.zoom_level() > core.config().zoom.min);
    let can_zoom_in = move || handle.with(|core| core.zoom_level() < core.config().zoom.max);

    view! {
        <Show when=move || handle.is_open()>
            <div class="image-viewer" role="dialog" aria-modal="true" aria-label="Image viewer" on:click=on_backdrop>
                <div class="image-viewer__toolbar" on:click=stop>
                    <span class="image-viewer__counter">{position}</span>
                    <button class="image-viewer__btn" title="Zoom out (-)" disabled=move || !can_zoom_out() on:click=command(Command::ZoomOut)>
                        "−"
                    </button>
                    <button class="image-viewer__zoom" title="Reset zoom (0)" on:click=command(Command::ResetZoom)>
                        {zoom_text}
                    </button>
                    <button class="image-viewer__btn" title="Zoom in (+)" disabled=move || !can_zoom_in() on:click=command(Command::ZoomIn)>
                        "+"
                    </button>
                    <button class="image-viewer__btn" title="Download" on:click=command(Command::Download)>
                        "⤓"
                    </button>
                    <button class="image-viewer__btn image-viewer__close" title="Close (Esc)" on:click=command(Command::Close)>
                        "✕"
                    </button>
                </div>
                <button
                    class="image-viewer__nav image-viewer__nav--prev"
                    title="Previous (←)"
                    disabled=no_previous
                    on:click=command(Command::Previous)
                >
                    "‹"
                </button>
                <div class="image-viewer__stage">
                    // The image stays mounted while broken so a later `load` (after the
                    // src changes back to this slide) can clear the flag.
                    <img
                        class="image-viewer__image"
                        class:image-viewer__image--zoomed=is_zoomed
                        class:image-viewer__image--dragging=is_dragging
                        class:image-viewer__image--broken=is_broken
                        src=src
                        alt=alt
                        draggable="false"
                        style:transform=transform
                        on:click=stop
                        on:mousedown=on_mouse_down
                        on:touchstart=on_touch_start
                        on:load=move |_| handle.mark_current_loaded()
                        on:error=move |_| handle.mark_current_broken()
                    />
                    <Show when=is_broken>
                        <div class="image-viewer__placeholder" on:click=stop>
                            "Image unavailable"
                        </div>
                    </Show>
                </div>
                <button
                    class="image-viewer__nav image-viewer__nav--next"
                    title="Next (→)"
                    disabled=no_next
                    on:click=command(Command::Next)
                >
                    "›"
                </button>
                {move || caption().map(|text| view! { <div class="image-viewer__caption" on:click=stop>{text}</div> })}
            </div>
        </Show>
    }
}
