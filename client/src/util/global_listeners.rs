//! Document-level listeners that exist only while the viewer is open.
//!
//! SYSTEM CONTEXT
//! ==============
//! Key presses and drag moves must reach the viewer even after the pointer
//! leaves the image, so they are registered on `document`. Registration is
//! driven by the core's `AttachListeners` / `DetachListeners` actions, which
//! always come in pairs; dropping a `GlobalListeners` removes everything it
//! registered.
//!
//! TRADE-OFFS
//! ==========
//! `touchmove` is registered non-passive so a drag on a zoomed image can
//! cancel page scrolling. Closures are dropped on the next microtask because
//! a listener may be the one removing itself (Escape closes the viewer).

use crate::state::viewer::ViewerHandle;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::util::viewer_input::{mouse_point, touch_point};

#[cfg(feature = "hydrate")]
type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// The set of document listeners registered for one open session.
pub struct GlobalListeners {
    #[cfg(feature = "hydrate")]
    target: Option<web_sys::EventTarget>,
    #[cfg(feature = "hydrate")]
    registered: Vec<(&'static str, Listener)>,
}

impl GlobalListeners {
    /// Register keyboard and drag listeners that forward to `handle`.
    pub fn attach(handle: ViewerHandle) -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                log::warn!("viewer: no document, keyboard and drag input disabled");
                return Self { target: None, registered: Vec::new() };
            };
            let mut set = Self { target: Some(document.into()), registered: Vec::new() };

            set.add("keydown", false, move |ev| {
                let Some(ev) = ev.dyn_ref::<web_sys::KeyboardEvent>() else {
                    return;
                };
                if handle.on_key_down(&ev.key()) {
                    ev.prevent_default();
                }
            });
            set.add("mousemove", true, move |ev| {
                if let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() {
                    handle.drag_pan(mouse_point(ev));
                }
            });
            set.add("mouseup", true, move |_| {
                handle.end_pan();
            });
            set.add("touchmove", false, move |ev| {
                let Some(ev) = ev.dyn_ref::<web_sys::TouchEvent>() else {
                    return;
                };
                if !handle.is_dragging_untracked() {
                    return;
                }
                ev.prevent_default();
                if let Some(point) = touch_point(ev) {
                    handle.drag_pan(point);
                }
            });
            set.add("touchend", true, move |_| {
                handle.end_pan();
            });
            set.add("touchcancel", true, move |_| {
                handle.end_pan();
            });
            log::debug!("viewer: attached {} document listeners", set.registered.len());
            set
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = handle;
            Self {}
        }
    }

    /// Remove every listener this set registered.
    pub fn detach(self) {
        drop(self);
    }

    #[cfg(feature = "hydrate")]
    fn add(&mut self, event: &'static str, passive: bool, handler: impl FnMut(web_sys::Event) + 'static) {
        let Some(target) = self.target.as_ref() else {
            return;
        };
        let listener: Listener = Closure::new(handler);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(passive);
        match target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            listener.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(()) => self.registered.push((event, listener)),
            Err(err) => log::warn!("viewer: failed to add {event} listener: {err:?}"),
        }
    }
}

impl Drop for GlobalListeners {
    fn drop(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            let registered = std::mem::take(&mut self.registered);
            if let Some(target) = self.target.take() {
                for (event, listener) in &registered {
                    if let Err(err) = target.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
                        log::warn!("viewer: failed to remove {event} listener: {err:?}");
                    }
                }
            }
            if !registered.is_empty() {
                log::debug!("viewer: detached {} document listeners", registered.len());
                wasm_bindgen_futures::spawn_local(async move {
                    drop(registered);
                });
            }
        }
    }
}
