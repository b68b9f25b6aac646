//! Page-wide image viewer handle.
//!
//! DESIGN
//! ======
//! One `viewer::ViewerCore` lives in a signal provided through context, so
//! every gallery on the page opens the same viewer instead of each keeping its
//! own copy of zoom/drag globals. The handle performs the core's `Action`s
//! against the browser: listener registration, body scroll lock, downloads.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use leptos::prelude::*;
use viewer::engine::{Action, ViewerCore};
use viewer::input::{Command, Key, command_for_key};
use viewer::transform::Point;
use viewer::{ImageDescriptor, StartAt, ViewerConfig, ViewerError};

use crate::util::global_listeners::GlobalListeners;
use crate::util::{download, scroll_lock};

/// Copyable handle to the page's viewer, provided via context by `ViewerRoot`.
#[derive(Clone, Copy)]
pub struct ViewerHandle {
    core: RwSignal<ViewerCore>,
    listeners: StoredValue<Option<GlobalListeners>, LocalStorage>,
    /// True when this viewer added the scroll-lock class (the host may have set it first).
    owns_scroll_lock: StoredValue<bool>,
}

impl ViewerHandle {
    /// An invalid `config` is logged and replaced by the defaults.
    pub fn new(config: ViewerConfig) -> Self {
        let core = ViewerCore::new(config).unwrap_or_else(|err| {
            log::warn!("viewer: {err}, using default config");
            ViewerCore::default()
        });
        Self {
            core: RwSignal::new(core),
            listeners: StoredValue::new_local(None),
            owns_scroll_lock: StoredValue::new(false),
        }
    }

    // --- Lifecycle ---

    /// Open the viewer on `images`.
    ///
    /// # Errors
    ///
    /// Propagates [`ViewerError::InvalidGallery`] and [`ViewerError::AlreadyOpen`]
    /// from the core; nothing is attached in either case.
    pub fn open(&self, images: Vec<ImageDescriptor>, start: impl Into<StartAt>) -> Result<(), ViewerError> {
        let start = start.into();
        let mut outcome = Ok(Vec::new());
        self.core.try_maybe_update(|core| {
            outcome = core.open(images, start);
            (outcome.is_ok(), ())
        });
        let actions = outcome?;
        self.run(actions);
        Ok(())
    }

    /// Close the viewer. Safe to call when already closed.
    pub fn close(&self) {
        let actions = self.core.try_maybe_update(|core| {
            let actions = core.close();
            (!actions.is_empty(), actions)
        });
        self.run(actions.unwrap_or_default());
    }

    // --- Commands ---

    pub fn dispatch(&self, command: Command) {
        let actions = self.core.try_maybe_update(|core| {
            let actions = core.dispatch(command);
            (actions.contains(&Action::Render), actions)
        });
        self.run(actions.unwrap_or_default());
    }

    /// Route a `KeyboardEvent.key`. Returns `true` if the viewer consumed it,
    /// in which case the caller should prevent the browser default.
    pub fn on_key_down(&self, key: &str) -> bool {
        let key = Key::from(key);
        let Some(command) = command_for_key(&key) else {
            return false;
        };
        if !self.core.with_untracked(ViewerCore::is_open) {
            return false;
        }
        self.dispatch(command);
        true
    }

    // --- Pan ---

    pub fn start_pan(&self, at: Point) -> bool {
        self.transition(|core| core.start_pan(at))
    }

    pub fn drag_pan(&self, at: Point) -> bool {
        if !self.is_dragging_untracked() {
            return false;
        }
        self.transition(|core| core.drag_pan(at))
    }

    pub fn end_pan(&self) -> bool {
        if !self.is_dragging_untracked() {
            return false;
        }
        self.transition(ViewerCore::end_pan)
    }

    // --- Image load state ---

    pub fn mark_current_broken(&self) {
        if let Some(index) = self.core.with_untracked(ViewerCore::current_index) {
            self.transition(|core| core.mark_broken(index));
        }
    }

    pub fn mark_current_loaded(&self) {
        if let Some(index) = self.core.with_untracked(ViewerCore::current_index) {
            self.transition(|core| core.mark_loaded(index));
        }
    }

    // --- Reads ---

    /// Tracked read of the core state.
    pub fn with<R>(&self, f: impl FnOnce(&ViewerCore) -> R) -> R {
        self.core.with(f)
    }

    pub fn is_open(&self) -> bool {
        self.core.with(ViewerCore::is_open)
    }

    pub fn is_dragging_untracked(&self) -> bool {
        self.core.with_untracked(ViewerCore::is_dragging)
    }

    /// Whether document listeners are currently registered.
    pub fn has_listeners(&self) -> bool {
        self.listeners.with_value(Option::is_some)
    }

    // --- Internals ---

    /// Apply a state change, notifying subscribers only if it changed something.
    fn transition(&self, f: impl FnOnce(&mut ViewerCore) -> bool) -> bool {
        self.core
            .try_maybe_update(|core| {
                let changed = f(core);
                (changed, changed)
            })
            .unwrap_or(false)
    }

    fn run(&self, actions: Vec<Action>) {
        for action in actions {
            match action {
                // The signal write already schedules the re-render.
                Action::Render => {}
                Action::AttachListeners => self.attach_listeners(),
                Action::DetachListeners => self.detach_listeners(),
                Action::LockScroll => self.lock_scroll(),
                Action::UnlockScroll => self.unlock_scroll(),
                Action::Download(request) => download::trigger(&request),
            }
        }
    }

    fn attach_listeners(&self) {
        let fresh = GlobalListeners::attach(*self);
        let mut stale = None;
        self.listeners.update_value(|slot| stale = slot.replace(fresh));
        if let Some(stale) = stale {
            stale.detach();
        }
    }

    fn detach_listeners(&self) {
        let mut current = None;
        self.listeners.update_value(|slot| current = slot.take());
        if let Some(current) = current {
            current.detach();
        }
    }

    fn lock_scroll(&self) {
        let class = self.scroll_lock_class();
        if scroll_lock::is_locked(&class) {
            self.owns_scroll_lock.set_value(false);
            return;
        }
        scroll_lock::lock(&class);
        self.owns_scroll_lock.set_value(true);
    }

    /// Only removes a lock this viewer applied; a host-applied lock stays.
    fn unlock_scroll(&self) {
        if self.owns_scroll_lock.get_value() {
            scroll_lock::unlock(&self.scroll_lock_class());
            self.owns_scroll_lock.set_value(false);
        }
    }

    fn scroll_lock_class(&self) -> String {
        self.core.with_untracked(|core| core.config().scroll_lock_class.clone())
    }
}

/// Zoom readout text, e.g. `"125%"`.
pub fn zoom_label(percent: u32) -> String {
    format!("{percent}%")
}

/// Alt text for the current image.
pub fn alt_text(image: Option<&ImageDescriptor>) -> String {
    image
        .and_then(ImageDescriptor::display_label)
        .map_or_else(|| "Gallery image".to_owned(), str::to_owned)
}
