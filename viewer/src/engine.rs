use crate::config::ViewerConfig;
use crate::download::DownloadRequest;
use crate::error::ViewerError;
use crate::gallery::{Gallery, ImageDescriptor, StartAt};
use crate::input::{Command, Key, PanGesture, command_for_key};
use crate::transform::{PanOffset, Point, ViewTransform};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Side effects returned to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Viewer state changed; redraw.
    Render,
    /// Register the document-level key and pointer listeners.
    AttachListeners,
    /// Remove every listener registered by `AttachListeners`.
    DetachListeners,
    /// Apply the scroll-lock class to `<body>`.
    LockScroll,
    /// Remove the scroll-lock class from `<body>`.
    UnlockScroll,
    /// Start a browser download. Fire-and-forget.
    Download(DownloadRequest),
}

/// Everything that exists only while the viewer is open.
#[derive(Debug, Clone)]
struct Session {
    gallery: Gallery,
    view: ViewTransform,
    pan: PanGesture,
    broken: Vec<bool>,
}

impl Session {
    fn new(gallery: Gallery) -> Self {
        let broken = vec![false; gallery.len()];
        Self { gallery, view: ViewTransform::default(), pan: PanGesture::Idle, broken }
    }

    fn reset_view(&mut self) {
        self.view = ViewTransform::default();
        self.pan = PanGesture::Idle;
    }
}

/// Viewer state machine.
///
/// Closed is `session == None`; closing drops every gallery field at once.
/// All transitions are synchronous and clamp instead of failing.
#[derive(Debug, Clone, Default)]
pub struct ViewerCore {
    config: ViewerConfig,
    session: Option<Session>,
}

impl ViewerCore {
    /// Build a closed viewer.
    ///
    /// # Errors
    ///
    /// Returns [`ViewerError::InvalidConfig`] if `config` fails
    /// [`ViewerConfig::validate`]; zoom clamping relies on `min <= max`.
    pub fn new(config: ViewerConfig) -> Result<Self, ViewerError> {
        config.validate()?;
        Ok(Self { config, session: None })
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    // --- Lifecycle ---

    /// Show `images`, starting at `start`.
    ///
    /// # Errors
    ///
    /// [`ViewerError::AlreadyOpen`] if a gallery is already showing (the open
    /// session is left untouched), or [`ViewerError::InvalidGallery`] if
    /// `images` is empty (the viewer stays closed).
    pub fn open(&mut self, images: Vec<ImageDescriptor>, start: impl Into<StartAt>) -> Result<Vec<Action>, ViewerError> {
        if self.session.is_some() {
            log::warn!("viewer: open rejected, already open");
            return Err(ViewerError::AlreadyOpen);
        }
        let gallery = Gallery::new(images, start)?;
        log::debug!("viewer: open {} images at {}", gallery.len(), gallery.current_index());
        self.session = Some(Session::new(gallery));
        Ok(vec![Action::LockScroll, Action::AttachListeners, Action::Render])
    }

    /// Hide the viewer and clear its state. Closing twice is a no-op.
    pub fn close(&mut self) -> Vec<Action> {
        if self.session.take().is_none() {
            return Vec::new();
        }
        log::debug!("viewer: close");
        vec![Action::DetachListeners, Action::UnlockScroll, Action::Render]
    }

    // --- Navigation ---

    /// Show the next image. No-op on the last one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        self.navigate(Gallery::next)
    }

    /// Show the previous image. No-op on the first one.
    pub fn previous(&mut self) -> bool {
        self.navigate(Gallery::previous)
    }

    fn navigate(&mut self, step: fn(&mut Gallery) -> bool) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !step(&mut session.gallery) {
            return false;
        }
        session.reset_view();
        log::debug!("viewer: slide {}", session.gallery.position_label());
        true
    }

    // --- Zoom ---

    pub fn zoom_in(&mut self) -> bool {
        let limits = self.config.zoom;
        self.session.as_mut().is_some_and(|s| s.view.zoom_in(&limits))
    }

    /// Zoom out one step; reaching the default zoom recentres and ends any drag.
    pub fn zoom_out(&mut self) -> bool {
        let limits = self.config.zoom;
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let changed = session.view.zoom_out(&limits);
        if !session.view.is_zoomed() {
            session.pan.end();
        }
        changed
    }

    pub fn reset_zoom(&mut self) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        session.pan.end();
        session.view.reset()
    }

    // --- Pan ---

    /// Begin dragging at `at`. Ignored unless zoomed in.
    pub fn start_pan(&mut self, at: Point) -> bool {
        match self.session.as_mut() {
            Some(session) if session.view.is_zoomed() => {
                session.pan.start(at);
                true
            }
            _ => false,
        }
    }

    /// Move the image by the pointer delta since the previous call.
    pub fn drag_pan(&mut self, at: Point) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.view.is_zoomed() {
            return false;
        }
        match session.pan.advance(at) {
            Some((dx, dy)) => {
                session.view.pan_by(dx, dy);
                true
            }
            None => false,
        }
    }

    pub fn end_pan(&mut self) -> bool {
        self.session.as_mut().is_some_and(|s| s.pan.end())
    }

    // --- Download ---

    /// Download target for the current image.
    #[must_use]
    pub fn download_current(&self) -> Option<DownloadRequest> {
        let session = self.session.as_ref()?;
        Some(DownloadRequest::for_image(session.gallery.current(), &self.config.fallback_filename))
    }

    // --- Commands ---

    /// Apply a command and return the host actions it needs.
    pub fn dispatch(&mut self, command: Command) -> Vec<Action> {
        if self.session.is_none() {
            return Vec::new();
        }
        let changed = match command {
            Command::Previous => self.previous(),
            Command::Next => self.next(),
            Command::ZoomIn => self.zoom_in(),
            Command::ZoomOut => self.zoom_out(),
            Command::ResetZoom => self.reset_zoom(),
            Command::Close => return self.close(),
            Command::Download => return self.download_current().map(Action::Download).into_iter().collect(),
        };
        if changed { vec![Action::Render] } else { Vec::new() }
    }

    /// Keyboard entry point. Unbound keys and keys while closed do nothing.
    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if self.session.is_none() {
            return Vec::new();
        }
        match command_for_key(key) {
            Some(command) => self.dispatch(command),
            None => Vec::new(),
        }
    }

    // --- Image load state ---

    /// Record that the image at `index` failed to load.
    pub fn mark_broken(&mut self, index: usize) -> bool {
        self.set_broken(index, true)
    }

    /// Record that the image at `index` loaded.
    pub fn mark_loaded(&mut self, index: usize) -> bool {
        self.set_broken(index, false)
    }

    fn set_broken(&mut self, index: usize, broken: bool) -> bool {
        let Some(slot) = self.session.as_mut().and_then(|s| s.broken.get_mut(index)) else {
            return false;
        };
        if *slot == broken {
            return false;
        }
        if broken {
            log::warn!("viewer: image {index} failed to load");
        }
        *slot = broken;
        true
    }

    // --- Queries ---

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.gallery.current_index())
    }

    #[must_use]
    pub fn current(&self) -> Option<&ImageDescriptor> {
        self.session.as_ref().map(|s| s.gallery.current())
    }

    #[must_use]
    pub fn images(&self) -> &[ImageDescriptor] {
        match &self.session {
            Some(session) => session.gallery.images(),
            None => &[],
        }
    }

    /// Number of images in the open gallery; 0 when closed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The current transform; the default transform when closed.
    #[must_use]
    pub fn view(&self) -> ViewTransform {
        self.session.as_ref().map(|s| s.view).unwrap_or_default()
    }

    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.view().zoom
    }

    #[must_use]
    pub fn pan_offset(&self) -> PanOffset {
        self.view().pan
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.view().is_zoomed()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.pan.is_active())
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.gallery.has_next())
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.gallery.has_previous())
    }

    #[must_use]
    pub fn is_current_broken(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.broken.get(s.gallery.current_index()).copied().unwrap_or(false))
    }

    #[must_use]
    pub fn transform_css(&self) -> String {
        self.view().css_transform()
    }

    /// `"2 / 5"` style counter; empty when closed.
    #[must_use]
    pub fn position_label(&self) -> String {
        self.session.as_ref().map(|s| s.gallery.position_label()).unwrap_or_default()
    }
}
