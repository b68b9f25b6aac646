//! Input model: viewer commands, the keyboard map, and the pan gesture.
//!
//! Hosts forward `KeyboardEvent.key` strings and pointer positions; this module
//! decides what they mean. `PanGesture` is the only state carried between
//! pointer-down and pointer-up.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::transform::Point;

/// A keyboard key as reported by the browser (e.g. `"ArrowLeft"`, `"+"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Self(key.to_owned())
    }
}

/// A discrete viewer operation, from a key or a toolbar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    Close,
    /// Button only; no key is bound to it.
    Download,
}

/// Map a key to its viewer command.
#[must_use]
pub fn command_for_key(key: &Key) -> Option<Command> {
    match key.0.as_str() {
        "ArrowLeft" => Some(Command::Previous),
        "ArrowRight" => Some(Command::Next),
        "+" | "=" => Some(Command::ZoomIn),
        "-" | "_" => Some(Command::ZoomOut),
        "0" => Some(Command::ResetZoom),
        "Escape" => Some(Command::Close),
        _ => None,
    }
}

/// Drag-to-pan gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanGesture {
    /// No drag in progress.
    #[default]
    Idle,
    /// Dragging; deltas are measured from the previous pointer position.
    Panning { last: Point },
}

impl PanGesture {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    /// Begin a drag at `at`.
    pub fn start(&mut self, at: Point) {
        *self = Self::Panning { last: at };
    }

    /// Advance the drag to `at`, returning the delta since the last call.
    pub fn advance(&mut self, at: Point) -> Option<(f64, f64)> {
        match self {
            Self::Idle => None,
            Self::Panning { last } => {
                let delta = (at.x - last.x, at.y - last.y);
                *last = at;
                Some(delta)
            }
        }
    }

    /// End the drag. Returns `true` if one was in progress.
    pub fn end(&mut self) -> bool {
        let was_active = self.is_active();
        *self = Self::Idle;
        was_active
    }
}
