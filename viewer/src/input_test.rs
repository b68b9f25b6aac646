#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Key map
// =============================================================

#[test]
fn arrows_navigate() {
    assert_eq!(command_for_key(&Key::from("ArrowLeft")), Some(Command::Previous));
    assert_eq!(command_for_key(&Key::from("ArrowRight")), Some(Command::Next));
}

#[test]
fn plus_and_equals_zoom_in() {
    assert_eq!(command_for_key(&Key::from("+")), Some(Command::ZoomIn));
    assert_eq!(command_for_key(&Key::from("=")), Some(Command::ZoomIn));
}

#[test]
fn minus_and_underscore_zoom_out() {
    assert_eq!(command_for_key(&Key::from("-")), Some(Command::ZoomOut));
    assert_eq!(command_for_key(&Key::from("_")), Some(Command::ZoomOut));
}

#[test]
fn zero_resets_and_escape_closes() {
    assert_eq!(command_for_key(&Key::from("0")), Some(Command::ResetZoom));
    assert_eq!(command_for_key(&Key::from("Escape")), Some(Command::Close));
}

#[test]
fn unbound_keys_map_to_nothing() {
    for key in ["ArrowUp", "ArrowDown", "Enter", " ", "a", "1", "Delete"] {
        assert_eq!(command_for_key(&Key::from(key)), None, "{key}");
    }
}

#[test]
fn no_key_triggers_download() {
    for key in ["d", "D", "s", "Enter"] {
        assert_ne!(command_for_key(&Key::from(key)), Some(Command::Download));
    }
}

// =============================================================
// PanGesture
// =============================================================

#[test]
fn gesture_default_is_idle() {
    let gesture = PanGesture::default();
    assert!(!gesture.is_active());
}

#[test]
fn advance_while_idle_yields_nothing() {
    let mut gesture = PanGesture::Idle;
    assert_eq!(gesture.advance(Point::new(5.0, 5.0)), None);
}

#[test]
fn advance_reports_incremental_deltas() {
    let mut gesture = PanGesture::Idle;
    gesture.start(Point::new(100.0, 100.0));
    assert_eq!(gesture.advance(Point::new(130.0, 115.0)), Some((30.0, 15.0)));
    assert_eq!(gesture.advance(Point::new(120.0, 115.0)), Some((-10.0, 0.0)));
}

#[test]
fn end_returns_whether_active() {
    let mut gesture = PanGesture::Idle;
    assert!(!gesture.end());
    gesture.start(Point::new(0.0, 0.0));
    assert!(gesture.end());
    assert!(!gesture.is_active());
}
