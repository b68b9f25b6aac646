//! Browser event to viewer input mapping.

use viewer::transform::Point;

/// Pointer position of a mouse event in viewport pixels.
pub fn mouse_point(ev: &web_sys::MouseEvent) -> Point {
    Point::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

/// Position of the first active touch, if any.
pub fn touch_point(ev: &web_sys::TouchEvent) -> Option<Point> {
    let touch = ev.touches().get(0)?;
    Some(Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Only the primary button starts a drag.
pub fn is_primary_button(ev: &web_sys::MouseEvent) -> bool {
    ev.button() == 0
}
