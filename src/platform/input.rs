//! Pointer coordinate mapping

use glam::Vec2;

use crate::sim::PointerEvent;

/// DOM events the canvas listens to, with the pointer message each becomes
pub const MOUSE_EVENTS: [&str; 3] = ["mousedown", "mouseup", "mousemove"];
pub const TOUCH_EVENTS: [&str; 3] = ["touchstart", "touchend", "touchmove"];

/// Translate a DOM event name and surface position into a pointer message
pub fn pointer_event(name: &str, pos: Vec2) -> Option<PointerEvent> {
    match name {
        "mousedown" | "touchstart" => Some(PointerEvent::Down(pos)),
        "mouseup" | "touchend" => Some(PointerEvent::Up(pos)),
        "mousemove" | "touchmove" => Some(PointerEvent::Move(pos)),
        _ => None,
    }
}

/// Offset of a touch from the canvas padding edge, matching `MouseEvent.offsetX/Y`.
///
/// `rect_origin` is the bounding rect's top-left (border edge) and `border`
/// the element's `clientLeft/clientTop`.
pub fn touch_offset(client: Vec2, rect_origin: Vec2, border: Vec2) -> Vec2 {
    client - rect_origin - border
}

/// Map an offset in CSS pixels onto the surface's own pixel grid.
///
/// The canvas keeps a fixed backing size but may be scaled by CSS. A
/// degenerate client size (element not laid out yet) passes through.
pub fn to_surface_coords(offset: Vec2, client_size: Vec2, surface_size: Vec2) -> Vec2 {
    if client_size.x <= 0.0 || client_size.y <= 0.0 {
        return offset;
    }
    offset * (surface_size / client_size)
}
