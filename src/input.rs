use glam::Vec2;
use web_sys as web;

/// Pointer position in CSS pixels relative to the viewport.
/// Drag deltas are all that matter, so no element offset is applied.
#[inline]
pub fn pointer_client_pos(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

#[inline]
pub fn is_primary_button(ev: &web::PointerEvent) -> bool {
    ev.button() == 0
}
