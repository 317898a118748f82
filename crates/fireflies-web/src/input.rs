use fireflies_core::PointerEvent;
use web_sys as web;

/// Pointer position relative to the canvas, in CSS pixels, with the canvas's
/// CSS size as the viewport.
#[inline]
pub fn pointer_event_on_canvas(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
) -> PointerEvent {
    let rect = canvas.get_bounding_client_rect();
    PointerEvent {
        x: ev.client_x() as f32 - rect.left() as f32,
        y: ev.client_y() as f32 - rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    }
}
