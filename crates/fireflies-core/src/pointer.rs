/// Pointer position in normalized device coordinates: x grows right, y grows
/// up, both nominally in [-1, 1].
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

/// Raw pointer move as delivered by the host: pixel position inside the
/// viewport plus the viewport size, all in the same (physical or CSS) units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Map pixel coordinates (origin top-left, y down) to NDC. Returns `None`
    /// for an empty viewport.
    pub fn from_event(ev: PointerEvent) -> Option<Self> {
        if ev.width <= 0.0 || ev.height <= 0.0 {
            return None;
        }
        Some(Self {
            x: (ev.x / ev.width) * 2.0 - 1.0,
            y: -(ev.y / ev.height) * 2.0 + 1.0,
        })
    }
}
