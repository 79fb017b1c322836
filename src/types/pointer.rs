/// A 2-D client coordinate pair `(x, y)` as reported by a drag controller.
pub type ClientCoords = (f32, f32);

/// The subset of a raw pointer event the header needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerEvent {
    /// Horizontal client coordinate in CSS pixels.
    pub client_x: f32,
    /// Vertical client coordinate in CSS pixels.
    pub client_y: f32,
}

impl PointerEvent {
    pub fn new(client_x: f32, client_y: f32) -> Self {
        Self { client_x, client_y }
    }

    /// Coordinate pair form, for drag controllers.
    pub fn coords(&self) -> ClientCoords {
        (self.client_x, self.client_y)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<&web_sys::MouseEvent> for PointerEvent {
    fn from(event: &web_sys::MouseEvent) -> Self {
        Self {
            client_x: event.client_x() as f32,
            client_y: event.client_y() as f32,
        }
    }
}
