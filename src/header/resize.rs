//! Resize drag controller.
//!
//! Owns the `idle -> dragging -> idle` gesture. Candidate sizes are clamped to
//! the axis bounds before any callback sees them, and completion always
//! commits the last previewed size.

use super::HeaderAxis;
use crate::types::ClientCoords;

/// Gesture state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ResizeState {
    #[default]
    Idle,
    Dragging {
        index: u32,
        /// Axis coordinate where the drag began
        origin: f32,
        /// Cell size when the drag began
        start_size: f32,
        /// Last previewed (clamped) size
        size: f32,
    },
}

/// A single resize gesture over one header.
#[derive(Debug, Default)]
pub struct ResizeSession {
    state: ResizeState,
}

impl ResizeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ResizeState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, ResizeState::Dragging { .. })
    }

    /// Start dragging the handle of `index`. A gesture already in progress is
    /// replaced without committing.
    pub fn begin(&mut self, axis: &dyn HeaderAxis, index: u32, coords: ClientCoords) {
        let start_size = axis.cell_size(index);
        self.state = ResizeState::Dragging {
            index,
            origin: axis.drag_coordinate(coords),
            start_size,
            size: axis.size_bounds().clamp(start_size),
        };
    }

    /// Preview the size implied by `coords`; returns the clamped size.
    ///
    /// Each call while dragging issues exactly one size-preview callback.
    pub fn update(&mut self, axis: &dyn HeaderAxis, coords: ClientCoords) -> Option<f32> {
        let ResizeState::Dragging {
            index,
            origin,
            start_size,
            size,
        } = &mut self.state
        else {
            return None;
        };
        let delta = axis.drag_coordinate(coords) - *origin;
        *size = axis.size_bounds().clamp(*start_size + delta);
        axis.handle_size_changed(*index, *size);
        Some(*size)
    }

    /// Finish the gesture, committing the last previewed size.
    ///
    /// Returns the committed `(index, size)`, or `None` when idle.
    pub fn end(&mut self, axis: &dyn HeaderAxis) -> Option<(u32, f32)> {
        let ResizeState::Dragging { index, size, .. } = std::mem::take(&mut self.state) else {
            return None;
        };
        axis.handle_resize_end(index, size);
        Some((index, size))
    }
}
