//! Pointer handlers for `HeaderController`.
//!
//! A press near a row's bottom edge starts a resize gesture; moves preview the
//! new height through the guide overlay; release commits it.

use super::HeaderController;
use crate::header::HeaderAxis;
use crate::layout::Grid;
use crate::types::PointerEvent;

/// Half-height of the resize handle hit area in logical pixels
pub const RESIZE_HANDLE_SIZE: f32 = 4.0;

impl HeaderController {
    /// Row whose resize handle lies under the pointer, if any.
    pub fn resize_handle_at(&self, event: &PointerEvent) -> Option<u32> {
        if !self.options.resizable {
            return None;
        }
        let y = self.header.mouse_coordinate(event);
        let table_y = self.viewport.to_table_y(y - self.origin_y);
        let layout = self.layout.as_ref();

        // The handle straddles the boundary, so also try the row just above.
        let row = self
            .header
            .convert_point_to_row(y, false)
            .or_else(|| layout.num_rows().checked_sub(1))?;
        [Some(row), row.checked_sub(1)]
            .into_iter()
            .flatten()
            .find(|&candidate| {
                let bottom = layout.row_rect(candidate).bottom();
                (table_y - bottom).abs() <= RESIZE_HANDLE_SIZE
            })
    }

    /// Pointer press. Returns the row whose resize began.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> Option<u32> {
        let row = self.resize_handle_at(event)?;
        self.session.begin(&self.header, row, event.coords());
        tracing::debug!(message = "controller.resize_begin", row);
        Some(row)
    }

    /// Pointer move. Returns the previewed (clamped) height while dragging.
    pub fn pointer_move(&mut self, event: &PointerEvent) -> Option<f32> {
        self.session.update(&self.header, event.coords())
    }

    /// Pointer release. Returns the committed `(row, height)`.
    pub fn pointer_up(&mut self) -> Option<(u32, f32)> {
        let committed = self.session.end(&self.header)?;
        self.apply_pending();
        Some(committed)
    }

    pub fn is_resizing(&self) -> bool {
        self.session.is_dragging()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::types::RowHeaderConfig;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn controller() -> HeaderController {
        let config = RowHeaderConfig {
            min_row_height: 10.0,
            default_row_height: 20.0,
            max_row_height: 60.0,
            ..RowHeaderConfig::default()
        };
        let mut controller = HeaderController::new(&config, &[20.0; 100], 4).unwrap();
        controller.resize(200.0);
        controller
    }

    #[test]
    fn handle_found_on_either_side_of_boundary() {
        let controller = controller();
        // Boundary between rows 2 and 3 is at y=60
        assert_eq!(controller.resize_handle_at(&PointerEvent::new(0.0, 58.0)), Some(2));
        assert_eq!(controller.resize_handle_at(&PointerEvent::new(0.0, 62.0)), Some(2));
        assert_eq!(controller.resize_handle_at(&PointerEvent::new(0.0, 50.0)), None);
    }

    #[test]
    fn drag_previews_then_commits_once() {
        let mut controller = controller();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.set_commit_listener(Box::new(move |i: u32, s: f32| sink.borrow_mut().push((i, s))));

        assert_eq!(controller.pointer_down(&PointerEvent::new(0.0, 60.0)), Some(2));
        assert!(controller.is_resizing());

        assert_eq!(controller.pointer_move(&PointerEvent::new(0.0, 75.0)), Some(35.0));
        assert_eq!(controller.guide(), Some(vec![75.0]));

        // Clamped to max
        assert_eq!(controller.pointer_move(&PointerEvent::new(0.0, 200.0)), Some(60.0));
        assert_eq!(controller.guide(), Some(vec![100.0]));

        assert_eq!(controller.pointer_up(), Some((2, 60.0)));
        assert_eq!(controller.guide(), None);
        assert_eq!(*seen.borrow(), vec![(2, 60.0)]);
        assert_eq!(controller.layout().row_height(2), 60.0);
        assert_eq!(controller.layout().cumulative_height_before(3), 100.0);

        assert_eq!(controller.pointer_up(), None);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut controller = controller();
        assert_eq!(controller.pointer_move(&PointerEvent::new(0.0, 75.0)), None);
        assert_eq!(controller.guide(), None);
    }

    #[test]
    fn not_resizable_has_no_handles() {
        let config = RowHeaderConfig {
            resizable: false,
            ..RowHeaderConfig::default()
        };
        let controller = HeaderController::new(&config, &[20.0; 10], 1).unwrap();
        assert_eq!(controller.resize_handle_at(&PointerEvent::new(0.0, 20.0)), None);
    }
}
