//! Pointer-to-row resolution.

use std::rc::Rc;

use super::grid::Grid;
use super::viewport::Viewport;

/// Resolves pointer positions to logical row indices.
pub trait Locator {
    /// Row index under the client y coordinate.
    ///
    /// With `use_midpoint`, returns the index of the nearest row boundary
    /// instead of the containing row (a drop target between rows). Returns
    /// `None` when the pointer is outside the real rows.
    fn convert_point_to_row(&self, client_y: f32, use_midpoint: bool) -> Option<u32>;
}

/// [`Locator`] backed by a [`Grid`] and the current scroll state.
pub struct LayoutLocator {
    grid: Rc<dyn Grid>,
    viewport: Viewport,
    /// Client y of the table body's top edge
    origin_y: f32,
}

impl LayoutLocator {
    pub fn new(grid: Rc<dyn Grid>, viewport: Viewport, origin_y: f32) -> Self {
        Self {
            grid,
            viewport,
            origin_y,
        }
    }
}

impl Locator for LayoutLocator {
    fn convert_point_to_row(&self, client_y: f32, use_midpoint: bool) -> Option<u32> {
        let table_y = self.viewport.to_table_y(client_y - self.origin_y);
        let row = self.grid.row_at_y(table_y)?;
        if !use_midpoint {
            return Some(row);
        }
        let rect = self.grid.row_rect(row);
        if table_y < rect.top + rect.height / 2.0 {
            Some(row)
        } else {
            Some(row.saturating_add(1))
        }
    }
}
