//! Viewport state management for vertical scrolling and row windowing.

use super::grid::Grid;
use crate::error::{HeaderError, Result};

/// Extra rows to include around the viewport to reduce popping during scroll.
pub const VISIBLE_PADDING: u32 = 1;

/// Inclusive range of row indices eligible for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowWindow {
    pub start: u32,
    pub end: u32,
}

impl RowWindow {
    /// Create a window, rejecting `start > end`.
    ///
    /// # Errors
    /// Returns [`HeaderError::InvalidWindow`] for inverted bounds.
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(HeaderError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of rows in the window
    pub fn len(&self) -> u32 {
        (self.end - self.start).saturating_add(1)
    }

    /// A window always holds at least one row.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, row: u32) -> bool {
        (self.start..=self.end).contains(&row)
    }

    pub fn iter(&self) -> std::ops::RangeInclusive<u32> {
        self.start..=self.end
    }
}

/// Viewport state - represents the visible area of the table body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Vertical scroll position in table coordinates
    pub scroll_y: f32,
    /// Viewport height in pixels
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Create a new viewport with default values
    pub fn new() -> Self {
        Self {
            scroll_y: 0.0,
            height: 600.0,
        }
    }

    /// Row window covering the viewport, padded by [`VISIBLE_PADDING`].
    ///
    /// The bottom edge is exclusive. Only when the viewport extends past the
    /// last real row does the window continue into ghost rows, so the header
    /// fills the visible height; otherwise it ends at the last real row.
    pub fn visible_rows<G: Grid + ?Sized>(&self, grid: &G) -> RowWindow {
        let top = self.scroll_y.max(0.0);
        let bottom = top + self.height.max(0.0);
        let start = row_index_at(grid, top);
        let end = if bottom > grid.rect().height {
            row_index_at(grid, bottom).saturating_add(VISIBLE_PADDING)
        } else {
            let last_real = grid.num_rows().saturating_sub(1);
            row_index_at(grid, bottom)
                .min(last_real)
                .saturating_add(VISIBLE_PADDING)
                .min(last_real)
        };
        RowWindow {
            start: start.saturating_sub(VISIBLE_PADDING),
            end: end.max(start),
        }
    }

    /// Convert a viewport-relative y to table coordinates
    pub fn to_table_y(&self, viewport_y: f32) -> f32 {
        viewport_y + self.scroll_y
    }

    /// Clamp scroll position to the real table extent.
    pub fn clamp_scroll<G: Grid + ?Sized>(&mut self, grid: &G) {
        let max_y = (grid.rect().height - self.height).max(0.0);
        self.scroll_y = self.scroll_y.clamp(0.0, max_y);
    }

    /// Scroll by a delta amount
    pub fn scroll_by<G: Grid + ?Sized>(&mut self, delta_y: f32, grid: &G) {
        self.scroll_y += delta_y;
        self.clamp_scroll(grid);
    }

    /// Set absolute scroll position
    pub fn set_scroll<G: Grid + ?Sized>(&mut self, y: f32, grid: &G) {
        self.scroll_y = y;
        self.clamp_scroll(grid);
    }

    /// Resize the viewport
    pub fn resize(&mut self, height: f32) {
        self.height = height;
    }
}

/// Row index at table-space `y`, counting ghost rows past the real data.
fn row_index_at<G: Grid + ?Sized>(grid: &G, y: f32) -> u32 {
    if let Some(row) = grid.row_at_y(y) {
        return row;
    }
    let total = grid.rect().height;
    let ghost_height = grid.ghost_row_height();
    if y < total || ghost_height <= 0.0 {
        return grid.num_rows().saturating_sub(1);
    }
    let ghosts = ((y - total) / ghost_height).floor();
    // `as` saturates for f32 -> u32
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ghosts = ghosts as u32;
    grid.num_rows().saturating_add(ghosts)
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
    use crate::layout::SheetLayout;

    #[test]
    fn window_rejects_inverted_bounds() {
        assert!(RowWindow::new(3, 2).is_err());
        let window = RowWindow::new(2, 2).unwrap();
        assert_eq!(window.len(), 1);
        assert!(window.contains(2));
    }

    #[test]
    fn visible_rows_at_top() {
        let layout = SheetLayout::uniform(1000, 3, 20.0);
        let viewport = Viewport {
            scroll_y: 0.0,
            height: 100.0,
        };
        let window = viewport.visible_rows(&layout);
        assert_eq!(window, RowWindow { start: 0, end: 6 });
    }

    #[test]
    fn visible_rows_after_scroll() {
        let layout = SheetLayout::uniform(1000, 3, 20.0);
        let viewport = Viewport {
            scroll_y: 410.0,
            height: 100.0,
        };
        // Rows 20..=25 are on screen, padded by one on each side
        assert_eq!(viewport.visible_rows(&layout), RowWindow { start: 19, end: 26 });
    }

    #[test]
    fn visible_rows_extend_into_ghost_rows() {
        let layout = SheetLayout::uniform(3, 1, 20.0);
        let viewport = Viewport {
            scroll_y: 0.0,
            height: 200.0,
        };
        // 200px of viewport over 60px of data: rows 3..=10 are ghosts
        let window = viewport.visible_rows(&layout);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 11);
        assert!(layout.is_ghost_index(Some(window.end), None));
    }

    #[test]
    fn visible_rows_at_end_stop_at_last_real_row() {
        let layout = SheetLayout::uniform(100, 1, 20.0);
        let mut viewport = Viewport {
            scroll_y: 0.0,
            height: 200.0,
        };
        viewport.set_scroll(1e9, &layout);
        assert_eq!(viewport.scroll_y, 1800.0);
        assert_eq!(viewport.visible_rows(&layout), RowWindow { start: 89, end: 99 });
    }

    #[test]
    fn visible_rows_exactly_filling_table_have_no_ghosts() {
        let layout = SheetLayout::uniform(5, 1, 20.0);
        let viewport = Viewport {
            scroll_y: 0.0,
            height: 100.0,
        };
        assert_eq!(viewport.visible_rows(&layout), RowWindow { start: 0, end: 4 });
    }

    #[test]
    fn clamp_scroll_to_table_extent() {
        let layout = SheetLayout::uniform(10, 1, 20.0);
        let mut viewport = Viewport {
            scroll_y: 0.0,
            height: 100.0,
        };
        viewport.scroll_by(1000.0, &layout);
        assert_eq!(viewport.scroll_y, 100.0);
        viewport.set_scroll(-50.0, &layout);
        assert_eq!(viewport.scroll_y, 0.0);
        assert_eq!(viewport.to_table_y(15.0), 15.0);
    }
}
