//! Pre-computed row geometry for a table.
//!
//! Row offsets are computed once as a prefix sum, enabling O(log n) hit
//! testing and O(1) offset lookups for the header's windowing math.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::grid::{Grid, Rect};
pub use crate::types::config::DEFAULT_ROW_HEIGHT;

/// Default column width in pixels
pub const DEFAULT_COL_WIDTH: f32 = 150.0;

/// Pre-computed layout data for a table
#[derive(Debug, Clone)]
pub struct SheetLayout {
    /// Cumulative row positions (`row_positions[i]` = y of row i's top edge),
    /// with a final entry for the bottom edge
    pub row_positions: Vec<f32>,
    /// Row heights (0 for hidden rows)
    pub row_heights: Vec<f32>,
    /// Column widths
    pub col_widths: Vec<f32>,
    /// Height used for ghost rows past the last real row
    pub ghost_row_height: f32,
}

impl SheetLayout {
    /// Create a new layout
    ///
    /// # Arguments
    /// * `num_rows` - Number of real rows
    /// * `num_cols` - Number of real columns
    /// * `row_heights_map` - Map of row index to height
    /// * `hidden_rows` - Set of hidden row indices
    /// * `col_widths_map` - Map of column index to width
    /// * `default_row_height` - Height for rows missing from the map, and for ghost rows
    pub fn new(
        num_rows: u32,
        num_cols: u32,
        row_heights_map: &HashMap<u32, f32>,
        hidden_rows: &HashSet<u32>,
        col_widths_map: &HashMap<u32, f32>,
        default_row_height: f32,
    ) -> Self {
        let row_heights: Vec<f32> = (0..num_rows)
            .map(|row| {
                if hidden_rows.contains(&row) {
                    0.0
                } else {
                    row_heights_map
                        .get(&row)
                        .copied()
                        .unwrap_or(default_row_height)
                        .max(0.0)
                }
            })
            .collect();

        let col_widths = (0..num_cols)
            .map(|col| {
                col_widths_map
                    .get(&col)
                    .copied()
                    .unwrap_or(DEFAULT_COL_WIDTH)
            })
            .collect();

        let mut layout = SheetLayout {
            row_positions: Vec::with_capacity(row_heights.len() + 1),
            row_heights,
            col_widths,
            ghost_row_height: default_row_height,
        };
        layout.recompute_positions_from(0);
        layout
    }

    /// Layout with every row at the same height.
    pub fn uniform(num_rows: u32, num_cols: u32, row_height: f32) -> Self {
        Self::new(
            num_rows,
            num_cols,
            &HashMap::new(),
            &HashSet::new(),
            &HashMap::new(),
            row_height,
        )
    }

    /// Apply a committed row height; offsets after `row` shift accordingly.
    ///
    /// Returns `false` (and changes nothing) for ghost rows.
    pub fn set_row_height(&mut self, row: u32, height: f32) -> bool {
        let idx = row as usize;
        let Some(slot) = self.row_heights.get_mut(idx) else {
            return false;
        };
        *slot = height.max(0.0);
        self.recompute_positions_from(idx);
        true
    }

    fn recompute_positions_from(&mut self, from: usize) {
        let from = from.min(self.row_heights.len());
        self.row_positions.truncate(from);
        let mut y = match from.checked_sub(1) {
            Some(prev) => {
                self.row_positions.get(prev).copied().unwrap_or(0.0)
                    + self.row_heights.get(prev).copied().unwrap_or(0.0)
            }
            None => 0.0,
        };
        for h in self.row_heights.iter().skip(from) {
            self.row_positions.push(y);
            y += h;
        }
        self.row_positions.push(y); // Final edge
    }

    /// Get total height of the real rows
    pub fn total_height(&self) -> f32 {
        self.row_positions.last().copied().unwrap_or(0.0)
    }

    /// Get total width of the real columns
    pub fn total_width(&self) -> f32 {
        self.col_widths.iter().sum()
    }

    /// Get row height at index (ghost height past the data)
    pub fn row_height(&self, row: u32) -> f32 {
        self.row_heights
            .get(row as usize)
            .copied()
            .unwrap_or(self.ghost_row_height)
    }

    fn col_left(&self, col: u32) -> f32 {
        let real = self.col_widths.len();
        let idx = col as usize;
        let before: f32 = self.col_widths.iter().take(idx.min(real)).sum();
        let ghosts = idx.saturating_sub(real) as f32;
        before + ghosts * DEFAULT_COL_WIDTH
    }
}

impl Grid for SheetLayout {
    fn num_rows(&self) -> u32 {
        u32::try_from(self.row_heights.len()).unwrap_or(u32::MAX)
    }

    fn num_cols(&self) -> u32 {
        u32::try_from(self.col_widths.len()).unwrap_or(u32::MAX)
    }

    fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.total_width(), self.total_height())
    }

    fn cumulative_height_before(&self, row: u32) -> f32 {
        if let Some(y) = self.row_positions.get(row as usize) {
            return *y;
        }
        let ghosts = row.saturating_sub(self.num_rows()) as f32;
        self.total_height() + ghosts * self.ghost_row_height
    }

    fn row_rect(&self, row: u32) -> Rect {
        Rect::new(
            0.0,
            self.cumulative_height_before(row),
            self.total_width(),
            self.row_height(row),
        )
    }

    fn ghost_cell_rect(&self, row: u32, col: u32) -> Rect {
        let width = self
            .col_widths
            .get(col as usize)
            .copied()
            .unwrap_or(DEFAULT_COL_WIDTH);
        Rect::new(
            self.col_left(col),
            self.cumulative_height_before(row),
            width,
            self.row_height(row),
        )
    }

    fn ghost_row_height(&self) -> f32 {
        self.ghost_row_height
    }

    fn row_at_y(&self, y: f32) -> Option<u32> {
        if self.row_heights.is_empty() || y < 0.0 || y >= self.total_height() {
            return None;
        }
        // Hidden rows share their top edge with the next row; take the last match.
        let count = self.row_positions.partition_point(|&pos| pos <= y);
        let idx = count.checked_sub(1)?.min(self.row_heights.len() - 1);
        u32::try_from(idx).ok()
    }
}

/// Shared, mutable layout. Each query takes a short-lived borrow, so a
/// controller can apply committed resizes in place while headers hold it.
impl Grid for RefCell<SheetLayout> {
    fn num_rows(&self) -> u32 {
        self.borrow().num_rows()
    }

    fn num_cols(&self) -> u32 {
        self.borrow().num_cols()
    }

    fn rect(&self) -> Rect {
        self.borrow().rect()
    }

    fn cumulative_height_before(&self, row: u32) -> f32 {
        self.borrow().cumulative_height_before(row)
    }

    fn row_rect(&self, row: u32) -> Rect {
        self.borrow().row_rect(row)
    }

    fn ghost_cell_rect(&self, row: u32, col: u32) -> Rect {
        self.borrow().ghost_cell_rect(row, col)
    }

    fn ghost_row_height(&self) -> f32 {
        self.borrow().ghost_row_height()
    }

    fn row_at_y(&self, y: f32) -> Option<u32> {
        self.borrow().row_at_y(y)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_layout() {
        let layout = SheetLayout::uniform(10, 5, DEFAULT_ROW_HEIGHT);

        assert_eq!(layout.num_rows(), 10);
        assert_eq!(layout.num_cols(), 5);
        assert_eq!(layout.total_width(), DEFAULT_COL_WIDTH * 5.0);
        assert_eq!(layout.total_height(), DEFAULT_ROW_HEIGHT * 10.0);
        assert_eq!(layout.row_positions.len(), 11);
    }

    #[test]
    fn test_custom_and_hidden_rows() {
        let heights = HashMap::from([(1, 50.0)]);
        let hidden = HashSet::from([2]);
        let layout = SheetLayout::new(4, 1, &heights, &hidden, &HashMap::new(), 20.0);

        assert_eq!(layout.row_positions, vec![0.0, 20.0, 70.0, 70.0, 90.0]);
        assert_eq!(layout.row_rect(1).height, 50.0);
        assert_eq!(layout.row_rect(2).height, 0.0);
        // y=70 is the top of both hidden row 2 and row 3
        assert_eq!(layout.row_at_y(70.0), Some(3));
    }

    #[test]
    fn test_cumulative_height_continues_into_ghost_rows() {
        let layout = SheetLayout::uniform(3, 1, 20.0);
        assert_eq!(layout.cumulative_height_before(0), 0.0);
        assert_eq!(layout.cumulative_height_before(3), 60.0);
        assert_eq!(layout.cumulative_height_before(5), 100.0);
        assert_eq!(layout.row_rect(4).top, 80.0);
        assert_eq!(layout.ghost_cell_rect(4, 0).height, 20.0);
    }

    #[test]
    fn test_shared_layout_sees_resizes_in_place() {
        use std::rc::Rc;

        let shared = Rc::new(RefCell::new(SheetLayout::uniform(4, 1, 20.0)));
        let grid: Rc<dyn Grid> = Rc::clone(&shared) as Rc<dyn Grid>;
        assert_eq!(grid.rect().height, 80.0);

        assert!(shared.borrow_mut().set_row_height(1, 50.0));
        assert_eq!(grid.cumulative_height_before(2), 90.0);
        assert_eq!(grid.rect().height, 110.0);
        assert_eq!(grid.row_at_y(60.0), Some(1));
    }

    #[test]
    fn test_row_at_y() {
        let layout = SheetLayout::uniform(10, 5, DEFAULT_ROW_HEIGHT);

        assert_eq!(layout.row_at_y(0.0), Some(0));
        assert_eq!(layout.row_at_y(10.0), Some(0));
        assert_eq!(layout.row_at_y(DEFAULT_ROW_HEIGHT), Some(1));
        assert_eq!(layout.row_at_y(DEFAULT_ROW_HEIGHT * 2.5), Some(2));
        assert_eq!(layout.row_at_y(-1.0), None);
        assert_eq!(layout.row_at_y(DEFAULT_ROW_HEIGHT * 10.0), None);
    }

    #[test]
    fn test_set_row_height_shifts_following_rows() {
        let mut layout = SheetLayout::uniform(5, 1, 20.0);
        assert!(layout.set_row_height(1, 45.0));
        assert_eq!(layout.row_positions, vec![0.0, 20.0, 65.0, 85.0, 105.0, 125.0]);
        assert!(!layout.set_row_height(9, 45.0));
        assert_eq!(layout.total_height(), 125.0);
    }

    #[test]
    fn test_empty_layout() {
        let layout = SheetLayout::uniform(0, 0, 20.0);
        assert_eq!(layout.total_height(), 0.0);
        assert_eq!(layout.row_at_y(0.0), None);
        assert!(layout.is_ghost_index(Some(0), None));
    }
}
