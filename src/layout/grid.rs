//! The geometry oracle the header consults for every pixel value.

use crate::render::classes;

/// Rectangle in table coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Geometry oracle for a table.
///
/// Indices at or beyond the real row/column count are ghost indices: filler
/// rows drawn past the data extent. Passing `None` for an axis means
/// "no index on this axis".
pub trait Grid {
    /// Number of real rows
    fn num_rows(&self) -> u32;

    /// Number of real columns
    fn num_cols(&self) -> u32;

    /// Rectangle spanning every real row and column
    fn rect(&self) -> Rect;

    /// Sum of the heights of all rows before `row` (ghost rows included)
    fn cumulative_height_before(&self, row: u32) -> f32;

    /// Rectangle of the full row at `row`
    fn row_rect(&self, row: u32) -> Rect;

    /// Rectangle of a ghost cell at (`row`, `col`)
    fn ghost_cell_rect(&self, row: u32, col: u32) -> Rect;

    /// Height assigned to ghost rows
    fn ghost_row_height(&self) -> f32;

    /// Real row containing table-space `y`, or `None` outside the data
    fn row_at_y(&self, y: f32) -> Option<u32>;

    /// True when either given index lies beyond the real data.
    fn is_ghost_index(&self, row: Option<u32>, col: Option<u32>) -> bool {
        row.is_some_and(|r| r >= self.num_rows()) || col.is_some_and(|c| c >= self.num_cols())
    }

    /// Boundary classes for an index within `[0, end)` on each given axis.
    ///
    /// Rows classify along a column (first/last in column); columns classify
    /// along a row.
    fn extrema_classes(
        &self,
        row: Option<u32>,
        col: Option<u32>,
        row_end: Option<u32>,
        col_end: Option<u32>,
    ) -> Vec<&'static str> {
        let mut out = Vec::new();
        if let Some(row) = row {
            if row == 0 {
                out.push(classes::TABLE_FIRST_IN_COLUMN);
            }
            if row_end.is_some_and(|end| row.checked_add(1) == Some(end)) {
                out.push(classes::TABLE_LAST_IN_COLUMN);
            }
        }
        if let Some(col) = col {
            if col == 0 {
                out.push(classes::TABLE_FIRST_IN_ROW);
            }
            if col_end.is_some_and(|end| col.checked_add(1) == Some(end)) {
                out.push(classes::TABLE_LAST_IN_ROW);
            }
        }
        out
    }
}
