//! Visual class hooks.
//!
//! Styling layers select on these exact strings, so they are part of the
//! output contract.

/// Namespace prefix shared by every class hook
pub const NS: &str = "bp5";

/// Outer element of the row header
pub const TABLE_ROW_HEADERS: &str = "bp5-table-row-headers";
/// Inner, translated container holding the windowed cells
pub const TABLE_ROW_HEADERS_CELLS_CONTAINER: &str = "bp5-table-row-headers-cells-container";
/// Every header cell, either axis
pub const TABLE_HEADER: &str = "bp5-table-header";
/// Header cell whose whole row is selected
pub const TABLE_HEADER_SELECTED: &str = "bp5-table-header-selected";
/// Header cell that can be dragged to reorder
pub const TABLE_HEADER_REORDERABLE: &str = "bp5-table-header-reorderable";
/// Row header cell
pub const TABLE_ROW_NAME: &str = "bp5-table-row-name";
/// Label text inside a row header cell
pub const TABLE_ROW_NAME_TEXT: &str = "bp5-table-row-name-text";
/// Cell rendered while data is loading
pub const TABLE_LOADING: &str = "bp5-loading";
/// Resize handle hit target
pub const TABLE_RESIZE_HANDLE_TARGET: &str = "bp5-table-resize-handle-target";
/// Resize handle oriented for row resizing
pub const TABLE_RESIZE_VERTICAL: &str = "bp5-table-resize-vertical";

/// First index along a column (topmost row)
pub const TABLE_FIRST_IN_COLUMN: &str = "bp5-table-first-in-column";
/// Last index along a column (bottom row)
pub const TABLE_LAST_IN_COLUMN: &str = "bp5-table-last-in-column";
/// First index along a row (leftmost column)
pub const TABLE_FIRST_IN_ROW: &str = "bp5-table-first-in-row";
/// Last index along a row (rightmost column)
pub const TABLE_LAST_IN_ROW: &str = "bp5-table-last-in-row";

const TABLE_ROW_PREFIX: &str = "bp5-table-row-";
const TABLE_CELL_ROW_PREFIX: &str = "bp5-table-cell-row-";

/// Class identifying the header cell for `row` (also used as its key)
pub fn row_index_class(row: u32) -> String {
    format!("{TABLE_ROW_PREFIX}{row}")
}

/// Class identifying body cells in `row`
pub fn row_cell_index_class(row: u32) -> String {
    format!("{TABLE_CELL_ROW_PREFIX}{row}")
}

/// Join class names, skipping empties.
pub fn join<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for class in classes {
        if class.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}
