//! Geometry for the row header.
//!
//! This module handles:
//! - The `Grid` geometry oracle and its prefix-sum implementation
//! - Viewport scroll state and row windowing (including ghost rows)
//! - Pointer-to-row resolution via `Locator`

mod grid;
mod locator;
mod sheet_layout;
mod viewport;

pub use grid::{Grid, Rect};
pub use locator::{LayoutLocator, Locator};
pub use sheet_layout::{SheetLayout, DEFAULT_COL_WIDTH, DEFAULT_ROW_HEIGHT};
pub use viewport::{RowWindow, Viewport, VISIBLE_PADDING};
