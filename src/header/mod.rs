//! Generic virtualized header engine.
//!
//! The engine knows nothing about rows or columns. An axis-specific header
//! implements [`HeaderAxis`], supplying sizes, classes, coordinates, selection
//! and rendering policy; the engine walks the window, decorates each cell and
//! hands the batch back to the axis to wrap.

mod resize;

pub use resize::{ResizeSession, ResizeState};

use crate::layout::RowWindow;
use crate::render::{classes, HeaderCell, Node};
use crate::types::{Axis, ClientCoords, PointerEvent, RowHeightBounds};

/// Axis-agnostic flags forwarded to every cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderOptions {
    pub loading: bool,
    pub reorderable: bool,
    pub resizable: bool,
}

/// The callback contract between an axis-specific header and the engine.
pub trait HeaderAxis {
    /// Which axis this header renders
    fn axis(&self) -> Axis;

    /// Window of indices eligible for rendering
    fn window(&self) -> RowWindow;

    /// Bounds the engine clamps resize gestures to
    fn size_bounds(&self) -> RowHeightBounds;

    fn options(&self) -> HeaderOptions;

    /// Pixel size of the cell at `index`
    fn cell_size(&self, index: u32) -> f32;

    /// Class identifying body cells at `index`
    fn cell_index_class(&self, index: u32) -> String;

    /// Boundary classes for `index` within `[0, index_end)`
    fn cell_extrema_classes(&self, index: u32, index_end: u32) -> Vec<&'static str>;

    /// Axis coordinate of a raw pointer event
    fn mouse_coordinate(&self, event: &PointerEvent) -> f32;

    /// Axis component of a client coordinate pair
    fn drag_coordinate(&self, coords: ClientCoords) -> f32;

    /// Index under an axis coordinate, if a locator is available
    fn convert_point_to_index(&self, client: f32, use_midpoint: bool) -> Option<u32>;

    fn is_cell_selected(&self, index: u32) -> bool;

    fn is_ghost_index(&self, index: u32) -> bool;

    fn render_cell(&self, index: u32) -> HeaderCell;

    fn render_ghost_cell(&self, index: u32, extrema_classes: &[&'static str]) -> HeaderCell;

    /// Preview of a candidate size during a resize drag
    fn handle_size_changed(&self, index: u32, size: f32);

    /// Completion of a resize drag
    fn handle_resize_end(&self, index: u32, size: f32);

    /// Wrap the rendered batch
    fn wrap_cells(&self, cells: Vec<Node>) -> Node;
}

/// Renders a header by driving a [`HeaderAxis`].
pub struct Header;

impl Header {
    /// Render every index in the axis window and wrap the batch.
    pub fn render(axis: &dyn HeaderAxis) -> Node {
        let window = axis.window();
        let index_end = window.end.saturating_add(1);
        let options = axis.options();

        let cells = window
            .iter()
            .map(|index| {
                let extrema = axis.cell_extrema_classes(index, index_end);
                let cell = if axis.is_ghost_index(index) {
                    axis.render_ghost_cell(index, &extrema)
                } else {
                    Self::decorate(axis, index, &extrema, options)
                };
                Node::Cell(cell)
            })
            .collect();

        axis.wrap_cells(cells)
    }

    fn decorate(
        axis: &dyn HeaderAxis,
        index: u32,
        extrema: &[&'static str],
        options: HeaderOptions,
    ) -> HeaderCell {
        let mut cell = axis.render_cell(index);
        let selected = axis.is_cell_selected(index);

        cell.index = index;
        cell.add_class(classes::TABLE_HEADER);
        cell.add_class(&axis.cell_index_class(index));
        for class in extrema {
            cell.add_class(class);
        }
        if selected {
            cell.add_class(classes::TABLE_HEADER_SELECTED);
        }
        if options.reorderable {
            cell.add_class(classes::TABLE_HEADER_REORDERABLE);
        }
        cell.style.height = Some(axis.cell_size(index));
        cell.loading = options.loading;
        cell.selected = selected;
        cell.reorderable = options.reorderable;
        cell.resizable = options.resizable;
        cell
    }

    /// Index under a raw pointer event along the axis.
    pub fn locate(axis: &dyn HeaderAxis, event: &PointerEvent, use_midpoint: bool) -> Option<u32> {
        axis.convert_point_to_index(axis.mouse_coordinate(event), use_midpoint)
    }
}
