//! The row header: row-axis policy for the generic header engine.
//!
//! `RowHeader` binds the vertical axis into the [`HeaderAxis`] contract:
//! sizes and offsets come from the [`Grid`](crate::layout::Grid), selection
//! from full-row regions, pointer coordinates from the y component. It also
//! owns the windowing wrapper that pins a partial batch of cells to its true
//! scroll offset, and the resize callbacks that drive the guide overlay.

mod guide;
mod props;
mod renderer;

pub use guide::ResizeGuide;
pub use props::{MountHook, RowHeaderProps, RowHeightChanged};
pub use renderer::{default_renderer, render_default_row_header, RowHeaderCellRenderer};

use std::cell::Cell;
use std::rc::Rc;

use crate::header::{Header, HeaderAxis, HeaderOptions};
use crate::layout::RowWindow;
use crate::render::{classes, Container, HeaderCell, Node, Style};
use crate::types::{Axis, ClientCoords, PointerEvent, Regions, RowHeightBounds};

pub struct RowHeader {
    props: RowHeaderProps,
    renderer: RowHeaderCellRenderer,
    mounted: Cell<bool>,
}

impl RowHeader {
    pub fn new(props: RowHeaderProps) -> Self {
        let renderer = Self::resolve_renderer(&props);
        Self {
            props,
            renderer,
            mounted: Cell::new(false),
        }
    }

    fn resolve_renderer(props: &RowHeaderProps) -> RowHeaderCellRenderer {
        props
            .row_header_cell_renderer
            .as_ref()
            .map_or_else(default_renderer, Rc::clone)
    }

    pub fn props(&self) -> &RowHeaderProps {
        &self.props
    }

    /// Replace the props for the next render. Mount state is kept.
    pub fn set_props(&mut self, props: RowHeaderProps) {
        self.renderer = Self::resolve_renderer(&props);
        self.props = props;
    }

    /// Render the windowed header.
    pub fn render(&self) -> Node {
        Header::render(self)
    }

    /// Lifecycle hook for after the first render; fires `on_mount` once.
    pub fn did_mount(&self) {
        if self.mounted.replace(true) {
            return;
        }
        if let Some(on_mount) = &self.props.on_mount {
            tracing::debug!(message = "row_header.mount", axis = %Axis::Row);
            on_mount(Axis::Row);
        }
    }

    /// Row under a client y coordinate; `None` without a locator.
    pub fn convert_point_to_row(&self, client_y: f32, use_midpoint: bool) -> Option<u32> {
        self.props
            .locator
            .as_ref()?
            .convert_point_to_row(client_y, use_midpoint)
    }
}

impl HeaderAxis for RowHeader {
    fn axis(&self) -> Axis {
        Axis::Row
    }

    fn window(&self) -> RowWindow {
        self.props.window
    }

    fn size_bounds(&self) -> RowHeightBounds {
        self.props.bounds
    }

    fn options(&self) -> HeaderOptions {
        self.props.options
    }

    fn cell_size(&self, index: u32) -> f32 {
        self.props.grid.row_rect(index).height
    }

    fn cell_index_class(&self, index: u32) -> String {
        classes::row_cell_index_class(index)
    }

    fn cell_extrema_classes(&self, index: u32, index_end: u32) -> Vec<&'static str> {
        self.props
            .grid
            .extrema_classes(Some(index), None, Some(index_end), None)
    }

    fn mouse_coordinate(&self, event: &PointerEvent) -> f32 {
        event.client_y
    }

    fn drag_coordinate(&self, coords: ClientCoords) -> f32 {
        coords.1
    }

    fn convert_point_to_index(&self, client: f32, use_midpoint: bool) -> Option<u32> {
        self.convert_point_to_row(client, use_midpoint)
    }

    fn is_cell_selected(&self, index: u32) -> bool {
        Regions::has_full_row(&self.props.selected_regions, index)
    }

    fn is_ghost_index(&self, index: u32) -> bool {
        self.props.grid.is_ghost_index(Some(index), None)
    }

    fn render_cell(&self, index: u32) -> HeaderCell {
        (self.renderer)(index)
    }

    fn render_ghost_cell(&self, index: u32, extrema_classes: &[&'static str]) -> HeaderCell {
        let rect = self.props.grid.ghost_cell_rect(index, 0);
        let mut cell = HeaderCell::row(index, None);
        for class in extrema_classes {
            cell.add_class(class);
        }
        cell.style = Style::with_height(rect.height);
        cell.loading = self.props.options.loading;
        cell
    }

    fn handle_size_changed(&self, index: u32, size: f32) {
        let rect = self.props.grid.row_rect(index);
        let line = rect.top + size;
        tracing::trace!(message = "row_header.resize_preview", index, size, line);
        self.props.resize_guide.set(Some(vec![line]));
    }

    fn handle_resize_end(&self, index: u32, size: f32) {
        tracing::debug!(message = "row_header.resize_end", index, size);
        (self.props.on_row_height_changed)(index, size);
        self.props.resize_guide.clear();
    }

    fn wrap_cells(&self, cells: Vec<Node>) -> Node {
        let table_height = self.props.grid.rect().height;
        let offset = self
            .props
            .grid
            .cumulative_height_before(self.props.window.start);
        tracing::trace!(
            message = "row_header.wrap",
            start = self.props.window.start,
            end = self.props.window.end,
            offset,
            table_height
        );

        // Shrink the sliding window near the end so it never reserves space
        // past the last row.
        let inner = Container {
            class_name: Some(classes::TABLE_ROW_HEADERS_CELLS_CONTAINER.to_string()),
            style: Style {
                height: Some((table_height - offset).max(0.0)),
                translate_y: Some(offset),
            },
            children: cells,
        };

        // Full table height so container styling spans every row, mounted or not.
        Node::Container(Container {
            class_name: Some(classes::TABLE_ROW_HEADERS.to_string()),
            style: Style::with_height(table_height),
            children: vec![Node::Container(inner)],
        })
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
    use crate::layout::{Grid, SheetLayout};
    use std::cell::RefCell;

    fn header(num_rows: u32, start: u32, end: u32) -> RowHeader {
        let grid: Rc<dyn Grid> = Rc::new(SheetLayout::uniform(num_rows, 3, 20.0));
        let window = RowWindow::new(start, end).unwrap();
        RowHeader::new(RowHeaderProps::new(grid, window, Rc::new(|_: u32, _: f32| {})))
    }

    #[test]
    fn mount_hook_fires_once_with_row_tag() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let grid: Rc<dyn Grid> = Rc::new(SheetLayout::uniform(5, 1, 20.0));
        let props = RowHeaderProps::new(grid, RowWindow::new(0, 4).unwrap(), Rc::new(|_: u32, _: f32| {}))
            .with_on_mount(Rc::new(move |axis: Axis| sink.borrow_mut().push(axis.as_str())));
        let header = RowHeader::new(props);
        header.render();
        header.did_mount();
        header.did_mount();
        assert_eq!(*calls.borrow(), vec!["row"]);
    }

    #[test]
    fn missing_mount_hook_is_noop() {
        header(5, 0, 4).did_mount();
    }

    #[test]
    fn missing_locator_yields_none() {
        assert_eq!(header(5, 0, 4).convert_point_to_row(10.0, false), None);
    }

    #[test]
    fn coordinate_adapters_use_vertical_axis() {
        let header = header(5, 0, 4);
        assert_eq!(header.drag_coordinate((7.0, 33.0)), 33.0);
        assert_eq!(header.mouse_coordinate(&PointerEvent::new(5.0, 120.0)), 120.0);
        assert_eq!(header.axis().coordinate_index(), 1);
    }

    #[test]
    fn ghost_cell_has_no_label_and_ghost_height() {
        let header = header(2, 0, 3);
        let cell = header.render_ghost_cell(3, &[classes::TABLE_LAST_IN_COLUMN]);
        assert_eq!(cell.name, None);
        assert_eq!(cell.style.height, Some(20.0));
        assert!(cell.has_class(classes::TABLE_LAST_IN_COLUMN));
    }

    #[test]
    fn set_props_swaps_renderer() {
        let mut header = header(5, 0, 4);
        assert_eq!(header.render_cell(0).name.as_deref(), Some("1"));
        let grid: Rc<dyn Grid> = Rc::new(SheetLayout::uniform(5, 1, 20.0));
        let props = RowHeaderProps::new(grid, RowWindow::new(0, 4).unwrap(), Rc::new(|_: u32, _: f32| {}))
            .with_cell_renderer(Rc::new(|i: u32| HeaderCell::row(i, Some(format!("R{i}")))));
        header.set_props(props);
        assert_eq!(header.render_cell(0).name.as_deref(), Some("R0"));
    }
}
