//! Geometry, windowing and controller tests
//!
//! Tests for row offsets, hidden rows, ghost rows, viewport windowing,
//! pointer resolution and the controller's render/resize loop.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use xlheader::layout::{Grid, LayoutLocator, Locator, SheetLayout, Viewport, VISIBLE_PADDING};
use xlheader::viewer::HeaderController;
use xlheader::render::classes;
use xlheader::{Axis, PointerEvent, Region, RowHeaderConfig};

mod sheet_layout_tests {
    use super::*;

    #[test]
    fn test_custom_and_hidden_rows() {
        let heights: HashMap<u32, f32> = [(1, 40.0), (3, 10.0)].into_iter().collect();
        let hidden: HashSet<u32> = [2].into_iter().collect();
        let layout = SheetLayout::new(5, 2, &heights, &hidden, &HashMap::new(), 20.0);

        assert_eq!(layout.row_height(1), 40.0);
        assert_eq!(layout.row_height(2), 0.0);
        assert_eq!(layout.cumulative_height_before(3), 60.0);
        assert_eq!(layout.cumulative_height_before(4), 70.0);
        assert_eq!(layout.rect().height, 90.0);
        // Hidden row 2 shares its top edge with row 3
        assert_eq!(layout.row_at_y(60.0), Some(3));
    }

    #[test]
    fn test_ghost_rows_continue_past_data() {
        let layout = SheetLayout::uniform(3, 1, 25.0);
        assert!(layout.is_ghost_index(Some(3), None));
        assert!(!layout.is_ghost_index(Some(2), None));
        assert_eq!(layout.cumulative_height_before(5), 125.0);
        assert_eq!(layout.ghost_cell_rect(4, 0).top, 100.0);
        assert_eq!(layout.ghost_cell_rect(4, 0).height, 25.0);
        assert_eq!(layout.row_at_y(80.0), None);
    }

    #[test]
    fn test_set_row_height_shifts_later_rows() {
        let mut layout = SheetLayout::uniform(10, 1, 20.0);
        assert!(layout.set_row_height(4, 50.0));
        assert_eq!(layout.cumulative_height_before(4), 80.0);
        assert_eq!(layout.cumulative_height_before(5), 130.0);
        assert_eq!(layout.rect().height, 230.0);
        assert!(!layout.set_row_height(10, 50.0));
        assert_eq!(layout.rect().height, 230.0);
    }
}

mod viewport_tests {
    use super::*;

    #[test]
    fn test_visible_rows_are_padded() {
        let layout = SheetLayout::uniform(100, 1, 20.0);
        let viewport = Viewport {
            scroll_y: 300.0,
            height: 200.0,
        };
        let window = viewport.visible_rows(&layout);
        assert_eq!(window.start, 15 - VISIBLE_PADDING);
        assert_eq!(window.end, 25 + VISIBLE_PADDING);
    }

    #[test]
    fn test_short_table_window_extends_into_ghosts() {
        let layout = SheetLayout::uniform(5, 1, 20.0);
        let viewport = Viewport {
            scroll_y: 0.0,
            height: 200.0,
        };
        let window = viewport.visible_rows(&layout);
        assert_eq!(window.start, 0);
        assert_eq!(window.end, 10 + VISIBLE_PADDING);
        assert!(layout.is_ghost_index(Some(window.end), None));
    }

    #[test]
    fn test_scroll_is_clamped_to_table() {
        let layout = SheetLayout::uniform(100, 1, 20.0);
        let mut viewport = Viewport::new();
        viewport.resize(200.0);
        viewport.set_scroll(5_000.0, &layout);
        assert_eq!(viewport.scroll_y, 1_800.0);
        viewport.scroll_by(-10_000.0, &layout);
        assert_eq!(viewport.scroll_y, 0.0);
    }
}

mod locator_tests {
    use super::*;

    #[test]
    fn test_point_outside_rows_is_none() {
        let grid: Rc<dyn Grid> = Rc::new(SheetLayout::uniform(5, 1, 20.0));
        let locator = LayoutLocator::new(grid, Viewport::new(), 0.0);
        assert_eq!(locator.convert_point_to_row(-1.0, false), None);
        assert_eq!(locator.convert_point_to_row(100.0, false), None);
        assert_eq!(locator.convert_point_to_row(99.0, false), Some(4));
    }
}

mod controller_tests {
    use super::*;

    fn controller(rows: usize) -> HeaderController {
        let mut controller =
            HeaderController::new(&RowHeaderConfig::default(), &vec![20.0; rows], 3).unwrap();
        controller.resize(200.0);
        controller
    }

    #[test]
    fn test_scroll_moves_window_and_translation() {
        let mut controller = controller(100);
        controller.set_scroll(300.0);
        let window = controller.window();
        assert_eq!((window.start, window.end), (14, 26));

        let node = controller.render();
        let outer = node.as_container().unwrap();
        let inner = outer.children[0].as_container().unwrap();
        assert_eq!(outer.style.height, Some(2_000.0));
        assert_eq!(inner.style.translate_y, Some(280.0));
        assert_eq!(node.cells().len(), 13);
    }

    #[test]
    fn test_pointer_resize_updates_following_rows() {
        let mut controller = controller(100);
        controller.set_origin(50.0);
        // Bottom edge of row 0 at client y 70
        assert_eq!(controller.pointer_down(&PointerEvent::new(0.0, 70.0)), Some(0));
        controller.pointer_move(&PointerEvent::new(0.0, 100.0));
        assert_eq!(controller.guide(), Some(vec![50.0]));
        assert_eq!(controller.pointer_up(), Some((0, 50.0)));
        assert_eq!(controller.guide(), None);
        assert_eq!(controller.layout().cumulative_height_before(1), 50.0);

        let node = controller.render();
        let row0 = node.cells().into_iter().find(|c| c.index == 0).unwrap();
        assert_eq!(row0.style.height, Some(50.0));
    }

    #[test]
    fn test_selection_and_loading_flow_into_render() {
        let mut controller = controller(20);
        controller.set_selection(vec![Region::row_range(2, 3)]);
        controller.set_loading(true);
        let node = controller.render();
        let cells = node.cells();
        assert!(cells.iter().all(|c| c.loading));
        let selected: Vec<u32> = cells.iter().filter(|c| c.selected).map(|c| c.index).collect();
        assert_eq!(selected, vec![2, 3]);
    }

    #[test]
    fn test_scrolled_to_end_renders_no_ghost_rows() {
        let mut controller = controller(100);
        controller.set_scroll(1e9);
        let window = controller.window();
        assert_eq!((window.start, window.end), (89, 99));

        let node = controller.render();
        let cells = node.cells();
        assert!(cells.iter().all(|c| c.index < 100));
        let last = cells.iter().find(|c| c.index == 99).unwrap();
        assert!(last.has_class(classes::TABLE_LAST_IN_COLUMN));
        assert_eq!(last.name.as_deref(), Some("100"));

        // Rendered rows end exactly at the bottom of the table
        let inner = node.as_container().unwrap().children[0].as_container().unwrap();
        let rendered: f32 = cells.iter().filter_map(|c| c.style.height).sum();
        assert_eq!(inner.style.height, Some(rendered));
    }

    #[test]
    fn test_commit_resizes_layout_shared_with_header() {
        let mut controller = controller(100);
        let grid = Rc::clone(&controller.header().props().grid);
        controller.pointer_down(&PointerEvent::new(0.0, 20.0));
        controller.pointer_move(&PointerEvent::new(0.0, 40.0));
        assert_eq!(controller.pointer_up(), Some((0, 40.0)));

        assert!(Rc::ptr_eq(&grid, &controller.header().props().grid));
        assert_eq!(grid.cumulative_height_before(1), 40.0);
        assert_eq!(grid.rect().height, 2_020.0);
    }

    #[test]
    fn test_snapshot_does_not_report_mount() {
        let mut controller = controller(10);
        let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        controller.set_on_mount(Rc::new(move |axis: Axis| sink.borrow_mut().push(axis)));

        assert_eq!(controller.snapshot().cells().len(), controller.window().len() as usize);
        assert!(seen.borrow().is_empty());

        controller.render();
        controller.render();
        assert_eq!(*seen.borrow(), vec![Axis::Row]);
    }

    #[test]
    fn test_inconsistent_bounds_are_rejected() {
        let config = RowHeaderConfig {
            min_row_height: 50.0,
            max_row_height: 30.0,
            ..RowHeaderConfig::default()
        };
        assert!(HeaderController::new(&config, &[20.0], 1).is_err());
    }
}
