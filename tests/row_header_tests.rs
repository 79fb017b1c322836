//! Row header rendering and interaction tests
//!
//! Covers the windowing wrapper, ghost rows, full-row selection, the resize
//! commit sequence, default labels, coordinate adapters and boundary classes.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{cell, header, props, wrappers};
use xlheader::render::classes;
use xlheader::{HeaderAxis, PointerEvent, Region, Regions, ResizeSession};

mod windowing_wrapper_tests {
    use super::*;

    #[test]
    fn test_outer_height_is_table_height() {
        let (header, _, _) = header(100, 20.0, 10, 30);
        let node = header.render();
        let (outer, _) = wrappers(&node);
        assert_eq!(outer.class_name.as_deref(), Some(classes::TABLE_ROW_HEADERS));
        assert_eq!(outer.style.height, Some(2000.0));
    }

    #[test]
    fn test_inner_translated_by_offset_of_window_start() {
        let (header, _, _) = header(100, 20.0, 10, 30);
        let node = header.render();
        let (_, inner) = wrappers(&node);
        assert_eq!(
            inner.class_name.as_deref(),
            Some(classes::TABLE_ROW_HEADERS_CELLS_CONTAINER)
        );
        assert_eq!(inner.style.translate_y, Some(200.0));
        assert_eq!(inner.style.height, Some(1800.0));
        assert_eq!(inner.style.css_transform().as_deref(), Some("translateY(200px)"));
    }

    #[test]
    fn test_window_at_top_is_untranslated() {
        let (header, _, _) = header(50, 24.0, 0, 9);
        let node = header.render();
        let (_, inner) = wrappers(&node);
        assert_eq!(inner.style.translate_y, Some(0.0));
        assert_eq!(inner.style.height, Some(1200.0));
    }

    #[test]
    fn test_inner_height_shrinks_near_end() {
        let (header, _, _) = header(10, 20.0, 8, 12);
        let node = header.render();
        let (_, inner) = wrappers(&node);
        assert_eq!(inner.style.translate_y, Some(160.0));
        assert_eq!(inner.style.height, Some(40.0));
    }

    #[test]
    fn test_inner_height_never_negative_for_ghost_window() {
        let (header, _, _) = header(10, 20.0, 12, 14);
        let node = header.render();
        let (outer, inner) = wrappers(&node);
        assert_eq!(outer.style.height, Some(200.0));
        assert_eq!(inner.style.translate_y, Some(240.0));
        assert_eq!(inner.style.height, Some(0.0));
    }

    #[test]
    fn test_only_window_rows_are_rendered() {
        let (header, _, _) = header(1_000, 20.0, 100, 119);
        let node = header.render();
        let indices: Vec<u32> = node.cells().iter().map(|c| c.index).collect();
        assert_eq!(indices, (100..=119).collect::<Vec<_>>());
    }
}

mod ghost_row_tests {
    use super::*;

    #[test]
    fn test_ghost_iff_at_or_beyond_row_count() {
        let (header, _, _) = header(5, 20.0, 0, 4);
        for i in 0..5 {
            assert!(!header.is_ghost_index(i), "row {i} is real");
        }
        for i in [5, 6, 100, u32::MAX] {
            assert!(header.is_ghost_index(i), "row {i} is a ghost");
        }
    }

    #[test]
    fn test_ghost_cells_render_without_label() {
        let (header, _, _) = header(3, 20.0, 0, 5);
        let node = header.render();
        assert_eq!(cell(&node, 2).name.as_deref(), Some("3"));
        let ghost = cell(&node, 4);
        assert_eq!(ghost.name, None);
        assert_eq!(ghost.style.height, Some(20.0));
        assert!(!ghost.has_class(classes::TABLE_HEADER));
    }

    #[test]
    fn test_ghost_cells_follow_loading_flag() {
        let (props, _) = props(3, 20.0, 0, 5);
        let options = xlheader::HeaderOptions {
            loading: true,
            ..props.options
        };
        let header = xlheader::RowHeader::new(props.with_options(options));
        let node = header.render();
        assert!(cell(&node, 5).loading);
        assert!(cell(&node, 5).class_name().contains(classes::TABLE_LOADING));
        assert!(cell(&node, 0).loading);
    }
}

mod selection_tests {
    use super::*;

    fn selected(regions: Vec<Region>, rows: u32) -> Vec<bool> {
        let (props, _) = props(rows, 20.0, 0, rows - 1);
        let header = xlheader::RowHeader::new(props.with_selection(regions));
        (0..rows).map(|i| header.is_cell_selected(i)).collect()
    }

    #[test]
    fn test_full_row_region_selects_covered_rows() {
        let rows = selected(vec![Region::row_range(1, 2)], 5);
        assert_eq!(rows, vec![false, true, true, false, false]);
    }

    #[test]
    fn test_partial_cell_region_does_not_select_row() {
        let rows = selected(vec![Region::cell_range(1, 0, 3, 1)], 5);
        assert_eq!(rows, vec![false; 5]);
    }

    #[test]
    fn test_column_region_does_not_select_row() {
        let rows = selected(vec![Region::column_range(0, 2)], 3);
        assert_eq!(rows, vec![false; 3]);
    }

    #[test]
    fn test_full_table_selects_every_row() {
        let rows = selected(vec![Region::all()], 4);
        assert_eq!(rows, vec![true; 4]);
    }

    #[test]
    fn test_selected_cells_carry_selected_class() {
        let (props, _) = props(10, 20.0, 0, 9);
        let header = xlheader::RowHeader::new(props.with_selection(vec![Regions::row(4)]));
        let node = header.render();
        assert!(cell(&node, 4).selected);
        assert!(cell(&node, 4).has_class(classes::TABLE_HEADER_SELECTED));
        assert!(!cell(&node, 5).has_class(classes::TABLE_HEADER_SELECTED));
    }
}

mod resize_commit_tests {
    use super::*;

    #[test]
    fn test_previews_then_single_commit_and_empty_guide() {
        let (header, commits, guide) = header(10, 20.0, 0, 9);
        let mut session = ResizeSession::new();

        session.begin(&header, 3, (0.0, 80.0));
        for y in [85.0, 90.0, 120.0, 95.0] {
            session.update(&header, (0.0, y));
            assert!(!guide.is_empty());
        }
        // Row 3 starts at 60; last preview is 20 + 15
        assert_eq!(guide.lines(), Some(vec![95.0]));
        assert!(commits.borrow().is_empty());

        assert_eq!(session.end(&header), Some((3, 35.0)));
        assert_eq!(*commits.borrow(), vec![(3, 35.0)]);
        assert!(guide.is_empty());
    }

    #[test]
    fn test_end_without_drag_commits_nothing() {
        let (header, commits, guide) = header(10, 20.0, 0, 9);
        let mut session = ResizeSession::new();
        assert_eq!(session.end(&header), None);
        assert!(commits.borrow().is_empty());
        assert!(guide.is_empty());
    }

    #[test]
    fn test_preview_is_clamped_to_bounds() {
        let (header, commits, guide) = header(10, 20.0, 0, 9);
        let mut session = ResizeSession::new();
        session.begin(&header, 0, (0.0, 20.0));
        // Shrinking below the 20px minimum
        assert_eq!(session.update(&header, (0.0, 5.0)), Some(20.0));
        assert_eq!(guide.lines(), Some(vec![20.0]));
        session.end(&header);
        assert_eq!(*commits.borrow(), vec![(0, 20.0)]);
    }
}

mod default_renderer_tests {
    use super::*;

    #[test]
    fn test_labels_are_one_based() {
        let (header, _, _) = header(100, 20.0, 0, 45);
        let node = header.render();
        assert_eq!(cell(&node, 0).name.as_deref(), Some("1"));
        assert_eq!(cell(&node, 41).name.as_deref(), Some("42"));
    }

    #[test]
    fn test_custom_renderer_replaces_label() {
        let (props, _) = props(5, 20.0, 0, 4);
        let props = props.with_cell_renderer(std::rc::Rc::new(|i: u32| {
            xlheader::render::HeaderCell::row(i, Some(format!("Row {}", i + 1)))
        }));
        let node = xlheader::RowHeader::new(props).render();
        assert_eq!(cell(&node, 2).name.as_deref(), Some("Row 3"));
        // Decoration still applies
        assert!(cell(&node, 2).has_class(classes::TABLE_HEADER));
        assert!(cell(&node, 2).has_class("bp5-table-cell-row-2"));
    }
}

mod coordinate_tests {
    use super::*;

    #[test]
    fn test_drag_coordinate_uses_y() {
        let (header, _, _) = header(5, 20.0, 0, 4);
        assert_eq!(header.drag_coordinate((13.0, 77.0)), 77.0);
    }

    #[test]
    fn test_mouse_coordinate_uses_client_y() {
        let (header, _, _) = header(5, 20.0, 0, 4);
        assert_eq!(header.mouse_coordinate(&PointerEvent::new(40.0, 120.0)), 120.0);
    }
}

mod extrema_tests {
    use super::*;

    #[test]
    fn test_first_and_last_in_window_are_marked() {
        let (header, _, _) = header(100, 20.0, 0, 4);
        let node = header.render();
        assert!(cell(&node, 0).has_class(classes::TABLE_FIRST_IN_COLUMN));
        assert!(cell(&node, 4).has_class(classes::TABLE_LAST_IN_COLUMN));
        for i in 1..4 {
            let c = cell(&node, i);
            assert!(!c.has_class(classes::TABLE_FIRST_IN_COLUMN));
            assert!(!c.has_class(classes::TABLE_LAST_IN_COLUMN));
        }
    }

    #[test]
    fn test_extrema_distinct_for_any_end() {
        let (header, _, _) = header(100, 20.0, 0, 4);
        for end in 2..20 {
            let first = header.cell_extrema_classes(0, end);
            let last = header.cell_extrema_classes(end - 1, end);
            assert!(first.contains(&classes::TABLE_FIRST_IN_COLUMN));
            assert!(last.contains(&classes::TABLE_LAST_IN_COLUMN));
            for i in 1..end - 1 {
                assert!(header.cell_extrema_classes(i, end).is_empty());
            }
        }
    }
}

mod mount_tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use xlheader::Axis;

    #[test]
    fn test_mount_reports_row_once_across_rerenders() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let (props, _) = props(10, 20.0, 0, 9);
        let mut header = xlheader::RowHeader::new(
            props.with_on_mount(Rc::new(move |axis: Axis| sink.borrow_mut().push(axis))),
        );
        header.render();
        header.did_mount();

        let (next, _) = common::props(10, 20.0, 2, 8);
        header.set_props(next);
        header.render();
        header.did_mount();

        assert_eq!(*seen.borrow(), vec![Axis::Row]);
    }
}
