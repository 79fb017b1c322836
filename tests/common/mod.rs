//! Common test fixtures for row header tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::cell::RefCell;
use std::rc::Rc;

use xlheader::layout::{Grid, RowWindow, SheetLayout};
use xlheader::render::{Container, HeaderCell, Node};
use xlheader::{ResizeGuide, RowHeader, RowHeaderProps};

/// Commits recorded by a test `on_row_height_changed` callback.
pub type Commits = Rc<RefCell<Vec<(u32, f32)>>>;

/// Uniform grid of `rows` rows of `height` pixels.
pub fn uniform_grid(rows: u32, height: f32) -> Rc<dyn Grid> {
    Rc::new(SheetLayout::uniform(rows, 3, height))
}

/// Props over a uniform grid with a recording commit callback.
pub fn props(rows: u32, height: f32, start: u32, end: u32) -> (RowHeaderProps, Commits) {
    let commits: Commits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&commits);
    let props = RowHeaderProps::new(
        uniform_grid(rows, height),
        RowWindow::new(start, end).unwrap(),
        Rc::new(move |i: u32, s: f32| sink.borrow_mut().push((i, s))),
    );
    (props, commits)
}

/// Row header plus its recorded commits and a handle on its guide.
pub fn header(rows: u32, height: f32, start: u32, end: u32) -> (RowHeader, Commits, ResizeGuide) {
    let (props, commits) = props(rows, height, start, end);
    let guide = ResizeGuide::new();
    let header = RowHeader::new(props.with_resize_guide(guide.share()));
    (header, commits, guide)
}

/// Outer and inner wrapper containers of a rendered header.
pub fn wrappers(node: &Node) -> (&Container, &Container) {
    let outer = node.as_container().expect("outer container");
    let inner = outer.children[0].as_container().expect("inner container");
    (outer, inner)
}

/// The rendered cell for `index`.
pub fn cell(node: &Node, index: u32) -> &HeaderCell {
    node.cells()
        .into_iter()
        .find(|c| c.index == index)
        .unwrap_or_else(|| panic!("no cell rendered for row {index}"))
}
