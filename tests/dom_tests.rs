//! DOM materialisation tests (run with `wasm-pack test --headless --firefox`)
#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use xlheader::layout::{Grid, RowWindow, SheetLayout};
use xlheader::render::{classes, dom};
use xlheader::{RowHeader, RowHeaderProps};

wasm_bindgen_test_configure!(run_in_browser);

fn host() -> (web_sys::Document, HtmlElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    (document, host)
}

#[wasm_bindgen_test]
fn mounts_wrapper_and_cells() {
    let (document, host) = host();
    let grid: Rc<dyn Grid> = Rc::new(SheetLayout::uniform(100, 2, 20.0));
    let props = RowHeaderProps::new(grid, RowWindow::new(5, 9).unwrap(), Rc::new(|_: u32, _: f32| {}));
    dom::mount(&document, &host, &RowHeader::new(props).render()).unwrap();

    let outer = host.first_element_child().unwrap();
    assert_eq!(outer.class_name(), classes::TABLE_ROW_HEADERS);
    let inner = outer
        .first_element_child()
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    assert_eq!(inner.class_name(), classes::TABLE_ROW_HEADERS_CELLS_CONTAINER);
    assert_eq!(
        inner.style().get_property_value("transform").unwrap(),
        "translateY(100px)"
    );
    assert_eq!(inner.child_element_count(), 5);

    let first = inner.first_element_child().unwrap();
    assert_eq!(first.get_attribute("data-key").as_deref(), Some("bp5-table-row-5"));
    assert_eq!(first.text_content().as_deref(), Some("6"));
    assert!(first
        .query_selector(".bp5-table-resize-handle-target")
        .unwrap()
        .is_some());
}

#[wasm_bindgen_test]
fn remount_replaces_previous_tree() {
    let (document, host) = host();
    let grid: Rc<dyn Grid> = Rc::new(SheetLayout::uniform(10, 1, 20.0));
    for start in [0, 3] {
        let props = RowHeaderProps::new(
            Rc::clone(&grid),
            RowWindow::new(start, start + 2).unwrap(),
            Rc::new(|_: u32, _: f32| {}),
        );
        dom::mount(&document, &host, &RowHeader::new(props).render()).unwrap();
    }
    assert_eq!(host.child_element_count(), 1);
}
