//! Writes a rendered [`Node`] tree into the DOM.

use web_sys::{Document, HtmlElement};

use super::classes;
use super::node::{Container, HeaderCell, Node, Style};
use crate::error::{HeaderError, Result};

/// Replace the children of `parent` with the materialised tree.
///
/// # Errors
/// Returns [`HeaderError::Dom`] if an element cannot be created or styled.
pub fn mount(document: &Document, parent: &HtmlElement, node: &Node) -> Result<()> {
    parent.set_text_content(None);
    let element = materialise(document, node)?;
    parent.append_child(&element)?;
    Ok(())
}

/// Build a detached element for `node`.
///
/// # Errors
/// Returns [`HeaderError::Dom`] if an element cannot be created or styled.
pub fn materialise(document: &Document, node: &Node) -> Result<HtmlElement> {
    match node {
        Node::Container(container) => container_element(document, container),
        Node::Cell(cell) => cell_element(document, cell),
    }
}

fn div(document: &Document) -> Result<HtmlElement> {
    use wasm_bindgen::JsCast;
    document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| HeaderError::Dom("created element is not an HtmlElement".to_string()))
}

fn apply_style(element: &HtmlElement, style: &Style) -> Result<()> {
    let css = element.style();
    if let Some(height) = style.css_height() {
        css.set_property("height", &height)?;
    }
    if let Some(transform) = style.css_transform() {
        css.set_property("transform", &transform)?;
    }
    Ok(())
}

fn container_element(document: &Document, container: &Container) -> Result<HtmlElement> {
    let element = div(document)?;
    if let Some(class_name) = &container.class_name {
        element.set_class_name(class_name);
    }
    apply_style(&element, &container.style)?;
    for child in &container.children {
        element.append_child(&materialise(document, child)?)?;
    }
    Ok(element)
}

fn cell_element(document: &Document, cell: &HeaderCell) -> Result<HtmlElement> {
    let element = div(document)?;
    element.set_class_name(&cell.class_name());
    element.set_attribute("data-key", &cell.key)?;
    apply_style(&element, &cell.style)?;

    if let Some(name) = &cell.name {
        let text = div(document)?;
        text.set_class_name(classes::TABLE_ROW_NAME_TEXT);
        text.set_text_content(Some(name));
        element.append_child(&text)?;
    }

    if cell.resizable {
        let handle = div(document)?;
        handle.set_class_name(&classes::join([
            classes::TABLE_RESIZE_HANDLE_TARGET,
            classes::TABLE_RESIZE_VERTICAL,
        ]));
        element.append_child(&handle)?;
    }

    Ok(element)
}
