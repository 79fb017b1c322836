//! Backend-agnostic element tree produced by the header.
//!
//! The tree is plain data: the DOM materialiser (wasm32) and the JSON
//! exporters consume it, and tests inspect it directly.

use serde::Serialize;

use super::classes;

/// Inline style for a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Height in CSS pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Vertical translation in CSS pixels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f32>,
}

impl Style {
    pub fn with_height(height: f32) -> Self {
        Self {
            height: Some(height),
            translate_y: None,
        }
    }

    /// CSS `height` value, e.g. `"20px"`.
    pub fn css_height(&self) -> Option<String> {
        self.height.map(|h| format!("{h}px"))
    }

    /// CSS `transform` value, e.g. `"translateY(40px)"`.
    pub fn css_transform(&self) -> Option<String> {
        self.translate_y.map(|y| format!("translateY({y}px)"))
    }
}

/// A rendered header element
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Plain `div` wrapper
    Container(Container),
    /// A single header label cell
    Cell(HeaderCell),
}

impl Node {
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Container(c) => Some(c),
            Self::Cell(_) => None,
        }
    }

    /// Every cell in the tree, depth-first.
    pub fn cells(&self) -> Vec<&HeaderCell> {
        let mut out = Vec::new();
        self.collect_cells(&mut out);
        out
    }

    fn collect_cells<'a>(&'a self, out: &mut Vec<&'a HeaderCell>) {
        match self {
            Self::Cell(cell) => out.push(cell),
            Self::Container(container) => {
                for child in &container.children {
                    child.collect_cells(out);
                }
            }
        }
    }
}

/// A `div` with an optional class and inline style
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub style: Style,
    pub children: Vec<Node>,
}

/// A header label cell
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderCell {
    pub index: u32,
    /// Stable key for diffing renderers
    pub key: String,
    /// Label text; ghost cells carry none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub class_names: Vec<String>,
    pub style: Style,
    pub loading: bool,
    pub selected: bool,
    pub reorderable: bool,
    pub resizable: bool,
}

impl HeaderCell {
    /// A row header cell for `index` with the given label.
    pub fn row(index: u32, name: Option<String>) -> Self {
        Self {
            index,
            key: classes::row_index_class(index),
            name,
            class_names: vec![classes::TABLE_ROW_NAME.to_string()],
            ..Self::default()
        }
    }

    pub fn add_class(&mut self, class: &str) {
        if !class.is_empty() && !self.has_class(class) {
            self.class_names.push(class.to_string());
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_names.iter().any(|c| c == class)
    }

    /// Space-separated `className` attribute value.
    pub fn class_name(&self) -> String {
        let mut names: Vec<&str> = Vec::with_capacity(self.class_names.len() + 1);
        names.extend(self.class_names.iter().map(String::as_str));
        if self.loading {
            names.push(classes::TABLE_LOADING);
        }
        classes::join(names)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp
)]
mod tests {
    use super::*;

    #[test]
    fn css_values() {
        let style = Style {
            height: Some(120.5),
            translate_y: Some(40.0),
        };
        assert_eq!(style.css_height().as_deref(), Some("120.5px"));
        assert_eq!(style.css_transform().as_deref(), Some("translateY(40px)"));
        assert_eq!(Style::default().css_transform(), None);
    }

    #[test]
    fn add_class_dedupes() {
        let mut cell = HeaderCell::row(3, Some("4".to_string()));
        cell.add_class(classes::TABLE_HEADER);
        cell.add_class(classes::TABLE_HEADER);
        cell.add_class("");
        assert_eq!(
            cell.class_name(),
            "bp5-table-row-name bp5-table-header"
        );
    }

    #[test]
    fn loading_adds_class() {
        let mut cell = HeaderCell::row(0, None);
        cell.loading = true;
        assert!(cell.class_name().ends_with(classes::TABLE_LOADING));
    }

    #[test]
    fn serializes_tagged() {
        let node = Node::Container(Container {
            class_name: Some("outer".to_string()),
            style: Style::with_height(10.0),
            children: vec![Node::Cell(HeaderCell::row(0, Some("1".to_string())))],
        });
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "container");
        assert_eq!(json["style"]["height"], 10.0);
        assert_eq!(json["children"][0]["type"], "cell");
        assert_eq!(json["children"][0]["name"], "1");
        assert_eq!(node.cells().len(), 1);
    }
}
