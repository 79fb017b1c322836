//! xlheader - virtualized, resizable row header for spreadsheet-style tables
//!
//! Renders the leftmost column of row labels for a windowed table body:
//! - Only the rows in view are materialised; a translated wrapper pins them
//!   to their true scroll offset inside a full-height container
//! - Interactive row resizing with a live guide line and a single commit
//! - Full-row selection highlighting, ghost filler rows, boundary classes
//! - Plain-data element tree, rendered to the DOM via WebAssembly
//!
//! # Usage (Rust)
//!
//! ```
//! use std::rc::Rc;
//! use xlheader::layout::{Grid, RowWindow, SheetLayout};
//! use xlheader::row_header::{RowHeader, RowHeaderProps};
//!
//! let grid: Rc<dyn Grid> = Rc::new(SheetLayout::uniform(1_000, 4, 20.0));
//! let window = RowWindow::new(10, 40).unwrap();
//! let header = RowHeader::new(RowHeaderProps::new(grid, window, Rc::new(|_: u32, _: f32| {})));
//! let tree = header.render();
//! assert_eq!(tree.cells().len(), 31);
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { RowHeaderView } from 'xlheader';
//! await init();
//! const view = new RowHeaderView(config, rowHeights, 1, (index, size) => save(index, size));
//! view.mount(element);
//! view.set_scroll(element.scrollTop);
//! ```

pub mod error;
pub mod header;
pub mod layout;
pub mod render;
pub mod row_header;
pub mod types;

// WASM surface
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use error::{HeaderError, Result};
pub use header::{Header, HeaderAxis, HeaderOptions, ResizeSession, ResizeState};
pub use row_header::{render_default_row_header, ResizeGuide, RowHeader, RowHeaderProps};
pub use types::*;

#[cfg(target_arch = "wasm32")]
pub use viewer::RowHeaderView;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
