//! Header output: class hooks, the element tree, and DOM materialisation.
//!
//! This module provides:
//! - Visual class-hook constants shared with the styling layer
//! - A serialisable element tree (`Node`) that the header renders into
//! - A web-sys DOM writer for that tree (wasm32 only)

pub mod classes;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod node;

// Re-export commonly used types
pub use node::{Container, HeaderCell, Node, Style};
