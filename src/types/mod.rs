//! Data types shared by the header, layout and rendering modules.

pub mod axis;
pub mod config;
pub mod pointer;
pub mod region;

pub use axis::*;
pub use config::*;
pub use pointer::*;
pub use region::*;
