use std::rc::Rc;

use super::guide::ResizeGuide;
use super::renderer::RowHeaderCellRenderer;
use crate::error::Result;
use crate::header::HeaderOptions;
use crate::layout::{Grid, Locator, RowWindow};
use crate::types::{Axis, Region, RowHeaderConfig, RowHeightBounds};

/// Invoked once per completed resize with `(row_index, size_px)`.
pub type RowHeightChanged = Rc<dyn Fn(u32, f32)>;

/// Invoked once after first render with the header's axis tag.
pub type MountHook = Rc<dyn Fn(Axis)>;

/// Inputs to a [`RowHeader`](super::RowHeader) render.
///
/// Every collaborator is owned upstream; the header only reads them, apart
/// from writing the resize guide during a drag.
pub struct RowHeaderProps {
    /// Rows eligible for rendering
    pub window: RowWindow,
    pub bounds: RowHeightBounds,
    /// Geometry oracle
    pub grid: Rc<dyn Grid>,
    pub locator: Option<Rc<dyn Locator>>,
    pub selected_regions: Vec<Region>,
    pub resize_guide: ResizeGuide,
    pub on_row_height_changed: RowHeightChanged,
    pub on_mount: Option<MountHook>,
    /// Custom cell renderer; the 1-based numeric label is used when absent
    pub row_header_cell_renderer: Option<RowHeaderCellRenderer>,
    pub options: HeaderOptions,
}

impl RowHeaderProps {
    /// Props with default bounds, no selection, no locator and no mount hook.
    pub fn new(grid: Rc<dyn Grid>, window: RowWindow, on_row_height_changed: RowHeightChanged) -> Self {
        Self {
            window,
            bounds: RowHeightBounds::default(),
            grid,
            locator: None,
            selected_regions: Vec::new(),
            resize_guide: ResizeGuide::new(),
            on_row_height_changed,
            on_mount: None,
            row_header_cell_renderer: None,
            options: HeaderOptions {
                resizable: true,
                ..HeaderOptions::default()
            },
        }
    }

    /// Props from a serialised configuration.
    ///
    /// # Errors
    /// Returns [`HeaderError::InvalidHeightBounds`](crate::error::HeaderError)
    /// when the configured bounds are inconsistent.
    pub fn from_config(
        config: &RowHeaderConfig,
        grid: Rc<dyn Grid>,
        window: RowWindow,
        on_row_height_changed: RowHeightChanged,
    ) -> Result<Self> {
        let mut props = Self::new(grid, window, on_row_height_changed);
        props.bounds = config.bounds()?;
        props.options = HeaderOptions {
            loading: config.loading,
            reorderable: config.reorderable,
            resizable: config.resizable,
        };
        Ok(props)
    }

    pub fn with_bounds(mut self, bounds: RowHeightBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_locator(mut self, locator: Rc<dyn Locator>) -> Self {
        self.locator = Some(locator);
        self
    }

    pub fn with_selection(mut self, regions: Vec<Region>) -> Self {
        self.selected_regions = regions;
        self
    }

    pub fn with_resize_guide(mut self, guide: ResizeGuide) -> Self {
        self.resize_guide = guide;
        self
    }

    pub fn with_on_mount(mut self, hook: MountHook) -> Self {
        self.on_mount = Some(hook);
        self
    }

    pub fn with_cell_renderer(mut self, renderer: RowHeaderCellRenderer) -> Self {
        self.row_header_cell_renderer = Some(renderer);
        self
    }

    pub fn with_options(mut self, options: HeaderOptions) -> Self {
        self.options = options;
        self
    }
}
