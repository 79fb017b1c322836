//! Header controller - owns the state a row header renders from.
//!
//! This module provides `HeaderController`, the coordinator that:
//! - Owns the row geometry and applies committed resizes to it
//! - Tracks viewport scroll and derives the row window each render
//! - Holds the selection set and the resize-guide overlay state
//! - Drives resize gestures from pointer events (see `events`)
//!
//! The wasm-exported `RowHeaderView` wraps a controller and writes its output
//! into the DOM.

mod events;
#[cfg(target_arch = "wasm32")]
mod view;

pub use events::RESIZE_HANDLE_SIZE;
#[cfg(target_arch = "wasm32")]
pub use view::RowHeaderView;

use std::cell::{Ref, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::error::Result;
use crate::header::{HeaderOptions, ResizeSession};
use crate::layout::{Grid, LayoutLocator, RowWindow, SheetLayout, Viewport};
use crate::render::Node;
use crate::row_header::{MountHook, ResizeGuide, RowHeader, RowHeaderProps};
use crate::types::{Region, RowHeaderConfig, RowHeightBounds};

/// Listener notified of each committed row height.
pub type CommitListener = Box<dyn Fn(u32, f32)>;

pub struct HeaderController {
    bounds: RowHeightBounds,
    options: HeaderOptions,
    /// Shared with the header's props and locator; resized in place
    layout: Rc<RefCell<SheetLayout>>,
    viewport: Viewport,
    /// Client y of the header's top edge
    origin_y: f32,
    selection: Vec<Region>,
    guide: ResizeGuide,
    session: ResizeSession,
    /// Commits reported by the header, waiting to be applied to `layout`
    pending: Rc<RefCell<Vec<(u32, f32)>>>,
    listener: Option<CommitListener>,
    on_mount: Option<MountHook>,
    header: RowHeader,
}

impl HeaderController {
    /// Create a controller for `row_heights.len()` real rows.
    ///
    /// # Errors
    /// Returns [`HeaderError::InvalidHeightBounds`](crate::error::HeaderError)
    /// when the configured bounds are inconsistent.
    pub fn new(config: &RowHeaderConfig, row_heights: &[f32], num_cols: u32) -> Result<Self> {
        let bounds = config.bounds()?;
        let heights: HashMap<u32, f32> = (0u32..).zip(row_heights.iter().copied()).collect();
        let num_rows = u32::try_from(row_heights.len()).unwrap_or(u32::MAX);
        let layout = Rc::new(RefCell::new(SheetLayout::new(
            num_rows,
            num_cols,
            &heights,
            &HashSet::new(),
            &HashMap::new(),
            bounds.default_height(),
        )));
        let options = HeaderOptions {
            loading: config.loading,
            reorderable: config.reorderable,
            resizable: config.resizable,
        };
        let viewport = Viewport::new();
        let guide = ResizeGuide::new();
        let pending = Rc::new(RefCell::new(Vec::new()));

        let props = Self::build_props(
            &layout,
            viewport,
            0.0,
            bounds,
            options,
            &guide,
            &pending,
            Vec::new(),
            None,
        );

        Ok(Self {
            bounds,
            options,
            layout,
            viewport,
            origin_y: 0.0,
            selection: Vec::new(),
            guide,
            session: ResizeSession::new(),
            pending,
            listener: None,
            on_mount: None,
            header: RowHeader::new(props),
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn build_props(
        layout: &Rc<RefCell<SheetLayout>>,
        viewport: Viewport,
        origin_y: f32,
        bounds: RowHeightBounds,
        options: HeaderOptions,
        guide: &ResizeGuide,
        pending: &Rc<RefCell<Vec<(u32, f32)>>>,
        selection: Vec<Region>,
        on_mount: Option<MountHook>,
    ) -> RowHeaderProps {
        let grid: Rc<dyn Grid> = Rc::clone(layout) as Rc<dyn Grid>;
        let window = viewport.visible_rows(layout.as_ref());
        let sink = Rc::clone(pending);
        let mut props = RowHeaderProps::new(
            Rc::clone(&grid),
            window,
            Rc::new(move |index: u32, size: f32| sink.borrow_mut().push((index, size))),
        )
        .with_bounds(bounds)
        .with_options(options)
        .with_selection(selection)
        .with_resize_guide(guide.share())
        .with_locator(Rc::new(LayoutLocator::new(grid, viewport, origin_y)));
        props.on_mount = on_mount;
        props
    }

    /// Rebuild the header's props from current state.
    fn refresh(&mut self) {
        let props = Self::build_props(
            &self.layout,
            self.viewport,
            self.origin_y,
            self.bounds,
            self.options,
            &self.guide,
            &self.pending,
            self.selection.clone(),
            self.on_mount.clone(),
        );
        self.header.set_props(props);
    }

    /// Listener called after each committed resize has been applied.
    pub fn set_commit_listener(&mut self, listener: CommitListener) {
        self.listener = Some(listener);
    }

    pub fn set_on_mount(&mut self, hook: MountHook) {
        self.on_mount = Some(hook);
        self.refresh();
    }

    /// Client y of the header's top edge, for pointer conversion.
    pub fn set_origin(&mut self, origin_y: f32) {
        self.origin_y = origin_y;
        self.refresh();
    }

    pub fn set_selection(&mut self, regions: Vec<Region>) {
        self.selection = regions;
        self.refresh();
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.options.loading = loading;
        self.refresh();
    }

    /// Resize the viewport height.
    pub fn resize(&mut self, height: f32) {
        self.viewport.resize(height);
        self.viewport.clamp_scroll(self.layout.as_ref());
        self.refresh();
    }

    pub fn set_scroll(&mut self, scroll_y: f32) {
        self.viewport.set_scroll(scroll_y, self.layout.as_ref());
        self.refresh();
    }

    pub fn scroll_by(&mut self, delta_y: f32) {
        self.viewport.scroll_by(delta_y, self.layout.as_ref());
        self.refresh();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> Ref<'_, SheetLayout> {
        self.layout.borrow()
    }

    pub fn window(&self) -> RowWindow {
        self.header.props().window
    }

    pub fn header(&self) -> &RowHeader {
        &self.header
    }

    /// Current resize guide lines, if any.
    pub fn guide(&self) -> Option<Vec<f32>> {
        self.guide.lines()
    }

    /// Render the header for the current window, then fire the mount hook on
    /// the first render.
    pub fn render(&self) -> Node {
        let node = self.snapshot();
        self.header.did_mount();
        node
    }

    /// Render the header without touching mount state.
    pub fn snapshot(&self) -> Node {
        self.header.render()
    }

    /// Apply commits reported by the header to the layout.
    fn apply_pending(&mut self) -> Vec<(u32, f32)> {
        let commits: Vec<(u32, f32)> = self.pending.borrow_mut().drain(..).collect();
        if commits.is_empty() {
            return commits;
        }
        {
            let mut layout = self.layout.borrow_mut();
            for &(index, size) in &commits {
                if !layout.set_row_height(index, size) {
                    tracing::debug!(message = "controller.ghost_resize_ignored", index, size);
                }
            }
        }
        self.viewport.clamp_scroll(self.layout.as_ref());
        self.refresh();
        if let Some(listener) = &self.listener {
            for &(index, size) in &commits {
                listener(index, size);
            }
        }
        commits
    }
}
