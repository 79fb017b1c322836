//! WASM-exported row header view.

use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, MouseEvent};

use super::HeaderController;
use crate::error::HeaderError;
use crate::render::dom;
use crate::types::{Axis, PointerEvent, Region, RowHeaderConfig};

/// A row header bound to a DOM element.
#[wasm_bindgen]
pub struct RowHeaderView {
    controller: HeaderController,
    element: Option<HtmlElement>,
}

#[wasm_bindgen]
impl RowHeaderView {
    /// Create a view.
    ///
    /// `config` is a `RowHeaderConfig` object (camelCase keys, all optional);
    /// `on_row_height_changed(index, size)` is called once per committed resize.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config: JsValue,
        row_heights: Vec<f32>,
        num_cols: u32,
        on_row_height_changed: Option<Function>,
    ) -> Result<RowHeaderView, JsValue> {
        console_error_panic_hook::set_once();

        let config: RowHeaderConfig = if config.is_undefined() || config.is_null() {
            RowHeaderConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)
                .map_err(|e| HeaderError::Serialization(e.to_string()))?
        };
        let mut controller = HeaderController::new(&config, &row_heights, num_cols)?;
        if let Some(callback) = on_row_height_changed {
            controller.set_commit_listener(Box::new(move |index: u32, size: f32| {
                let _ = callback.call2(
                    &JsValue::NULL,
                    &JsValue::from(index),
                    &JsValue::from(size),
                );
            }));
        }
        Ok(RowHeaderView {
            controller,
            element: None,
        })
    }

    /// Register `on_mount(which)`; `which` is `"row"`.
    pub fn set_on_mount(&mut self, on_mount: Function) {
        self.controller.set_on_mount(Rc::new(move |axis: Axis| {
            let _ = on_mount.call1(&JsValue::NULL, &JsValue::from_str(axis.as_str()));
        }));
    }

    /// Attach to `element` and render into it.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn mount(&mut self, element: HtmlElement) -> Result<(), JsValue> {
        let top = element.get_bounding_client_rect().top() as f32;
        self.controller.set_origin(top);
        self.controller.resize(element.client_height().max(0) as f32);
        self.element = Some(element);
        self.render()
    }

    /// Re-render into the mounted element.
    pub fn render(&self) -> Result<(), JsValue> {
        let Some(element) = &self.element else {
            return Ok(());
        };
        let document = element
            .owner_document()
            .ok_or_else(|| HeaderError::Dom("element has no owner document".to_string()))?;
        dom::mount(&document, element, &self.controller.render())?;
        Ok(())
    }

    /// The rendered tree as a plain JS object.
    pub fn tree(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.controller.snapshot())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    pub fn set_scroll(&mut self, scroll_top: f32) -> Result<(), JsValue> {
        self.controller.set_scroll(scroll_top);
        self.render()
    }

    pub fn set_loading(&mut self, loading: bool) -> Result<(), JsValue> {
        self.controller.set_loading(loading);
        self.render()
    }

    /// Replace the selection with an array of `{rows?, cols?}` regions.
    pub fn set_selection(&mut self, regions: JsValue) -> Result<(), JsValue> {
        let regions: Vec<Region> = serde_wasm_bindgen::from_value(regions)
            .map_err(|e| HeaderError::Serialization(e.to_string()))?;
        self.controller.set_selection(regions);
        self.render()
    }

    pub fn on_mouse_down(&mut self, event: &MouseEvent) -> bool {
        let hit = self.controller.pointer_down(&PointerEvent::from(event));
        if hit.is_some() {
            event.prevent_default();
        }
        hit.is_some()
    }

    /// Returns the previewed height while a resize is in progress.
    pub fn on_mouse_move(&mut self, event: &MouseEvent) -> Option<f32> {
        self.controller.pointer_move(&PointerEvent::from(event))
    }

    pub fn on_mouse_up(&mut self) -> Result<(), JsValue> {
        if self.controller.pointer_up().is_some() {
            self.render()?;
        }
        Ok(())
    }

    /// Current guide line offsets (empty when no resize is in progress).
    pub fn guide(&self) -> Vec<f32> {
        self.controller.guide().unwrap_or_default()
    }

    pub fn window_start(&self) -> u32 {
        self.controller.window().start
    }

    pub fn window_end(&self) -> u32 {
        self.controller.window().end
    }
}
