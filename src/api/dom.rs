//! DOM measurement
//!
//! Turns live elements and the window into the geometry snapshots the
//! positioning functions take.

use wasm_bindgen::prelude::*;

use super::helpers::{js_error, serialize};
use crate::models::{Rect, Size};

/// Viewport size from `window.innerWidth` / `window.innerHeight`
pub fn current_viewport() -> Result<Size, JsValue> {
    let window = web_sys::window().ok_or_else(|| js_error("No global window available"))?;
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| js_error("window.innerWidth is not a number"))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| js_error("window.innerHeight is not a number"))?;
    Ok(Size::new(width, height))
}

/// Bounding rect of an element in viewport coordinates
pub fn element_rect(element: &web_sys::Element) -> Rect {
    let dom_rect = element.get_bounding_client_rect();
    Rect::new(dom_rect.top(), dom_rect.left(), dom_rect.width(), dom_rect.height())
}

/// Measure an element into a `{top, left, width, height}` object
#[wasm_bindgen(js_name = measureElement)]
pub fn measure_element(element: &web_sys::Element) -> Result<JsValue, JsValue> {
    serialize(&element_rect(element), "Failed to serialize element rect")
}

/// Current viewport as a `{width, height}` object
#[wasm_bindgen(js_name = viewportSize)]
pub fn viewport_size() -> Result<JsValue, JsValue> {
    serialize(&current_viewport()?, "Failed to serialize viewport size")
}
