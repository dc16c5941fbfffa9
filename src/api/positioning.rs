//! Positioning exports
//!
//! JS-facing wrappers around the resolver, arrow calculator and popup layout
//! pass. Inputs are plain JS objects in the wire format of the model types.

use wasm_bindgen::prelude::*;

use super::dom::current_viewport;
use super::helpers::{deserialize, parse, serialize};
use crate::models::{AttachmentPair, AttachmentPoint, FallbackBehavior, Rect, Size};
use crate::positioning::{self, PlacementOptions, PopupConfig, PopupGeometry};

/// Use the given bounding rect, or the window viewport when it is null/undefined
fn bounding_or_viewport(bounding_js: JsValue) -> Result<Rect, JsValue> {
    let bounding: Option<Rect> = deserialize(bounding_js, "Failed to deserialize bounding rect")?;
    match bounding {
        Some(rect) => Ok(rect),
        None => Ok(Rect::viewport(current_viewport()?)),
    }
}

/// Resolve the attachment pair for a popup
///
/// # Arguments
/// * `target_js` - Target rect `{top, left, width, height}`
/// * `bounding_js` - Bounding rect, or null for the viewport
/// * `content_js` - Content size `{width, height}`
/// * `requested_js` - Requested pair `{content: "top center", target: "bottom center"}`
/// * `behavior` - "none", "flip" or "auto"
#[wasm_bindgen(js_name = resolveAttachment)]
pub fn resolve_attachment(
    target_js: JsValue,
    bounding_js: JsValue,
    content_js: JsValue,
    requested_js: JsValue,
    behavior: &str,
) -> Result<JsValue, JsValue> {
    let target: Rect = deserialize(target_js, "Failed to deserialize target rect")?;
    let bounding = bounding_or_viewport(bounding_js)?;
    let content: Size = deserialize(content_js, "Failed to deserialize content size")?;
    let requested: AttachmentPair = deserialize(requested_js, "Failed to deserialize requested attachment")?;
    let behavior: FallbackBehavior = parse(behavior, "Invalid attachment behavior")?;

    let resolved = positioning::resolve(&target, &bounding, content, requested, behavior);
    serialize(&resolved, "Failed to serialize resolved attachment")
}

/// Content rect for an attachment pair, with an optional edge margin
#[wasm_bindgen(js_name = candidateRect)]
pub fn candidate_rect(
    target_js: JsValue,
    content_js: JsValue,
    pair_js: JsValue,
    margin: Option<f64>,
) -> Result<JsValue, JsValue> {
    let target: Rect = deserialize(target_js, "Failed to deserialize target rect")?;
    let content: Size = deserialize(content_js, "Failed to deserialize content size")?;
    let pair: AttachmentPair = deserialize(pair_js, "Failed to deserialize attachment pair")?;
    let options = PlacementOptions {
        margin: margin.unwrap_or(0.0),
        arrow: None,
    };

    let rect = positioning::candidate_rect(&target, content, pair, &options);
    serialize(&rect, "Failed to serialize candidate rect")
}

/// Arrow side and offset for realized target/content rects
#[wasm_bindgen(js_name = placeArrow)]
pub fn place_arrow(
    target_js: JsValue,
    content_js: JsValue,
    resolved_js: JsValue,
    arrow_size: f64,
    corner_inset: f64,
) -> Result<JsValue, JsValue> {
    let target: Rect = deserialize(target_js, "Failed to deserialize target rect")?;
    let content: Rect = deserialize(content_js, "Failed to deserialize content rect")?;
    let resolved: AttachmentPair = deserialize(resolved_js, "Failed to deserialize resolved attachment")?;

    let arrow = positioning::place_arrow(&target, &content, resolved, arrow_size, corner_inset);
    serialize(&arrow, "Failed to serialize arrow placement")
}

/// Full popup layout pass
///
/// `geometry_js.viewport` may be omitted; the window viewport is measured then.
#[wasm_bindgen(js_name = layoutPopup)]
pub fn layout_popup(config_js: JsValue, geometry_js: JsValue) -> Result<JsValue, JsValue> {
    let config: PopupConfig = if config_js.is_undefined() || config_js.is_null() {
        PopupConfig::default()
    } else {
        deserialize(config_js, "Failed to deserialize popup config")?
    };

    let mut geometry: PopupGeometry = deserialize(geometry_js, "Failed to deserialize popup geometry")?;
    if geometry.bounding.is_none() && geometry.viewport == Size::default() {
        geometry.viewport = current_viewport()?;
    }

    let layout = positioning::layout_popup(&config, &geometry);
    log::debug!(
        "layoutPopup: {} at ({:.1}, {:.1}) arrow {}",
        layout.attachment,
        layout.content_rect.left,
        layout.content_rect.top,
        layout.arrow.side.as_str()
    );
    serialize(&layout, "Failed to serialize popup layout")
}

/// Normalize attachment text ("center top" -> "top center")
#[wasm_bindgen(js_name = parseAttachment)]
pub fn parse_attachment(text: &str) -> Result<String, JsValue> {
    let point: AttachmentPoint = parse(text, "Invalid attachment")?;
    Ok(point.to_string())
}

/// Mirror attachment text ("top left" -> "bottom right")
#[wasm_bindgen(js_name = mirrorAttachment)]
pub fn mirror_attachment(text: &str) -> Result<String, JsValue> {
    let point: AttachmentPoint = parse(text, "Invalid attachment")?;
    Ok(point.mirror().to_string())
}
