//! Menu navigation exports

use wasm_bindgen::prelude::*;
use serde::Serialize;

use super::helpers::{deserialize, serialize};
use crate::menu::{self, MenuAction, MenuEntry, MenuEvent, MenuState};

/// Result of one reducer step
#[derive(Debug, Clone, Serialize)]
pub struct MenuReduceResult {
    pub state: MenuState,
    pub action: MenuAction,
}

/// Apply a menu event: `{state, action}` for `(state, event, entries)`
#[wasm_bindgen(js_name = reduceMenu)]
pub fn reduce_menu(state_js: JsValue, event_js: JsValue, entries_js: JsValue) -> Result<JsValue, JsValue> {
    let state: MenuState = if state_js.is_undefined() || state_js.is_null() {
        MenuState::default()
    } else {
        deserialize(state_js, "Failed to deserialize menu state")?
    };
    let event: MenuEvent = deserialize(event_js, "Failed to deserialize menu event")?;
    let entries: Vec<MenuEntry> = deserialize(entries_js, "Failed to deserialize menu entries")?;

    let (state, action) = menu::reduce(state, event, &entries);
    serialize(&MenuReduceResult { state, action }, "Failed to serialize menu result")
}

#[wasm_bindgen(js_name = isMenuSelectable)]
pub fn is_menu_selectable(entries_js: JsValue) -> Result<bool, JsValue> {
    let entries: Vec<MenuEntry> = deserialize(entries_js, "Failed to deserialize menu entries")?;
    Ok(menu::is_selectable(&entries))
}

#[wasm_bindgen(js_name = isMenuFullScreen)]
pub fn is_menu_full_screen(
    is_height_bounded: bool,
    is_width_bounded: bool,
    bounding_width: f64,
    content_width: f64,
) -> bool {
    menu::is_full_screen(is_height_bounded, is_width_bounded, bounding_width, content_width)
}

/// Header buttons for a menu page, or null when the page has no header
#[wasm_bindgen(js_name = menuHeader)]
pub fn menu_header(page_index: usize, has_close_handler: bool, is_full_screen: bool) -> Result<JsValue, JsValue> {
    serialize(
        &menu::menu_header(page_index, has_close_handler, is_full_screen),
        "Failed to serialize menu header",
    )
}
