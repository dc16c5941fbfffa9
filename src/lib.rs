//! Overlay Positioner WASM Module
//!
//! Geometry for floating UI: where a popup goes relative to its target,
//! which way it flips when it would overflow, where its arrow points, and
//! how menu focus moves under the keyboard.

pub mod models;
pub mod positioning;
pub mod menu;
pub mod api;

// Re-export commonly used types
pub use models::{
    ArrowPlacement, ArrowSide, AttachmentPair, AttachmentParseError, AttachmentPoint,
    FallbackBehavior, HorizontalAttachment, Point, PopupHeight, PopupWidth, Rect, Size,
    VerticalAttachment,
};
pub use positioning::{layout_popup, place_arrow, resolve, PopupConfig, PopupGeometry, PopupLayout};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    install_panic_hook();
    init_logging();

    log::info!("Overlay positioner WASM module initialized");
}

#[cfg(feature = "console_error_panic_hook")]
fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

#[cfg(not(feature = "console_error_panic_hook"))]
fn install_panic_hook() {}

#[cfg(feature = "console_log")]
fn init_logging() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::warn!("logger already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logging() {}
