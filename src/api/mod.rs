//! Overlay positioner WASM API
//!
//! This module provides the JavaScript-facing API. Every export takes plain
//! JS objects, deserializes them into the model types, calls the pure Rust
//! implementation and serializes the result back.
//!
//! # Module Structure
//!
//! - `helpers`: Shared utilities for serialization and error handling
//! - `dom`: Element and viewport measurement
//! - `positioning`: Attachment resolution, arrow placement, popup layout
//! - `menu`: Menu navigation reducer and header decisions

pub mod helpers;
pub mod dom;
pub mod positioning;
pub mod menu;

pub use dom::{measure_element, viewport_size};
pub use positioning::{
    candidate_rect, layout_popup, mirror_attachment, parse_attachment, place_arrow,
    resolve_attachment,
};
pub use menu::{is_menu_full_screen, is_menu_selectable, menu_header, reduce_menu};
