//! Anchored overlay positioning
//!
//! Pure geometry over measured boxes. The host measures the target, the
//! bounding container and the content, calls in here, and applies the
//! result to the DOM.
//!
//! # Module Structure
//!
//! - `resolver`: picks the attachment pair, with none/flip/auto fallback
//! - `arrow`: arrow side and offset for the realized boxes
//! - `popup`: one-call layout pass combining sizing, resolution and arrow

pub mod resolver;
pub mod arrow;
pub mod popup;

pub use resolver::{
    candidate_rect, content_offset, pair_fits, resolve, resolve_with, ArrowGeometry,
    PlacementOptions,
};
pub use arrow::place_arrow;
pub use popup::{
    bounded_content_size, layout_popup, BoundedContent, Hysteresis, PopupConfig, PopupGeometry,
    PopupLayout, DEFAULT_ARROW_SIZE, DEFAULT_CORNER_INSET,
};
