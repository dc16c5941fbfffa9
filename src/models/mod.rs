//! Models module for the overlay positioner
//!
//! This module contains the data types exchanged with the host:
//! measured geometry, attachment names, arrow placement and preset sizes.

pub mod geometry;
pub mod attachment;
pub mod arrow;
pub mod presets;
pub mod errors;

// Re-export commonly used types
pub use geometry::{Point, Rect, Size};
pub use attachment::{
    AttachmentPair, AttachmentPoint, FallbackBehavior, HorizontalAttachment, VerticalAttachment,
};
pub use arrow::{ArrowPlacement, ArrowSide};
pub use presets::{PopupHeight, PopupWidth};
pub use errors::AttachmentParseError;
