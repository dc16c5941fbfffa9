//! Preset popup content sizes
//!
//! Popups are limited to a fixed set of heights and widths. `Dynamic`
//! (wire value 0) defers to the measured content size.

use serde_repr::{Deserialize_repr, Serialize_repr};

/// Popup content height in px
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
pub enum PopupHeight {
    Dynamic = 0,
    H40 = 40,
    #[default]
    H80 = 80,
    H120 = 120,
    H160 = 160,
    H240 = 240,
    H320 = 320,
    H400 = 400,
    H480 = 480,
    H560 = 560,
    H640 = 640,
    H720 = 720,
    H800 = 800,
    H880 = 880,
}

impl PopupHeight {
    /// Fixed size in px, `None` for dynamic
    pub fn px(self) -> Option<f64> {
        match self {
            PopupHeight::Dynamic => None,
            other => Some(other as u16 as f64),
        }
    }
}

/// Popup content width in px
#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
pub enum PopupWidth {
    Dynamic = 0,
    W160 = 160,
    #[default]
    W240 = 240,
    W320 = 320,
    W640 = 640,
    W960 = 960,
    W1280 = 1280,
    W1760 = 1760,
}

impl PopupWidth {
    pub fn px(self) -> Option<f64> {
        match self {
            PopupWidth::Dynamic => None,
            other => Some(other as u16 as f64),
        }
    }
}
