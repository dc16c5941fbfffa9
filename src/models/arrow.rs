//! Arrow placement result

use serde::{Deserialize, Serialize};

/// Side of the content box the arrow sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowSide {
    Top,
    Bottom,
    Left,
    Right,
    #[default]
    None,
}

impl ArrowSide {
    /// Top/bottom sides run horizontally; the offset is measured from the left end
    pub fn is_horizontal(&self) -> bool {
        matches!(self, ArrowSide::Top | ArrowSide::Bottom)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ArrowSide::Top => "top",
            ArrowSide::Bottom => "bottom",
            ArrowSide::Left => "left",
            ArrowSide::Right => "right",
            ArrowSide::None => "none",
        }
    }
}

/// Where the arrow tip goes: a side of the content box and a distance along it
///
/// For top/bottom the offset is measured from the content's left edge,
/// for left/right from its top edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrowPlacement {
    pub side: ArrowSide,
    pub offset: f64,
}

impl ArrowPlacement {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(side: ArrowSide, offset: f64) -> Self {
        Self { side, offset }
    }

    pub fn is_displayed(&self) -> bool {
        self.side != ArrowSide::None
    }

    /// CSS offset for the arrow element's own box (tip centered on `offset`)
    pub fn edge_offset(&self, arrow_size: f64) -> f64 {
        self.offset - arrow_size / 2.0
    }
}
