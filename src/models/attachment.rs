//! Attachment points, pairs and fallback behavior
//!
//! An attachment point names a spot on a box ("top center", "bottom left").
//! A pair aligns one point on the content box with one point on the target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::AttachmentParseError;
use super::geometry::{Point, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerticalAttachment {
    Top,
    Middle,
    Bottom,
}

impl VerticalAttachment {
    pub fn mirror(self) -> Self {
        match self {
            VerticalAttachment::Top => VerticalAttachment::Bottom,
            VerticalAttachment::Middle => VerticalAttachment::Middle,
            VerticalAttachment::Bottom => VerticalAttachment::Top,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VerticalAttachment::Top => "top",
            VerticalAttachment::Middle => "middle",
            VerticalAttachment::Bottom => "bottom",
        }
    }

    /// Fraction of the height measured from the top edge
    fn fraction(self) -> f64 {
        match self {
            VerticalAttachment::Top => 0.0,
            VerticalAttachment::Middle => 0.5,
            VerticalAttachment::Bottom => 1.0,
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        match word {
            "top" => Some(VerticalAttachment::Top),
            "middle" => Some(VerticalAttachment::Middle),
            "bottom" => Some(VerticalAttachment::Bottom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HorizontalAttachment {
    Left,
    Center,
    Right,
}

impl HorizontalAttachment {
    pub fn mirror(self) -> Self {
        match self {
            HorizontalAttachment::Left => HorizontalAttachment::Right,
            HorizontalAttachment::Center => HorizontalAttachment::Center,
            HorizontalAttachment::Right => HorizontalAttachment::Left,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HorizontalAttachment::Left => "left",
            HorizontalAttachment::Center => "center",
            HorizontalAttachment::Right => "right",
        }
    }

    /// Fraction of the width measured from the left edge
    fn fraction(self) -> f64 {
        match self {
            HorizontalAttachment::Left => 0.0,
            HorizontalAttachment::Center => 0.5,
            HorizontalAttachment::Right => 1.0,
        }
    }

    fn from_word(word: &str) -> Option<Self> {
        match word {
            "left" => Some(HorizontalAttachment::Left),
            "center" => Some(HorizontalAttachment::Center),
            "right" => Some(HorizontalAttachment::Right),
            _ => None,
        }
    }
}

/// A named point on a box, serialized as `"<vertical> <horizontal>"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AttachmentPoint {
    pub vertical: VerticalAttachment,
    pub horizontal: HorizontalAttachment,
}

impl AttachmentPoint {
    pub const fn new(vertical: VerticalAttachment, horizontal: HorizontalAttachment) -> Self {
        Self { vertical, horizontal }
    }

    pub const MIDDLE_CENTER: AttachmentPoint =
        AttachmentPoint::new(VerticalAttachment::Middle, HorizontalAttachment::Center);

    pub fn is_centered(&self) -> bool {
        *self == Self::MIDDLE_CENTER
    }

    /// top<->bottom and left<->right; middle/center stay put
    pub fn mirror(self) -> Self {
        Self::new(self.vertical.mirror(), self.horizontal.mirror())
    }

    pub fn mirror_vertical(self) -> Self {
        Self::new(self.vertical.mirror(), self.horizontal)
    }

    pub fn mirror_horizontal(self) -> Self {
        Self::new(self.vertical, self.horizontal.mirror())
    }

    /// Offset of this point from the top-left corner of a box of `size`
    pub fn offset_in(&self, size: Size) -> Point {
        Point::new(
            size.width * self.horizontal.fraction(),
            size.height * self.vertical.fraction(),
        )
    }

    /// Absolute position of this point on `rect`
    pub fn locate(&self, rect: &Rect) -> Point {
        let offset = self.offset_in(rect.size());
        Point::new(rect.left + offset.x, rect.top + offset.y)
    }
}

impl Default for AttachmentPoint {
    fn default() -> Self {
        Self::new(VerticalAttachment::Top, HorizontalAttachment::Center)
    }
}

impl fmt::Display for AttachmentPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vertical.as_str(), self.horizontal.as_str())
    }
}

impl FromStr for AttachmentPoint {
    type Err = AttachmentParseError;

    /// Accepts the two words in either order ("center top" == "top center")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        if words.len() != 2 {
            return Err(AttachmentParseError::Malformed(s.to_string()));
        }

        let mut vertical = None;
        let mut horizontal = None;
        for word in words {
            let lower = word.to_ascii_lowercase();
            if let Some(v) = VerticalAttachment::from_word(&lower) {
                if vertical.replace(v).is_some() {
                    return Err(AttachmentParseError::Malformed(s.to_string()));
                }
            } else if let Some(h) = HorizontalAttachment::from_word(&lower) {
                if horizontal.replace(h).is_some() {
                    return Err(AttachmentParseError::Malformed(s.to_string()));
                }
            } else {
                return Err(AttachmentParseError::UnknownWord(word.to_string()));
            }
        }

        match (vertical, horizontal) {
            (Some(vertical), Some(horizontal)) => Ok(Self::new(vertical, horizontal)),
            _ => Err(AttachmentParseError::Malformed(s.to_string())),
        }
    }
}

impl TryFrom<String> for AttachmentPoint {
    type Error = AttachmentParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AttachmentPoint> for String {
    fn from(point: AttachmentPoint) -> String {
        point.to_string()
    }
}

/// Which point on the content aligns to which point on the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttachmentPair {
    pub content: AttachmentPoint,
    pub target: AttachmentPoint,
}

impl AttachmentPair {
    pub fn new(content: AttachmentPoint, target: AttachmentPoint) -> Self {
        Self { content, target }
    }

    /// Pair whose target point mirrors the content point ("top center" -> "bottom center")
    pub fn mirrored_from(content: AttachmentPoint) -> Self {
        Self::new(content, content.mirror())
    }

    pub fn flip(self) -> Self {
        Self::new(self.content.mirror(), self.target.mirror())
    }

    pub fn flip_vertical(self) -> Self {
        Self::new(self.content.mirror_vertical(), self.target.mirror_vertical())
    }

    pub fn flip_horizontal(self) -> Self {
        Self::new(self.content.mirror_horizontal(), self.target.mirror_horizontal())
    }

    /// Candidates tried by the auto fallback, in order
    pub fn auto_candidates(self) -> [AttachmentPair; 4] {
        [self, self.flip_vertical(), self.flip_horizontal(), self.flip()]
    }
}

impl fmt::Display for AttachmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.content, self.target)
    }
}

/// Policy when the requested pair would overflow the bounding container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackBehavior {
    None,
    Flip,
    #[default]
    Auto,
}

impl FromStr for FallbackBehavior {
    type Err = AttachmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(FallbackBehavior::None),
            "flip" => Ok(FallbackBehavior::Flip),
            "auto" => Ok(FallbackBehavior::Auto),
            _ => Err(AttachmentParseError::UnknownBehavior(s.to_string())),
        }
    }
}
