//! Geometry primitives
//!
//! Measured boxes and sizes handed in by the host. All values are CSS pixels
//! in the same coordinate space (usually the viewport).

use serde::{Deserialize, Serialize};

/// Axis-aligned box snapshot of a measured element
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self { top, left, width, height }
    }

    /// Build a rect at the given origin with the given size
    pub fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.y, origin.x, size.width, size.height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// True when either side has no extent
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when `other` lies fully inside this rect (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Open-interval overlap of the horizontal spans
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.left < other.right() && other.left < self.right()
    }

    /// Open-interval overlap of the vertical spans
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.top < other.bottom() && other.top < self.bottom()
    }

    /// Same rect moved by `delta`
    pub fn translate(&self, delta: Point) -> Self {
        Self::new(self.top + delta.y, self.left + delta.x, self.width, self.height)
    }

    /// Rect covering a viewport of the given size
    pub fn viewport(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }
}

/// Width/height of content that has not been placed yet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Zero on either axis; such content fits anywhere
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::default()
    }
}

impl std::ops::Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}
