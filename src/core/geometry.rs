//! Axis-aligned rectangles in field coordinates.
//!
//! The field origin is the top-left corner; `y` grows downward, so "above the
//! field" means a negative `top`.

use serde::{Deserialize, Serialize};

/// Logical size of the playing field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f64,
    pub height: f64,
}

impl Field {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Bounding rectangle used for collision and out-of-field checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Build from a top-left corner and a size.
    pub fn from_origin(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Strict overlap test. Rectangles that only share an edge do not overlap.
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.left < other.right
            && self.top < other.bottom
            && self.right > other.left
            && self.bottom > other.top
    }
}
