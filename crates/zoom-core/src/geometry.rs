//! Measured geometry snapshots

use serde::{Deserialize, Serialize};

/// Element box in CSS pixels, as returned by `getBoundingClientRect()`
/// or an element's offset box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rect from its top, left, width and height
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Horizontal center of the box
    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    /// Vertical center of the box
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Natural dimensions of an image
///
/// Zero on either axis means "not known yet" (the image has not decoded).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct IntrinsicSize {
    pub width: f64,
    pub height: f64,
}

impl IntrinsicSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both axes are known
    pub fn is_known(&self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }
}

/// Viewport size (`window.innerWidth` x `window.innerHeight`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center point of the viewport as (x, y)
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}
