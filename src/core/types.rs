use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Point in pixel space.
///
/// Only the projector produces these from data; the scrub controller never
/// builds one directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation toward `other`; `t` is not clamped.
    #[must_use]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// One sample of a series resolved at an index.
///
/// `x_value` is the X-domain coordinate (the index itself on an index axis);
/// `y_value` is absent when the series has a gap at `index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub index: usize,
    pub x_value: f64,
    pub y_value: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(index: usize, x_value: f64, y_value: Option<f64>) -> Self {
        Self {
            index,
            x_value,
            y_value,
        }
    }

    /// Builds a point on an index axis, where the X value equals the index.
    #[must_use]
    pub fn at_index(index: usize, y_value: Option<f64>) -> Self {
        Self::new(index, index as f64, y_value)
    }
}
