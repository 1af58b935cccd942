//! Pixel-space extent and projection of the floor image.
//!
//! The floor image defines its own coordinate system: one world unit per
//! image pixel, origin at the bottom-left corner, y axis pointing up. Desk
//! positions are expressed in this system.

#[cfg(test)]
#[path = "extent_test.rs"]
mod extent_test;

use crate::camera::Point;
use crate::consts::PROJECTION_CODE;

/// Axis-aligned bounding box `[min_x, min_y, max_x, max_y]` in image pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    /// Extent `[0, 0, width, height]` covering an image of the given size.
    #[must_use]
    pub fn from_size(width: f64, height: f64) -> Self {
        Self { min_x: 0.0, min_y: 0.0, max_x: width, max_y: height }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new((self.min_x + self.max_x) * 0.5, (self.min_y + self.max_y) * 0.5)
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

/// Units of a projection. The floor image only ever uses pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Pixels,
}

/// A custom projection over the floor image extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub code: &'static str,
    pub units: Units,
    pub extent: Extent,
}

impl Projection {
    /// Pixel projection covering `extent`.
    #[must_use]
    pub fn pixels(extent: Extent) -> Self {
        Self { code: PROJECTION_CODE, units: Units::Pixels, extent }
    }
}
