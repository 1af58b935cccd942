#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, RESOLUTION_TILE_PX};
use crate::extent::Extent;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }
}

/// View state over the floor image.
///
/// `center` is in world (image pixel) coordinates with y pointing up.
/// `zoom` is a level, not a scale: each level halves the resolution.
/// `max_resolution` is the number of world units per screen pixel at zoom 0.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub center: Point,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub max_resolution: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: Point::new(0.0, 0.0),
            zoom: DEFAULT_ZOOM,
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            max_resolution: 1.0,
        }
    }
}

impl Camera {
    /// A view centered on `extent`, sized so the whole extent fits one
    /// [`RESOLUTION_TILE_PX`] tile at zoom 0.
    #[must_use]
    pub fn for_extent(extent: &Extent) -> Self {
        let longest = extent.width().max(extent.height());
        let max_resolution = if longest > 0.0 {
            longest / RESOLUTION_TILE_PX
        } else {
            1.0
        };
        Self { center: extent.center(), max_resolution, ..Self::default() }
    }

    /// World units per screen pixel at the current zoom.
    #[must_use]
    pub fn resolution(&self) -> f64 {
        self.max_resolution / 2.0_f64.powf(self.zoom)
    }

    /// Set the zoom level, clamped to `[min_zoom, max_zoom]`.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point, viewport: Size) -> Point {
        let res = self.resolution();
        let mid = viewport.center();
        Point {
            x: (world.x - self.center.x) / res + mid.x,
            y: (self.center.y - world.y) / res + mid.y,
        }
    }

    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point, viewport: Size) -> Point {
        let res = self.resolution();
        let mid = viewport.center();
        Point {
            x: self.center.x + (screen.x - mid.x) * res,
            y: self.center.y - (screen.y - mid.y) * res,
        }
    }

    /// Convert a world-space distance to screen pixels.
    #[must_use]
    pub fn world_dist_to_screen(&self, world_dist: f64) -> f64 {
        world_dist / self.resolution()
    }

    /// Move the view so content follows a pointer drag of `(dx, dy)` screen pixels.
    pub fn pan_by_screen(&mut self, dx: f64, dy: f64) {
        let res = self.resolution();
        self.center.x -= dx * res;
        self.center.y += dy * res;
    }

    /// Change zoom by `delta` levels, keeping the world point under `screen`
    /// fixed. Returns `false` when the zoom range left nothing to change.
    pub fn zoom_at(&mut self, screen: Point, viewport: Size, delta: f64) -> bool {
        let anchor = self.screen_to_world(screen, viewport);
        let before = self.zoom;
        self.set_zoom(self.zoom + delta);
        if (self.zoom - before).abs() < f64::EPSILON {
            return false;
        }
        let res = self.resolution();
        let mid = viewport.center();
        self.center.x = anchor.x - (screen.x - mid.x) * res;
        self.center.y = anchor.y + (screen.y - mid.y) * res;
        true
    }
}
