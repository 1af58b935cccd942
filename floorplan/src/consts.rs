//! Shared numeric constants for the floorplan crate.

// ── Markers ─────────────────────────────────────────────────────

/// Radius of a desk marker in image-pixel units.
pub const MARKER_RADIUS: f64 = 15.0;

/// Stroke width of a desk marker outline, in screen pixels.
pub const MARKER_STROKE_WIDTH: f64 = 2.0;

// ── View ────────────────────────────────────────────────────────

/// Zoom level the view starts at.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Lowest zoom level the view allows.
pub const MIN_ZOOM: f64 = 1.0;

/// Highest zoom level the view allows.
pub const MAX_ZOOM: f64 = 3.0;

/// Tile size the maximum resolution is derived from: the whole extent fits
/// into this many pixels at zoom 0.
pub const RESOLUTION_TILE_PX: f64 = 256.0;

/// Zoom levels gained or lost per wheel event.
pub const WHEEL_ZOOM_STEP: f64 = 1.0;

// ── Input ───────────────────────────────────────────────────────

/// Pointer movement in screen pixels above which a press becomes a drag.
pub const DRAG_TOLERANCE_PX: f64 = 1.0;

// ── Projection ──────────────────────────────────────────────────

/// Code of the pixel projection laid over the floor image.
pub const PROJECTION_CODE: &str = "floorplan-image";
