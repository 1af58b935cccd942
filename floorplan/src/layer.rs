//! Desk layer: one circular marker per desk record, styled by status.
//!
//! The layer is built once from the desk list and then only read. Marker
//! order is input order, which is also draw order (later markers on top).

#[cfg(test)]
#[path = "layer_test.rs"]
mod layer_test;

use crate::camera::Point;
use crate::consts::{MARKER_RADIUS, MARKER_STROKE_WIDTH};
use crate::desk::{DeskRecord, DeskStatus};

/// A drawable circle representing one desk.
#[derive(Debug, Clone, PartialEq)]
pub struct DeskMarker {
    /// 1-based position of the desk in the input list.
    pub desk_id: u32,
    pub status: DeskStatus,
    /// Circle center in world coordinates.
    pub center: Point,
    /// Circle radius in world units.
    pub radius: f64,
}

impl DeskMarker {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }

    /// Whether `world_pt` lies on or inside the circle.
    #[must_use]
    pub fn contains(&self, world_pt: Point) -> bool {
        let dx = world_pt.x - self.center.x;
        let dy = world_pt.y - self.center.y;
        dx.mul_add(dx, dy * dy) <= self.radius * self.radius
    }
}

/// Stroke and fill of a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub stroke: &'static str,
    /// Stroke width in screen pixels.
    pub stroke_width: f64,
    pub fill: &'static str,
}

const AVAILABLE_STYLE: MarkerStyle = MarkerStyle {
    stroke: "green",
    stroke_width: MARKER_STROKE_WIDTH,
    fill: "rgba(0,255,0,0.2)",
};

const UNAVAILABLE_STYLE: MarkerStyle = MarkerStyle {
    stroke: "grey",
    stroke_width: MARKER_STROKE_WIDTH,
    fill: "rgba(128,128,128,0.5)",
};

/// Style for a marker with the given status. Two states only.
#[must_use]
pub fn marker_style(status: &DeskStatus) -> MarkerStyle {
    if status.is_available() {
        AVAILABLE_STYLE
    } else {
        UNAVAILABLE_STYLE
    }
}

/// Highlight drawn over the currently selected marker: a wide white
/// underlay stroke, a blue stroke on top, and a translucent white fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HighlightStyle {
    pub fill: &'static str,
    pub underlay: &'static str,
    pub underlay_width: f64,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

pub const SELECTED_HIGHLIGHT: HighlightStyle = HighlightStyle {
    fill: "rgba(255,255,255,0.5)",
    underlay: "#ffffff",
    underlay_width: 5.0,
    stroke: "#0099ff",
    stroke_width: 3.0,
};

/// Ordered collection of desk markers.
#[derive(Debug, Clone, Default)]
pub struct DeskLayer {
    markers: Vec<DeskMarker>,
}

impl DeskLayer {
    /// Build one marker per record, in input order.
    #[must_use]
    pub fn build(desks: &[DeskRecord]) -> Self {
        let markers = desks
            .iter()
            .zip(1_u32..)
            .map(|(desk, desk_id)| DeskMarker {
                desk_id,
                status: desk.status.clone(),
                center: desk.position,
                radius: MARKER_RADIUS,
            })
            .collect();
        Self { markers }
    }

    /// Markers in draw order.
    #[must_use]
    pub fn markers(&self) -> &[DeskMarker] {
        &self.markers
    }

    /// Look up a marker by its desk id.
    #[must_use]
    pub fn get(&self, desk_id: u32) -> Option<&DeskMarker> {
        let index = usize::try_from(desk_id.checked_sub(1)?).unwrap_or(usize::MAX);
        self.markers.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Number of markers whose desk is available.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.markers.iter().filter(|m| m.is_available()).count()
    }
}
