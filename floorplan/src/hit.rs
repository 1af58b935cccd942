#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::camera::Point;
use crate::layer::{DeskLayer, DeskMarker};

/// Return the topmost marker under `world_pt`, if any.
///
/// Markers later in the layer are drawn above earlier ones, so they win when
/// circles overlap.
#[must_use]
pub fn hit_test(world_pt: Point, layer: &DeskLayer) -> Option<&DeskMarker> {
    layer.markers().iter().rev().find(|m| m.contains(world_pt))
}

