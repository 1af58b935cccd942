use super::*;
use crate::desk::DeskRecord;

fn layer() -> DeskLayer {
    DeskLayer::build(&[
        DeskRecord::new(100.0, 100.0, "Available"),
        DeskRecord::new(300.0, 100.0, "Occupied"),
        // Overlaps the first desk on its right side.
        DeskRecord::new(120.0, 100.0, "Reserved"),
    ])
}

#[test]
fn empty_space_hits_nothing() {
    let layer = layer();
    assert!(hit_test(Point::new(500.0, 500.0), &layer).is_none());
}

#[test]
fn hits_single_marker() {
    let layer = layer();
    let hit = hit_test(Point::new(305.0, 95.0), &layer);
    assert_eq!(hit.map(|m| m.desk_id), Some(2));
}

#[test]
fn overlap_prefers_topmost() {
    let layer = layer();
    let hit = hit_test(Point::new(110.0, 100.0), &layer);
    assert_eq!(hit.map(|m| m.desk_id), Some(3));
}

#[test]
fn non_overlapping_part_of_lower_marker_is_hit() {
    let layer = layer();
    let hit = hit_test(Point::new(90.0, 100.0), &layer);
    assert_eq!(hit.map(|m| m.desk_id), Some(1));
}

#[test]
fn empty_layer_never_hits() {
    let layer = DeskLayer::build(&[]);
    assert!(hit_test(Point::new(0.0, 0.0), &layer).is_none());
}
