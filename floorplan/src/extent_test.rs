#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn from_size_starts_at_origin() {
    let e = Extent::from_size(800.0, 600.0);
    assert_eq!(e.to_array(), [0.0, 0.0, 800.0, 600.0]);
}

#[test]
fn width_and_height_match_image_size() {
    let e = Extent::from_size(1024.0, 512.0);
    assert_eq!(e.width(), 1024.0);
    assert_eq!(e.height(), 512.0);
}

#[test]
fn center_is_midpoint() {
    let e = Extent::from_size(800.0, 600.0);
    assert_eq!(e.center(), Point::new(400.0, 300.0));
}

#[test]
fn zero_sized_image_has_degenerate_extent() {
    let e = Extent::from_size(0.0, 0.0);
    assert_eq!(e.width(), 0.0);
    assert_eq!(e.center(), Point::new(0.0, 0.0));
}

#[test]
fn pixel_projection_carries_extent() {
    let e = Extent::from_size(640.0, 480.0);
    let p = Projection::pixels(e);
    assert_eq!(p.units, Units::Pixels);
    assert_eq!(p.extent, e);
    assert_eq!(p.code, crate::consts::PROJECTION_CODE);
}
