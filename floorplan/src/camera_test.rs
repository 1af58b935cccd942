#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn floor_camera() -> Camera {
    // 1024 px longest side -> max resolution 4.0, resolution 2.0 at zoom 1.
    Camera::for_extent(&Extent::from_size(1024.0, 768.0))
}

fn viewport() -> Size {
    Size::new(800.0, 600.0)
}

// --- Point / Size ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn size_center_is_half() {
    assert_eq!(Size::new(800.0, 600.0).center(), Point::new(400.0, 300.0));
}

// --- Construction ---

#[test]
fn default_zoom_range_is_one_to_three() {
    let cam = Camera::default();
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.min_zoom, 1.0);
    assert_eq!(cam.max_zoom, 3.0);
}

#[test]
fn for_extent_centers_on_extent() {
    let cam = floor_camera();
    assert_eq!(cam.center, Point::new(512.0, 384.0));
}

#[test]
fn for_extent_derives_resolution_from_longest_side() {
    let cam = floor_camera();
    assert!(approx_eq(cam.max_resolution, 4.0));
    assert!(approx_eq(cam.resolution(), 2.0));
}

#[test]
fn for_empty_extent_falls_back_to_unit_resolution() {
    let cam = Camera::for_extent(&Extent::from_size(0.0, 0.0));
    assert_eq!(cam.max_resolution, 1.0);
}

#[test]
fn each_zoom_level_halves_resolution() {
    let mut cam = floor_camera();
    cam.set_zoom(2.0);
    assert!(approx_eq(cam.resolution(), 1.0));
    cam.set_zoom(3.0);
    assert!(approx_eq(cam.resolution(), 0.5));
}

// --- set_zoom ---

#[test]
fn set_zoom_clamps_to_range() {
    let mut cam = floor_camera();
    cam.set_zoom(10.0);
    assert_eq!(cam.zoom, 3.0);
    cam.set_zoom(-4.0);
    assert_eq!(cam.zoom, 1.0);
}

// --- Conversions ---

#[test]
fn center_maps_to_viewport_center() {
    let cam = floor_camera();
    let screen = cam.world_to_screen(cam.center, viewport());
    assert!(point_approx_eq(screen, Point::new(400.0, 300.0)));
}

#[test]
fn world_y_axis_points_up_on_screen() {
    let cam = floor_camera();
    let above = cam.world_to_screen(Point::new(512.0, 484.0), viewport());
    // 100 world units up at resolution 2 -> 50 px higher on screen.
    assert!(point_approx_eq(above, Point::new(400.0, 250.0)));
}

#[test]
fn screen_to_world_inverts_world_to_screen() {
    let cam = floor_camera();
    let world = Point::new(130.0, 700.0);
    let back = cam.screen_to_world(cam.world_to_screen(world, viewport()), viewport());
    assert!(point_approx_eq(back, world));
}

#[test]
fn world_dist_to_screen_divides_by_resolution() {
    let cam = floor_camera();
    assert!(approx_eq(cam.world_dist_to_screen(15.0), 7.5));
}

// --- Pan ---

#[test]
fn pan_right_moves_center_left() {
    let mut cam = floor_camera();
    cam.pan_by_screen(10.0, 0.0);
    assert!(approx_eq(cam.center.x, 492.0));
    assert!(approx_eq(cam.center.y, 384.0));
}

#[test]
fn pan_down_moves_center_up() {
    let mut cam = floor_camera();
    cam.pan_by_screen(0.0, 10.0);
    assert!(approx_eq(cam.center.y, 404.0));
}

// --- zoom_at ---

#[test]
fn zoom_at_keeps_anchor_under_pointer() {
    let mut cam = floor_camera();
    let pointer = Point::new(100.0, 500.0);
    let before = cam.screen_to_world(pointer, viewport());
    assert!(cam.zoom_at(pointer, viewport(), 1.0));
    let after = cam.screen_to_world(pointer, viewport());
    assert!(point_approx_eq(before, after));
    assert_eq!(cam.zoom, 2.0);
}

#[test]
fn zoom_at_viewport_center_keeps_center() {
    let mut cam = floor_camera();
    let center = cam.center;
    assert!(cam.zoom_at(viewport().center(), viewport(), 1.0));
    assert!(point_approx_eq(cam.center, center));
}

#[test]
fn zoom_at_limit_reports_no_change() {
    let mut cam = floor_camera();
    let center = cam.center;
    assert!(!cam.zoom_at(Point::new(10.0, 10.0), viewport(), -1.0));
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.center, center);
}
