#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Camera defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan_x, 0.0);
    assert_eq!(cam.pan_y, 0.0);
    assert_eq!(cam.zoom, 1.0);
}

// --- screen_to_world / world_to_screen ---

#[test]
fn screen_to_world_identity() {
    let cam = Camera::default();
    let world = cam.screen_to_world(Point::new(50.0, 75.0));
    assert!(point_approx_eq(world, Point::new(50.0, 75.0)));
}

#[test]
fn screen_to_world_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 2.0 };
    let world = cam.screen_to_world(Point::new(20.0, 10.0));
    assert!(point_approx_eq(world, Point::new(0.0, 0.0)));
    let world = cam.screen_to_world(Point::new(120.0, 50.0));
    assert!(point_approx_eq(world, Point::new(50.0, 20.0)));
}

#[test]
fn world_to_screen_with_pan_and_zoom() {
    let cam = Camera { pan_x: 20.0, pan_y: 10.0, zoom: 3.0 };
    let screen = cam.world_to_screen(Point::new(5.0, 5.0));
    assert!(point_approx_eq(screen, Point::new(35.0, 25.0)));
}

#[test]
fn conversions_are_inverse() {
    let cam = Camera { pan_x: 13.7, pan_y: -42.3, zoom: 0.75 };
    let world = Point::new(333.3, -999.9);
    assert!(point_approx_eq(cam.screen_to_world(cam.world_to_screen(world)), world));
}

// --- wheel_zoom_factor ---

#[test]
fn wheel_up_zooms_in() {
    assert_eq!(wheel_zoom_factor(-120.0), 1.1);
}

#[test]
fn wheel_down_zooms_out() {
    assert_eq!(wheel_zoom_factor(120.0), 0.9);
}

#[test]
fn wheel_zero_delta_zooms_out() {
    assert_eq!(wheel_zoom_factor(0.0), 0.9);
}

// --- zoom_at ---

#[test]
fn zoom_at_keeps_anchor_fixed() {
    let mut cam = Camera { pan_x: 30.0, pan_y: -20.0, zoom: 1.5 };
    let anchor = Point::new(400.0, 250.0);
    let before = cam.screen_to_world(anchor);
    assert!(cam.zoom_at(anchor, 1.1));
    let after = cam.screen_to_world(anchor);
    assert!(point_approx_eq(before, after));
    assert!(approx_eq(cam.zoom, 1.65));
}

#[test]
fn zoom_at_origin_leaves_pan_at_origin() {
    let mut cam = Camera::default();
    cam.zoom_at(Point::new(0.0, 0.0), 0.9);
    assert!(approx_eq(cam.pan_x, 0.0));
    assert!(approx_eq(cam.pan_y, 0.0));
    assert!(approx_eq(cam.zoom, 0.9));
}

#[test]
fn zoom_at_matches_pointer_anchored_formula() {
    let mut cam = Camera { pan_x: 10.0, pan_y: 20.0, zoom: 1.0 };
    cam.zoom_at(Point::new(110.0, 220.0), 1.1);
    // pan' = m - (m - pan) * ratio
    assert!(approx_eq(cam.pan_x, 110.0 - 100.0 * 1.1));
    assert!(approx_eq(cam.pan_y, 220.0 - 200.0 * 1.1));
}

#[test]
fn zoom_at_clamps_to_max() {
    let mut cam = Camera { pan_x: 0.0, pan_y: 0.0, zoom: 7.9 };
    assert!(cam.zoom_at(Point::new(0.0, 0.0), 1.1));
    assert_eq!(cam.zoom, MAX_ZOOM);
    assert!(!cam.zoom_at(Point::new(0.0, 0.0), 1.1));
    assert_eq!(cam.zoom, MAX_ZOOM);
}

#[test]
fn zoom_at_clamps_to_min() {
    let mut cam = Camera { pan_x: 5.0, pan_y: 5.0, zoom: MIN_ZOOM };
    assert!(!cam.zoom_at(Point::new(100.0, 100.0), 0.9));
    assert_eq!(cam.zoom, MIN_ZOOM);
    assert_eq!(cam.pan_x, 5.0);
}

// --- pan ---

#[test]
fn pan_by_accumulates() {
    let mut cam = Camera::default();
    cam.pan_by(10.0, -5.0);
    cam.pan_by(2.5, 1.0);
    assert!(approx_eq(cam.pan_x, 12.5));
    assert!(approx_eq(cam.pan_y, -4.0));
}

// --- css_transform ---

#[test]
fn css_transform_identity() {
    assert_eq!(Camera::default().css_transform(), "translate(0px, 0px) scale(1)");
}

#[test]
fn css_transform_with_pan_and_zoom() {
    let cam = Camera { pan_x: 12.5, pan_y: -3.0, zoom: 1.1 };
    assert_eq!(cam.css_transform(), "translate(12.5px, -3px) scale(1.1)");
}
