#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn viewport(offset_x: f64, offset_y: f64, scale: f64) -> Viewport {
    Viewport { offset_x, offset_y, scale, ..Viewport::default() }
}

// --- Point / GridPos ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn grid_pos_equality() {
    assert_eq!(GridPos::new(1, 2), GridPos::new(1, 2));
    assert_ne!(GridPos::new(1, 2), GridPos::new(2, 1));
}

// --- Defaults ---

#[test]
fn viewport_default_scale_is_thirty() {
    let vp = Viewport::default();
    assert_eq!(vp.scale, 30.0);
    assert_eq!(vp.offset_x, 0.0);
    assert_eq!(vp.offset_y, 0.0);
}

// --- screen_to_grid ---

#[test]
fn screen_to_grid_at_origin() {
    let vp = viewport(0.0, 0.0, 10.0);
    assert_eq!(vp.screen_to_grid(Point::new(0.0, 0.0)), GridPos::new(0, 0));
    assert_eq!(vp.screen_to_grid(Point::new(9.99, 9.99)), GridPos::new(0, 0));
    assert_eq!(vp.screen_to_grid(Point::new(10.0, 25.0)), GridPos::new(1, 2));
}

#[test]
fn screen_to_grid_floors_negative_coordinates() {
    let vp = viewport(100.0, 100.0, 10.0);
    assert_eq!(vp.screen_to_grid(Point::new(99.0, 95.0)), GridPos::new(-1, -1));
    assert_eq!(vp.screen_to_grid(Point::new(80.0, 79.0)), GridPos::new(-2, -3));
}

#[test]
fn screen_to_grid_respects_offset() {
    let vp = viewport(50.0, -20.0, 30.0);
    assert_eq!(vp.screen_to_grid(Point::new(50.0 + 61.0, -20.0 + 95.0)), GridPos::new(2, 3));
}

// --- grid_to_screen ---

#[test]
fn grid_to_screen_returns_cell_corner() {
    let vp = viewport(400.0, 300.0, 30.0);
    let p = vp.grid_to_screen(GridPos::new(2, -1));
    assert!(point_approx_eq(p, Point::new(460.0, 270.0)));
}

#[test]
fn painted_cell_is_rendered_under_pointer() {
    let vp = viewport(123.4, -56.7, 17.3);
    for &(sx, sy) in &[(0.0, 0.0), (333.3, 211.1), (-40.0, 900.5), (1000.0, -1000.0)] {
        let cell = vp.screen_to_grid(Point::new(sx, sy));
        let corner = vp.grid_to_screen(cell);
        assert!(corner.x <= sx + EPSILON && sx < corner.x + vp.scale + EPSILON, "x {sx} outside cell {cell:?}");
        assert!(corner.y <= sy + EPSILON && sy < corner.y + vp.scale + EPSILON, "y {sy} outside cell {cell:?}");
    }
}

// --- pan ---

#[test]
fn pan_moves_offsets() {
    let mut vp = viewport(10.0, 20.0, 30.0);
    vp.pan(5.0, -7.0);
    assert_eq!(vp.offset_x, 15.0);
    assert_eq!(vp.offset_y, 13.0);
    assert_eq!(vp.scale, 30.0);
}

#[test]
fn pan_shifts_cell_under_fixed_point() {
    let mut vp = viewport(0.0, 0.0, 10.0);
    let p = Point::new(55.0, 55.0);
    assert_eq!(vp.screen_to_grid(p), GridPos::new(5, 5));
    vp.pan(20.0, 0.0);
    assert_eq!(vp.screen_to_grid(p), GridPos::new(3, 5));
}

// --- zoom_at ---

#[test]
fn zoom_at_keeps_anchor_fixed() {
    let mut vp = viewport(400.0, 300.0, 30.0);
    let anchor = Point::new(517.0, 123.0);
    let before = vp.screen_to_grid_f(anchor);
    vp.zoom_at(anchor, 1.1);
    let after = vp.screen_to_grid_f(anchor);
    assert!(point_approx_eq(before, after));
    assert!(approx_eq(vp.scale, 33.0));
}

#[test]
fn zoom_out_keeps_anchor_fixed() {
    let mut vp = viewport(-20.0, 45.0, 30.0);
    let anchor = Point::new(10.0, 10.0);
    let before = vp.screen_to_grid_f(anchor);
    vp.zoom_at(anchor, 0.9);
    assert!(point_approx_eq(before, vp.screen_to_grid_f(anchor)));
    assert!(approx_eq(vp.scale, 27.0));
}

#[test]
fn zoom_at_offset_formula() {
    let mut vp = viewport(100.0, 100.0, 10.0);
    vp.zoom_at(Point::new(200.0, 150.0), 2.0);
    assert!(approx_eq(vp.offset_x, 0.0));
    assert!(approx_eq(vp.offset_y, 50.0));
    assert!(approx_eq(vp.scale, 20.0));
}

#[test]
fn zoom_at_clamps_to_min_scale_and_keeps_anchor() {
    let mut vp = viewport(300.0, 200.0, 3.0);
    let anchor = Point::new(50.0, 80.0);
    let before = vp.screen_to_grid_f(anchor);
    vp.zoom_at(anchor, 0.1);
    assert!(approx_eq(vp.scale, vp.min_scale));
    assert!(point_approx_eq(before, vp.screen_to_grid_f(anchor)));
}

#[test]
fn zoom_at_clamps_to_max_scale() {
    let mut vp = viewport(0.0, 0.0, 390.0);
    vp.zoom_at(Point::new(0.0, 0.0), 10.0);
    assert!(approx_eq(vp.scale, vp.max_scale));
}

#[test]
fn repeated_zoom_out_never_reaches_zero() {
    let mut vp = viewport(0.0, 0.0, 30.0);
    for _ in 0..500 {
        vp.zoom_at(Point::new(10.0, 10.0), 0.9);
    }
    assert!(vp.scale > 0.0);
    assert!(approx_eq(vp.scale, vp.min_scale));
}

#[test]
fn zoom_at_ignores_non_positive_factor() {
    let mut vp = viewport(1.0, 2.0, 30.0);
    vp.zoom_at(Point::new(5.0, 5.0), 0.0);
    vp.zoom_at(Point::new(5.0, 5.0), -1.0);
    vp.zoom_at(Point::new(5.0, 5.0), f64::NAN);
    assert_eq!(vp.scale, 30.0);
    assert_eq!(vp.offset_x, 1.0);
    assert_eq!(vp.offset_y, 2.0);
}

// --- center_on_origin ---

#[test]
fn center_on_origin_uses_half_viewport() {
    let mut vp = Viewport::default();
    vp.center_on_origin(800.0, 600.0);
    assert_eq!(vp.offset_x, 400.0);
    assert_eq!(vp.offset_y, 300.0);
    assert_eq!(vp.screen_to_grid(Point::new(400.0, 300.0)), GridPos::new(0, 0));
    assert_eq!(vp.screen_to_grid(Point::new(399.0, 299.0)), GridPos::new(-1, -1));
}
