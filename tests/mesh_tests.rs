// Host-side tests for the pill mesh generator.

use glam::DVec2;
use liquid_core::mesh::{canvas_size, perimeter};
use liquid_core::{MeshPair, SimParams};

fn close(a: DVec2, b: DVec2) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn default_layout_has_fourteen_points_per_layer() {
    let params = SimParams::default();
    let meshes = MeshPair::build(150.0, 48.0, &params);
    assert_eq!(params.points, 6);
    assert_eq!(meshes.background.len(), 2 * (params.points - 1) + 4);
    assert_eq!(meshes.background.len(), 14);
    assert_eq!(meshes.foreground.len(), meshes.background.len());
}

#[test]
fn layers_share_rest_and_differ_in_level() {
    let meshes = MeshPair::build(150.0, 48.0, &SimParams::default());
    for (a, b) in meshes
        .background
        .points()
        .iter()
        .zip(meshes.foreground.points())
    {
        assert_eq!(a.rest(), b.rest());
        assert_eq!(a.level(), 1);
        assert_eq!(b.level(), 2);
        assert_eq!(a.position, a.rest());
        assert_eq!(a.velocity, DVec2::ZERO);
    }
}

#[test]
fn perimeter_follows_pill_outline() {
    let pts = perimeter(150.0, 48.0, 6);
    // top edge starts half a height in, stepping (w - h) / points
    assert!(close(pts[0], DVec2::new(41.0, 0.0)));
    assert!(close(pts[4], DVec2::new(109.0, 0.0)));
    // right end overhangs the box by h / 10
    assert!(close(pts[5], DVec2::new(154.8, 12.0)));
    assert!(close(pts[6], DVec2::new(154.8, 36.0)));
    // bottom edge runs back right to left
    assert!(close(pts[7], DVec2::new(109.0, 48.0)));
    assert!(close(pts[11], DVec2::new(41.0, 48.0)));
}

#[test]
fn perimeter_closes_on_the_left() {
    let pts = perimeter(150.0, 48.0, 6);
    let n = pts.len();
    assert!(close(pts[n - 2], DVec2::new(-4.8, 36.0)));
    assert!(close(pts[n - 1], DVec2::new(-4.8, 12.0)));
}

#[test]
fn ends_extend_past_the_button_box() {
    let pts = perimeter(150.0, 48.0, 6);
    let min_x = pts.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = pts.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    assert!(min_x < 0.0);
    assert!(max_x > 150.0);
    assert!(pts.iter().all(|p| p.y >= 0.0 && p.y <= 48.0));
}

#[test]
fn rest_positions_are_offset_by_padding() {
    let params = SimParams::default();
    let raw = perimeter(150.0, 48.0, params.points);
    let meshes = MeshPair::build(150.0, 48.0, &params);
    for (r, p) in raw.iter().zip(meshes.background.points()) {
        assert!(close(*r + DVec2::splat(params.padding), p.rest()));
    }
    // padding keeps the bulge inside the canvas
    assert!(meshes.background.points().iter().all(|p| p.rest().x > 0.0));
}

#[test]
fn single_subdivision_leaves_only_the_ends() {
    assert_eq!(perimeter(100.0, 40.0, 1).len(), 4);
    assert_eq!(perimeter(100.0, 40.0, 3).len(), 8);
}

#[test]
fn canvas_adds_padding_on_both_sides() {
    assert_eq!(canvas_size(150.0, 48.0, 30.0), DVec2::new(210.0, 108.0));
}
