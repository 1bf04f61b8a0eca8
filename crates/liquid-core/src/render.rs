//! Backend-agnostic drawing of the two mesh layers.
//!
//! The renderer only emits path and fill commands through [`Surface`]; the
//! web front end implements it on a 2D canvas context.

use crate::config::GradientSizing;
use crate::mesh::{Mesh, MeshPair};
use crate::offset::CanvasOffset;
use glam::DVec2;

/// Radial gradient filled from `outer_color` at `outer_radius` to
/// `inner_color` at the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialGradient<'a> {
    pub center: DVec2,
    pub outer_radius: f64,
    pub outer_color: &'a str,
    pub inner_color: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint<'a> {
    Solid(&'a str),
    Radial(RadialGradient<'a>),
}

pub trait Surface {
    fn clear(&mut self, size: DVec2);
    fn begin_path(&mut self);
    fn move_to(&mut self, p: DVec2);
    fn bezier_curve_to(&mut self, c1: DVec2, c2: DVec2, end: DVec2);
    fn close_path(&mut self);
    fn fill(&mut self, paint: &Paint<'_>);
}

/// Colors for one frame.
#[derive(Clone, Copy, Debug)]
pub struct Palette<'a> {
    pub background: &'a str,
    pub gradient_inner: &'a str,
    pub gradient_outer: &'a str,
}

/// Pointer position in canvas space, clamped to the canvas.
#[inline]
pub fn gradient_focus(pointer_page: DVec2, offset: CanvasOffset, canvas: DVec2) -> DVec2 {
    offset
        .to_local(pointer_page)
        .clamp(DVec2::ZERO, canvas.max(DVec2::ZERO))
}

/// 0 at the canvas center, 1 on the circle through the corners.
#[inline]
pub fn normalized_center_distance(focus: DVec2, canvas: DVec2) -> f64 {
    let half = canvas * 0.5;
    let half_diagonal = half.length();
    if half_diagonal <= 0.0 {
        return 0.0;
    }
    focus.distance(half) / half_diagonal
}

pub fn foreground_gradient<'a>(
    pointer_page: DVec2,
    offset: CanvasOffset,
    canvas: DVec2,
    sizing: &GradientSizing,
    palette: &Palette<'a>,
) -> RadialGradient<'a> {
    let center = gradient_focus(pointer_page, offset, canvas);
    let distance = normalized_center_distance(center, canvas);
    RadialGradient {
        center,
        outer_radius: sizing.outer_radius(distance),
        outer_color: palette.gradient_outer,
        inner_color: palette.gradient_inner,
    }
}

/// Emits one closed blob through the mesh.
///
/// Each segment is a cubic whose first control point is the current point
/// and whose second control point and end both sit on the midpoint to the
/// next point. Only the starting point lies exactly on the outline.
/// Returns false, emitting nothing, for an empty mesh.
pub fn trace_mesh<S: Surface + ?Sized>(surface: &mut S, mesh: &mut Mesh) -> bool {
    let n = mesh.len();
    if n == 0 {
        return false;
    }
    let points = mesh.points_mut();
    surface.begin_path();
    surface.move_to(points[0].position);
    for i in 0..n {
        let next = points[(i + 1) % n].position;
        let p = &mut points[i];
        p.control = (p.position + next) * 0.5;
        surface.bezier_curve_to(p.position, p.control, p.control);
    }
    surface.close_path();
    true
}

pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    meshes: &mut MeshPair,
    pointer_page: DVec2,
    offset: CanvasOffset,
    canvas: DVec2,
    sizing: &GradientSizing,
    palette: &Palette<'_>,
) {
    surface.clear(canvas);
    let gradient = foreground_gradient(pointer_page, offset, canvas, sizing, palette);

    if trace_mesh(surface, &mut meshes.background) {
        surface.fill(&Paint::Solid(palette.background));
    }
    if trace_mesh(surface, &mut meshes.foreground) {
        surface.fill(&Paint::Radial(gradient));
    }
}
