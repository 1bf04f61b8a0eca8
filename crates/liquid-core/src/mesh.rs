//! Pill-shaped point meshes.
//!
//! Both layers are laid out from the same perimeter; they differ only in
//! stiffness level. Rest positions are fixed once a mesh is built.

use crate::config::SimParams;
use crate::constants::{LEVEL_BACKGROUND, LEVEL_FOREGROUND};
use glam::DVec2;
use smallvec::SmallVec;

/// Inline capacity covers the default layout (`2 * (6 - 1) + 4` points).
const MESH_INLINE: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Curve control point, refreshed by the renderer each frame.
    pub control: DVec2,
    rest: DVec2,
    level: u8,
}

impl Point {
    pub fn new(rest: DVec2, level: u8) -> Self {
        Self {
            position: rest,
            velocity: DVec2::ZERO,
            control: DVec2::ZERO,
            rest,
            level,
        }
    }

    #[inline]
    pub fn rest(&self) -> DVec2 {
        self.rest
    }

    #[inline]
    pub fn level(&self) -> u8 {
        self.level
    }
}

/// Closed outline; the last point connects back to the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    points: SmallVec<[Point; MESH_INLINE]>,
}

impl Mesh {
    pub fn from_rest(rest: &[DVec2], level: u8) -> Self {
        Self {
            points: rest.iter().map(|&r| Point::new(r, level)).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn points_mut(&mut self) -> &mut [Point] {
        &mut self.points
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// Background (level 1) and foreground (level 2) layers sharing rest positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshPair {
    pub background: Mesh,
    pub foreground: Mesh,
}

impl MeshPair {
    pub fn build(width: f64, height: f64, params: &SimParams) -> Self {
        let pad = DVec2::splat(params.padding);
        let rest: Vec<DVec2> = perimeter(width, height, params.points)
            .into_iter()
            .map(|p| p + pad)
            .collect();
        log::debug!(
            "[mesh] built {} points per layer for {:.0}x{:.0}",
            rest.len(),
            width,
            height
        );
        Self {
            background: Mesh::from_rest(&rest, LEVEL_BACKGROUND),
            foreground: Mesh::from_rest(&rest, LEVEL_FOREGROUND),
        }
    }

    /// Layers in draw order.
    pub fn layers_mut(&mut self) -> [&mut Mesh; 2] {
        [&mut self.background, &mut self.foreground]
    }

    pub fn clear(&mut self) {
        self.background.clear();
        self.foreground.clear();
    }
}

/// Unpadded pill outline, clockwise from the top edge.
///
/// The flat edges get `points - 1` interior points each. Each end gets two
/// corner points at a quarter and three quarters of the height, pushed
/// `height / 10` past the side so the rounded end bleeds outside the box.
pub fn perimeter(width: f64, height: f64, points: usize) -> Vec<DVec2> {
    let mut out = Vec::with_capacity(2 * points.saturating_sub(1) + 4);
    let start = height / 2.0;
    let step = (width - height) / points as f64;
    let edge_x = |j: usize| start + step * j as f64;
    let overhang = height / 10.0;
    let (upper, lower) = (height / 4.0, height * 3.0 / 4.0);

    for j in 1..points {
        out.push(DVec2::new(edge_x(j), 0.0));
    }
    out.push(DVec2::new(width + overhang, upper));
    out.push(DVec2::new(width + overhang, lower));
    for j in (1..points).rev() {
        out.push(DVec2::new(edge_x(j), height));
    }
    out.push(DVec2::new(-overhang, lower));
    out.push(DVec2::new(-overhang, upper));
    out
}

/// Backing size of the canvas that hosts a `width` x `height` button.
#[inline]
pub fn canvas_size(width: f64, height: f64, padding: f64) -> DVec2 {
    DVec2::new(width + 2.0 * padding, height + 2.0 * padding)
}
