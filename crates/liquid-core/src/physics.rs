//! One-frame integration of a mesh point.
//!
//! Order per frame: spring toward rest, pointer impulse, damping, then
//! position += velocity. There is no position clamping; stability comes from
//! `0 < damping < 1` and the bounded spring/impulse terms.

use crate::config::SimParams;
use crate::mesh::{Mesh, Point};
use crate::pointer::PointerState;

/// 1 with the pointer on the point, falling linearly to 0 at `pointer_dist`.
#[inline]
pub fn influence(distance: f64, pointer_dist: f64) -> f64 {
    1.0 - (distance / pointer_dist).min(1.0)
}

/// Pointer sits past the point on this axis and keeps moving that way.
#[inline]
fn pushing(direction: i32, pointer: f64, point: f64) -> bool {
    (direction > 0 && pointer > point) || (direction < 0 && pointer < point)
}

pub fn advance(point: &Point, pointer: &PointerState, params: &SimParams) -> Point {
    let mut next = *point;
    let rest = point.rest();

    let stiffness = params.viscosity * point.level() as f64;
    next.velocity += (rest - next.position) / stiffness;

    let rel = pointer.relative_position;
    let weight = influence(rest.distance(rel), params.pointer_dist);
    if weight > 0.0 && weight < 1.0 {
        let multiplier = params.influence_multiplier(pointer.is_touch);
        let impulse = |speed: f64| (speed / params.speed_divisor) * weight * multiplier;
        // Replaces the spring contribution on that axis for this frame.
        if pushing(pointer.direction.x, rel.x, next.position.x) {
            next.velocity.x = impulse(pointer.speed.x);
        }
        if pushing(pointer.direction.y, rel.y, next.position.y) {
            next.velocity.y = impulse(pointer.speed.y);
        }
    }

    next.velocity *= 1.0 - params.damping;
    next.position += next.velocity;
    next
}

pub fn advance_mesh(mesh: &mut Mesh, pointer: &PointerState, params: &SimParams) {
    for p in mesh.points_mut() {
        *p = advance(p, pointer, params);
    }
}
