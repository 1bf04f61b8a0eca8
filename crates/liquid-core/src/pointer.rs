//! Mouse and touch input folded into a single pointer.
//!
//! Position and direction follow every input event. Speed does not: it is
//! sampled on a fixed wall-clock interval by `sample_speed`, which keeps the
//! estimate independent of both event rate and frame rate.

use crate::offset::CanvasOffset;
use glam::{DVec2, IVec2};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Page coordinates.
    pub position: DVec2,
    /// Position at the previous speed sample.
    pub last_position: DVec2,
    /// Per-axis sign of the latest movement, each in {-1, 0, 1}.
    pub direction: IVec2,
    /// Per-axis displacement over the last sampling interval.
    pub speed: DVec2,
    pub is_touch: bool,
    /// `position` in canvas-local coordinates.
    pub relative_position: DVec2,
}

#[inline]
pub fn axis_direction(previous: f64, next: f64) -> i32 {
    if previous < next {
        1
    } else if previous > next {
        -1
    } else {
        0
    }
}

#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    state: PointerState,
    offset: CanvasOffset,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> &PointerState {
        &self.state
    }

    #[inline]
    pub fn offset(&self) -> CanvasOffset {
        self.offset
    }

    /// Mouse movement; dropped while a touch session is active so synthetic
    /// mouse events do not fight the touch position.
    pub fn mouse_move(&mut self, page: DVec2) -> bool {
        if self.state.is_touch {
            return false;
        }
        self.move_to(page);
        true
    }

    pub fn touch_start(&mut self, first_touch: Option<DVec2>) {
        self.state.is_touch = true;
        if let Some(page) = first_touch {
            self.move_to(page);
        }
    }

    pub fn touch_move(&mut self, first_touch: Option<DVec2>) {
        if let Some(page) = first_touch {
            self.move_to(page);
        }
    }

    /// Touch end or cancel.
    pub fn touch_end(&mut self) {
        self.state.is_touch = false;
        self.state.speed = DVec2::ZERO;
    }

    /// Sampling tick: speed becomes the displacement since the previous tick.
    pub fn sample_speed(&mut self) {
        self.state.speed = self.state.position - self.state.last_position;
        self.state.last_position = self.state.position;
    }

    pub fn set_offset(&mut self, offset: CanvasOffset) {
        self.offset = offset;
        self.state.relative_position = offset.to_local(self.state.position);
    }

    fn move_to(&mut self, page: DVec2) {
        let prev = self.state.position;
        self.state.direction = IVec2::new(
            axis_direction(prev.x, page.x),
            axis_direction(prev.y, page.y),
        );
        self.state.position = page;
        self.state.relative_position = self.offset.to_local(page);
    }
}
