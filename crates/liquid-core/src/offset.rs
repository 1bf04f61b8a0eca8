use glam::DVec2;

/// Page-space position of the canvas origin.
///
/// Recomputed on resize, scroll and orientation change; the latest value
/// wins, with no smoothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CanvasOffset {
    pub left: f64,
    pub top: f64,
}

impl CanvasOffset {
    /// From a viewport-relative bounding box plus the current scroll position.
    #[inline]
    pub fn from_client_rect(rect_left: f64, rect_top: f64, scroll: DVec2) -> Self {
        Self {
            left: rect_left + scroll.x,
            top: rect_top + scroll.y,
        }
    }

    #[inline]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.left, self.top)
    }

    /// Page coordinates to canvas-local coordinates.
    #[inline]
    pub fn to_local(&self, page: DVec2) -> DVec2 {
        page - self.origin()
    }
}
