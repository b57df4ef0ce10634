//! Visibility heuristic gating per-frame work.
//!
//! A widget scrolled far off screen should cost nothing: the frame loop
//! skips everything while the element sits outside the viewport plus a
//! margin. The verdict is cached and recomputed only on scroll/resize
//! notifications, never per frame.

use crate::bootstrap::Rect;

#[derive(Debug, Clone)]
pub struct Relevance {
    margin: f32,
    relevant: bool,
}

impl Relevance {
    /// How far beyond the viewport the widget keeps rendering, in logical
    /// pixels.
    pub const DEFAULT_MARGIN: f32 = 200.0;

    #[must_use]
    pub fn new() -> Self {
        Self {
            margin: Self::DEFAULT_MARGIN,
            // Irrelevant until the first measurement after mount.
            relevant: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_relevant(&self) -> bool {
        self.relevant
    }

    /// Recompute the verdict from fresh rects.
    pub fn update(&mut self, element: Rect, viewport: Rect) -> bool {
        let m = self.margin;
        self.relevant = element.x < viewport.x + viewport.width + m
            && element.x + element.width > viewport.x - m
            && element.y < viewport.y + viewport.height + m
            && element.y + element.height > viewport.y - m;
        self.relevant
    }
}

impl Default for Relevance {
    fn default() -> Self {
        Self::new()
    }
}
