//! Scroll position -> morph progress.

use crate::constants::{SCROLL_TRIGGER_END, SCROLL_TRIGGER_START};
use crate::easing::clamp01;

/// Smallest denominator allowed in the progress formula.
pub const MIN_DENOMINATOR: f32 = 1e-3;

/// Vertical layout of the tracked section relative to the viewport, in CSS px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub height: f32,
}

/// Where the morph starts and finishes along the scroll.
///
/// Progress is 0 while the section top is below `start × viewport height` and
/// reaches 1 once `end × section height` has scrolled above the viewport top.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTrigger {
    pub start: f32,
    pub end: f32,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self {
            start: SCROLL_TRIGGER_START,
            end: SCROLL_TRIGGER_END,
        }
    }
}

/// Clamped progress for a layout snapshot. Never NaN.
pub fn scroll_progress(rect: SectionRect, viewport_height: f32, trigger: ScrollTrigger) -> f32 {
    let start_line = viewport_height * trigger.start;
    let span = start_line + rect.height * trigger.end;
    let raw = (start_line - rect.top) / span.max(MIN_DENOMINATOR);
    clamp01(raw)
}

/// Holds the latest sampled progress. Written from scroll/resize callbacks,
/// read once per animation tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressTracker {
    pub trigger: ScrollTrigger,
    progress: f32,
}

impl ProgressTracker {
    pub fn new(trigger: ScrollTrigger) -> Self {
        Self {
            trigger,
            progress: 0.0,
        }
    }

    /// Recompute progress from the section's current layout.
    pub fn update(&mut self, rect: SectionRect, viewport_height: f32) -> f32 {
        self.progress = scroll_progress(rect, viewport_height, self.trigger);
        self.progress
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }
}
