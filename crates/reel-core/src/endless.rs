//! Endless-mode rotation.
//!
//! Once every item is loaded, endless lists loop by physically relocating a
//! line of rendered items from one end of the window to the other and
//! nudging the scroll offset, so the content appears to continue past both
//! edges. Relocation is pure reordering: handle identity is preserved and
//! the external renderer is never re-invoked.

use crate::config::ListConfig;
use crate::geometry::{self, probe, ScrollContainer, ScrollMetrics};
use crate::window::WindowState;

/// Content must exceed the viewport by this margin before endless mode
/// engages; below it the list behaves as an ordinary bounded display.
pub const ENDLESS_ACTIVATION_MARGIN: f32 = 20.0;

/// Offset compensation applied after a wrap, and the edge-proximity
/// threshold that triggers the leading wrap.
pub const WRAP_NUDGE: f32 = 5.0;

/// Detects edge proximity and rotates whole lines between the window edges.
pub struct EndlessRotator<'a> {
    config: &'a ListConfig,
}

impl<'a> EndlessRotator<'a> {
    pub fn new(config: &'a ListConfig) -> Self {
        Self { config }
    }

    /// Whether the rendered content is long enough for endless wrapping.
    pub fn is_scrollable(&self, metrics: &ScrollMetrics) -> bool {
        metrics.viewport_extent + ENDLESS_ACTIVATION_MARGIN < metrics.content_extent
    }

    /// Whether endless rotation may run at all: endless configured, every
    /// item loaded, and the content scrollable past the margin.
    pub fn is_active<H>(&self, state: &WindowState<H>, metrics: &ScrollMetrics) -> bool {
        self.config.endless
            && state.loaded_count() == self.config.total_item_count
            && self.is_scrollable(metrics)
    }

    /// Leading-edge wrap: when the offset is within [`WRAP_NUDGE`] of the
    /// start, the trailing-most line becomes the new leading line and the
    /// offset is nudged forward. Returns whether a rotation happened.
    pub fn wrap_leading<C, H>(&self, state: &mut WindowState<H>, container: &mut C) -> bool
    where
        C: ScrollContainer,
    {
        let orientation = self.config.orientation;
        let metrics = probe(container, orientation);
        if metrics.offset >= WRAP_NUDGE {
            return false;
        }
        let lines = self.config.items_per_line();
        if !self.can_rotate(state, lines) {
            return false;
        }
        state.rotate_trailing_to_front(lines);
        geometry::nudge_offset(container, orientation, WRAP_NUDGE);
        true
    }

    /// Trailing-edge wrap: the leading-most line becomes the new trailing
    /// line and the offset is nudged back. The caller has already verified
    /// the viewport is at the trailing boundary.
    pub fn wrap_trailing<C, H>(&self, state: &mut WindowState<H>, container: &mut C) -> bool
    where
        C: ScrollContainer,
    {
        let lines = self.config.items_per_line();
        if !self.can_rotate(state, lines) {
            return false;
        }
        state.rotate_leading_to_back(lines);
        geometry::nudge_offset(container, self.config.orientation, -WRAP_NUDGE);
        true
    }

    fn can_rotate<H>(&self, state: &WindowState<H>, lines: usize) -> bool {
        if lines == 0 {
            return false;
        }
        if state.rendered_count() < lines {
            // Should not occur given the window invariants; skip this event
            // and retry on the next one.
            log::warn!(
                "endless rotation skipped: {} rendered < {} per line",
                state.rendered_count(),
                lines
            );
            return false;
        }
        true
    }
}
