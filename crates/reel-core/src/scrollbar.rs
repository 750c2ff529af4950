//! Scrollbar synchronization.
//!
//! Derives thumb geometry and the reached-trailing-end latch from raw
//! scroll metrics. Ratios are computed at whole-percent granularity and the
//! latch comparison is done on the integer percents, so rounding near the
//! trailing edge cannot make the latch flicker.

use crate::geometry::ScrollMetrics;

/// Scrollbar thumb geometry plus the trailing-end latch.
///
/// `thumb_ratio` is the thumb size as a fraction of the track,
/// `thumb_offset_ratio` its position. `reached_trailing_end` is hysteresis:
/// it is set only when the thumb visually touches the trailing edge with
/// every item loaded, and cleared only when the offset returns to zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollbarState {
    /// Thumb size as a fraction of the track, percent granularity.
    pub thumb_ratio: f32,
    /// Thumb position as a fraction of the track, percent granularity.
    pub thumb_offset_ratio: f32,
    /// Latched once the trailing edge has been reached with all items
    /// loaded; cleared when scrolled back to the leading edge.
    pub reached_trailing_end: bool,
    /// Whether the host should show the thumb. Forced off when the content
    /// fits entirely within the viewport, regardless of configuration.
    pub visible: bool,
}

impl ScrollbarState {
    /// State before any item is rendered: full-track thumb at the origin.
    pub fn empty() -> Self {
        Self {
            thumb_ratio: 1.0,
            thumb_offset_ratio: 0.0,
            reached_trailing_end: false,
            visible: false,
        }
    }

    /// Recomputes thumb geometry and updates the latch from fresh metrics.
    ///
    /// A zero content extent (nothing rendered yet) yields the defined
    /// empty state rather than propagating NaN.
    pub fn update(
        &mut self,
        metrics: &ScrollMetrics,
        loaded_count: usize,
        total_item_count: usize,
        scrollbar_enabled: bool,
    ) {
        if metrics.content_extent <= 0.0 {
            *self = Self::empty();
            return;
        }

        let thumb_pct = percent_floor(metrics.viewport_extent / metrics.content_extent);
        let offset_pct = percent_ceil(metrics.offset / metrics.content_extent);

        if metrics.offset == 0.0 {
            self.reached_trailing_end = false;
        } else if thumb_pct + offset_pct == 100 && loaded_count == total_item_count {
            self.reached_trailing_end = true;
        }

        self.thumb_ratio = thumb_pct as f32 / 100.0;
        self.thumb_offset_ratio = offset_pct as f32 / 100.0;
        self.visible = scrollbar_enabled && thumb_pct < 100;
    }
}

impl Default for ScrollbarState {
    fn default() -> Self {
        Self::empty()
    }
}

fn percent_floor(ratio: f32) -> u32 {
    ((ratio * 100.0).floor() as i64).clamp(0, 100) as u32
}

fn percent_ceil(ratio: f32) -> u32 {
    ((ratio * 100.0).ceil() as i64).clamp(0, 100) as u32
}
