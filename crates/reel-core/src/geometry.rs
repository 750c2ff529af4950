//! Geometry probe for the scroll container.
//!
//! Extents are invalidated by adding or removing items, so every stage
//! re-probes after a mutation rather than caching a snapshot across it.

use crate::config::Orientation;

/// Scroll geometry along the active axis.
///
/// Once at least one item is rendered, `content_extent >= viewport_extent`
/// is expected to hold; before that the content extent may be zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    /// Current scroll offset from the leading edge.
    pub offset: f32,
    /// Visible extent of the container.
    pub viewport_extent: f32,
    /// Total extent of the rendered content.
    pub content_extent: f32,
}

impl ScrollMetrics {
    /// Distance between the trailing edge of the viewport and the trailing
    /// edge of the content. Negative when the viewport overshoots.
    pub fn trailing_gap(&self) -> f32 {
        self.content_extent - (self.offset + self.viewport_extent)
    }
}

/// Scroll container the engine reads geometry from and writes offsets to.
///
/// Horizontal orientation maps to width / scroll-left / scroll-width; the
/// vertical analogs apply otherwise. Extents must reflect the latest layout
/// pass, including any renderer mutations made earlier in the same event.
pub trait ScrollContainer {
    /// Current scroll offset along the given axis.
    fn offset(&self, orientation: Orientation) -> f32;

    /// Writes the scroll offset along the given axis. Implementations may
    /// clamp into the scrollable range.
    fn set_offset(&mut self, orientation: Orientation, offset: f32);

    /// Visible extent of the container along the given axis.
    fn viewport_extent(&self, orientation: Orientation) -> f32;

    /// Total extent of the rendered content along the given axis.
    fn content_extent(&self, orientation: Orientation) -> f32;
}

/// Reads a fresh [`ScrollMetrics`] snapshot for the active axis.
///
/// Pure and uncached; call again after any mutation that could change the
/// content extent.
pub fn probe<C: ScrollContainer + ?Sized>(container: &C, orientation: Orientation) -> ScrollMetrics {
    let metrics = ScrollMetrics {
        offset: container.offset(orientation),
        viewport_extent: container.viewport_extent(orientation),
        content_extent: container.content_extent(orientation),
    };
    debug_assert!(
        metrics.viewport_extent >= 0.0 && metrics.content_extent >= 0.0,
        "container reported negative extents: {metrics:?}"
    );
    metrics
}

/// Adjusts the scroll offset by `delta`, clamping at the leading edge.
pub fn nudge_offset<C: ScrollContainer + ?Sized>(
    container: &mut C,
    orientation: Orientation,
    delta: f32,
) {
    let offset = (container.offset(orientation) + delta).max(0.0);
    container.set_offset(orientation, offset);
}
