//! Layout control: initial fill, full relayout, viewport-fit re-check.
//!
//! A full relayout clears the rendered window, resets every counter, and
//! materializes the initial fill from scratch. Window state deliberately
//! does not survive a relayout; orientation or item-count changes start
//! over.

use crate::config::{ListConfig, Orientation};
use crate::geometry::{probe, ScrollContainer, ScrollMetrics};
use crate::renderer::ItemRenderer;
use crate::window::WindowState;

/// Computes initial fill counts and drives full relayouts.
pub struct LayoutController<'a> {
    config: &'a ListConfig,
}

impl<'a> LayoutController<'a> {
    pub fn new(config: &'a ListConfig) -> Self {
        Self { config }
    }

    /// Number of items to materialize on a fresh layout.
    ///
    /// Horizontal lists fill the viewport width plus the buffer lines. A
    /// vertical list does the same only when the container has an explicit
    /// extent larger than one item; otherwise the container will size
    /// itself to its content and no virtualization is needed, so every
    /// item is loaded.
    pub fn initial_item_count(&self, metrics: &ScrollMetrics) -> usize {
        let total = self.config.total_item_count;
        let lines = self.config.items_per_line();
        if total == 0 || lines == 0 || self.config.item_extent <= 0.0 {
            return 0;
        }
        let fill = |viewport: f32| {
            (viewport / self.config.item_extent).floor() as usize * lines
                + lines * self.config.buffer_multiplier
        };
        let count = match self.config.orientation {
            Orientation::Horizontal => fill(metrics.viewport_extent),
            Orientation::Vertical => {
                if metrics.viewport_extent > self.config.item_extent {
                    fill(metrics.viewport_extent)
                } else {
                    total
                }
            }
        };
        count.min(total)
    }

    /// Clears the window and materializes the initial fill.
    ///
    /// The scroll offset is reset to the leading edge; a relayout is a
    /// fresh start, not a restoration.
    pub fn relayout<C, R>(
        &self,
        state: &mut WindowState<R::Handle>,
        container: &mut C,
        renderer: &mut R,
    ) where
        C: ScrollContainer,
        R: ItemRenderer,
    {
        let orientation = self.config.orientation;
        state.clear(renderer);
        container.set_offset(orientation, 0.0);

        let metrics = probe(container, orientation);
        let count = self.initial_item_count(&metrics);
        log::debug!(
            "relayout: {} of {} items, viewport {:.0}",
            count,
            self.config.total_item_count,
            metrics.viewport_extent
        );
        for index in 0..count {
            state.create_back(renderer, index, self.config.total_item_count);
        }
        state.loaded_count = count;
    }

    /// Whether the loaded content falls short of the viewport, in which
    /// case the host may collapse the container around it.
    pub fn fits_viewport<H>(&self, state: &WindowState<H>, metrics: &ScrollMetrics) -> bool {
        let lines = self.config.items_per_line().max(1);
        let loaded_lines = (state.loaded_count() as f32 / lines as f32).ceil();
        loaded_lines * self.config.item_extent < metrics.viewport_extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(viewport: f32) -> ScrollMetrics {
        ScrollMetrics {
            offset: 0.0,
            viewport_extent: viewport,
            content_extent: 0.0,
        }
    }

    #[test]
    fn test_initial_count_horizontal() {
        // Viewport fits 10 items, 2 rows, buffer 2: 10*2 + 2*2 = 24.
        let config = ListConfig {
            total_item_count: 100,
            lines_per_axis: 2,
            item_extent: 50.0,
            ..Default::default()
        };
        let controller = LayoutController::new(&config);
        assert_eq!(controller.initial_item_count(&metrics(500.0)), 24);
    }

    #[test]
    fn test_initial_count_clamps_to_total() {
        let config = ListConfig {
            total_item_count: 5,
            lines_per_axis: 3,
            item_extent: 50.0,
            ..Default::default()
        };
        let controller = LayoutController::new(&config);
        assert_eq!(controller.initial_item_count(&metrics(500.0)), 5);
    }

    #[test]
    fn test_initial_count_vertical_auto_sized_container_loads_everything() {
        let config = ListConfig {
            orientation: Orientation::Vertical,
            total_item_count: 200,
            lines_per_axis: 2,
            item_extent: 50.0,
            ..Default::default()
        };
        let controller = LayoutController::new(&config);
        // Viewport no taller than one item: container sizes to content.
        assert_eq!(controller.initial_item_count(&metrics(50.0)), 200);
        // Explicit taller viewport: ordinary virtualized fill.
        assert_eq!(controller.initial_item_count(&metrics(500.0)), 24);
    }

    #[test]
    fn test_initial_count_empty_list() {
        let config = ListConfig {
            total_item_count: 0,
            ..Default::default()
        };
        let controller = LayoutController::new(&config);
        assert_eq!(controller.initial_item_count(&metrics(500.0)), 0);
    }

    #[test]
    fn test_fits_viewport() {
        let config = ListConfig {
            total_item_count: 4,
            lines_per_axis: 2,
            item_extent: 50.0,
            ..Default::default()
        };
        let controller = LayoutController::new(&config);
        let mut state: WindowState<usize> = WindowState::new();
        state.loaded_count = 4;

        // Two lines of 50px against a 500px viewport: collapses.
        assert!(controller.fits_viewport(&state, &metrics(500.0)));
        // Against an 80px viewport it does not.
        assert!(!controller.fits_viewport(&state, &metrics(80.0)));
    }
}
