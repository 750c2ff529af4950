//! List configuration.
//!
//! The host owns the configuration source; value changes are pushed into the
//! controller through its setters and take effect as instantaneous value
//! changes, not events with payload history.

/// Scroll axis of the list.
///
/// Horizontal lists lay items in rows and scroll along the width; vertical
/// lists lay items in columns and scroll along the height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Default for Orientation {
    fn default() -> Self {
        Orientation::Horizontal
    }
}

/// Extra lines preloaded beyond the minimum needed to fill the viewport.
pub const DEFAULT_BUFFER_MULTIPLIER: usize = 2;

/// Fallback item extent before the host has measured a real item.
pub const DEFAULT_ITEM_EXTENT: f32 = 48.0;

/// Configuration for a windowed list.
///
/// `lines_per_axis` is the configured number of rows (horizontal) or columns
/// (vertical); the effective value is clamped to the total item count via
/// [`ListConfig::items_per_line`].
#[derive(Clone, Debug, PartialEq)]
pub struct ListConfig {
    /// Active scroll axis.
    pub orientation: Orientation,

    /// Total number of logical items. Item indices are stable only while
    /// this value is unchanged.
    pub total_item_count: usize,

    /// Configured rows or columns per line.
    pub lines_per_axis: usize,

    /// Pixel extent of a single item along the active axis.
    pub item_extent: f32,

    /// Extra lines preloaded beyond the minimum fill.
    pub buffer_multiplier: usize,

    /// Whether the list loops endlessly by rotating rendered items.
    pub endless: bool,

    /// Whether the host wants a scrollbar thumb rendered.
    pub scrollbar: bool,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            total_item_count: 0,
            lines_per_axis: 1,
            item_extent: DEFAULT_ITEM_EXTENT,
            buffer_multiplier: DEFAULT_BUFFER_MULTIPLIER,
            endless: false,
            scrollbar: true,
        }
    }
}

impl ListConfig {
    /// Effective items per line: the configured lines clamped to the total
    /// item count, so a 3-line list with 2 items renders 2 lines.
    pub fn items_per_line(&self) -> usize {
        self.lines_per_axis.min(self.total_item_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_per_line_clamps_to_total() {
        let config = ListConfig {
            total_item_count: 5,
            lines_per_axis: 3,
            ..Default::default()
        };
        assert_eq!(config.items_per_line(), 3);

        let config = ListConfig {
            total_item_count: 2,
            lines_per_axis: 3,
            ..Default::default()
        };
        assert_eq!(config.items_per_line(), 2);
    }

    #[test]
    fn test_items_per_line_empty_list() {
        let config = ListConfig::default();
        assert_eq!(config.items_per_line(), 0);
    }
}
