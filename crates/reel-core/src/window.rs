//! Rendered window state and the bounded-mode window manager.
//!
//! The window is the contiguous sequence of currently materialized items.
//! In bounded mode it maps 1:1 onto a contiguous index sub-range; growing
//! appends the next buffer batch and trimming removes whole lines from the
//! edge opposite the scroll direction, compensating the offset so the
//! visible content does not jump.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::config::ListConfig;
use crate::geometry::{self, probe, ScrollContainer};
use crate::renderer::ItemRenderer;

/// Slack, in item extents, that must open up between the viewport and a
/// window edge before that edge is trimmed. The reference behavior used
/// 2.5 horizontally and 3 vertically; a single multiplier is used here.
pub const TRIM_SLACK_MULTIPLIER: f32 = 2.5;

/// A materialized item: its logical index and the renderer's handle.
#[derive(Clone, Debug)]
pub struct ItemSlot<H> {
    pub index: usize,
    pub handle: H,
}

/// Owned state of the rendered window.
///
/// `slots` is ordered by visual position, which in bounded mode equals
/// index order. `loaded_count` counts items ever created since the last
/// layout reset; `trimmed_leading` / `trimmed_trailing` count items removed
/// from an edge but still owed, to be lazily recreated when scrolled back.
#[derive(Debug)]
pub struct WindowState<H> {
    pub(crate) slots: VecDeque<ItemSlot<H>>,
    pub(crate) loaded_count: usize,
    pub(crate) trimmed_leading: usize,
    pub(crate) trimmed_trailing: usize,
}

impl<H> WindowState<H> {
    pub fn new() -> Self {
        Self {
            slots: VecDeque::new(),
            loaded_count: 0,
            trimmed_leading: 0,
            trimmed_trailing: 0,
        }
    }

    /// Number of currently materialized items.
    pub fn rendered_count(&self) -> usize {
        self.slots.len()
    }

    /// Items created since the last layout reset, up to the total count.
    pub fn loaded_count(&self) -> usize {
        self.loaded_count
    }

    /// Items trimmed from the leading edge and still owed.
    pub fn trimmed_leading(&self) -> usize {
        self.trimmed_leading
    }

    /// Items trimmed from the trailing edge and still owed.
    pub fn trimmed_trailing(&self) -> usize {
        self.trimmed_trailing
    }

    /// Rendered slots in visual order.
    pub fn slots(&self) -> impl Iterator<Item = &ItemSlot<H>> {
        self.slots.iter()
    }

    /// Logical indices of the rendered slots in visual order.
    pub fn rendered_indices(&self) -> Vec<usize> {
        self.slots.iter().map(|slot| slot.index).collect()
    }

    /// Destroys every rendered item and resets all counters.
    pub fn clear<R>(&mut self, renderer: &mut R)
    where
        R: ItemRenderer<Handle = H>,
    {
        while let Some(slot) = self.slots.pop_front() {
            renderer.destroy(slot.handle);
        }
        self.loaded_count = 0;
        self.trimmed_leading = 0;
        self.trimmed_trailing = 0;
    }

    /// Materializes `index` at the trailing edge of the window.
    ///
    /// An out-of-range index is a programming error in the engine: fatal in
    /// debug builds, a silent no-op in release.
    pub(crate) fn create_back<R>(&mut self, renderer: &mut R, index: usize, total: usize)
    where
        R: ItemRenderer<Handle = H>,
    {
        debug_assert!(index < total, "create_back out of range: {index} >= {total}");
        if index >= total {
            return;
        }
        let handle = renderer.create(index);
        self.slots.push_back(ItemSlot { index, handle });
    }

    /// Materializes `index` at the leading edge of the window.
    pub(crate) fn create_front<R>(&mut self, renderer: &mut R, index: usize, total: usize)
    where
        R: ItemRenderer<Handle = H>,
    {
        debug_assert!(index < total, "create_front out of range: {index} >= {total}");
        if index >= total {
            return;
        }
        let handle = renderer.create(index);
        self.slots.push_front(ItemSlot { index, handle });
    }

    /// Moves the trailing-most `count` slots to the front, preserving their
    /// relative order. Pure reordering; no renderer calls.
    pub(crate) fn rotate_trailing_to_front(&mut self, count: usize) {
        for _ in 0..count {
            if let Some(slot) = self.slots.pop_back() {
                self.slots.push_front(slot);
            }
        }
    }

    /// Moves the leading-most `count` slots to the back, preserving their
    /// relative order.
    pub(crate) fn rotate_leading_to_back(&mut self, count: usize) {
        for _ in 0..count {
            if let Some(slot) = self.slots.pop_front() {
                self.slots.push_back(slot);
            }
        }
    }
}

impl<H> Default for WindowState<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Bounded-mode window manager: grow at the trailing boundary, trim and
/// lazily recreate at both edges.
pub struct WindowManager<'a> {
    config: &'a ListConfig,
}

impl<'a> WindowManager<'a> {
    pub fn new(config: &'a ListConfig) -> Self {
        Self { config }
    }

    /// Creates the next buffer batch of items at the trailing edge.
    ///
    /// The caller gates this on viewport proximity to the loaded content's
    /// trailing edge; the batch is one line times the buffer multiplier,
    /// clamped to the total item count.
    pub fn grow<R>(&self, state: &mut WindowState<R::Handle>, renderer: &mut R)
    where
        R: ItemRenderer,
    {
        let total = self.config.total_item_count;
        if state.loaded_count >= total {
            return;
        }
        let lines = self.config.items_per_line();
        if lines == 0 {
            return;
        }
        let target = (state.loaded_count + lines * self.config.buffer_multiplier).min(total);
        log::trace!(
            "grow: loading items {}..{} of {}",
            state.loaded_count,
            target,
            total
        );
        for index in state.loaded_count..target {
            state.create_back(renderer, index, total);
        }
        state.loaded_count = target;
    }

    /// Edge trim/recreate pass for bounded lists.
    ///
    /// At most one branch fires per event, keeping per-event work bounded
    /// to a single line of items. Leading-edge mutations compensate the
    /// scroll offset by one item extent; trailing-edge mutations happen
    /// beyond the viewport and need no compensation.
    pub fn trim_pass<C, R>(
        &self,
        state: &mut WindowState<R::Handle>,
        container: &mut C,
        renderer: &mut R,
        reached_trailing_end: bool,
    ) where
        C: ScrollContainer,
        R: ItemRenderer,
    {
        let lines = self.config.items_per_line();
        if lines == 0 {
            return;
        }
        let orientation = self.config.orientation;
        let item = self.config.item_extent;
        let metrics = probe(container, orientation);

        // Scrolled back near the leading edge: recreate the owed line.
        if metrics.offset < item && state.trimmed_leading > 0 {
            self.recreate_leading(state, renderer, lines);
            geometry::nudge_offset(container, orientation, item);
            return;
        }

        // Enough slack behind the viewport: trim the leading line, unless
        // the viewport is already pressed against the trailing boundary.
        if metrics.offset > item * TRIM_SLACK_MULTIPLIER && !reached_trailing_end {
            if metrics.trailing_gap() < item {
                return;
            }
            self.trim_edge(state, renderer, lines, Edge::Leading);
            geometry::nudge_offset(container, orientation, -item);
            return;
        }

        // Mirror pair at the trailing edge, gated by the latch.
        if metrics.trailing_gap() > item * TRIM_SLACK_MULTIPLIER && reached_trailing_end {
            if metrics.offset <= item {
                return;
            }
            self.trim_edge(state, renderer, lines, Edge::Trailing);
            return;
        }

        if metrics.trailing_gap() < item && state.trimmed_trailing > 0 {
            self.recreate_trailing(state, renderer, lines);
        }
    }

    fn recreate_leading<R>(&self, state: &mut WindowState<R::Handle>, renderer: &mut R, lines: usize)
    where
        R: ItemRenderer,
    {
        let total = self.config.total_item_count;
        for _ in 0..lines {
            if state.trimmed_leading == 0 {
                break;
            }
            let index = state.trimmed_leading - 1;
            state.create_front(renderer, index, total);
            state.trimmed_leading -= 1;
        }
    }

    fn recreate_trailing<R>(
        &self,
        state: &mut WindowState<R::Handle>,
        renderer: &mut R,
        lines: usize,
    ) where
        R: ItemRenderer,
    {
        let total = self.config.total_item_count;
        for _ in 0..lines {
            if state.trimmed_trailing == 0 {
                break;
            }
            let index = total - state.trimmed_trailing;
            state.create_back(renderer, index, total);
            state.trimmed_trailing -= 1;
        }
    }

    fn trim_edge<R>(
        &self,
        state: &mut WindowState<R::Handle>,
        renderer: &mut R,
        lines: usize,
        edge: Edge,
    ) where
        R: ItemRenderer,
    {
        // Detach the whole line before invoking the renderer so the window
        // state is consistent when external code runs.
        let mut batch: SmallVec<[R::Handle; 4]> = SmallVec::new();
        for _ in 0..lines {
            let slot = match edge {
                Edge::Leading => state.slots.pop_front(),
                Edge::Trailing => state.slots.pop_back(),
            };
            let Some(slot) = slot else { break };
            match edge {
                Edge::Leading => state.trimmed_leading += 1,
                Edge::Trailing => state.trimmed_trailing += 1,
            }
            batch.push(slot.handle);
        }
        for handle in batch {
            renderer.destroy(handle);
        }
    }
}

#[derive(Clone, Copy)]
enum Edge {
    Leading,
    Trailing,
}
