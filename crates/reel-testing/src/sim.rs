//! Simulated list host.
//!
//! A [`SimListHost`] stands in for the real scroll container and item
//! renderer in tests. The content extent is derived from the number of
//! live item handles, the way a real container's scroll extent follows its
//! children, so window mutations made by the engine are immediately
//! visible to its next geometry probe.

use std::cell::RefCell;
use std::rc::Rc;

use reel_core::{ItemRenderer, Orientation, ScrollContainer};
use rustc_hash::FxHashSet;

/// One renderer invocation, recorded for assertions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererCall {
    Created { index: usize, handle: u64 },
    Destroyed { handle: u64 },
}

#[derive(Debug)]
struct SimState {
    viewport_extent: f32,
    offset: f32,
    item_extent: f32,
    items_per_line: usize,
    next_handle: u64,
    live: FxHashSet<u64>,
    calls: Vec<RendererCall>,
}

impl SimState {
    fn content_extent(&self) -> f32 {
        let lines_per = self.items_per_line.max(1);
        let lines = self.live.len().div_ceil(lines_per);
        lines as f32 * self.item_extent
    }

    fn max_offset(&self) -> f32 {
        (self.content_extent() - self.viewport_extent).max(0.0)
    }
}

/// Simulated scroll container + item renderer sharing one state.
///
/// The engine borrows the container and the renderer separately, so the
/// host hands out lightweight views over shared state via
/// [`SimListHost::container`] and [`SimListHost::renderer`].
#[derive(Clone)]
pub struct SimListHost {
    state: Rc<RefCell<SimState>>,
}

impl SimListHost {
    pub fn new(viewport_extent: f32, item_extent: f32, items_per_line: usize) -> Self {
        Self {
            state: Rc::new(RefCell::new(SimState {
                viewport_extent,
                offset: 0.0,
                item_extent,
                items_per_line,
                next_handle: 0,
                live: FxHashSet::default(),
                calls: Vec::new(),
            })),
        }
    }

    pub fn container(&self) -> SimContainer {
        SimContainer {
            state: Rc::clone(&self.state),
        }
    }

    pub fn renderer(&self) -> SimRenderer {
        SimRenderer {
            state: Rc::clone(&self.state),
        }
    }

    pub fn offset(&self) -> f32 {
        self.state.borrow().offset
    }

    /// Simulates a user scroll: writes a clamped offset without running
    /// any engine logic.
    pub fn scroll_to(&self, offset: f32) {
        let mut state = self.state.borrow_mut();
        let max = state.max_offset();
        state.offset = offset.clamp(0.0, max);
    }

    /// Scrolls hard against the trailing content edge.
    pub fn scroll_to_trailing_edge(&self) {
        let mut state = self.state.borrow_mut();
        let max = state.max_offset();
        state.offset = max;
    }

    pub fn viewport_extent(&self) -> f32 {
        self.state.borrow().viewport_extent
    }

    /// Simulates a container resize.
    pub fn set_viewport_extent(&self, extent: f32) {
        self.state.borrow_mut().viewport_extent = extent;
    }

    pub fn content_extent(&self) -> f32 {
        self.state.borrow().content_extent()
    }

    /// Number of live (created, not destroyed) item handles.
    pub fn live_count(&self) -> usize {
        self.state.borrow().live.len()
    }

    /// All renderer calls recorded so far.
    pub fn calls(&self) -> Vec<RendererCall> {
        self.state.borrow().calls.clone()
    }

    /// Drains and returns the recorded renderer calls.
    pub fn take_calls(&self) -> Vec<RendererCall> {
        std::mem::take(&mut self.state.borrow_mut().calls)
    }
}

/// Container view over a [`SimListHost`].
pub struct SimContainer {
    state: Rc<RefCell<SimState>>,
}

impl ScrollContainer for SimContainer {
    fn offset(&self, _orientation: Orientation) -> f32 {
        self.state.borrow().offset
    }

    fn set_offset(&mut self, _orientation: Orientation, offset: f32) {
        let mut state = self.state.borrow_mut();
        let max = state.max_offset();
        state.offset = offset.clamp(0.0, max);
    }

    fn viewport_extent(&self, _orientation: Orientation) -> f32 {
        self.state.borrow().viewport_extent
    }

    fn content_extent(&self, _orientation: Orientation) -> f32 {
        self.state.borrow().content_extent()
    }
}

/// Renderer view over a [`SimListHost`].
pub struct SimRenderer {
    state: Rc<RefCell<SimState>>,
}

impl ItemRenderer for SimRenderer {
    type Handle = u64;

    fn create(&mut self, index: usize) -> u64 {
        let mut state = self.state.borrow_mut();
        let handle = state.next_handle;
        state.next_handle += 1;
        state.live.insert(handle);
        state.calls.push(RendererCall::Created { index, handle });
        handle
    }

    fn destroy(&mut self, handle: u64) {
        let mut state = self.state.borrow_mut();
        let was_live = state.live.remove(&handle);
        debug_assert!(was_live, "handle {handle} destroyed twice");
        if !was_live {
            log::warn!("sim renderer: handle {handle} destroyed twice");
        }
        state.calls.push(RendererCall::Destroyed { handle });
    }
}
