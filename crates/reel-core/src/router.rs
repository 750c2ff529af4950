//! Interaction routing.
//!
//! Single entry point for scroll, resize, pointer and tick events. The
//! per-scroll stage order is load-bearing and must not change: scrollbar
//! sync, then endless wrap checks, then trim/grow, then the trailing wrap.
//! Each stage's decision depends on the state committed by the previous
//! stage within the same event.

use web_time::Instant;

use crate::config::{ListConfig, Orientation};
use crate::debounce::ResizeDebouncer;
use crate::drag::DragTracker;
use crate::endless::{EndlessRotator, WRAP_NUDGE};
use crate::geometry::{probe, ScrollContainer};
use crate::layout::LayoutController;
use crate::renderer::ItemRenderer;
use crate::scrollbar::ScrollbarState;
use crate::window::{WindowManager, WindowState};

/// An input event dispatched into the controller.
///
/// Scroll events are handled synchronously; resize events are debounced
/// and settle on a later `Tick`. Pointer events only feed the drag
/// tracker, whose offset writes the host reports back as ordinary scrolls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ListEvent {
    Scroll,
    Resize,
    PointerPressed { x: f32, y: f32 },
    PointerMoved { x: f32, y: f32 },
    PointerReleased,
    /// Periodic timer tick driving the resize debouncer.
    Tick,
}

/// The windowing engine's controller for one list container.
///
/// Owns the rendered window and all derived state. The container and the
/// item renderer stay external: every entry point borrows them for the
/// duration of one event, and nothing else may mutate the window in
/// between.
pub struct ListController<H> {
    config: ListConfig,
    window: WindowState<H>,
    scrollbar: ScrollbarState,
    debouncer: ResizeDebouncer,
    drag: DragTracker,
    attached: bool,
    awaiting_viewport: bool,
    fits_viewport: bool,
}

impl<H> ListController<H> {
    pub fn new(config: ListConfig) -> Self {
        Self {
            config,
            window: WindowState::new(),
            scrollbar: ScrollbarState::empty(),
            debouncer: ResizeDebouncer::new(),
            drag: DragTracker::new(),
            attached: false,
            awaiting_viewport: false,
            fits_viewport: false,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    /// Read-only scrollbar snapshot for the host to render a thumb.
    pub fn scrollbar(&self) -> &ScrollbarState {
        &self.scrollbar
    }

    pub fn window(&self) -> &WindowState<H> {
        &self.window
    }

    /// Whether the loaded content falls short of the viewport, letting the
    /// host collapse the container around it.
    pub fn fits_viewport(&self) -> bool {
        self.fits_viewport
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether a debounced resize settle pass is still pending.
    pub fn pending_resize(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Attaches to a visible container and performs the initial layout.
    pub fn on_attach<C, R>(&mut self, container: &mut C, renderer: &mut R)
    where
        C: ScrollContainer,
        R: ItemRenderer<Handle = H>,
    {
        self.attached = true;
        self.awaiting_viewport = false;
        self.force_relayout(container, renderer);
    }

    /// Attaches while the container is not yet visible. The first layout
    /// is deferred until [`ListController::on_enter_viewport`].
    pub fn on_attach_hidden(&mut self) {
        self.attached = true;
        self.awaiting_viewport = true;
    }

    /// Performs the deferred first layout, exactly once.
    pub fn on_enter_viewport<C, R>(&mut self, container: &mut C, renderer: &mut R)
    where
        C: ScrollContainer,
        R: ItemRenderer<Handle = H>,
    {
        if self.attached && self.awaiting_viewport {
            self.awaiting_viewport = false;
            self.force_relayout(container, renderer);
        }
    }

    /// Detaches from the container: cancels pending debounce and drag
    /// state synchronously and destroys every rendered item.
    pub fn on_detach<R>(&mut self, renderer: &mut R)
    where
        R: ItemRenderer<Handle = H>,
    {
        self.debouncer.cancel();
        self.drag.end();
        self.window.clear(renderer);
        self.scrollbar = ScrollbarState::empty();
        self.fits_viewport = false;
        self.attached = false;
        self.awaiting_viewport = false;
    }

    /// Full relayout: clear the window, rebuild the initial fill, resync
    /// derived state. Idempotent when nothing scrolled in between.
    pub fn force_relayout<C, R>(&mut self, container: &mut C, renderer: &mut R)
    where
        C: ScrollContainer,
        R: ItemRenderer<Handle = H>,
    {
        let layout = LayoutController::new(&self.config);
        layout.relayout(&mut self.window, container, renderer);

        let metrics = probe(container, self.config.orientation);
        self.scrollbar.update(
            &metrics,
            self.window.loaded_count(),
            self.config.total_item_count,
            self.config.scrollbar,
        );
        self.fits_viewport = layout.fits_viewport(&self.window, &metrics);
    }

    /// Dispatches one event. `now` drives the resize debouncer and is
    /// supplied by the caller so event handling stays deterministic.
    pub fn handle_event<C, R>(
        &mut self,
        event: ListEvent,
        now: Instant,
        container: &mut C,
        renderer: &mut R,
    ) where
        C: ScrollContainer,
        R: ItemRenderer<Handle = H>,
    {
        match event {
            ListEvent::Scroll => self.on_scroll(container, renderer),
            ListEvent::Resize => {
                self.debouncer.signal(now);
                // Thumb geometry is cheap to refresh right away; the
                // expensive display re-check waits for the settle pass.
                self.sync_scrollbar(container);
            }
            ListEvent::Tick => {
                if self.debouncer.poll(now) {
                    self.on_resize_settled(container);
                }
            }
            ListEvent::PointerPressed { x, y } => {
                let orientation = self.config.orientation;
                let position = self.main_axis(x, y);
                self.drag.begin(position, container.offset(orientation));
            }
            ListEvent::PointerMoved { x, y } => {
                if let Some(offset) = self.drag.update(self.main_axis(x, y)) {
                    container.set_offset(self.config.orientation, offset);
                }
            }
            ListEvent::PointerReleased => self.drag.end(),
        }
    }

    /// Pushes a new total item count. Indices are only stable while the
    /// count is unchanged, so the window is rebuilt from scratch.
    pub fn set_total_item_count<C, R>(&mut self, count: usize, container: &mut C, renderer: &mut R)
    where
        C: ScrollContainer,
        R: ItemRenderer<Handle = H>,
    {
        if self.config.total_item_count != count {
            self.config.total_item_count = count;
            self.relayout_if_visible(container, renderer);
        }
    }

    /// Pushes an orientation change; resets the window.
    pub fn set_orientation<C, R>(
        &mut self,
        orientation: Orientation,
        container: &mut C,
        renderer: &mut R,
    ) where
        C: ScrollContainer,
        R: ItemRenderer<Handle = H>,
    {
        if self.config.orientation != orientation {
            self.config.orientation = orientation;
            self.relayout_if_visible(container, renderer);
        }
    }

    /// Pushes a new item pixel extent; a changed extent invalidates every
    /// windowing decision, so the window is fully reset.
    pub fn set_item_extent<C, R>(&mut self, extent: f32, container: &mut C, renderer: &mut R)
    where
        C: ScrollContainer,
        R: ItemRenderer<Handle = H>,
    {
        if self.config.item_extent != extent {
            self.config.item_extent = extent;
            self.relayout_if_visible(container, renderer);
        }
    }

    /// Pushes a new configured line count (rows or columns).
    pub fn set_lines_per_axis<C, R>(&mut self, lines: usize, container: &mut C, renderer: &mut R)
    where
        C: ScrollContainer,
        R: ItemRenderer<Handle = H>,
    {
        if self.config.lines_per_axis != lines {
            self.config.lines_per_axis = lines;
            self.relayout_if_visible(container, renderer);
        }
    }

    /// Toggles endless mode; takes effect on the next scroll event.
    pub fn set_endless(&mut self, endless: bool) {
        self.config.endless = endless;
    }

    /// Toggles the scrollbar option and refreshes the visible flag.
    pub fn set_scrollbar_enabled<C>(&mut self, enabled: bool, container: &mut C)
    where
        C: ScrollContainer,
    {
        self.config.scrollbar = enabled;
        self.sync_scrollbar(container);
    }

    fn main_axis(&self, x: f32, y: f32) -> f32 {
        match self.config.orientation {
            Orientation::Horizontal => x,
            Orientation::Vertical => y,
        }
    }

    fn sync_scrollbar<C>(&mut self, container: &C)
    where
        C: ScrollContainer,
    {
        let metrics = probe(container, self.config.orientation);
        self.scrollbar.update(
            &metrics,
            self.window.loaded_count(),
            self.config.total_item_count,
            self.config.scrollbar,
        );
    }

    fn on_resize_settled<C>(&mut self, container: &C)
    where
        C: ScrollContainer,
    {
        self.sync_scrollbar(container);
        let metrics = probe(container, self.config.orientation);
        self.fits_viewport =
            LayoutController::new(&self.config).fits_viewport(&self.window, &metrics);
        log::trace!("resize settled: fits_viewport={}", self.fits_viewport);
    }

    fn relayout_if_visible<C, R>(&mut self, container: &mut C, renderer: &mut R)
    where
        C: ScrollContainer,
        R: ItemRenderer<Handle = H>,
    {
        if self.attached && !self.awaiting_viewport {
            self.force_relayout(container, renderer);
        }
    }

    /// The scroll pipeline. Stage order per the concurrency contract:
    /// scrollbar sync, leading endless wrap, trim/grow gate, grow, then
    /// the trailing endless wrap.
    fn on_scroll<C, R>(&mut self, container: &mut C, renderer: &mut R)
    where
        C: ScrollContainer,
        R: ItemRenderer<Handle = H>,
    {
        if !self.attached || self.awaiting_viewport {
            return;
        }
        let orientation = self.config.orientation;

        // 1. Scrollbar geometry and the trailing-end latch.
        self.sync_scrollbar(container);

        let rotator = EndlessRotator::new(&self.config);

        // 2. Leading-edge wrap for endless lists.
        let metrics = probe(container, orientation);
        if rotator.is_active(&self.window, &metrics) {
            rotator.wrap_leading(&mut self.window, container);
        }

        // 3. Trim pass and the grow gate. Endless lists only grow when
        //    pressed against the trailing boundary; bounded lists trim
        //    first, then grow within one item extent of the boundary.
        let metrics = probe(container, orientation);
        if self.config.endless && rotator.is_scrollable(&metrics) {
            if metrics.trailing_gap() > WRAP_NUDGE {
                return;
            }
        } else {
            let manager = WindowManager::new(&self.config);
            manager.trim_pass(
                &mut self.window,
                container,
                renderer,
                self.scrollbar.reached_trailing_end,
            );
            let metrics = probe(container, orientation);
            if metrics.trailing_gap() > self.config.item_extent {
                return;
            }
        }

        // 4. Grow the window by one buffer batch.
        if self.window.loaded_count() != self.config.total_item_count {
            WindowManager::new(&self.config).grow(&mut self.window, renderer);
        }

        // 5. Trailing-edge wrap once everything is loaded.
        let metrics = probe(container, orientation);
        if rotator.is_active(&self.window, &metrics) {
            rotator.wrap_trailing(&mut self.window, container);
        }
    }
}
