//! Drag-to-scroll translation.
//!
//! Dragging is "free" scrolling: the tracker only turns pointer deltas
//! into scroll-offset writes, and the normal scroll handler reacts to the
//! written offset like any other scroll. Window state is never touched
//! here.

/// Pointer walk multiplier: one pixel of drag moves the content three.
pub const DRAG_WALK_MULTIPLIER: f32 = 3.0;

/// Tracks an in-progress drag along the active axis.
#[derive(Debug, Default)]
pub struct DragTracker {
    active: bool,
    start_position: f32,
    start_offset: f32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a drag at the given main-axis pointer position, capturing
    /// the scroll offset at press time.
    pub fn begin(&mut self, position: f32, current_offset: f32) {
        self.active = true;
        self.start_position = position;
        self.start_offset = current_offset;
    }

    /// Translates a pointer move into the offset to write, if a drag is
    /// active.
    pub fn update(&self, position: f32) -> Option<f32> {
        if !self.active {
            return None;
        }
        let walk = (position - self.start_position) * DRAG_WALK_MULTIPLIER;
        Some((self.start_offset - walk).max(0.0))
    }

    /// Ends the drag (pointer release or leave, or detach).
    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
