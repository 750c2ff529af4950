//! Reel: a windowing/virtualization engine for large scrollable item lists.
//!
//! The engine decides, on every scroll and resize event, which items must
//! exist as rendered nodes and in what order, using only scroll-offset and
//! content-extent measurements as inputs. Bounded lists keep a sliding
//! window of materialized items around the viewport; endless lists loop by
//! rotating rendered items between the window edges without re-invoking
//! the item renderer.
//!
//! The item renderer and the scroll container stay external, behind the
//! [`ItemRenderer`] and [`ScrollContainer`] traits. The host feeds events
//! into a [`ListController`] and renders the [`ScrollbarState`] snapshot.

pub mod config;
pub mod debounce;
pub mod drag;
pub mod endless;
pub mod geometry;
pub mod layout;
pub mod renderer;
pub mod router;
pub mod scrollbar;
pub mod window;

pub use config::{ListConfig, Orientation};
pub use debounce::ResizeDebouncer;
pub use drag::DragTracker;
pub use endless::{EndlessRotator, ENDLESS_ACTIVATION_MARGIN, WRAP_NUDGE};
pub use geometry::{probe, ScrollContainer, ScrollMetrics};
pub use layout::LayoutController;
pub use renderer::ItemRenderer;
pub use router::{ListController, ListEvent};
pub use scrollbar::ScrollbarState;
pub use window::{ItemSlot, WindowManager, WindowState, TRIM_SLACK_MULTIPLIER};
