//! Driver helpers for exercising a [`ListController`] against a
//! [`SimListHost`].

use reel_core::{ListController, ListEvent};
use web_time::Instant;

use crate::sim::SimListHost;

/// Upper bound on scroll events issued by [`load_fully`]. A bounded list
/// loads a buffer batch per event, so any sane configuration finishes far
/// below this.
const MAX_LOAD_EVENTS: usize = 10_000;

/// Dispatches a single event with a fresh timestamp.
pub fn dispatch(controller: &mut ListController<u64>, host: &SimListHost, event: ListEvent) {
    dispatch_at(controller, host, event, Instant::now());
}

/// Dispatches a single event at the given instant.
pub fn dispatch_at(
    controller: &mut ListController<u64>,
    host: &SimListHost,
    event: ListEvent,
    now: Instant,
) {
    let mut container = host.container();
    let mut renderer = host.renderer();
    controller.handle_event(event, now, &mut container, &mut renderer);
}

/// Attaches the controller to the host and runs the initial layout.
pub fn attach(controller: &mut ListController<u64>, host: &SimListHost) {
    let mut container = host.container();
    let mut renderer = host.renderer();
    controller.on_attach(&mut container, &mut renderer);
}

/// Simulates a user scroll to `offset` followed by the scroll event the
/// host would report for it.
pub fn scroll_to(controller: &mut ListController<u64>, host: &SimListHost, offset: f32) {
    host.scroll_to(offset);
    dispatch(controller, host, ListEvent::Scroll);
}

/// Scrolls against the trailing content edge and reports the scroll.
pub fn scroll_to_trailing_edge(controller: &mut ListController<u64>, host: &SimListHost) {
    host.scroll_to_trailing_edge();
    dispatch(controller, host, ListEvent::Scroll);
}

/// Repeatedly scrolls to the trailing edge until every item is loaded.
///
/// Panics if the controller stops making progress, so a stalled grow path
/// fails the test instead of hanging it.
pub fn load_fully(controller: &mut ListController<u64>, host: &SimListHost) {
    for _ in 0..MAX_LOAD_EVENTS {
        if controller.window().loaded_count() == controller.config().total_item_count {
            return;
        }
        let before = controller.window().loaded_count();
        scroll_to_trailing_edge(controller, host);
        if controller.window().loaded_count() == before {
            panic!("list stopped loading at {before} items");
        }
    }
    panic!("list did not finish loading within {MAX_LOAD_EVENTS} events");
}
