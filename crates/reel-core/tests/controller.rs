//! End-to-end controller tests against the simulated list host.

use proptest::prelude::*;
use reel_core::{ListConfig, ListController, ListEvent, Orientation, ScrollbarState};
use reel_testing::{
    attach, dispatch_at, load_fully, scroll_to, scroll_to_trailing_edge, SimListHost,
};
use web_time::{Duration, Instant};

const ITEM: f32 = 50.0;

fn bounded_config(total: usize, lines: usize) -> ListConfig {
    ListConfig {
        total_item_count: total,
        lines_per_axis: lines,
        item_extent: ITEM,
        ..Default::default()
    }
}

fn endless_config(total: usize, lines: usize) -> ListConfig {
    ListConfig {
        endless: true,
        ..bounded_config(total, lines)
    }
}

#[test]
fn test_initial_fill_renders_viewport_plus_buffer() {
    // 500px viewport, 50px items, 2 rows: 10 visible lines plus 2 buffer
    // lines of 2 items each.
    let host = SimListHost::new(500.0, ITEM, 2);
    let mut controller = ListController::new(bounded_config(100, 2));

    attach(&mut controller, &host);

    assert_eq!(controller.window().loaded_count(), 24);
    assert_eq!(host.live_count(), 24);
    assert_eq!(host.content_extent(), 600.0);
    assert_eq!(host.offset(), 0.0);
    assert!(controller.scrollbar().visible);
    assert_eq!(controller.scrollbar().thumb_ratio, 0.83);
}

#[test]
fn test_initial_fill_clamps_to_total() {
    let host = SimListHost::new(500.0, ITEM, 3);
    let mut controller = ListController::new(bounded_config(5, 3));

    attach(&mut controller, &host);

    assert_eq!(controller.window().loaded_count(), 5);
    assert!(controller.fits_viewport());

    // A scroll on the fully loaded short list must not touch the window.
    host.take_calls();
    scroll_to(&mut controller, &host, 0.0);
    assert!(host.calls().is_empty());
    assert_eq!(controller.window().rendered_count(), 5);
}

#[test]
fn test_vertical_auto_sized_container_loads_everything() {
    // Viewport no taller than one item: the container sizes itself to its
    // content, so every item materializes up front.
    let host = SimListHost::new(ITEM, ITEM, 2);
    let config = ListConfig {
        orientation: Orientation::Vertical,
        ..bounded_config(30, 2)
    };
    let mut controller = ListController::new(config);

    attach(&mut controller, &host);
    assert_eq!(controller.window().loaded_count(), 30);
    assert_eq!(host.live_count(), 30);
}

#[test]
fn test_scroll_near_trailing_boundary_grows_one_batch() {
    let host = SimListHost::new(500.0, ITEM, 2);
    let mut controller = ListController::new(bounded_config(100, 2));
    attach(&mut controller, &host);

    scroll_to_trailing_edge(&mut controller, &host);

    // One line of 2 times the buffer multiplier of 2.
    assert_eq!(controller.window().loaded_count(), 28);
    assert_eq!(host.live_count(), 28);
    assert_eq!(host.content_extent(), 700.0);
}

#[test]
fn test_scroll_far_from_boundary_does_not_grow() {
    let host = SimListHost::new(500.0, ITEM, 2);
    let mut controller = ListController::new(bounded_config(100, 2));
    attach(&mut controller, &host);
    scroll_to_trailing_edge(&mut controller, &host);

    // 700px content, offset 60: trailing gap 140 is past one item extent.
    scroll_to(&mut controller, &host, 60.0);
    assert_eq!(controller.window().loaded_count(), 28);
}

#[test]
fn test_leading_trim_and_recreate_through_controller() {
    let host = SimListHost::new(500.0, ITEM, 2);
    let mut controller = ListController::new(bounded_config(100, 2));
    attach(&mut controller, &host);
    scroll_to_trailing_edge(&mut controller, &host);
    assert_eq!(controller.window().loaded_count(), 28);

    // Offset past 2.5 item extents with a full item of trailing slack:
    // the leading line goes away and the offset is compensated.
    scroll_to(&mut controller, &host, 150.0);
    assert_eq!(controller.window().trimmed_leading(), 2);
    assert_eq!(controller.window().rendered_indices()[0], 2);
    assert_eq!(host.offset(), 100.0);
    // The same event grew another batch at the trailing boundary.
    assert_eq!(controller.window().loaded_count(), 32);

    // Scrolling back under one item extent recreates the owed line.
    scroll_to(&mut controller, &host, 20.0);
    assert_eq!(controller.window().trimmed_leading(), 0);
    assert_eq!(&controller.window().rendered_indices()[..3], &[0, 1, 2]);
    assert_eq!(host.offset(), 70.0);
}

#[test]
fn test_trailing_latch_then_trim_then_recreate() {
    let host = SimListHost::new(500.0, ITEM, 2);
    let mut controller = ListController::new(bounded_config(100, 2));
    attach(&mut controller, &host);
    load_fully(&mut controller, &host);
    assert_eq!(host.content_extent(), 2500.0);

    scroll_to_trailing_edge(&mut controller, &host);
    assert!(controller.scrollbar().reached_trailing_end);

    // With the latch set and slack beyond the viewport, the trailing line
    // is trimmed without moving the offset.
    scroll_to(&mut controller, &host, 1000.0);
    assert_eq!(controller.window().trimmed_trailing(), 2);
    assert_eq!(*controller.window().rendered_indices().last().unwrap(), 97);
    assert_eq!(host.offset(), 1000.0);
    assert_eq!(host.live_count(), 98);

    // Approaching the trailing boundary again restores the owed line.
    scroll_to_trailing_edge(&mut controller, &host);
    assert_eq!(controller.window().trimmed_trailing(), 0);
    assert_eq!(*controller.window().rendered_indices().last().unwrap(), 99);
    assert_eq!(host.live_count(), 100);
}

#[test]
fn test_endless_leading_wrap_reuses_rendered_items() {
    // 200px viewport, 300px content: scrollable past the endless margin.
    let host = SimListHost::new(200.0, ITEM, 2);
    let mut controller = ListController::new(endless_config(12, 2));
    attach(&mut controller, &host);
    assert_eq!(controller.window().loaded_count(), 12);
    host.take_calls();

    scroll_to(&mut controller, &host, 2.0);

    assert_eq!(
        &controller.window().rendered_indices()[..4],
        &[10, 11, 0, 1]
    );
    assert_eq!(host.offset(), 7.0);
    assert!(host.calls().is_empty(), "wrapping must not touch the renderer");
}

#[test]
fn test_endless_trailing_wrap_reuses_rendered_items() {
    let host = SimListHost::new(200.0, ITEM, 2);
    let mut controller = ListController::new(endless_config(12, 2));
    attach(&mut controller, &host);
    host.take_calls();

    scroll_to_trailing_edge(&mut controller, &host);

    assert_eq!(&controller.window().rendered_indices()[10..], &[0, 1]);
    assert_eq!(host.offset(), 95.0);
    assert!(host.calls().is_empty());
}

#[test]
fn test_endless_wrapping_conserves_the_item_set() {
    let host = SimListHost::new(200.0, ITEM, 2);
    let mut controller = ListController::new(endless_config(12, 2));
    attach(&mut controller, &host);
    host.take_calls();

    for _ in 0..40 {
        scroll_to(&mut controller, &host, 0.0);
        scroll_to_trailing_edge(&mut controller, &host);
    }

    assert_eq!(controller.window().rendered_count(), 12);
    assert_eq!(host.live_count(), 12);
    let mut indices = controller.window().rendered_indices();
    indices.sort_unstable();
    assert_eq!(indices, (0..12).collect::<Vec<_>>());
    assert!(host.calls().is_empty());
}

#[test]
fn test_content_matching_viewport_hides_scrollbar() {
    // 8 items in 2 rows of 50px fill the 200px viewport exactly.
    let host = SimListHost::new(200.0, ITEM, 2);
    let mut controller = ListController::new(bounded_config(8, 2));

    attach(&mut controller, &host);

    assert_eq!(host.content_extent(), 200.0);
    assert_eq!(controller.scrollbar().thumb_ratio, 1.0);
    assert!(!controller.scrollbar().visible);
}

#[test]
fn test_resize_storm_settles_once() {
    let host = SimListHost::new(100.0, ITEM, 1);
    let mut controller = ListController::new(bounded_config(4, 1));
    attach(&mut controller, &host);
    assert!(!controller.fits_viewport());

    let t0 = Instant::now();
    host.set_viewport_extent(300.0);
    for ms in [0, 10, 20, 30] {
        dispatch_at(
            &mut controller,
            &host,
            ListEvent::Resize,
            t0 + Duration::from_millis(ms),
        );
    }
    assert!(controller.pending_resize());

    // Before the settle deadline nothing is re-evaluated.
    dispatch_at(
        &mut controller,
        &host,
        ListEvent::Tick,
        t0 + Duration::from_millis(400),
    );
    assert!(controller.pending_resize());
    assert!(!controller.fits_viewport());

    // The settle pass reads the final geometry exactly once.
    dispatch_at(
        &mut controller,
        &host,
        ListEvent::Tick,
        t0 + Duration::from_millis(600),
    );
    assert!(!controller.pending_resize());
    assert!(controller.fits_viewport());
}

#[test]
fn test_hidden_attach_defers_layout_until_visible() {
    let host = SimListHost::new(500.0, ITEM, 2);
    let mut controller: ListController<u64> = ListController::new(bounded_config(100, 2));

    controller.on_attach_hidden();
    scroll_to(&mut controller, &host, 100.0);
    assert_eq!(host.live_count(), 0);

    let mut container = host.container();
    let mut renderer = host.renderer();
    controller.on_enter_viewport(&mut container, &mut renderer);
    assert_eq!(controller.window().loaded_count(), 24);
    assert_eq!(host.live_count(), 24);
}

#[test]
fn test_detach_destroys_every_rendered_item() {
    let host = SimListHost::new(500.0, ITEM, 2);
    let mut controller = ListController::new(bounded_config(100, 2));
    attach(&mut controller, &host);
    assert_eq!(host.live_count(), 24);

    let mut renderer = host.renderer();
    controller.on_detach(&mut renderer);

    assert_eq!(host.live_count(), 0);
    assert_eq!(controller.scrollbar(), &ScrollbarState::empty());
    assert!(!controller.is_attached());
}

#[test]
fn test_total_count_change_rebuilds_the_window() {
    let host = SimListHost::new(500.0, ITEM, 2);
    let mut controller = ListController::new(bounded_config(100, 2));
    attach(&mut controller, &host);
    assert_eq!(host.live_count(), 24);

    let mut container = host.container();
    let mut renderer = host.renderer();
    controller.set_total_item_count(10, &mut container, &mut renderer);

    assert_eq!(controller.window().loaded_count(), 10);
    assert_eq!(host.live_count(), 10);
    assert_eq!(host.offset(), 0.0);
}

#[test]
fn test_force_relayout_is_idempotent() {
    let host = SimListHost::new(500.0, ITEM, 2);
    let mut controller = ListController::new(bounded_config(100, 2));
    attach(&mut controller, &host);
    let first = controller.window().rendered_indices();

    let mut container = host.container();
    let mut renderer = host.renderer();
    controller.force_relayout(&mut container, &mut renderer);

    assert_eq!(controller.window().rendered_indices(), first);
    assert_eq!(host.live_count(), 24);
    assert_eq!(host.offset(), 0.0);
}

#[test]
fn test_thumb_shrinks_as_totals_grow() {
    let mut previous = f32::MAX;
    for total in [30, 60, 90] {
        let host = SimListHost::new(500.0, ITEM, 2);
        let mut controller = ListController::new(bounded_config(total, 2));
        attach(&mut controller, &host);
        load_fully(&mut controller, &host);

        let ratio = controller.scrollbar().thumb_ratio;
        assert!(ratio < previous, "thumb must shrink: {ratio} vs {previous}");
        previous = ratio;
    }
}

fn assert_window_invariants(controller: &ListController<u64>, host: &SimListHost, endless: bool) {
    let window = controller.window();
    let total = controller.config().total_item_count;

    assert!(window.loaded_count() <= total);
    assert_eq!(
        window.rendered_count(),
        window.loaded_count() - window.trimmed_leading() - window.trimmed_trailing()
    );
    assert_eq!(host.live_count(), window.rendered_count());

    let indices = window.rendered_indices();
    assert!(indices.iter().all(|&index| index < total));
    let mut sorted = indices.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), indices.len(), "duplicate rendered index");

    if !endless {
        let expected: Vec<usize> =
            (window.trimmed_leading()..window.loaded_count() - window.trimmed_trailing()).collect();
        assert_eq!(indices, expected, "bounded window must stay contiguous");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_window_invariants_hold_under_random_scrolling(
        total in 0usize..60,
        lines in 1usize..4,
        viewport in 100.0f32..600.0,
        endless in any::<bool>(),
        offsets in prop::collection::vec(0.0f32..3000.0, 0..25),
    ) {
        let config = ListConfig {
            total_item_count: total,
            lines_per_axis: lines,
            item_extent: ITEM,
            endless,
            ..Default::default()
        };
        let host = SimListHost::new(viewport, ITEM, lines);
        let mut controller = ListController::new(config);

        attach(&mut controller, &host);
        assert_window_invariants(&controller, &host, endless);

        for offset in offsets {
            scroll_to(&mut controller, &host, offset);
            assert_window_invariants(&controller, &host, endless);
        }

        let ratio = controller.scrollbar().thumb_ratio;
        prop_assert!((0.0..=1.0).contains(&ratio));
    }
}
