use timeline_chart::core::{Drawport, ViewWindow, Viewport};
use timeline_chart::interaction::{
    DragState, HitPriority, HitRegion, RangeSelector, RangeSelectorConfig,
};

const SAMPLES: usize = 1000;

fn selector() -> RangeSelector {
    RangeSelector::new(SAMPLES, Viewport::new(1000, 100), RangeSelectorConfig::default())
}

fn window(from_index: usize, to_index: usize) -> ViewWindow {
    ViewWindow::new(from_index, to_index, SAMPLES).expect("valid window")
}

/// Drags the right handle from the strip edge to `x` and releases.
fn shrink_right_to(selector: &mut RangeSelector, x: f64) {
    assert!(selector.press(1000.0, 50.0));
    assert!(selector.move_to(x, 50.0));
    selector.release();
}

#[test]
fn starts_with_full_window() {
    let selector = selector();

    assert!(selector.is_enabled());
    assert_eq!(selector.window(), window(0, 999));
    assert_eq!(selector.pixel_edges(), (0.0, 1000.0));
    assert_eq!(selector.state(), DragState::Idle);
    assert_eq!(selector.min_span_indices(), 16);
    assert_eq!(selector.min_gap_px(), 17.0);
}

#[test]
fn single_sample_dataset_disables_selection() {
    let mut selector =
        RangeSelector::new(1, Viewport::new(1000, 100), RangeSelectorConfig::default());

    assert!(!selector.is_enabled());
    assert_eq!(selector.window(), ViewWindow::full(1));
    assert_eq!(selector.hit_test(0.0, 50.0), None);
    assert!(!selector.press(0.0, 50.0));
    assert_eq!(selector.state(), DragState::Idle);
}

#[test]
fn right_handle_drag_moves_to_index() {
    let mut selector = selector();

    assert_eq!(selector.hit_test(995.0, 50.0), Some(HitRegion::RightHandle));
    assert!(selector.press(1000.0, 50.0));
    assert_eq!(
        selector.state(),
        DragState::DraggingRightHandle { last_x: 1000.0 }
    );

    assert!(selector.move_to(500.0, 50.0));
    assert_eq!(selector.window(), window(0, 500));
    assert_eq!(selector.pixel_edges(), (0.0, 500.0));
}

#[test]
fn right_handle_within_tolerance_of_left_is_noop() {
    let mut selector = selector();
    assert!(selector.press(1000.0, 50.0));
    assert!(selector.move_to(500.0, 50.0));
    let before = selector.window();

    assert!(!selector.move_to(10.0, 50.0));
    assert_eq!(selector.window(), before);
    assert_eq!(selector.pixel_edges(), (0.0, 500.0));
}

#[test]
fn right_handle_clamps_to_strip_width() {
    let mut selector = selector();
    shrink_right_to(&mut selector, 500.0);

    assert!(selector.press(500.0, 50.0));
    assert!(selector.move_to(5_000.0, 50.0));
    assert_eq!(selector.pixel_edges(), (0.0, 1000.0));
    assert_eq!(selector.window(), window(0, 999));
}

#[test]
fn left_handle_drag_moves_from_index() {
    let mut selector = selector();

    assert!(selector.press(0.0, 50.0));
    assert!(matches!(
        selector.state(),
        DragState::DraggingLeftHandle { .. }
    ));
    assert!(selector.move_to(300.0, 50.0));
    assert_eq!(selector.window(), window(300, 999));

    assert!(!selector.move_to(990.0, 50.0));
    assert_eq!(selector.window(), window(300, 999));

    assert!(selector.move_to(-40.0, 50.0));
    assert_eq!(selector.pixel_edges(), (0.0, 1000.0));
    assert_eq!(selector.window(), window(0, 999));
}

#[test]
fn band_drag_shifts_both_edges_and_clamps_as_a_whole() {
    let mut selector = selector();
    shrink_right_to(&mut selector, 500.0);

    assert_eq!(selector.hit_test(250.0, 50.0), Some(HitRegion::Band));
    assert!(selector.press(250.0, 50.0));

    assert!(selector.move_to(350.0, 50.0));
    assert_eq!(selector.pixel_edges(), (100.0, 600.0));
    assert_eq!(selector.window(), window(100, 600));

    assert!(selector.move_to(2_000.0, 50.0));
    assert_eq!(selector.pixel_edges(), (500.0, 1000.0));
    assert_eq!(selector.window(), window(500, 999));

    assert!(selector.move_to(-5_000.0, 50.0));
    assert_eq!(selector.pixel_edges(), (0.0, 500.0));
    assert_eq!(selector.window(), window(0, 500));

    // Already pinned at the left edge.
    assert!(!selector.move_to(-6_000.0, 50.0));
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut selector = selector();

    assert!(!selector.move_to(300.0, 50.0));
    assert_eq!(selector.window(), window(0, 999));
}

#[test]
fn press_during_drag_is_ignored_and_release_returns_to_idle() {
    let mut selector = selector();
    assert!(selector.press(1000.0, 50.0));
    assert!(!selector.press(0.0, 50.0));
    assert!(matches!(
        selector.state(),
        DragState::DraggingRightHandle { .. }
    ));

    selector.release();
    assert_eq!(selector.state(), DragState::Idle);
    selector.release();
    assert_eq!(selector.state(), DragState::Idle);
}

#[test]
fn presses_outside_selection_do_not_start_a_drag() {
    let mut selector = selector();
    shrink_right_to(&mut selector, 500.0);

    assert_eq!(selector.hit_test(700.0, 50.0), None);
    assert_eq!(selector.hit_test(250.0, 200.0), None);
    assert_eq!(selector.hit_test(250.0, -20.0), None);
    assert!(!selector.press(700.0, 50.0));
    assert_eq!(selector.state(), DragState::Idle);
}

#[test]
fn overlapping_regions_follow_hit_priority() {
    let mut edge_first = selector();
    shrink_right_to(&mut edge_first, 500.0);
    assert!(edge_first.press(0.0, 50.0));
    assert!(edge_first.move_to(480.0, 50.0));
    edge_first.release();
    assert_eq!(edge_first.window(), window(480, 500));

    assert_eq!(edge_first.hit_test(487.0, 50.0), Some(HitRegion::LeftHandle));
    assert_eq!(edge_first.hit_test(495.0, 50.0), Some(HitRegion::RightHandle));

    let config = RangeSelectorConfig {
        hit_priority: HitPriority::BandFirst,
        ..RangeSelectorConfig::default()
    };
    let mut band_first = RangeSelector::new(SAMPLES, Viewport::new(1000, 100), config);
    shrink_right_to(&mut band_first, 500.0);
    assert!(band_first.press(0.0, 50.0));
    assert!(band_first.move_to(480.0, 50.0));
    band_first.release();

    assert_eq!(band_first.hit_test(487.0, 50.0), Some(HitRegion::Band));
    assert_eq!(band_first.hit_test(505.0, 50.0), Some(HitRegion::RightHandle));
    assert_eq!(band_first.hit_test(470.0, 50.0), Some(HitRegion::LeftHandle));
}

#[test]
fn resize_keeps_fractional_edges_and_cancels_drag() {
    let mut selector = selector();
    shrink_right_to(&mut selector, 500.0);
    assert!(selector.press(250.0, 50.0));

    let changed = selector.resize(Viewport::new(500, 80));
    assert!(!changed);
    assert_eq!(selector.pixel_edges(), (0.0, 250.0));
    assert_eq!(selector.window(), window(0, 500));
    assert_eq!(selector.state(), DragState::Idle);
}

#[test]
fn shrinking_the_strip_widens_a_narrow_selection_to_the_new_minimum_span() {
    let mut selector =
        RangeSelector::new(100, Viewport::new(400, 100), RangeSelectorConfig::default());
    assert!(selector.press(400.0, 50.0));
    assert!(selector.move_to(20.0, 50.0));
    selector.release();
    assert_eq!(selector.window().span(), 5);
    assert_eq!(selector.min_span_indices(), 4);

    assert!(selector.resize(Viewport::new(100, 80)));
    assert_eq!(selector.min_span_indices(), 16);
    assert_eq!(selector.min_gap_px(), 17.0);
    assert_eq!(selector.pixel_edges(), (0.0, 17.0));
    assert_eq!(
        selector.window(),
        ViewWindow::new(0, 17, 100).expect("valid window")
    );
}

#[test]
fn shrinking_the_strip_widens_leftwards_when_pinned_at_the_end() {
    let mut selector =
        RangeSelector::new(100, Viewport::new(400, 100), RangeSelectorConfig::default());
    assert!(selector.press(0.0, 50.0));
    assert!(selector.move_to(380.0, 50.0));
    selector.release();
    assert_eq!(
        selector.window(),
        ViewWindow::new(95, 99, 100).expect("valid window")
    );

    assert!(selector.resize(Viewport::new(100, 80)));
    assert_eq!(selector.pixel_edges(), (83.0, 100.0));
    assert_eq!(
        selector.window(),
        ViewWindow::new(83, 99, 100).expect("valid window")
    );
    assert!(selector.window().span() >= selector.min_span_indices());
}

#[test]
fn overlay_describes_shades_frame_and_handles() {
    let mut selector = selector();
    shrink_right_to(&mut selector, 500.0);
    assert!(selector.press(250.0, 50.0));
    assert!(selector.move_to(350.0, 50.0));
    selector.release();

    let drawport = Drawport::new(Viewport::new(1000, 100), 0.0, 616.0, 4.0);
    let overlay = selector.overlay(drawport);

    assert_eq!(overlay.unselected_left.x, 0.0);
    assert_eq!(overlay.unselected_left.width, 100.0);
    assert_eq!(overlay.unselected_left.y, 616.0);
    assert_eq!(overlay.unselected_left.height, 100.0);
    assert_eq!(overlay.unselected_right.x, 600.0);
    assert_eq!(overlay.unselected_right.width, 400.0);

    assert_eq!(overlay.frame_lines[0].y1, 617.5);
    assert_eq!(overlay.frame_lines[1].y1, 714.5);
    assert_eq!(overlay.frame_lines[0].x1, 100.0);
    assert_eq!(overlay.frame_lines[0].x2, 600.0);

    assert_eq!(overlay.handle_lines[0].x1, 106.0);
    assert_eq!(overlay.handle_lines[1].x1, 594.0);
    assert_eq!(overlay.handle_lines[0].y1, 619.0);
    assert_eq!(overlay.handle_lines[0].y2, 713.0);
    assert_eq!(overlay.frame_thickness_px, 3.0);
    assert_eq!(overlay.handle_width_px, 12.0);
}
