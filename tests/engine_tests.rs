use std::time::Duration;

use approx::assert_abs_diff_eq;
use timeline_chart::core::{Series, ValueBounds, ViewWindow, Viewport};
use timeline_chart::interaction::DragState;
use timeline_chart::render::{Color, NullRenderer};
use timeline_chart::{ChartEngine, ChartEngineConfig, ChartError, ViewportKind};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn config() -> ChartEngineConfig {
    ChartEngineConfig::new(Viewport::new(1000, 600), Viewport::new(1000, 100))
}

fn engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(NullRenderer::default(), config()).expect("engine init")
}

fn scenario_engine() -> ChartEngine<NullRenderer> {
    let mut engine = engine();
    engine
        .load_dataset(
            vec![0, 1, 2, 3, 4],
            vec![Series::new(
                "y0",
                "Series 0",
                Color::BLACK,
                vec![10.0, 20.0, 5.0, 30.0, 15.0],
            )],
        )
        .expect("load dataset");
    engine
}

fn two_series_engine() -> ChartEngine<NullRenderer> {
    let mut engine = engine();
    engine
        .load_dataset(
            vec![100, 200],
            vec![
                Series::new("a", "A", Color::BLACK, vec![1.0, 9.0]),
                Series::new("b", "B", Color::BLACK, vec![100.0, 200.0]),
            ],
        )
        .expect("load dataset");
    engine
}

fn ramp_engine(len: usize) -> ChartEngine<NullRenderer> {
    let mut engine = engine();
    engine
        .load_dataset(
            (0..len as i64).collect(),
            vec![Series::new(
                "ramp",
                "Ramp",
                Color::BLACK,
                (0..len).map(|i| i as f64).collect(),
            )],
        )
        .expect("load dataset");
    engine
}

#[test]
fn invalid_config_is_rejected() {
    let config = ChartEngineConfig::new(Viewport::new(0, 600), Viewport::new(1000, 100));
    let result = ChartEngine::new(NullRenderer::default(), config);
    assert!(matches!(result, Err(ChartError::InvalidViewport { .. })));
}

#[test]
fn load_dataset_snaps_bounds_and_selects_everything() {
    let engine = scenario_engine();

    assert_eq!(engine.view_window(), Some(ViewWindow::full(5)));
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(5.0, 30.0)));
    assert_eq!(engine.overview_bounds(), Some(ValueBounds::new(5.0, 30.0)));
    assert!(engine.is_series_enabled("y0"));
    assert!(!engine.is_animating());
    assert_eq!(engine.drag_state(), DragState::Idle);
}

#[test]
fn rejected_load_keeps_previous_state() {
    let mut engine = scenario_engine();

    let err = engine
        .load_dataset(
            vec![0, 2, 1],
            vec![Series::new("z", "Z", Color::BLACK, vec![1.0, 2.0, 3.0])],
        )
        .expect_err("non-monotonic timestamps");
    assert!(matches!(err, ChartError::NonMonotonicTimestamps { index: 2 }));

    let err = engine
        .load_dataset(
            vec![0, 1, 2],
            vec![Series::new("z", "Z", Color::BLACK, vec![1.0, 2.0])],
        )
        .expect_err("length mismatch");
    assert!(matches!(err, ChartError::SeriesLengthMismatch { .. }));

    assert_eq!(engine.dataset().map(|d| d.len()), Some(5));
    assert!(engine.is_series_enabled("y0"));
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(5.0, 30.0)));
}

#[test]
fn disabling_a_series_animates_main_and_overview_bounds() {
    let mut engine = two_series_engine();
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(1.0, 200.0)));

    assert!(engine.set_series_enabled("b", false).expect("known series"));
    assert_eq!(engine.main_target_bounds(), Some(ValueBounds::new(1.0, 9.0)));
    assert_eq!(engine.overview_target_bounds(), Some(ValueBounds::new(1.0, 9.0)));
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(1.0, 200.0)));
    assert!(engine.is_animating());

    assert!(engine.advance_frame(ms(0)));
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(1.0, 200.0)));
    assert!(engine.advance_frame(ms(100)));
    let halfway = engine.main_bounds().expect("displayed bounds");
    assert_abs_diff_eq!(halfway.min, 1.0, epsilon = 1e-9);
    assert_abs_diff_eq!(halfway.max, 104.5, epsilon = 1e-9);

    assert!(!engine.advance_frame(ms(200)));
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(1.0, 9.0)));
    assert_eq!(engine.overview_bounds(), Some(ValueBounds::new(1.0, 9.0)));
}

#[test]
fn repeated_visibility_request_is_noop() {
    let mut engine = two_series_engine();
    assert!(!engine.set_series_enabled("a", true).expect("known series"));
    assert!(!engine.is_animating());
}

#[test]
fn toggle_series_flips_and_reports_new_flag() {
    let mut engine = two_series_engine();

    assert!(!engine.toggle_series("a").expect("known series"));
    assert!(!engine.is_series_enabled("a"));
    assert_eq!(
        engine.main_target_bounds(),
        Some(ValueBounds::new(100.0, 200.0))
    );
    assert!(engine.toggle_series("a").expect("known series"));

    let err = engine.toggle_series("missing").expect_err("unknown series");
    assert!(matches!(err, ChartError::UnknownSeries(_)));
}

#[test]
fn visibility_commands_need_a_dataset() {
    let mut engine = engine();
    assert!(matches!(
        engine.set_series_enabled("a", false),
        Err(ChartError::EmptyDataset)
    ));
    assert!(!engine.pointer_press(0.0, 50.0));
    assert!(!engine.pointer_move(10.0, 50.0));
    engine.pointer_release();
}

#[test]
fn dragging_the_right_handle_retargets_only_main_bounds() {
    let mut engine = ramp_engine(100);

    assert!(engine.pointer_press(1000.0, 50.0));
    assert!(matches!(
        engine.drag_state(),
        DragState::DraggingRightHandle { .. }
    ));
    assert!(engine.pointer_move(500.0, 50.0));

    assert_eq!(engine.view_window(), Some(ViewWindow { from_index: 0, to_index: 50 }));
    assert_eq!(engine.main_target_bounds(), Some(ValueBounds::new(0.0, 50.0)));
    assert_eq!(engine.overview_target_bounds(), Some(ValueBounds::new(0.0, 99.0)));
    assert!(engine.is_animating());

    engine.pointer_release();
    assert_eq!(engine.drag_state(), DragState::Idle);

    engine.advance_frame(ms(0));
    engine.advance_frame(ms(1_000));
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(0.0, 50.0)));
    assert_eq!(engine.overview_bounds(), Some(ValueBounds::new(0.0, 99.0)));
}

#[test]
fn transition_after_idle_period_starts_at_next_frame() {
    let mut engine = ramp_engine(100);
    assert!(!engine.advance_frame(ms(16)));

    assert!(engine.pointer_press(1000.0, 50.0));
    assert!(engine.pointer_move(500.0, 50.0));
    engine.pointer_release();

    assert!(engine.advance_frame(ms(10_016)));
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(0.0, 99.0)));
    assert_eq!(engine.clock(), ms(10_016));

    assert!(engine.advance_frame(ms(10_116)));
    let halfway = engine.main_bounds().expect("displayed bounds");
    assert_abs_diff_eq!(halfway.max, 74.5, epsilon = 1e-9);

    assert!(!engine.advance_frame(ms(10_216)));
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(0.0, 50.0)));
}

#[test]
fn visibility_toggle_after_idle_period_still_animates() {
    let mut engine = two_series_engine();
    assert!(!engine.advance_frame(ms(50)));

    assert!(!engine.toggle_series("b").expect("known series"));
    assert!(engine.advance_frame(ms(60_000)));
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(1.0, 200.0)));

    assert!(engine.advance_frame(ms(60_100)));
    let halfway = engine.main_bounds().expect("displayed bounds");
    assert_abs_diff_eq!(halfway.max, 104.5, epsilon = 1e-9);
}

#[test]
fn disabling_every_series_freezes_bounds_and_drops_geometry() {
    let mut engine = two_series_engine();
    engine.set_series_enabled("a", false).expect("known series");
    engine.set_series_enabled("b", false).expect("known series");

    assert_eq!(engine.main_target_bounds(), None);
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(1.0, 200.0)));
    assert!(!engine.is_animating());

    let frame = engine.frame().expect("frame");
    assert!(frame.main_series.is_empty());
    assert!(frame.overview_series.is_empty());
    assert_eq!(frame.value_grid.len(), 6);
    engine.render().expect("render frozen frame");
}

#[test]
fn frame_collects_every_drawable_output() {
    let engine = scenario_engine();
    let frame = engine.frame().expect("frame");

    assert_eq!(frame.window, Some(ViewWindow::full(5)));
    assert_eq!(frame.main_series.len(), 1);
    assert_eq!(frame.main_series[0].segments.len(), 4);
    assert_eq!(frame.overview_series[0].segments.len(), 4);
    assert_eq!(frame.value_grid.len(), 6);
    assert_eq!(frame.value_grid[0].label, "5");
    assert_eq!(frame.value_grid[5].label, "30");
    assert_eq!(frame.time_labels.len(), 5);

    let overview_top = frame.overview_series[0]
        .segments
        .iter()
        .map(|s| s.y1.min(s.y2))
        .fold(f64::INFINITY, f64::min);
    assert_eq!(overview_top, 620.0);

    let selection = frame.selection.expect("selection overlay");
    assert_eq!(selection.unselected_left.width, 0.0);
    assert_eq!(selection.unselected_right.width, 0.0);
}

#[test]
fn render_lowers_frame_into_primitives() {
    let mut engine = scenario_engine();
    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.frames_rendered, 1);
    // 6 grid lines, 4 + 4 series segments, 2 frame lines, 2 handle bars.
    assert_eq!(renderer.last_line_count(), 18);
    // 6 value labels and 5 time labels.
    assert_eq!(renderer.last_text_count(), 11);

    let frame = renderer.last_frame.expect("rendered frame");
    assert_eq!(frame.surface, Viewport::new(1000, 716));
    assert_eq!(frame.rects.len(), 2);
    let time_label = frame
        .texts
        .iter()
        .find(|text| text.text == "Jan 1")
        .expect("time label");
    assert_eq!(time_label.y, 592.0);
}

#[test]
fn empty_engine_renders_empty_frame() {
    let mut engine = engine();
    let frame = engine.frame().expect("frame");
    assert_eq!(frame.window, None);
    assert!(frame.value_grid.is_empty());

    engine.render().expect("render");
    assert!(
        engine
            .renderer()
            .last_frame
            .as_ref()
            .is_some_and(|frame| frame.is_empty())
    );
}

#[test]
fn single_sample_dataset_disables_selection() {
    let mut engine = engine();
    engine
        .load_dataset(vec![42], vec![Series::new("y0", "Y", Color::BLACK, vec![3.0])])
        .expect("single sample");

    assert_eq!(engine.view_window(), Some(ViewWindow::full(1)));
    assert!(!engine.pointer_press(1000.0, 50.0));

    let frame = engine.frame().expect("frame");
    assert!(frame.selection.is_none());
    assert!(frame.main_series[0].segments.is_empty());
    assert_eq!(frame.time_labels.len(), 1);
    engine.render().expect("render");
}

#[test]
fn overview_resize_rescales_selection_and_cancels_drag() {
    let mut engine = ramp_engine(100);
    assert!(engine.pointer_press(1000.0, 50.0));
    assert!(engine.pointer_move(500.0, 50.0));

    engine
        .viewport_resized(ViewportKind::Overview, Viewport::new(500, 80))
        .expect("resize");
    assert_eq!(engine.drag_state(), DragState::Idle);
    assert_eq!(engine.selection_edges_px(), Some((0.0, 250.0)));
    assert_eq!(engine.view_window(), Some(ViewWindow { from_index: 0, to_index: 50 }));
    assert_eq!(engine.config().overview_viewport, Viewport::new(500, 80));
}

#[test]
fn shrinking_overview_widens_narrow_window_and_retargets_main() {
    let mut engine = ramp_engine(100);
    assert!(engine.pointer_press(1000.0, 50.0));
    assert!(engine.pointer_move(30.0, 50.0));
    engine.pointer_release();
    assert_eq!(engine.view_window(), Some(ViewWindow { from_index: 0, to_index: 3 }));

    engine
        .viewport_resized(ViewportKind::Overview, Viewport::new(100, 80))
        .expect("resize");
    assert_eq!(engine.view_window(), Some(ViewWindow { from_index: 0, to_index: 17 }));
    assert_eq!(engine.selection_edges_px(), Some((0.0, 17.0)));
    assert_eq!(engine.main_target_bounds(), Some(ValueBounds::new(0.0, 17.0)));
}

#[test]
fn invalid_resize_is_rejected_without_side_effects() {
    let mut engine = scenario_engine();
    let err = engine
        .viewport_resized(ViewportKind::Main, Viewport::new(1000, 0))
        .expect_err("zero height");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert_eq!(engine.config().main_viewport, Viewport::new(1000, 600));

    engine
        .viewport_resized(ViewportKind::Main, Viewport::new(800, 400))
        .expect("resize main");
    let frame = engine.frame().expect("frame");
    assert_eq!(frame.value_grid[0].x_end, 800.0);
    assert_eq!(frame.value_grid[0].y, 368.0);
}

#[test]
fn reload_resets_window_and_drag() {
    let mut engine = ramp_engine(100);
    assert!(engine.pointer_press(1000.0, 50.0));
    assert!(engine.pointer_move(500.0, 50.0));

    engine
        .load_dataset(
            vec![0, 1, 2],
            vec![Series::new("y0", "Y", Color::BLACK, vec![4.0, 2.0, 8.0])],
        )
        .expect("reload");
    assert_eq!(engine.view_window(), Some(ViewWindow::full(3)));
    assert_eq!(engine.drag_state(), DragState::Idle);
    assert_eq!(engine.main_bounds(), Some(ValueBounds::new(2.0, 8.0)));
    assert!(!engine.is_animating());
}
