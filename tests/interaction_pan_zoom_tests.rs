use approx::{assert_abs_diff_eq, assert_relative_eq};
use xyplot_nav::api::{PlotConfig, PlotController};
use xyplot_nav::core::{
    Axis, AxisLabelPlanner, DeviceRect, HorizontalTextMeasure, LogicalRange, LogicalViewport,
    SurfaceSize, VerticalStackMeasure,
};
use xyplot_nav::interaction::{InteractionMode, ZoomDirection};
use xyplot_nav::render::NullRenderer;

/// 400x300 surface with default margins: the plot is 330x260 at (60, 10)
/// and one logical unit maps to one device unit.
fn build_controller() -> PlotController<NullRenderer> {
    let config = PlotConfig::new(
        SurfaceSize::new(400, 300),
        LogicalViewport::new(0.0, 0.0, 330.0, 260.0),
    );
    PlotController::new(NullRenderer::default(), config).expect("controller init")
}

#[test]
fn drag_pans_viewport_and_restores_drawn_positions() {
    let mut controller = build_controller();
    let rest_plot = controller.plot_rect();

    assert!(controller.pointer_down(100.0, 100.0).expect("down"));
    assert_eq!(controller.interaction_mode(), InteractionMode::Dragging);

    controller.pointer_move(120.0, 90.0).expect("move");
    assert_eq!(controller.plot_rect(), DeviceRect::new(80.0, 0.0, 330.0, 260.0));
    controller.pointer_move(130.0, 80.0).expect("move");
    assert_eq!(controller.plot_rect(), DeviceRect::new(90.0, -10.0, 330.0, 260.0));
    // The viewport is only committed on release.
    assert_eq!(controller.viewport(), LogicalViewport::new(0.0, 0.0, 330.0, 260.0));

    assert!(controller.pointer_up(130.0, 80.0).expect("up"));
    assert_eq!(controller.interaction_mode(), InteractionMode::Idle);
    assert_eq!(controller.plot_rect(), rest_plot);

    let viewport = controller.viewport();
    assert_abs_diff_eq!(viewport.left, -30.0, epsilon = 1e-9);
    assert_abs_diff_eq!(viewport.bottom, -20.0, epsilon = 1e-9);
    assert_eq!(viewport.width, 330.0);
    assert_eq!(viewport.height, 260.0);
}

#[test]
fn axis_strips_follow_only_their_own_axis_while_dragging() {
    let mut controller = build_controller();
    let rest_x_axis = controller.x_axis_rect();
    let rest_y_axis = controller.y_axis_rect();

    controller.pointer_down(100.0, 100.0).expect("down");
    controller.pointer_move(125.0, 85.0).expect("move");

    assert_eq!(controller.x_axis_rect().x, rest_x_axis.x + 25.0);
    assert_eq!(controller.x_axis_rect().y, rest_x_axis.y);
    assert_eq!(controller.y_axis_rect().x, rest_y_axis.x);
    assert_eq!(controller.y_axis_rect().y, rest_y_axis.y - 15.0);

    controller.pointer_up(125.0, 85.0).expect("up");
    assert_eq!(controller.x_axis_rect(), rest_x_axis);
    assert_eq!(controller.y_axis_rect(), rest_y_axis);
}

#[test]
fn drag_end_relabels_against_panned_viewport() {
    let mut controller = build_controller();
    controller.pointer_down(100.0, 100.0).expect("down");
    controller.pointer_up(130.0, 80.0).expect("up");

    let expected_x = AxisLabelPlanner::default()
        .plan(
            LogicalRange::new(-30.0, 300.0),
            330.0,
            &HorizontalTextMeasure::new(12.0, "____"),
        )
        .expect("plan");
    let expected_y = AxisLabelPlanner::default()
        .plan(
            LogicalRange::new(-20.0, 240.0),
            260.0,
            &VerticalStackMeasure::new(12.0, 4.0),
        )
        .expect("plan");

    assert_eq!(controller.x_labels(), &expected_x);
    assert_eq!(controller.y_labels(), &expected_y);
}

#[test]
fn labels_are_not_recomputed_during_drag_moves() {
    let mut controller = build_controller();
    let x_before = controller.x_labels().clone();
    let y_before = controller.y_labels().clone();

    controller.pointer_down(100.0, 100.0).expect("down");
    controller.pointer_move(300.0, 250.0).expect("move");

    assert_eq!(controller.x_labels(), &x_before);
    assert_eq!(controller.y_labels(), &y_before);
}

#[test]
fn pointer_cancel_restores_positions_without_panning() {
    let mut controller = build_controller();
    let rest_plot = controller.plot_rect();

    controller.pointer_down(100.0, 100.0).expect("down");
    controller.pointer_move(150.0, 150.0).expect("move");
    assert!(controller.pointer_cancel());

    assert_eq!(controller.interaction_mode(), InteractionMode::Idle);
    assert_eq!(controller.plot_rect(), rest_plot);
    assert_eq!(controller.viewport(), LogicalViewport::new(0.0, 0.0, 330.0, 260.0));
    assert!(!controller.pointer_cancel());
    assert!(!controller.pointer_up(150.0, 150.0).expect("up without drag"));
}

#[test]
fn pointer_down_outside_plot_or_twice_does_not_restart_drag() {
    let mut controller = build_controller();

    assert!(!controller.pointer_down(10.0, 10.0).expect("outside plot"));
    assert_eq!(controller.interaction_mode(), InteractionMode::Idle);

    assert!(controller.pointer_down(100.0, 100.0).expect("down"));
    controller.pointer_move(110.0, 100.0).expect("move");
    assert!(!controller.pointer_down(110.0, 100.0).expect("second down"));

    controller.pointer_up(110.0, 100.0).expect("up");
    assert_abs_diff_eq!(controller.viewport().left, -10.0, epsilon = 1e-9);
}

#[test]
fn non_finite_pointer_coordinates_are_rejected() {
    let mut controller = build_controller();
    assert!(controller.pointer_down(f64::NAN, 10.0).is_err());
    assert!(controller.pointer_move(0.0, f64::INFINITY).is_err());
    assert!(controller.cursor_readout(f64::NAN, 0.0).is_err());
}

#[test]
fn zoom_scales_viewport_around_center_and_counter_scales_strokes() {
    let mut controller = build_controller();

    assert!(controller.zoom(ZoomDirection::In).expect("zoom in"));
    let viewport = controller.viewport();
    assert_abs_diff_eq!(viewport.left, 82.5, epsilon = 1e-9);
    assert_abs_diff_eq!(viewport.right(), 247.5, epsilon = 1e-9);
    assert_abs_diff_eq!(viewport.bottom, 65.0, epsilon = 1e-9);
    assert_abs_diff_eq!(viewport.top(), 195.0, epsilon = 1e-9);
    assert_abs_diff_eq!(controller.stroke_scale(), 0.5, epsilon = 1e-12);
    assert_eq!(controller.background_extent(), viewport);

    assert!(controller.zoom(ZoomDirection::Out).expect("zoom out"));
    let viewport = controller.viewport();
    assert_abs_diff_eq!(viewport.left, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(viewport.width, 330.0, epsilon = 1e-9);
    assert_abs_diff_eq!(controller.stroke_scale(), 1.0, epsilon = 1e-12);
}

#[test]
fn zoom_relabels_against_zoomed_viewport() {
    let mut controller = build_controller();
    controller.zoom_by(0.1).expect("zoom");

    let viewport = controller.viewport();
    let expected = AxisLabelPlanner::default()
        .plan(
            LogicalRange::new(viewport.left, viewport.right()),
            330.0,
            &HorizontalTextMeasure::new(12.0, "____"),
        )
        .expect("plan");
    assert_eq!(controller.x_labels(), &expected);
}

#[test]
fn repeated_zoom_stops_at_float_resolution_and_keeps_rendering() {
    let mut controller = build_controller();
    for _ in 0..1_100 {
        controller.zoom(ZoomDirection::In).expect("zoom in");
    }

    assert!(!controller.zoom(ZoomDirection::In).expect("stalled zoom"));
    let viewport = controller.viewport();
    let stroke_scale = controller.stroke_scale();
    assert!(viewport.width > 0.0);
    assert!(stroke_scale > 0.0);
    assert_relative_eq!(stroke_scale, viewport.width / 330.0, max_relative = 1e-9);
    controller.render().expect("render after deep zoom");

    assert!(controller.zoom(ZoomDirection::Out).expect("zoom out"));
    assert_relative_eq!(
        controller.stroke_scale(),
        controller.viewport().width / 330.0,
        max_relative = 1e-9
    );
}

#[test]
fn zoom_is_ignored_while_dragging_and_rejects_bad_factors() {
    let mut controller = build_controller();
    controller.pointer_down(100.0, 100.0).expect("down");

    assert!(!controller.zoom(ZoomDirection::In).expect("ignored zoom"));
    assert_eq!(controller.stroke_scale(), 1.0);

    assert!(controller.zoom_by(0.0).is_err());
    assert!(controller.zoom_by(f64::NAN).is_err());
}

#[test]
fn resize_keeps_viewport_and_replaces_plot_rect() {
    let mut controller = build_controller();
    controller.resize(500, 400).expect("resize");

    assert_eq!(controller.surface(), SurfaceSize::new(500, 400));
    assert_eq!(controller.plot_rect(), DeviceRect::new(60.0, 10.0, 430.0, 360.0));
    assert_eq!(controller.viewport(), LogicalViewport::new(0.0, 0.0, 330.0, 260.0));
    assert_eq!(controller.view_transform().device_span(Axis::X), 430.0);
}

#[test]
fn resize_cancels_running_drag() {
    let mut controller = build_controller();
    controller.pointer_down(100.0, 100.0).expect("down");
    controller.pointer_move(140.0, 100.0).expect("move");

    controller.resize(600, 300).expect("resize");
    assert_eq!(controller.interaction_mode(), InteractionMode::Idle);
    assert_eq!(controller.plot_rect(), DeviceRect::new(60.0, 10.0, 530.0, 260.0));
    assert_eq!(controller.viewport().left, 0.0);
}

#[test]
fn resize_too_small_for_margins_is_rejected_without_side_effects() {
    let mut controller = build_controller();
    assert!(controller.resize(50, 30).is_err());
    assert!(controller.resize(0, 300).is_err());
    assert_eq!(controller.surface(), SurfaceSize::new(400, 300));
    assert_eq!(controller.plot_rect(), DeviceRect::new(60.0, 10.0, 330.0, 260.0));
}

#[test]
fn pointer_move_outside_drag_updates_cursor_readout() {
    let mut controller = build_controller();
    controller.pointer_move(225.0, 140.0).expect("move");

    let readout = controller.readout().expect("readout");
    assert_abs_diff_eq!(readout.x, 165.0, epsilon = 1e-9);
    assert_abs_diff_eq!(readout.y, 130.0, epsilon = 1e-9);
    assert_eq!(readout.text, "165 130");

    let origin = controller.cursor_readout(60.0, 270.0).expect("readout");
    assert_eq!(origin.text, "0 0");
}

#[test]
fn cursor_readout_uses_readout_precision() {
    let config = PlotConfig::new(
        SurfaceSize::new(400, 300),
        LogicalViewport::new(1_000.0, -0.5, 0.33, 1.0),
    )
    .with_precision(3, 3, 4);
    let controller = PlotController::new(NullRenderer::default(), config).expect("controller");

    let readout = controller.cursor_readout(60.0, 270.0).expect("readout");
    assert_eq!(readout.text, "1000 -0.5");
    let readout = controller.cursor_readout(390.0, 10.0).expect("readout");
    assert_eq!(readout.text, "1000 0.5");
}

#[test]
fn vertical_estimator_uses_configured_line_height() {
    let config = PlotConfig::new(
        SurfaceSize::new(400, 300),
        LogicalViewport::new(0.0, 0.0, 330.0, 260.0),
    )
    .with_label_line_height_factor(1.25);
    let controller = PlotController::new(NullRenderer::default(), config).expect("controller");

    let expected = AxisLabelPlanner::default()
        .plan(
            LogicalRange::new(0.0, 260.0),
            260.0,
            &VerticalStackMeasure::new(15.0, 4.0),
        )
        .expect("plan");
    assert_eq!(controller.y_labels(), &expected);
}
