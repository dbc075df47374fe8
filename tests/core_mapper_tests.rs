use approx::assert_abs_diff_eq;
use xyplot_nav::PlotError;
use xyplot_nav::core::{
    Axis, DevicePoint, DeviceRect, LogicalPoint, LogicalViewport, ViewTransform,
};

fn unit_transform() -> ViewTransform {
    ViewTransform::new(
        DeviceRect::new(0.0, 0.0, 200.0, 100.0),
        LogicalViewport::new(0.0, 0.0, 200.0, 100.0),
    )
    .expect("valid transform")
}

#[test]
fn to_device_follows_viewport_formulas() {
    let transform = ViewTransform::new(
        DeviceRect::new(60.0, 10.0, 330.0, 260.0),
        LogicalViewport::new(-5.0, 100.0, 10.0, 50.0),
    )
    .expect("valid transform");

    assert_abs_diff_eq!(transform.to_device(-5.0, Axis::X), 60.0, epsilon = 1e-12);
    assert_abs_diff_eq!(transform.to_device(5.0, Axis::X), 390.0, epsilon = 1e-12);
    assert_abs_diff_eq!(transform.to_device(0.0, Axis::X), 225.0, epsilon = 1e-12);

    assert_abs_diff_eq!(transform.to_device(150.0, Axis::Y), 10.0, epsilon = 1e-12);
    assert_abs_diff_eq!(transform.to_device(100.0, Axis::Y), 270.0, epsilon = 1e-12);
    assert_abs_diff_eq!(transform.to_device(125.0, Axis::Y), 140.0, epsilon = 1e-12);
}

#[test]
fn point_round_trip_recovers_device_point() {
    let transform = ViewTransform::new(
        DeviceRect::new(12.5, 40.0, 640.0, 480.0),
        LogicalViewport::new(-3.25, 1e3, 0.75, 250.0),
    )
    .expect("valid transform");

    let device = DevicePoint::new(333.3, 101.7);
    let back = transform.point_to_device(transform.point_to_logical(device));
    assert_abs_diff_eq!(back.x, device.x, epsilon = 1e-9);
    assert_abs_diff_eq!(back.y, device.y, epsilon = 1e-9);
}

#[test]
fn logical_origin_sits_at_device_bottom_left() {
    let point = unit_transform().point_to_device(LogicalPoint::new(0.0, 0.0));
    assert_eq!(point, DevicePoint::new(0.0, 100.0));
}

#[test]
fn pan_moves_content_with_the_cursor() {
    let panned = unit_transform()
        .panned_by_device(DevicePoint::new(30.0, -20.0))
        .expect("pan");
    let viewport = panned.viewport();

    assert_abs_diff_eq!(viewport.left, -30.0, epsilon = 1e-12);
    assert_abs_diff_eq!(viewport.bottom, -20.0, epsilon = 1e-12);
    assert_eq!(viewport.width, 200.0);
    assert_eq!(viewport.height, 100.0);
}

#[test]
fn pan_uses_logical_units_per_device_unit() {
    let transform = ViewTransform::new(
        DeviceRect::new(0.0, 0.0, 100.0, 100.0),
        LogicalViewport::new(0.0, 0.0, 10.0, 1.0),
    )
    .expect("valid transform");

    let viewport = transform
        .panned_by_device(DevicePoint::new(50.0, 50.0))
        .expect("pan")
        .viewport();
    assert_abs_diff_eq!(viewport.left, -5.0, epsilon = 1e-12);
    assert_abs_diff_eq!(viewport.bottom, 0.5, epsilon = 1e-12);
}

#[test]
fn zoom_keeps_viewport_center() {
    let zoomed = unit_transform().zoomed(0.5).expect("zoom").viewport();
    assert_abs_diff_eq!(zoomed.left, 50.0, epsilon = 1e-12);
    assert_abs_diff_eq!(zoomed.bottom, 25.0, epsilon = 1e-12);
    assert_abs_diff_eq!(zoomed.width, 100.0, epsilon = 1e-12);
    assert_abs_diff_eq!(zoomed.height, 50.0, epsilon = 1e-12);
}

#[test]
fn degenerate_rectangles_are_rejected() {
    let err = ViewTransform::new(
        DeviceRect::new(0.0, 0.0, 0.0, 100.0),
        LogicalViewport::new(0.0, 0.0, 1.0, 1.0),
    )
    .expect_err("zero width device rect");
    assert!(matches!(err, PlotError::InvalidDeviceRect { .. }));

    let err = ViewTransform::new(
        DeviceRect::new(0.0, 0.0, 10.0, 10.0),
        LogicalViewport::new(0.0, 0.0, 1.0, -1.0),
    )
    .expect_err("negative viewport height");
    assert!(matches!(err, PlotError::InvalidLogicalViewport { .. }));
}

#[test]
fn zoom_and_pan_reject_non_finite_input() {
    let transform = unit_transform();
    assert!(transform.zoomed(0.0).is_err());
    assert!(transform.zoomed(f64::NAN).is_err());
    assert!(
        transform
            .panned_by_device(DevicePoint::new(f64::INFINITY, 0.0))
            .is_err()
    );
}
