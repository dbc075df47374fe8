use proptest::prelude::*;
use xyplot_nav::core::{
    AxisLabelPlanner, DevicePoint, DeviceRect, HorizontalTextMeasure, LabelMeasure, LogicalRange,
    LogicalViewport, VerticalStackMeasure, ViewTransform,
};

fn horizontal() -> HorizontalTextMeasure {
    HorizontalTextMeasure::new(12.0, "____")
}

proptest! {
    #[test]
    fn mapper_round_trip_property(
        left in -1_000.0f64..1_000.0,
        bottom in -1_000.0f64..1_000.0,
        logical_width in 1.0f64..10_000.0,
        logical_height in 1.0f64..10_000.0,
        device_width in 1.0f64..4_096.0,
        device_height in 1.0f64..4_096.0,
        x_factor in -0.5f64..1.5,
        y_factor in -0.5f64..1.5
    ) {
        let transform = ViewTransform::new(
            DeviceRect::new(40.0, 12.0, device_width, device_height),
            LogicalViewport::new(left, bottom, logical_width, logical_height),
        )
        .expect("valid transform");
        let device = DevicePoint::new(
            40.0 + x_factor * device_width,
            12.0 + y_factor * device_height,
        );

        let back = transform.point_to_device(transform.point_to_logical(device));
        prop_assert!((back.x - device.x).abs() <= 1e-7);
        prop_assert!((back.y - device.y).abs() <= 1e-7);
    }

    #[test]
    fn planner_never_returns_empty_and_respects_budget_or_floor(
        lo in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        budget in 0.0f64..2_000.0
    ) {
        let measure = horizontal();
        let plan = AxisLabelPlanner::default()
            .plan(LogicalRange::new(lo, lo + span), budget, &measure)
            .expect("plan");

        prop_assert!(!plan.labels.is_empty());
        prop_assert!(measure.measure(&plan.labels) <= budget || plan.labels.len() == 1);
    }

    #[test]
    fn planner_label_count_is_monotone_in_budget(
        lo in -10_000.0f64..10_000.0,
        span in 0.01f64..10_000.0,
        budget in 0.0f64..1_000.0,
        extra in 0.0f64..1_000.0
    ) {
        let range = LogicalRange::new(lo, lo + span);
        let planner = AxisLabelPlanner::default();

        for measure in [
            Box::new(horizontal()) as Box<dyn LabelMeasure>,
            Box::new(VerticalStackMeasure::new(12.0, 4.0)),
        ] {
            let small = planner.plan(range, budget, measure.as_ref()).expect("plan");
            let large = planner
                .plan(range, budget + extra, measure.as_ref())
                .expect("plan");
            prop_assert!(small.labels.len() <= large.labels.len());
        }
    }

    #[test]
    fn planner_texts_are_unique_and_spacing_is_nice(
        lo in -100_000.0f64..100_000.0,
        span in 0.01f64..100_000.0,
        budget in 50.0f64..2_000.0
    ) {
        let plan = AxisLabelPlanner::default()
            .plan(LogicalRange::new(lo, lo + span), budget, &horizontal())
            .expect("plan");

        let mut texts = plan.labels.texts();
        let count = texts.len();
        texts.sort_unstable();
        texts.dedup();
        prop_assert_eq!(texts.len(), count);

        if let Some(step) = plan.step {
            prop_assert!(matches!(step.mantissa(), 1 | 2 | 5));
            let values = plan.labels.values();
            let tolerance = step.value() * 1e-6 + 1e-12 * (lo.abs() + span);
            for pair in values.windows(2) {
                prop_assert!((pair[1] - pair[0] - step.value()).abs() <= tolerance);
            }
        }
    }

    #[test]
    fn planner_is_symmetric_in_range_direction(
        lo in -10_000.0f64..10_000.0,
        span in 0.0f64..10_000.0,
        budget in 0.0f64..1_000.0
    ) {
        let planner = AxisLabelPlanner::default();
        let measure = horizontal();
        let forward = planner
            .plan(LogicalRange::new(lo, lo + span), budget, &measure)
            .expect("plan");
        let reversed = planner
            .plan(LogicalRange::new(lo + span, lo), budget, &measure)
            .expect("plan");
        prop_assert_eq!(forward, reversed);
    }
}
