use tracing::debug;

use crate::core::{
    Axis, AxisLabelPlanner, HorizontalTextMeasure, LabelMeasure, ViewTransform,
    VerticalStackMeasure,
};
use crate::error::PlotResult;
use crate::interaction::InteractionState;
use crate::render::Renderer;

use super::layout_helpers::resolve_plot_layout;
use super::view_controller::plan_axis;
use super::{PlotConfig, PlotController};

impl<R: Renderer> PlotController<R> {
    /// Creates a controller using the built-in label size estimators.
    pub fn new(renderer: R, config: PlotConfig) -> PlotResult<Self> {
        let x_measure = HorizontalTextMeasure::new(
            config.label_font_size_px,
            config.label_separator.clone(),
        );
        let y_measure = VerticalStackMeasure::new(
            config.label_line_height_px(),
            config.vertical_lines_per_label,
        );
        Self::with_label_measures(renderer, config, Box::new(x_measure), Box::new(y_measure))
    }

    /// Creates a controller measuring labels with caller-supplied metrics,
    /// e.g. real glyph extents from the drawing backend.
    pub fn with_label_measures(
        renderer: R,
        config: PlotConfig,
        x_measure: Box<dyn LabelMeasure>,
        y_measure: Box<dyn LabelMeasure>,
    ) -> PlotResult<Self> {
        config.validate()?;

        let layout = resolve_plot_layout(config.surface, config.margins)?;
        let transform = ViewTransform::new(layout.plot, config.viewport)?;
        let x_planner = planner(&config, config.x_precision)?;
        let y_planner = planner(&config, config.y_precision)?;

        let x_labels = plan_axis(x_planner, transform, Axis::X, x_measure.as_ref())?;
        let y_labels = plan_axis(y_planner, transform, Axis::Y, y_measure.as_ref())?;

        debug!(
            width = config.surface.width,
            height = config.surface.height,
            x_labels = x_labels.labels.len(),
            y_labels = y_labels.labels.len(),
            "plot controller initialized"
        );

        Ok(Self {
            renderer,
            surface: config.surface,
            drawn: layout.rest_origins(),
            layout,
            transform,
            interaction: InteractionState::default(),
            x_planner,
            y_planner,
            x_measure,
            y_measure,
            x_labels,
            y_labels,
            stroke_scale: 1.0,
            readout: None,
            config,
        })
    }
}

fn planner(config: &PlotConfig, precision: u8) -> PlotResult<AxisLabelPlanner> {
    AxisLabelPlanner::new(precision)?
        .with_max_refinements(config.max_refinements)?
        .with_max_labels(config.max_labels)
}
