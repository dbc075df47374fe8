use tracing::{debug, warn};

use crate::core::{
    Axis, AxisLabelPlanner, LabelMeasure, LabelPlan, SurfaceSize, ViewTransform,
};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{InteractionMode, ZoomDirection};
use crate::render::Renderer;

use super::PlotController;
use super::layout_helpers::resolve_plot_layout;

impl<R: Renderer> PlotController<R> {
    /// Applies the configured zoom-in or zoom-out factor.
    pub fn zoom(&mut self, direction: ZoomDirection) -> PlotResult<bool> {
        let factor = match direction {
            ZoomDirection::In => self.config.zoom_in_factor,
            ZoomDirection::Out => self.config.zoom_out_factor,
        };
        self.zoom_by(factor)
    }

    /// Scales the viewport by `factor` around its center on both axes.
    ///
    /// Ignored (returns `false`) while dragging, since the drawn positions
    /// are mid-flight, and once the viewport no longer changes at float
    /// resolution. Strokes are counter-scaled by the zoom actually applied.
    pub fn zoom_by(&mut self, factor: f64) -> PlotResult<bool> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(PlotError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }
        if self.interaction.mode() == InteractionMode::Dragging {
            warn!(factor, "zoom requested while dragging, ignored");
            return Ok(false);
        }

        let previous = self.transform.viewport();
        let zoomed = match self.transform.zoomed(factor) {
            Ok(zoomed) => zoomed,
            Err(PlotError::InvalidLogicalViewport { width, height }) => {
                warn!(factor, width, height, "zoom would degenerate the viewport, ignored");
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        let viewport = zoomed.viewport();
        if viewport == previous {
            debug!(factor, "viewport at float resolution, zoom ignored");
            return Ok(false);
        }

        self.transform = zoomed;
        self.stroke_scale *= viewport.width / previous.width;
        self.relabel()?;
        debug!(factor, stroke_scale = self.stroke_scale, "zoom applied");
        Ok(true)
    }

    /// Adopts a new surface size: the logical viewport is kept and the plot
    /// rectangle becomes the surface minus the margins. A running drag is
    /// cancelled first.
    pub fn resize(&mut self, width: u32, height: u32) -> PlotResult<()> {
        let surface = SurfaceSize::new(width, height);
        let layout = resolve_plot_layout(surface, self.config.margins)?;
        let transform = self.transform.with_device(layout.plot)?;

        if self.pointer_cancel() {
            debug!("drag cancelled by resize");
        }
        self.surface = surface;
        self.layout = layout;
        self.drawn = layout.rest_origins();
        self.transform = transform;
        self.relabel()?;
        debug!(width, height, "plot resized");
        Ok(())
    }

    /// Replaces the label measurement collaborators and relabels both axes.
    pub fn set_label_measures(
        &mut self,
        x_measure: Box<dyn LabelMeasure>,
        y_measure: Box<dyn LabelMeasure>,
    ) -> PlotResult<()> {
        self.x_measure = x_measure;
        self.y_measure = y_measure;
        self.relabel()
    }

    /// Recomputes both axes' labels against the current viewport.
    pub fn relabel(&mut self) -> PlotResult<()> {
        let x_labels = plan_axis(
            self.x_planner,
            self.transform,
            Axis::X,
            self.x_measure.as_ref(),
        )?;
        let y_labels = plan_axis(
            self.y_planner,
            self.transform,
            Axis::Y,
            self.y_measure.as_ref(),
        )?;
        self.x_labels = x_labels;
        self.y_labels = y_labels;
        Ok(())
    }
}

/// Plans one axis using its device extent as the label budget.
pub(super) fn plan_axis(
    planner: AxisLabelPlanner,
    transform: ViewTransform,
    axis: Axis,
    measure: &dyn LabelMeasure,
) -> PlotResult<LabelPlan> {
    planner.plan(
        transform.logical_range(axis),
        transform.device_span(axis),
        measure,
    )
}
