use crate::core::{
    Axis, AxisLabelPlanner, DevicePoint, DeviceRect, LabelMeasure, LabelPlan, LogicalPoint,
    LogicalViewport, SurfaceSize, ViewTransform,
};
use crate::error::PlotResult;
use crate::interaction::{CursorReadout, InteractionMode, InteractionState};
use crate::render::Renderer;

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::{DrawnOrigins, PlotConfig, PlotLayout};

/// Interactivity facade for one static plot.
///
/// Hosts forward pointer, resize and zoom events; the controller keeps the
/// logical viewport, the drawn device positions and both axes' labels in sync
/// and hands a [`crate::render::RenderFrame`] to its renderer.
pub struct PlotController<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: PlotConfig,
    pub(super) surface: SurfaceSize,
    pub(super) layout: PlotLayout,
    pub(super) drawn: DrawnOrigins,
    pub(super) transform: ViewTransform,
    pub(super) interaction: InteractionState,
    pub(super) x_planner: AxisLabelPlanner,
    pub(super) y_planner: AxisLabelPlanner,
    pub(super) x_measure: Box<dyn LabelMeasure>,
    pub(super) y_measure: Box<dyn LabelMeasure>,
    pub(super) x_labels: LabelPlan,
    pub(super) y_labels: LabelPlan,
    pub(super) stroke_scale: f64,
    pub(super) readout: Option<CursorReadout>,
}

impl<R: Renderer> PlotController<R> {
    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    #[must_use]
    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.layout
    }

    #[must_use]
    pub fn view_transform(&self) -> ViewTransform {
        self.transform
    }

    #[must_use]
    pub fn viewport(&self) -> LogicalViewport {
        self.transform.viewport()
    }

    /// Logical rectangle the plot background covers.
    #[must_use]
    pub fn background_extent(&self) -> LogicalViewport {
        self.transform.viewport()
    }

    /// Plot rectangle at its drawn position (shifted while dragging).
    #[must_use]
    pub fn plot_rect(&self) -> DeviceRect {
        self.layout.plot.with_origin(self.drawn.plot)
    }

    #[must_use]
    pub fn x_axis_rect(&self) -> DeviceRect {
        self.layout.x_axis.with_origin(self.drawn.x_axis)
    }

    #[must_use]
    pub fn y_axis_rect(&self) -> DeviceRect {
        self.layout.y_axis.with_origin(self.drawn.y_axis)
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn x_labels(&self) -> &LabelPlan {
        &self.x_labels
    }

    #[must_use]
    pub fn y_labels(&self) -> &LabelPlan {
        &self.y_labels
    }

    #[must_use]
    pub fn labels(&self, axis: Axis) -> &LabelPlan {
        match axis {
            Axis::X => &self.x_labels,
            Axis::Y => &self.y_labels,
        }
    }

    /// Factor applied to content stroke widths; the product of all zoom factors.
    #[must_use]
    pub fn stroke_scale(&self) -> f64 {
        self.stroke_scale
    }

    /// Last readout produced by a pointer move outside of a drag.
    #[must_use]
    pub fn readout(&self) -> Option<&CursorReadout> {
        self.readout.as_ref()
    }

    #[must_use]
    pub fn to_device(&self, point: LogicalPoint) -> DevicePoint {
        self.transform.point_to_device(point)
    }

    #[must_use]
    pub fn to_logical(&self, point: DevicePoint) -> LogicalPoint {
        self.transform.point_to_logical(point)
    }

    pub fn render(&mut self) -> PlotResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> PlotResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_render_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
