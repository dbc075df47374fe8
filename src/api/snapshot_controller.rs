use crate::error::{PlotError, PlotResult};
use crate::render::Renderer;

use super::{AxisLabelsSnapshot, PlotController, PlotSnapshot};

impl<R: Renderer> PlotController<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> PlotSnapshot {
        PlotSnapshot {
            surface: self.surface,
            plot_rect: self.plot_rect(),
            x_axis_rect: self.x_axis_rect(),
            y_axis_rect: self.y_axis_rect(),
            viewport: self.viewport(),
            background_extent: self.background_extent(),
            x_axis: AxisLabelsSnapshot::from(&self.x_labels),
            y_axis: AxisLabelsSnapshot::from(&self.y_labels),
            interaction_mode: self.interaction_mode(),
            stroke_scale: self.stroke_scale,
            readout: self.readout.clone(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
