use serde::{Deserialize, Serialize};

use crate::core::{DeviceRect, Label, LabelPlan, LogicalViewport, NiceStep, SurfaceSize};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{CursorReadout, InteractionMode};

/// Serializable labels of one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelsSnapshot {
    pub labels: Vec<Label>,
    pub step: Option<NiceStep>,
}

impl From<&LabelPlan> for AxisLabelsSnapshot {
    fn from(plan: &LabelPlan) -> Self {
        Self {
            labels: plan.labels.to_labels(),
            step: plan.step,
        }
    }
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub surface: SurfaceSize,
    pub plot_rect: DeviceRect,
    pub x_axis_rect: DeviceRect,
    pub y_axis_rect: DeviceRect,
    pub viewport: LogicalViewport,
    pub background_extent: LogicalViewport,
    pub x_axis: AxisLabelsSnapshot,
    pub y_axis: AxisLabelsSnapshot,
    pub interaction_mode: InteractionMode,
    pub stroke_scale: f64,
    pub readout: Option<CursorReadout>,
}

impl PlotSnapshot {
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse snapshot: {e}")))
    }
}
