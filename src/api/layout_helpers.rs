use serde::{Deserialize, Serialize};

use crate::core::{DevicePoint, DeviceRect, SurfaceSize};
use crate::error::PlotResult;

use super::PlotMargins;

/// Rest positions of the plot and its two axis strips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub plot: DeviceRect,
    /// Strip below the plot, as wide as the plot.
    pub x_axis: DeviceRect,
    /// Strip left of the plot, as tall as the plot.
    pub y_axis: DeviceRect,
}

/// Drawn origins of the layout rectangles; they differ from the rest layout
/// only while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawnOrigins {
    pub plot: DevicePoint,
    pub x_axis: DevicePoint,
    pub y_axis: DevicePoint,
}

impl PlotLayout {
    #[must_use]
    pub fn rest_origins(self) -> DrawnOrigins {
        DrawnOrigins {
            plot: self.plot.origin(),
            x_axis: self.x_axis.origin(),
            y_axis: self.y_axis.origin(),
        }
    }
}

pub(super) fn resolve_plot_layout(
    surface: SurfaceSize,
    margins: PlotMargins,
) -> PlotResult<PlotLayout> {
    let surface = surface.validate()?;
    let margins = margins.validate()?;

    let plot = DeviceRect::new(
        margins.left,
        margins.top,
        f64::from(surface.width) - margins.left - margins.right,
        f64::from(surface.height) - margins.top - margins.bottom,
    )
    .validate()?;

    Ok(PlotLayout {
        plot,
        x_axis: DeviceRect::new(plot.x, plot.bottom(), plot.width, margins.bottom),
        y_axis: DeviceRect::new(0.0, plot.y, margins.left, plot.height),
    })
}
