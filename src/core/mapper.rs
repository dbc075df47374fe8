use serde::{Deserialize, Serialize};

use crate::core::types::{
    Axis, DevicePoint, DeviceRect, LogicalPoint, LogicalRange, LogicalViewport,
};
use crate::error::{PlotError, PlotResult};

/// Per-axis affine map `device = scale * logical + translation`.
///
/// The y axis carries a negative scale because logical y grows upward while
/// device y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAffine {
    pub scale: f64,
    pub translation: f64,
}

impl AxisAffine {
    #[must_use]
    pub fn apply(self, logical: f64) -> f64 {
        self.scale * logical + self.translation
    }

    #[must_use]
    pub fn invert(self, device: f64) -> f64 {
        (device - self.translation) / self.scale
    }
}

/// Mapping between a logical viewport and the device rectangle it is drawn into.
///
/// Both rectangles are validated on construction, so every conversion below is
/// infallible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    device: DeviceRect,
    viewport: LogicalViewport,
}

impl ViewTransform {
    pub fn new(device: DeviceRect, viewport: LogicalViewport) -> PlotResult<Self> {
        Ok(Self {
            device: device.validate()?,
            viewport: viewport.validate()?,
        })
    }

    #[must_use]
    pub fn device(self) -> DeviceRect {
        self.device
    }

    #[must_use]
    pub fn viewport(self) -> LogicalViewport {
        self.viewport
    }

    #[must_use]
    pub fn logical_range(self, axis: Axis) -> LogicalRange {
        self.viewport.range(axis)
    }

    /// Device extent along `axis` (plot width for x, height for y).
    #[must_use]
    pub fn device_span(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.device.width,
            Axis::Y => self.device.height,
        }
    }

    /// Logical units per device unit along `axis`.
    #[must_use]
    pub fn logical_per_device(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.viewport.width / self.device.width,
            Axis::Y => self.viewport.height / self.device.height,
        }
    }

    #[must_use]
    pub fn to_device(self, logical: f64, axis: Axis) -> f64 {
        match axis {
            Axis::X => {
                self.device.x
                    + (logical - self.viewport.left) / self.viewport.width * self.device.width
            }
            Axis::Y => {
                self.device.y
                    + (1.0 - (logical - self.viewport.bottom) / self.viewport.height)
                        * self.device.height
            }
        }
    }

    #[must_use]
    pub fn to_logical(self, device: f64, axis: Axis) -> f64 {
        match axis {
            Axis::X => {
                self.viewport.left
                    + (device - self.device.x) / self.device.width * self.viewport.width
            }
            Axis::Y => {
                self.viewport.bottom
                    + (1.0 - (device - self.device.y) / self.device.height) * self.viewport.height
            }
        }
    }

    #[must_use]
    pub fn point_to_device(self, point: LogicalPoint) -> DevicePoint {
        DevicePoint::new(
            self.to_device(point.x, Axis::X),
            self.to_device(point.y, Axis::Y),
        )
    }

    #[must_use]
    pub fn point_to_logical(self, point: DevicePoint) -> LogicalPoint {
        LogicalPoint::new(
            self.to_logical(point.x, Axis::X),
            self.to_logical(point.y, Axis::Y),
        )
    }

    /// Same mapping as [`ViewTransform::to_device`] expressed as a matrix row.
    #[must_use]
    pub fn affine(self, axis: Axis) -> AxisAffine {
        match axis {
            Axis::X => {
                let scale = self.device.width / self.viewport.width;
                AxisAffine {
                    scale,
                    translation: self.device.x - self.viewport.left * scale,
                }
            }
            Axis::Y => {
                let scale = -self.device.height / self.viewport.height;
                AxisAffine {
                    scale,
                    translation: self.device.bottom() - self.viewport.bottom * scale,
                }
            }
        }
    }

    /// Converts a device-space drag delta into the panned transform.
    ///
    /// Content follows the cursor: moving right reveals smaller x, moving
    /// down reveals larger y.
    pub fn panned_by_device(self, delta: DevicePoint) -> PlotResult<Self> {
        if !delta.is_finite() {
            return Err(PlotError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }

        let viewport = LogicalViewport {
            left: self.viewport.left - delta.x * self.logical_per_device(Axis::X),
            bottom: self.viewport.bottom + delta.y * self.logical_per_device(Axis::Y),
            ..self.viewport
        };
        Self::new(self.device, viewport)
    }

    /// Scales the viewport around its center on both axes.
    pub fn zoomed(self, factor: f64) -> PlotResult<Self> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(PlotError::InvalidData(
                "zoom factor must be finite and > 0".to_owned(),
            ));
        }

        let x = self.logical_range(Axis::X).zoomed(factor);
        let y = self.logical_range(Axis::Y).zoomed(factor);
        Self::new(self.device, LogicalViewport::from_ranges(x, y)?)
    }

    /// Keeps the logical viewport and swaps in a new device rectangle.
    pub fn with_device(self, device: DeviceRect) -> PlotResult<Self> {
        Self::new(device, self.viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform() -> ViewTransform {
        ViewTransform::new(
            DeviceRect::new(50.0, 20.0, 400.0, 300.0),
            LogicalViewport::new(-10.0, 0.0, 20.0, 3.0),
        )
        .expect("valid transform")
    }

    #[test]
    fn y_axis_is_flipped() {
        let transform = transform();
        assert_eq!(transform.to_device(3.0, Axis::Y), 20.0);
        assert_eq!(transform.to_device(0.0, Axis::Y), 320.0);
    }

    #[test]
    fn affine_matches_viewport_formulas() {
        let transform = transform();
        for axis in [Axis::X, Axis::Y] {
            let affine = transform.affine(axis);
            for value in [-10.0, -3.5, 0.0, 2.25, 10.0] {
                let expected = transform.to_device(value, axis);
                assert!((affine.apply(value) - expected).abs() <= 1e-9);
                assert!((affine.invert(expected) - value).abs() <= 1e-9);
            }
        }
    }
}
