use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Size of the host drawing surface (window) in device units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn validate(self) -> PlotResult<Self> {
        if !self.is_valid() {
            return Err(PlotError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Plot axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Point in device space (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

impl DevicePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise `self - origin`.
    #[must_use]
    pub fn delta_from(self, origin: Self) -> Self {
        Self::new(self.x - origin.x, self.y - origin.y)
    }

    #[must_use]
    pub fn translated(self, delta: Self) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y)
    }
}

/// Point in logical (data) space (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LogicalPoint {
    pub x: f64,
    pub y: f64,
}

impl LogicalPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in device space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DeviceRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rejects rectangles that would make the coordinate mapping degenerate.
    pub fn validate(self) -> PlotResult<Self> {
        let finite = self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(PlotError::InvalidDeviceRect {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn origin(self) -> DevicePoint {
        DevicePoint::new(self.x, self.y)
    }

    #[must_use]
    pub fn with_origin(self, origin: DevicePoint) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn contains(self, point: DevicePoint) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// 1-D interval in logical coordinates for one axis.
///
/// Callers may hand in an inverted interval; [`LogicalRange::normalized`]
/// swaps the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalRange {
    pub min: f64,
    pub max: f64,
}

impl LogicalRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    #[must_use]
    pub fn normalized(self) -> Self {
        if self.min > self.max {
            Self::new(self.max, self.min)
        } else {
            self
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }

    #[must_use]
    pub fn center(self) -> f64 {
        (self.min + self.max) * 0.5
    }

    /// Scales the interval around its center: the new span is `factor * span`.
    #[must_use]
    pub fn zoomed(self, factor: f64) -> Self {
        Self::new(
            (self.min * (1.0 + factor) + self.max * (1.0 - factor)) * 0.5,
            (self.min * (1.0 - factor) + self.max * (1.0 + factor)) * 0.5,
        )
    }

    #[must_use]
    pub fn shifted(self, delta: f64) -> Self {
        Self::new(self.min + delta, self.max + delta)
    }
}

/// Visible logical rectangle, anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogicalViewport {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl LogicalViewport {
    #[must_use]
    pub const fn new(left: f64, bottom: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            bottom,
            width,
            height,
        }
    }

    /// Builds a viewport from per-axis ranges (each normalized first).
    pub fn from_ranges(x: LogicalRange, y: LogicalRange) -> PlotResult<Self> {
        let x = x.normalized();
        let y = y.normalized();
        Self::new(x.min, y.min, x.span(), y.span()).validate()
    }

    pub fn validate(self) -> PlotResult<Self> {
        let finite = self.left.is_finite()
            && self.bottom.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(PlotError::InvalidLogicalViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn top(self) -> f64 {
        self.bottom + self.height
    }

    #[must_use]
    pub fn range(self, axis: Axis) -> LogicalRange {
        match axis {
            Axis::X => LogicalRange::new(self.left, self.right()),
            Axis::Y => LogicalRange::new(self.bottom, self.top()),
        }
    }
}
