use serde::{Deserialize, Serialize};

use crate::core::label_format::validate_precision;
use crate::core::label_planner::{DEFAULT_MAX_LABELS, DEFAULT_MAX_REFINEMENTS};
use crate::core::{DEFAULT_SIGNIFICANT_DIGITS, LogicalViewport, SurfaceSize};
use crate::error::{PlotError, PlotResult};

/// Device space reserved around the plot rectangle.
///
/// The bottom strip hosts the x axis and the left strip hosts the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotMargins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotMargins {
    fn default() -> Self {
        Self {
            left: 60.0,
            right: 10.0,
            top: 10.0,
            bottom: 30.0,
        }
    }
}

impl PlotMargins {
    #[must_use]
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn validate(self) -> PlotResult<Self> {
        for (side, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "plot margin `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Public controller bootstrap configuration.
///
/// Serializable so hosts can keep plot setup next to the static plot it
/// decorates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub surface: SurfaceSize,
    pub viewport: LogicalViewport,
    #[serde(default)]
    pub margins: PlotMargins,
    #[serde(default = "default_precision")]
    pub x_precision: u8,
    #[serde(default = "default_precision")]
    pub y_precision: u8,
    #[serde(default = "default_precision")]
    pub readout_precision: u8,
    #[serde(default = "default_tick_length_px")]
    pub tick_length_px: f64,
    #[serde(default = "default_label_gap_px")]
    pub label_gap_px: f64,
    #[serde(default = "default_label_font_size_px")]
    pub label_font_size_px: f64,
    #[serde(default = "default_label_separator")]
    pub label_separator: String,
    #[serde(default = "default_vertical_lines_per_label")]
    pub vertical_lines_per_label: f64,
    /// Line height of the vertical estimator in font sizes.
    ///
    /// `1.0` treats a line as exactly one font size tall; the rendered
    /// bounding box of digits is closer to `1.15`. Glyph-accurate heights
    /// come from a backend measure such as `PangoLabelMeasure`.
    #[serde(default = "default_label_line_height_factor")]
    pub label_line_height_factor: f64,
    #[serde(default = "default_zoom_in_factor")]
    pub zoom_in_factor: f64,
    #[serde(default = "default_zoom_out_factor")]
    pub zoom_out_factor: f64,
    #[serde(default = "default_max_refinements")]
    pub max_refinements: usize,
    #[serde(default = "default_max_labels")]
    pub max_labels: usize,
}

impl PlotConfig {
    /// Creates a config with default margins, precision and zoom factors.
    #[must_use]
    pub fn new(surface: SurfaceSize, viewport: LogicalViewport) -> Self {
        Self {
            surface,
            viewport,
            margins: PlotMargins::default(),
            x_precision: default_precision(),
            y_precision: default_precision(),
            readout_precision: default_precision(),
            tick_length_px: default_tick_length_px(),
            label_gap_px: default_label_gap_px(),
            label_font_size_px: default_label_font_size_px(),
            label_separator: default_label_separator(),
            vertical_lines_per_label: default_vertical_lines_per_label(),
            label_line_height_factor: default_label_line_height_factor(),
            zoom_in_factor: default_zoom_in_factor(),
            zoom_out_factor: default_zoom_out_factor(),
            max_refinements: default_max_refinements(),
            max_labels: default_max_labels(),
        }
    }

    #[must_use]
    pub fn with_margins(mut self, margins: PlotMargins) -> Self {
        self.margins = margins;
        self
    }

    /// Sets significant digits for x labels, y labels and the cursor readout.
    #[must_use]
    pub fn with_precision(mut self, x: u8, y: u8, readout: u8) -> Self {
        self.x_precision = x;
        self.y_precision = y;
        self.readout_precision = readout;
        self
    }

    #[must_use]
    pub fn with_tick_geometry(mut self, tick_length_px: f64, label_gap_px: f64) -> Self {
        self.tick_length_px = tick_length_px;
        self.label_gap_px = label_gap_px;
        self
    }

    #[must_use]
    pub fn with_label_font_size_px(mut self, font_size_px: f64) -> Self {
        self.label_font_size_px = font_size_px;
        self
    }

    /// Sets the spacing allowances used by the built-in label estimators.
    #[must_use]
    pub fn with_label_spacing(
        mut self,
        separator: impl Into<String>,
        vertical_lines_per_label: f64,
    ) -> Self {
        self.label_separator = separator.into();
        self.vertical_lines_per_label = vertical_lines_per_label;
        self
    }

    #[must_use]
    pub fn with_label_line_height_factor(mut self, factor: f64) -> Self {
        self.label_line_height_factor = factor;
        self
    }

    /// Line height used by the built-in vertical label estimator.
    #[must_use]
    pub fn label_line_height_px(&self) -> f64 {
        self.label_font_size_px * self.label_line_height_factor
    }

    #[must_use]
    pub fn with_zoom_factors(mut self, zoom_in: f64, zoom_out: f64) -> Self {
        self.zoom_in_factor = zoom_in;
        self.zoom_out_factor = zoom_out;
        self
    }

    #[must_use]
    pub fn with_planner_limits(mut self, max_refinements: usize, max_labels: usize) -> Self {
        self.max_refinements = max_refinements;
        self.max_labels = max_labels;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.surface.validate()?;
        self.viewport.validate()?;
        self.margins.validate()?;
        validate_precision(self.x_precision)?;
        validate_precision(self.y_precision)?;
        validate_precision(self.readout_precision)?;

        for (name, value) in [
            ("tick_length_px", self.tick_length_px),
            ("label_gap_px", self.label_gap_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        for (name, value) in [
            ("label_font_size_px", self.label_font_size_px),
            ("vertical_lines_per_label", self.vertical_lines_per_label),
            ("label_line_height_factor", self.label_line_height_factor),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidData(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }

        if !self.zoom_in_factor.is_finite()
            || self.zoom_in_factor <= 0.0
            || self.zoom_in_factor >= 1.0
        {
            return Err(PlotError::InvalidData(
                "zoom in factor must be in (0, 1)".to_owned(),
            ));
        }
        if !self.zoom_out_factor.is_finite() || self.zoom_out_factor <= 1.0 {
            return Err(PlotError::InvalidData(
                "zoom out factor must be finite and > 1".to_owned(),
            ));
        }
        if self.max_refinements == 0 {
            return Err(PlotError::InvalidData(
                "planner max refinements must be >= 1".to_owned(),
            ));
        }
        if self.max_labels < 2 {
            return Err(PlotError::InvalidData(
                "planner max labels must be >= 2".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_precision() -> u8 {
    DEFAULT_SIGNIFICANT_DIGITS
}

fn default_tick_length_px() -> f64 {
    6.0
}

fn default_label_gap_px() -> f64 {
    2.0
}

fn default_label_font_size_px() -> f64 {
    12.0
}

fn default_label_separator() -> String {
    "____".to_owned()
}

fn default_vertical_lines_per_label() -> f64 {
    4.0
}

fn default_label_line_height_factor() -> f64 {
    1.0
}

fn default_zoom_in_factor() -> f64 {
    0.5
}

fn default_zoom_out_factor() -> f64 {
    2.0
}

fn default_max_refinements() -> usize {
    DEFAULT_MAX_REFINEMENTS
}

fn default_max_labels() -> usize {
    DEFAULT_MAX_LABELS
}
