use crate::core::{AxisAffine, DeviceRect, SurfaceSize};
use crate::error::{PlotError, PlotResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Transform a backend applies to plotted content (the static vector plot).
///
/// `stroke_scale` multiplies content stroke widths expressed in logical units
/// so lines keep their on-screen thickness across zoom levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTransform {
    pub x: AxisAffine,
    pub y: AxisAffine,
    pub clip: DeviceRect,
    pub stroke_scale: f64,
}

impl ContentTransform {
    pub fn validate(self) -> PlotResult<()> {
        for affine in [self.x, self.y] {
            if !affine.scale.is_finite() || affine.scale == 0.0 || !affine.translation.is_finite()
            {
                return Err(PlotError::InvalidData(
                    "content transform must be finite and invertible".to_owned(),
                ));
            }
        }
        if !self.stroke_scale.is_finite() || self.stroke_scale <= 0.0 {
            return Err(PlotError::InvalidData(
                "stroke scale must be finite and > 0".to_owned(),
            ));
        }
        self.clip.validate().map(|_| ())
    }
}

/// Backend-agnostic scene for one plot draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub surface: SurfaceSize,
    pub content: Option<ContentTransform>,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(surface: SurfaceSize) -> Self {
        Self {
            surface,
            content: None,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_content(mut self, content: ContentTransform) -> Self {
        self.content = Some(content);
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        self.surface.validate()?;

        if let Some(content) = self.content {
            content.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }
}
