use std::fmt;
use std::io::Write;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::core::{LabelMeasure, LabelSet};
use crate::error::{PlotError, PlotResult};
use crate::render::{
    Color, ContentTransform, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextVAlign,
};

/// Digits used to probe the font's line height.
const HEIGHT_PROBE: &str = "0123456789";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers that can draw into an external Cairo context (for example a
/// window toolkit's draw callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()>;
}

/// Cairo + Pango renderer for axis decorations.
///
/// Plotted content is drawn by the host; the last frame's
/// [`ContentTransform`] is kept so the host can apply it.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
    last_content: Option<ContentTransform>,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> PlotResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::WHITE,
            last_stats: CairoRenderStats::default(),
            last_content: None,
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> PlotResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    #[must_use]
    pub fn last_content(&self) -> Option<ContentTransform> {
        self.last_content
    }

    /// Encodes the current surface as PNG.
    pub fn write_png<W: Write>(&self, writer: &mut W) -> PlotResult<()> {
        self.surface.flush();
        self.surface
            .write_to_png(writer)
            .map_err(|err| PlotError::InvalidData(format!("failed to encode png: {err}")))
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> PlotResult<()> {
        frame.validate()?;

        apply_color(context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();

        for rect in &frame.rects {
            draw_rect(context, *rect)?;
            stats.rects_drawn += 1;
        }

        for line in &frame.lines {
            apply_color(context, line.color);
            context.set_line_width(line.stroke_width);
            context.move_to(line.x1, line.y1);
            context.line_to(line.x2, line.y2);
            context
                .stroke()
                .map_err(|err| map_backend_error("failed to stroke line", err))?;
            stats.lines_drawn += 1;
        }

        for text in &frame.texts {
            let layout = pangocairo::functions::create_layout(context);
            layout.set_font_description(Some(&font_for_size(text.font_size_px)));
            layout.set_text(&text.text);

            let (text_width, text_height) = layout.pixel_size();
            let x = match text.h_align {
                TextHAlign::Left => text.x,
                TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
                TextHAlign::Right => text.x - f64::from(text_width),
            };
            let y = match text.v_align {
                TextVAlign::Top => text.y,
                TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
            };

            apply_color(context, text.color);
            context.move_to(x, y);
            pangocairo::functions::show_layout(context, &layout);
            stats.texts_drawn += 1;
        }

        self.last_stats = stats;
        self.last_content = frame.content;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> PlotResult<()> {
        self.render_with_context(context, frame)
    }
}

enum MeasureMode {
    Horizontal { separator: String },
    Vertical { lines_per_label: f64 },
}

/// Label measurement backed by real Pango glyph metrics.
pub struct PangoLabelMeasure {
    context: Context,
    font: FontDescription,
    mode: MeasureMode,
}

impl PangoLabelMeasure {
    /// Width of all labels laid out in one line, each preceded by `separator`.
    pub fn horizontal(font_size_px: f64, separator: impl Into<String>) -> PlotResult<Self> {
        Self::with_mode(
            font_size_px,
            MeasureMode::Horizontal {
                separator: separator.into(),
            },
        )
    }

    /// Label count times `lines_per_label` times the font's digit height.
    pub fn vertical(font_size_px: f64, lines_per_label: f64) -> PlotResult<Self> {
        if !lines_per_label.is_finite() || lines_per_label <= 0.0 {
            return Err(PlotError::InvalidData(
                "lines per label must be finite and > 0".to_owned(),
            ));
        }
        Self::with_mode(font_size_px, MeasureMode::Vertical { lines_per_label })
    }

    fn with_mode(font_size_px: f64, mode: MeasureMode) -> PlotResult<Self> {
        if !font_size_px.is_finite() || font_size_px <= 0.0 {
            return Err(PlotError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|err| map_backend_error("failed to create measurement surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create measurement context", err))?;
        Ok(Self {
            context,
            font: font_for_size(font_size_px),
            mode,
        })
    }

    fn pixel_size(&self, text: &str) -> (i32, i32) {
        let layout = pangocairo::functions::create_layout(&self.context);
        layout.set_font_description(Some(&self.font));
        layout.set_text(text);
        layout.pixel_size()
    }
}

impl LabelMeasure for PangoLabelMeasure {
    fn measure(&self, labels: &LabelSet) -> f64 {
        match &self.mode {
            MeasureMode::Horizontal { separator } => {
                let mut all = String::new();
                for (text, _) in labels.iter() {
                    all.push_str(separator);
                    all.push_str(text);
                }
                f64::from(self.pixel_size(&all).0)
            }
            MeasureMode::Vertical { lines_per_label } => {
                let line_height = f64::from(self.pixel_size(HEIGHT_PROBE).1);
                labels.len() as f64 * lines_per_label * line_height
            }
        }
    }
}

impl fmt::Debug for PangoLabelMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = match &self.mode {
            MeasureMode::Horizontal { .. } => "horizontal",
            MeasureMode::Vertical { .. } => "vertical",
        };
        f.debug_struct("PangoLabelMeasure")
            .field("font", &self.font.to_string())
            .field("mode", &mode)
            .finish()
    }
}

fn font_for_size(font_size_px: f64) -> FontDescription {
    let mut font = FontDescription::from_string("Sans");
    font.set_absolute_size(font_size_px * f64::from(pango::SCALE));
    font
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn draw_rect(context: &Context, rect: RectPrimitive) -> PlotResult<()> {
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    apply_color(context, rect.fill_color);
    if rect.border_width > 0.0 {
        context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        apply_color(context, rect.border_color);
        context.set_line_width(rect.border_width);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke rectangle border", err))
    } else {
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> PlotError {
    PlotError::InvalidData(format!("{prefix}: {err}"))
}
