mod frame;
mod null_renderer;
mod primitives;

pub use frame::{ContentTransform, RenderFrame};
pub use null_renderer::NullRenderer;
pub use primitives::{
    Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive, TextVAlign,
};

use crate::error::PlotResult;

/// Contract implemented by any drawing surface.
///
/// Backends receive a fully built, validated `RenderFrame`, so drawing code
/// stays isolated from labeling and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> PlotResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoContextRenderer, CairoRenderStats, CairoRenderer, PangoLabelMeasure};
