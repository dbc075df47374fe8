use crate::core::Axis;
use crate::error::PlotResult;
use crate::render::{
    Color, ContentTransform, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, TextVAlign,
};

use super::PlotController;

const BACKGROUND_FILL: Color = Color::rgb(0.97, 0.97, 0.97);
const AXIS_COLOR: Color = Color::BLACK;
const TICK_STROKE_WIDTH: f64 = 1.0;
const BORDER_WIDTH: f64 = 1.0;
const READOUT_INSET_PX: f64 = 4.0;

impl<R: Renderer> PlotController<R> {
    /// Builds the decoration frame for the current state.
    ///
    /// Ticks follow their axis strip: while dragging the x strip carries only
    /// the horizontal shift and the y strip only the vertical one.
    pub fn build_render_frame(&self) -> PlotResult<RenderFrame> {
        let plot = self.plot_rect();
        let x_axis = self.x_axis_rect();
        let y_axis = self.y_axis_rect();
        let x_shift = x_axis.x - self.layout.x_axis.x;
        let y_shift = y_axis.y - self.layout.y_axis.y;
        let tick = self.config.tick_length_px;
        let gap = self.config.label_gap_px;
        let font_size = self.config.label_font_size_px;

        let content_view = self.transform.with_device(plot)?;
        let mut frame = RenderFrame::new(self.surface)
            .with_content(ContentTransform {
                x: content_view.affine(Axis::X),
                y: content_view.affine(Axis::Y),
                clip: plot,
                stroke_scale: self.stroke_scale,
            })
            .with_rect(
                RectPrimitive::new(plot.x, plot.y, plot.width, plot.height, BACKGROUND_FILL)
                    .with_border(BORDER_WIDTH, AXIS_COLOR),
            );

        for (text, value) in self.x_labels.labels.iter() {
            let x = self.transform.to_device(value, Axis::X) + x_shift;
            let top = x_axis.y;
            if tick > 0.0 {
                frame = frame.with_line(LinePrimitive::new(
                    x,
                    top,
                    x,
                    top + tick,
                    TICK_STROKE_WIDTH,
                    AXIS_COLOR,
                ));
            }
            frame = frame.with_text(TextPrimitive::new(
                text,
                x,
                top + tick + gap,
                font_size,
                AXIS_COLOR,
                TextHAlign::Center,
                TextVAlign::Top,
            ));
        }

        for (text, value) in self.y_labels.labels.iter() {
            let y = self.transform.to_device(value, Axis::Y) + y_shift;
            let right = y_axis.right();
            if tick > 0.0 {
                frame = frame.with_line(LinePrimitive::new(
                    right - tick,
                    y,
                    right,
                    y,
                    TICK_STROKE_WIDTH,
                    AXIS_COLOR,
                ));
            }
            frame = frame.with_text(TextPrimitive::new(
                text,
                right - tick - gap,
                y,
                font_size,
                AXIS_COLOR,
                TextHAlign::Right,
                TextVAlign::Middle,
            ));
        }

        if let Some(readout) = &self.readout {
            frame = frame.with_text(TextPrimitive::new(
                readout.text.clone(),
                f64::from(self.surface.width) - READOUT_INSET_PX,
                READOUT_INSET_PX,
                font_size,
                AXIS_COLOR,
                TextHAlign::Right,
                TextVAlign::Top,
            ));
        }

        Ok(frame)
    }
}
