use tracing::{debug, trace, warn};

use crate::core::{DevicePoint, format_significant};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{CursorReadout, DragSession};
use crate::render::Renderer;

use super::PlotController;

impl<R: Renderer> PlotController<R> {
    /// Starts a drag when the pointer goes down over the plot.
    ///
    /// Returns `false` when the point misses the plot or a drag is already
    /// running.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> PlotResult<bool> {
        let cursor = checked_point(x, y)?;
        if !self.plot_rect().contains(cursor) {
            trace!(x, y, "pointer down outside plot");
            return Ok(false);
        }

        let session = DragSession::begin(
            self.drawn.plot,
            self.drawn.x_axis,
            self.drawn.y_axis,
            cursor,
        );
        if !self.interaction.on_drag_start(session) {
            warn!(x, y, "pointer down while already dragging, ignored");
            return Ok(false);
        }
        self.readout = None;
        debug!(x, y, "drag started");
        Ok(true)
    }

    /// Shifts the drawn plot and axis strips while dragging, otherwise
    /// refreshes the cursor readout.
    ///
    /// The logical viewport and the labels stay untouched until the drag ends.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> PlotResult<()> {
        let cursor = checked_point(x, y)?;
        match self.interaction.on_drag_move(cursor) {
            Some(delta) => {
                self.drawn.plot = self.drawn.plot.translated(delta);
                self.drawn.x_axis.x += delta.x;
                self.drawn.y_axis.y += delta.y;
                trace!(dx = delta.x, dy = delta.y, "drag moved");
            }
            None => {
                self.interaction.on_pointer_move(cursor);
                self.readout = Some(self.cursor_readout(x, y)?);
            }
        }
        Ok(())
    }

    /// Commits the drag: the total device delta becomes a viewport pan, the
    /// drawn positions snap back and both axes are relabeled.
    ///
    /// Returns `false` when no drag was running.
    pub fn pointer_up(&mut self, x: f64, y: f64) -> PlotResult<bool> {
        let cursor = checked_point(x, y)?;
        let Some(session) = self.interaction.on_drag_end() else {
            trace!(x, y, "pointer up without drag");
            return Ok(false);
        };
        self.restore_drawn_origins(session);

        let delta = session.total_delta(cursor);
        self.transform = self.transform.panned_by_device(delta)?;
        self.relabel()?;

        let viewport = self.transform.viewport();
        debug!(
            dx = delta.x,
            dy = delta.y,
            left = viewport.left,
            bottom = viewport.bottom,
            "drag committed"
        );
        Ok(true)
    }

    /// Abandons a running drag without panning.
    pub fn pointer_cancel(&mut self) -> bool {
        let Some(session) = self.interaction.on_drag_end() else {
            return false;
        };
        self.restore_drawn_origins(session);
        debug!("drag cancelled");
        true
    }

    /// Logical position under a device point, formatted as `"<x> <y>"`.
    pub fn cursor_readout(&self, x: f64, y: f64) -> PlotResult<CursorReadout> {
        let logical = self.transform.point_to_logical(checked_point(x, y)?);
        let precision = self.config.readout_precision;
        Ok(CursorReadout {
            x: logical.x,
            y: logical.y,
            text: format!(
                "{} {}",
                format_significant(logical.x, precision),
                format_significant(logical.y, precision)
            ),
        })
    }

    fn restore_drawn_origins(&mut self, session: DragSession) {
        self.drawn.plot = session.plot_origin;
        self.drawn.x_axis = session.x_axis_origin;
        self.drawn.y_axis = session.y_axis_origin;
    }
}

fn checked_point(x: f64, y: f64) -> PlotResult<DevicePoint> {
    let point = DevicePoint::new(x, y);
    if !point.is_finite() {
        return Err(PlotError::InvalidData(
            "pointer coordinates must be finite".to_owned(),
        ));
    }
    Ok(point)
}
