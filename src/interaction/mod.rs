use serde::{Deserialize, Serialize};

use crate::core::DevicePoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Zoom button direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    /// Shrinks the visible logical extent.
    In,
    /// Grows the visible logical extent.
    Out,
}

/// Cursor position expressed in logical coordinates, with its display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorReadout {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// State captured at drag start and carried until the drag ends.
///
/// Origins are the drawn device positions of the plot and both axis strips
/// when the pointer went down; they are restored once the pan is committed
/// to the logical viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub plot_origin: DevicePoint,
    pub x_axis_origin: DevicePoint,
    pub y_axis_origin: DevicePoint,
    pub start_cursor: DevicePoint,
    pub prev_cursor: DevicePoint,
}

impl DragSession {
    #[must_use]
    pub fn begin(
        plot_origin: DevicePoint,
        x_axis_origin: DevicePoint,
        y_axis_origin: DevicePoint,
        cursor: DevicePoint,
    ) -> Self {
        Self {
            plot_origin,
            x_axis_origin,
            y_axis_origin,
            start_cursor: cursor,
            prev_cursor: cursor,
        }
    }

    /// Delta since the previous event; advances the previous cursor.
    pub fn advance(&mut self, cursor: DevicePoint) -> DevicePoint {
        let delta = cursor.delta_from(self.prev_cursor);
        self.prev_cursor = cursor;
        delta
    }

    /// Delta accumulated since the drag started.
    #[must_use]
    pub fn total_delta(self, cursor: DevicePoint) -> DevicePoint {
        cursor.delta_from(self.start_cursor)
    }
}

/// Pointer state owned by the plot controller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    drag: Option<DragSession>,
    cursor: Option<DevicePoint>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        if self.drag.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn drag_session(self) -> Option<DragSession> {
        self.drag
    }

    #[must_use]
    pub fn cursor(self) -> Option<DevicePoint> {
        self.cursor
    }

    /// Starts a drag; returns `false` and keeps the running session when one
    /// is already active.
    pub fn on_drag_start(&mut self, session: DragSession) -> bool {
        self.cursor = Some(session.start_cursor);
        if self.drag.is_some() {
            return false;
        }
        self.drag = Some(session);
        true
    }

    /// Incremental delta for a move event, or `None` when idle.
    pub fn on_drag_move(&mut self, cursor: DevicePoint) -> Option<DevicePoint> {
        self.cursor = Some(cursor);
        self.drag.as_mut().map(|session| session.advance(cursor))
    }

    /// Releases the session (drag end or cancel).
    pub fn on_drag_end(&mut self) -> Option<DragSession> {
        self.drag.take()
    }

    pub fn on_pointer_move(&mut self, cursor: DevicePoint) {
        self.cursor = Some(cursor);
    }
}
