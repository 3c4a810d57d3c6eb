use crate::draw::{DrawingAction, render_action, render_text};
use crate::input::tool::Tool;
use crate::util;

use super::{DrawingState, InputState};

/// Builds the action a drag with `tool` from start to end would commit.
///
/// Returns `None` for the text tool, which never produces a drag shape.
pub(crate) fn drag_action(
    tool: Tool,
    start_x: i32,
    start_y: i32,
    end_x: i32,
    end_y: i32,
) -> Option<DrawingAction> {
    match tool {
        Tool::Line => Some(DrawingAction::Line {
            x1: start_x,
            y1: start_y,
            x2: end_x,
            y2: end_y,
        }),
        Tool::Rect => Some(DrawingAction::Rectangle {
            x1: start_x,
            y1: start_y,
            x2: end_x,
            y2: end_y,
        }),
        Tool::Circle => Some(DrawingAction::Circle {
            cx: start_x,
            cy: start_y,
            edge_x: end_x,
            edge_y: end_y,
        }),
        Tool::Text => None,
    }
}

impl InputState {
    /// Resolves a drag offset into the end point of the current drag.
    ///
    /// Offsets snap independently of the start point. With Shift held the
    /// rectangle tool forces a square whose height follows the vertical drag
    /// direction. Everything stays fractional until the final truncation to
    /// whole pixels.
    pub(crate) fn drag_end_point(&self, dx: f64, dy: f64) -> Option<(i32, i32)> {
        let DrawingState::Drawing {
            tool,
            start_x,
            start_y,
            ..
        } = &self.state
        else {
            return None;
        };

        let dx = self.snap(dx);
        let dy = self.snap(dy);
        let end_y = if *tool == Tool::Rect && self.modifiers.shift {
            start_y + util::square_height(dx, dy)
        } else {
            start_y + dy
        };
        Some(((start_x + dx) as i32, end_y as i32))
    }

    /// Returns the shape currently being dragged for live preview.
    ///
    /// # Returns
    /// - `Some(DrawingAction)` while dragging a line, rectangle or circle
    /// - `None` if idle, typing, or the offset cannot be resolved
    pub fn get_provisional_action(&self, dx: f64, dy: f64) -> Option<DrawingAction> {
        let DrawingState::Drawing {
            tool,
            start_x,
            start_y,
            ..
        } = &self.state
        else {
            return None;
        };
        let (end_x, end_y) = self.drag_end_point(dx, dy)?;
        drag_action(*tool, *start_x as i32, *start_y as i32, end_x, end_y)
    }

    /// Restores the snapshot and strokes the provisional shape onto the canvas.
    pub(super) fn render_drag_preview(&self, dx: f64, dy: f64) {
        let Some(canvas) = &self.canvas else {
            return;
        };
        let Some(action) = self.get_provisional_action(dx, dy) else {
            return;
        };

        let result = canvas.restore_snapshot().and_then(|_| {
            let ctx = canvas.context()?;
            render_action(&ctx, &action, &self.style)
        });
        if let Err(err) = result {
            log::warn!("Failed to render {} preview: {}", action.kind_name(), err);
        }
    }

    /// Restores the snapshot and draws the text typed so far at its anchor.
    pub(super) fn render_text_preview(&self) {
        let DrawingState::TextInput { x, y, buffer } = &self.state else {
            return;
        };
        let Some(canvas) = &self.canvas else {
            return;
        };

        let result = canvas.restore_snapshot().and_then(|_| {
            let ctx = canvas.context()?;
            render_text(&ctx, *x, *y, buffer, &self.style)
        });
        if let Err(err) = result {
            log::warn!("Failed to render text preview: {}", err);
        }
    }
}
