use crate::draw::DrawingAction;
use crate::input::{events::MouseButton, tool::Tool};

use super::preview::drag_action;
use super::{DrawingState, InputState};

impl InputState {
    /// Processes a mouse button press event.
    ///
    /// # Behavior
    /// - Left press with the text tool, or while typing: a text click
    /// - Left press otherwise: begins a drag
    /// - Right press: cancels the active gesture
    ///
    /// Positions are surface coordinates as delivered by the compositor and
    /// may be fractional.
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        match button {
            MouseButton::Left => {
                if matches!(self.state, DrawingState::TextInput { .. }) || self.tool == Tool::Text
                {
                    self.click(x, y);
                } else {
                    self.drag_begin(x, y);
                }
            }
            MouseButton::Right => self.cancel_gesture(),
            MouseButton::Middle => {}
        }
    }

    /// Processes mouse motion; while dragging, updates the preview.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        if let DrawingState::Drawing {
            press_x, press_y, ..
        } = self.state
        {
            self.drag_update(x - press_x, y - press_y);
        }
    }

    /// Processes mouse button release events; a left release finishes the drag.
    pub fn on_mouse_release(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }

        if let DrawingState::Drawing {
            press_x, press_y, ..
        } = self.state
        {
            self.drag_end(x - press_x, y - press_y);
        }
    }

    /// Starts a drag at `(x, y)`.
    ///
    /// Only valid from Idle with a shape tool selected. The canvas is
    /// snapshotted so previews can be erased, and the start point is snapped
    /// to the grid when snapping is on.
    pub fn drag_begin(&mut self, x: f64, y: f64) {
        if !matches!(self.state, DrawingState::Idle) || self.tool == Tool::Text {
            return;
        }

        if let Some(canvas) = &self.canvas
            && let Err(err) = canvas.take_snapshot()
        {
            log::warn!("Failed to snapshot canvas: {}", err);
        }

        self.state = DrawingState::Drawing {
            tool: self.tool,
            start_x: self.snap(x),
            start_y: self.snap(y),
            press_x: x,
            press_y: y,
        };
        log::debug!(
            "Drag started with {} tool at ({:.1}, {:.1})",
            self.tool.label(),
            x,
            y
        );
    }

    /// Redraws the provisional shape for a drag offset of `(dx, dy)`.
    pub fn drag_update(&mut self, dx: f64, dy: f64) {
        if !matches!(self.state, DrawingState::Drawing { .. }) {
            return;
        }
        self.render_drag_preview(dx, dy);
        self.needs_redraw = true;
    }

    /// Finishes the drag: commits the shape and replays the log.
    pub fn drag_end(&mut self, dx: f64, dy: f64) {
        let Some((end_x, end_y)) = self.drag_end_point(dx, dy) else {
            return;
        };
        let DrawingState::Drawing {
            tool,
            start_x,
            start_y,
            ..
        } = std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return;
        };

        if let Some(action) = drag_action(tool, start_x as i32, start_y as i32, end_x, end_y) {
            self.log.append(action);
        }
        self.redraw();
    }

    /// Handles a primary click for text entry.
    ///
    /// While typing, the click commits the buffer. Otherwise, with the text
    /// tool selected, it starts typing at `(x, y)`, truncated to whole pixels.
    pub fn click(&mut self, x: f64, y: f64) {
        match self.state {
            DrawingState::TextInput { .. } => self.commit_text(),
            DrawingState::Idle if self.tool == Tool::Text => self.begin_text(x as i32, y as i32),
            _ => {}
        }
    }

    fn begin_text(&mut self, x: i32, y: i32) {
        if let Some(canvas) = &self.canvas
            && let Err(err) = canvas.take_snapshot()
        {
            log::warn!("Failed to snapshot canvas: {}", err);
        }

        self.state = DrawingState::TextInput {
            x,
            y,
            buffer: String::new(),
        };
        self.needs_redraw = true;
        log::debug!("Text entry started at ({}, {})", x, y);
    }

    /// Commits the typed buffer as a text action and returns to Idle.
    ///
    /// An empty buffer still commits.
    pub fn commit_text(&mut self) {
        let DrawingState::TextInput { x, y, buffer } =
            std::mem::replace(&mut self.state, DrawingState::Idle)
        else {
            return;
        };

        self.log.append(DrawingAction::Text { x, y, text: buffer });
        self.redraw();
    }

    /// Abandons the current drag or text entry, erasing its preview.
    pub fn cancel_gesture(&mut self) {
        if matches!(self.state, DrawingState::Idle) {
            return;
        }

        if let Some(canvas) = &self.canvas
            && let Err(err) = canvas.restore_snapshot()
        {
            log::warn!("Failed to restore canvas snapshot: {}", err);
        }
        self.state = DrawingState::Idle;
        self.needs_redraw = true;
        log::debug!("Gesture cancelled");
    }
}
