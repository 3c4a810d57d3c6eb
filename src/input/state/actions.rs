use crate::config::Action;
use crate::export::ExportFormat;
use crate::input::{events::Key, tool::Tool};

use super::{DrawingState, InputState};

impl InputState {
    /// Processes a key press event.
    ///
    /// Handles all keyboard input including:
    /// - Modifier key tracking
    /// - Text entry (when in TextInput state)
    /// - Escape to cancel the active gesture
    /// - Configurable commands (tool selection, clear, undo/redo, export, ...)
    pub fn on_key_press(&mut self, key: Key) {
        // Handle modifier keys first
        match key {
            Key::Shift => {
                self.modifiers.shift = true;
                return;
            }
            Key::Ctrl => {
                self.modifiers.ctrl = true;
                return;
            }
            Key::Alt => {
                self.modifiers.alt = true;
                return;
            }
            _ => {}
        }

        if matches!(self.state, DrawingState::TextInput { .. }) {
            self.on_text_key(key);
            return;
        }

        if key == Key::Escape && self.gesture_active() {
            self.cancel_gesture();
            return;
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        }
    }

    /// Key handling while typing.
    ///
    /// Plain keys always edit the buffer, so digits and command letters can be
    /// typed. Ctrl/Alt chords commit the pending text and then run their
    /// command.
    fn on_text_key(&mut self, key: Key) {
        if self.modifiers.is_command_chord() {
            if let Some(key_str) = key.binding_name()
                && let Some(action) = self.find_action(&key_str)
            {
                self.commit_text();
                self.handle_action(action);
            }
            return;
        }

        match key {
            Key::Return => {
                self.commit_text();
                return;
            }
            Key::Escape => {
                self.cancel_gesture();
                return;
            }
            _ => {}
        }

        let DrawingState::TextInput { buffer, .. } = &mut self.state else {
            return;
        };

        match key {
            Key::Backspace => {
                buffer.pop();
            }
            Key::Space => buffer.push(' '),
            Key::Char(c) => buffer.push(c),
            // Ignore other keys in text mode
            _ => return,
        }

        self.render_text_preview();
        self.needs_redraw = true;
    }

    /// Handle an action triggered by a keybinding.
    pub(super) fn handle_action(&mut self, action: Action) {
        self.clear_status_message();

        match action {
            Action::SelectLine => self.select_tool(Tool::Line),
            Action::SelectRectangle => self.select_tool(Tool::Rect),
            Action::SelectCircle => self.select_tool(Tool::Circle),
            Action::SelectText => self.select_tool(Tool::Text),
            Action::ClearCanvas => {
                self.log.clear();
                self.redraw();
                log::info!("Canvas cleared");
            }
            Action::Undo => {
                if let Some(removed) = self.log.remove_last() {
                    log::debug!("Undid {} action", removed.kind_name());
                    self.redraw();
                }
            }
            Action::Redo => {
                if let Some(restored) = self.log.redo_last() {
                    log::debug!("Redid {} action", restored.kind_name());
                    self.redraw();
                }
            }
            Action::ToggleHelp => {
                self.show_help = !self.show_help;
                self.needs_redraw = true;
            }
            Action::ToggleGrid => {
                self.grid_enabled = !self.grid_enabled;
                self.needs_redraw = true;
                log::info!(
                    "Grid snapping {}",
                    if self.grid_enabled { "on" } else { "off" }
                );
            }
            Action::ToggleStatusBar => {
                self.show_status_bar = !self.show_status_bar;
                self.needs_redraw = true;
            }
            Action::ExportPng => {
                log::debug!("PNG export pending for backend");
                self.set_pending_export(ExportFormat::Png);
            }
            Action::ExportSvg => {
                log::debug!("SVG export pending for backend");
                self.set_pending_export(ExportFormat::Svg);
            }
            Action::Exit => {
                self.should_exit = true;
            }
        }
    }

    fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.needs_redraw = true;
        log::debug!("Selected {} tool", tool.label());
    }

    /// Processes a key release event.
    ///
    /// Only tracks modifier key releases to update the modifier state.
    pub fn on_key_release(&mut self, key: Key) {
        match key {
            Key::Shift => self.modifiers.shift = false,
            Key::Ctrl => self.modifiers.ctrl = false,
            Key::Alt => self.modifiers.alt = false,
            _ => {}
        }
    }
}
