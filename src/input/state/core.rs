//! Drawing state machine and input state management.

use crate::config::{Action, KeyBinding};
use crate::draw::{ActionLog, Canvas, RenderStyle, replay};
use crate::export::{ExportError, ExportFormat, ExportSettings, export_surface};
use crate::input::{modifiers::Modifiers, tool::Tool};
use crate::util;
use std::collections::HashMap;
use std::path::PathBuf;

/// Current gesture state machine.
///
/// Tracks whether the user is idle, dragging out a shape, or typing text.
/// State transitions occur based on mouse and keyboard events.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// Not actively drawing - waiting for user input
    Idle,
    /// Dragging out a shape (primary button held down)
    Drawing {
        /// Tool latched when the drag began
        tool: Tool,
        /// Start point, already snapped to the grid when snapping is on.
        /// Kept fractional; committed actions truncate to whole pixels.
        start_x: f64,
        start_y: f64,
        /// Raw press position; drag offsets are measured from here
        press_x: f64,
        press_y: f64,
    },
    /// Text entry - the user is typing text anchored at `(x, y)`
    TextInput {
        x: i32,
        y: i32,
        /// Accumulated text buffer
        buffer: String,
    },
}

/// Main input state containing all drawing session state.
///
/// Holds the canvas, the action log, the selected tool, grid snapping,
/// modifier keys and UI flags. It processes all keyboard and mouse events
/// and reports through `needs_redraw` when the window must be repainted.
pub struct InputState {
    /// Live canvas and snapshot; `None` until the window has a size
    pub canvas: Option<Canvas>,
    /// Every committed action plus the undo slot
    pub log: ActionLog,
    /// Stroke and text settings used by replay and previews
    pub style: RenderStyle,
    /// Shape produced by the next drag or click
    pub tool: Tool,
    /// Whether points snap to the grid
    pub grid_enabled: bool,
    /// Grid spacing in pixels
    pub grid_size: i32,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Current gesture state machine
    pub state: DrawingState,
    /// Whether the user requested to quit
    pub should_exit: bool,
    /// Whether the window needs to be repainted
    pub needs_redraw: bool,
    /// Whether the help overlay is currently visible
    pub show_help: bool,
    /// Whether the status bar is currently visible
    pub show_status_bar: bool,
    /// Window width in pixels (set by backend after configuration)
    pub screen_width: u32,
    /// Window height in pixels (set by backend after configuration)
    pub screen_height: u32,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
    /// Pending export request (to be handled by the backend)
    pending_export: Option<ExportFormat>,
    /// Transient message shown in the status bar
    status_message: Option<String>,
}

impl InputState {
    /// Creates a new InputState with the given render style and keybindings.
    ///
    /// Screen dimensions default to 0 and no canvas exists until the backend
    /// calls [`update_screen_dimensions`](Self::update_screen_dimensions).
    pub fn with_defaults(
        style: RenderStyle,
        grid_size: i32,
        show_status_bar: bool,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            canvas: None,
            log: ActionLog::new(),
            style,
            tool: Tool::default(),
            grid_enabled: false,
            grid_size,
            modifiers: Modifiers::new(),
            state: DrawingState::Idle,
            should_exit: false,
            needs_redraw: true,
            show_help: false,
            show_status_bar,
            screen_width: 0,
            screen_height: 0,
            action_map,
            pending_export: None,
            status_message: None,
        }
    }

    /// Updates screen dimensions after backend configuration.
    ///
    /// A size change recreates the canvas and snapshot at the new size and
    /// replays the log onto them.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        if self.canvas.is_some() && self.screen_width == width && self.screen_height == height {
            return;
        }
        self.screen_width = width;
        self.screen_height = height;

        let w = width.min(i32::MAX as u32) as i32;
        let h = height.min(i32::MAX as u32) as i32;
        match Canvas::new(w, h) {
            Ok(canvas) => self.canvas = Some(canvas),
            Err(err) => {
                log::warn!("Failed to create {}x{} canvas: {}", w, h, err);
                self.canvas = None;
            }
        }

        self.redraw();
    }

    /// Clears the canvas and replays the whole log.
    ///
    /// When a gesture is in progress the snapshot is retaken from the fresh
    /// canvas and the text preview is drawn again, so the next preview frame
    /// starts from the replayed state.
    pub fn redraw(&mut self) {
        if let Some(canvas) = &self.canvas {
            if let Err(err) = replay(canvas.surface(), self.log.actions(), &self.style) {
                log::warn!("Replay failed: {}", err);
            }

            if !matches!(self.state, DrawingState::Idle) {
                if let Err(err) = canvas.take_snapshot() {
                    log::warn!("Failed to refresh gesture snapshot: {}", err);
                }
                self.render_text_preview();
            }
        }
        self.needs_redraw = true;
    }

    /// Applies grid snapping to a coordinate or offset when enabled.
    pub(crate) fn snap(&self, value: f64) -> f64 {
        if self.grid_enabled {
            util::snap_to_grid(value, self.grid_size)
        } else {
            value
        }
    }

    /// Returns the tool that is in effect, preferring the one latched by an active drag.
    pub fn active_tool(&self) -> Tool {
        if let DrawingState::Drawing { tool, .. } = &self.state {
            *tool
        } else {
            self.tool
        }
    }

    /// Whether a drag or text entry is in progress.
    pub fn gesture_active(&self) -> bool {
        !matches!(self.state, DrawingState::Idle)
    }

    /// Look up an action for the given key and the current modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        for (binding, action) in &self.action_map {
            if binding.matches(
                key_str,
                self.modifiers.ctrl,
                self.modifiers.shift,
                self.modifiers.alt,
            ) {
                return Some(*action);
            }
        }
        None
    }

    /// Takes and clears any pending export request.
    ///
    /// Called by the backend, which owns the export destination.
    pub fn take_pending_export(&mut self) -> Option<ExportFormat> {
        self.pending_export.take()
    }

    pub(super) fn set_pending_export(&mut self, format: ExportFormat) {
        self.pending_export = Some(format);
    }

    /// Message currently shown in the status bar, if any.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.needs_redraw = true;
    }

    pub(super) fn clear_status_message(&mut self) {
        if self.status_message.take().is_some() {
            self.needs_redraw = true;
        }
    }

    /// Writes the canvas to `settings`' target path in `format`.
    ///
    /// Failures are logged and surfaced in the status bar; the session keeps
    /// running either way.
    pub fn export(
        &mut self,
        format: ExportFormat,
        settings: &ExportSettings,
    ) -> Result<PathBuf, ExportError> {
        let result = self.write_export(format, settings);
        match &result {
            Ok(path) => {
                self.set_status_message(format!("Saved {}", path.display()));
            }
            Err(err) => {
                log::warn!("{} export failed: {}", format.label(), err);
                self.set_status_message(format!("{} export failed: {}", format.label(), err));
            }
        }
        result
    }

    fn write_export(
        &self,
        format: ExportFormat,
        settings: &ExportSettings,
    ) -> Result<PathBuf, ExportError> {
        let canvas = self.canvas.as_ref().ok_or(ExportError::NoCanvas)?;
        let path = settings.target_path(format)?;
        export_surface(canvas.surface(), format, &path)?;
        Ok(path)
    }
}
