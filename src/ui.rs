/// UI rendering: status bar and help overlay.
///
/// Both are drawn into the window buffer on top of the canvas; they never
/// touch the canvas surface and never appear in exports.
use crate::config::{HelpOverlayStyle, StatusBarStyle, StatusPosition};
use crate::input::{DrawingState, InputState};

// ============================================================================
// UI Layout Constants (not configurable)
// ============================================================================

/// Background rectangle X offset
const STATUS_BG_OFFSET_X: f64 = 5.0;
/// Background rectangle Y offset
const STATUS_BG_OFFSET_Y: f64 = 3.0;
/// Background rectangle width padding
const STATUS_BG_WIDTH_PAD: f64 = 10.0;
/// Background rectangle height padding
const STATUS_BG_HEIGHT_PAD: f64 = 8.0;

/// Fallback character width for font estimation
const HELP_CHAR_WIDTH_ESTIMATE: f64 = 9.0;

/// Help overlay contents.
const HELP_LINES: &[&str] = &[
    "Help Menu:",
    "",
    "1 - Draw Line",
    "2 - Draw Rectangle, hold Shift to draw square",
    "3 - Draw Circle",
    "4 - Write text (click to place, Enter to finish)",
    "x - Clear Drawing Area",
    "Ctrl+Z - Undo",
    "Ctrl+Y / Ctrl+Shift+Z - Redo last action",
    "g - Toggle grid snapping",
    "Ctrl+S - Save PNG",
    "Ctrl+Shift+S - Save SVG",
    "Escape / Right click - Cancel current shape",
    "Ctrl+Q - Quit",
    "h - Toggle Help Menu",
];

/// Text shown in the status bar for the current session state.
pub fn status_text(input_state: &InputState) -> String {
    let tool_name = match &input_state.state {
        DrawingState::TextInput { .. } => "Typing",
        _ => input_state.active_tool().label(),
    };
    let grid = if input_state.grid_enabled {
        format!("Grid {}px", input_state.grid_size)
    } else {
        "Grid off".to_string()
    };
    let shift = if input_state.modifiers.shift {
        " [Square]"
    } else {
        ""
    };

    let mut text = format!(
        "[{}] [{}] [{} actions]{}  h=Help",
        tool_name,
        grid,
        input_state.log.len(),
        shift
    );
    if let Some(message) = input_state.status_message() {
        text.push_str("  ");
        text.push_str(message);
    }
    text
}

/// Render status bar showing the current tool, grid state and last message
pub fn render_status_bar(
    ctx: &cairo::Context,
    input_state: &InputState,
    position: StatusPosition,
    style: &StatusBarStyle,
    screen_width: u32,
    screen_height: u32,
) {
    let status_text = status_text(input_state);

    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    let extents = match ctx.text_extents(&status_text) {
        Ok(ext) => ext,
        Err(e) => {
            log::warn!(
                "Failed to measure status bar text: {}, skipping status bar",
                e
            );
            return;
        }
    };
    let text_width = extents.width();
    let text_height = extents.height();

    let padding = style.padding;
    let x = if position.is_left() {
        padding
    } else {
        screen_width as f64 - text_width - padding
    };
    let y = if position.is_top() {
        padding + text_height
    } else {
        screen_height as f64 - padding
    };

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(
        x - STATUS_BG_OFFSET_X,
        y - text_height - STATUS_BG_OFFSET_Y,
        text_width + STATUS_BG_WIDTH_PAD,
        text_height + STATUS_BG_HEIGHT_PAD,
    );
    let _ = ctx.fill();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.move_to(x, y);
    let _ = ctx.show_text(&status_text);
}

/// Render help overlay listing the controls
pub fn render_help_overlay(
    ctx: &cairo::Context,
    style: &HelpOverlayStyle,
    screen_width: u32,
    screen_height: u32,
) {
    ctx.set_font_size(style.font_size);
    ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);

    // Find longest line for width
    let mut max_width: f64 = 0.0;
    for line in HELP_LINES {
        let width = match ctx.text_extents(line) {
            Ok(ext) => ext.width(),
            Err(e) => {
                log::warn!(
                    "Failed to measure help text line '{}': {}, using fallback width",
                    line,
                    e
                );
                line.len() as f64 * HELP_CHAR_WIDTH_ESTIMATE
            }
        };
        max_width = max_width.max(width);
    }

    let box_width = max_width + style.padding * 2.0;
    let box_height = (HELP_LINES.len() as f64) * style.line_height + style.padding * 2.0;

    // Center the box
    let box_x = (screen_width as f64 - box_width) / 2.0;
    let box_y = (screen_height as f64 - box_height) / 2.0;

    let [r, g, b, a] = style.bg_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.fill();

    let [r, g, b, a] = style.border_color;
    ctx.set_source_rgba(r, g, b, a);
    ctx.set_line_width(style.border_width);
    ctx.rectangle(box_x, box_y, box_width, box_height);
    let _ = ctx.stroke();

    let [r, g, b, a] = style.text_color;
    ctx.set_source_rgba(r, g, b, a);
    for (i, line) in HELP_LINES.iter().enumerate() {
        let text_x = box_x + style.padding;
        let text_y = box_y + style.padding + (i as f64 + 1.0) * style.line_height;

        ctx.move_to(text_x, text_y);
        let _ = ctx.show_text(line);
    }
}
