//! Drawing model and Cairo rendering.
//!
//! - [`DrawingAction`]: one committed line, rectangle, circle or text
//! - [`ActionLog`]: ordered history with a single-slot undo buffer
//! - [`Canvas`]: the live raster and its gesture snapshot
//! - [`replay`]: redraws the whole log onto a surface

pub mod action;
pub mod canvas;
pub mod color;
pub mod font;
pub mod history;
pub mod render;

pub use action::DrawingAction;
pub use canvas::Canvas;
pub use color::Color;
pub use font::FontDescriptor;
pub use history::ActionLog;
pub use render::{RenderStyle, TEXT_BASELINE_OFFSET, render_action, render_circle, render_text, replay};
