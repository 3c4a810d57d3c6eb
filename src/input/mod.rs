//! Input handling and gesture state machine.
//!
//! This module translates backend keyboard and mouse events into drawing
//! actions. It owns the session state (tool, grid snapping, modifiers, help
//! overlay, text entry) together with the canvas and the action log.

pub mod events;
pub mod modifiers;
pub mod state;
pub mod tool;

pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::{DrawingState, InputState};
pub use tool::Tool;
