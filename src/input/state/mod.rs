mod actions;
mod core;
mod mouse;
mod preview;

pub use core::{DrawingState, InputState};
