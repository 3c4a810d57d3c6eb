//! Keyboard modifier state tracking.

/// Which modifier keys are currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift held; also forces squares in rectangle mode
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Creates a new Modifiers instance with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a Ctrl or Alt chord is held, i.e. the key is a command
    /// rather than text.
    pub fn is_command_chord(&self) -> bool {
        self.ctrl || self.alt
    }
}
