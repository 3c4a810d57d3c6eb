//! Shape selection.

/// The shape a drag (or click, for text) produces.
///
/// Selected with the number keys; exactly one tool is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Straight line from press point to release point
    #[default]
    Line,
    /// Rectangle from corner to corner (square while Shift is held)
    Rect,
    /// Circle centered on the press point, through the release point
    Circle,
    /// Click to place a text anchor, then type
    Text,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Line => "Line",
            Tool::Rect => "Rectangle",
            Tool::Circle => "Circle",
            Tool::Text => "Text",
        }
    }
}
