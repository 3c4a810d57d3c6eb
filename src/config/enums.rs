//! Configuration enum types.

use serde::{Deserialize, Serialize};

/// Status bar position in the window.
///
/// Controls which corner the status bar is anchored to.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPosition {
    /// Top-left corner
    TopLeft,
    /// Top-right corner
    TopRight,
    /// Bottom-left corner
    BottomLeft,
    /// Bottom-right corner
    BottomRight,
}

impl StatusPosition {
    pub fn is_top(&self) -> bool {
        matches!(self, StatusPosition::TopLeft | StatusPosition::TopRight)
    }

    pub fn is_left(&self) -> bool {
        matches!(self, StatusPosition::TopLeft | StatusPosition::BottomLeft)
    }
}
