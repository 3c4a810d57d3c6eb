//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that maps key
//! chords to drawing commands.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Shape selection
    SelectLine,
    SelectRectangle,
    SelectCircle,
    SelectText,

    // Canvas and history
    ClearCanvas,
    Undo,
    Redo,

    // UI toggles
    ToggleHelp,
    ToggleGrid,
    ToggleStatusBar,

    // Export
    ExportPng,
    ExportSvg,

    Exit,
}

/// A single keybinding: a key character with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parses a chord such as `"Ctrl+Shift+Z"`, `"Escape"` or `"Ctrl++"`.
    ///
    /// Modifiers may come in any order and spaces around `+` are ignored. A
    /// trailing `++` binds the `+` key itself.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let (modifiers, key) = if s == "+" {
            ("", "+")
        } else if let Some(rest) = s.strip_suffix("++") {
            (rest, "+")
        } else {
            match s.rsplit_once('+') {
                Some((rest, key)) => (rest, key.trim()),
                None => ("", s),
            }
        };

        if key.is_empty() || is_modifier(key) {
            return Err(format!("No key specified in: {}", s));
        }

        let mut binding = Self {
            key: key.to_string(),
            ctrl: false,
            shift: false,
            alt: false,
        };

        for part in modifiers.split('+').map(str::trim).filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => binding.ctrl = true,
                "shift" => binding.shift = true,
                "alt" => binding.alt = true,
                other => return Err(format!("Unknown modifier '{}' in: {}", other, s)),
            }
        }

        Ok(binding)
    }

    /// True when `key` (case-insensitive) is pressed with exactly these modifiers.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

fn is_modifier(part: &str) -> bool {
    matches!(
        part.to_lowercase().as_str(),
        "ctrl" | "control" | "shift" | "alt"
    )
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// undo = ["Ctrl+Z"]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// clear_canvas = ["X"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_select_line")]
    pub select_line: Vec<String>,

    #[serde(default = "default_select_rectangle")]
    pub select_rectangle: Vec<String>,

    #[serde(default = "default_select_circle")]
    pub select_circle: Vec<String>,

    #[serde(default = "default_select_text")]
    pub select_text: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,

    #[serde(default = "default_undo")]
    pub undo: Vec<String>,

    #[serde(default = "default_redo")]
    pub redo: Vec<String>,

    #[serde(default = "default_toggle_help")]
    pub toggle_help: Vec<String>,

    #[serde(default = "default_toggle_grid")]
    pub toggle_grid: Vec<String>,

    #[serde(default = "default_toggle_status_bar")]
    pub toggle_status_bar: Vec<String>,

    #[serde(default = "default_export_png")]
    pub export_png: Vec<String>,

    #[serde(default = "default_export_svg")]
    pub export_svg: Vec<String>,

    #[serde(default = "default_exit")]
    pub exit: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            select_line: default_select_line(),
            select_rectangle: default_select_rectangle(),
            select_circle: default_select_circle(),
            select_text: default_select_text(),
            clear_canvas: default_clear_canvas(),
            undo: default_undo(),
            redo: default_redo(),
            toggle_help: default_toggle_help(),
            toggle_grid: default_toggle_grid(),
            toggle_status_bar: default_toggle_status_bar(),
            export_png: default_export_png(),
            export_svg: default_export_svg(),
            exit: default_exit(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        // Helper closure to insert and check for duplicates
        let mut insert_binding = |binding_str: &str, action: Action| -> Result<(), String> {
            let binding = KeyBinding::parse(binding_str)?;
            if let Some(existing_action) = map.insert(binding.clone(), action) {
                return Err(format!(
                    "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                    binding_str, existing_action, action
                ));
            }
            Ok(())
        };

        let groups: [(&[String], Action); 13] = [
            (&self.select_line, Action::SelectLine),
            (&self.select_rectangle, Action::SelectRectangle),
            (&self.select_circle, Action::SelectCircle),
            (&self.select_text, Action::SelectText),
            (&self.clear_canvas, Action::ClearCanvas),
            (&self.undo, Action::Undo),
            (&self.redo, Action::Redo),
            (&self.toggle_help, Action::ToggleHelp),
            (&self.toggle_grid, Action::ToggleGrid),
            (&self.toggle_status_bar, Action::ToggleStatusBar),
            (&self.export_png, Action::ExportPng),
            (&self.export_svg, Action::ExportSvg),
            (&self.exit, Action::Exit),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                insert_binding(binding_str, action)?;
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_select_line() -> Vec<String> {
    vec!["1".to_string()]
}

fn default_select_rectangle() -> Vec<String> {
    vec!["2".to_string()]
}

fn default_select_circle() -> Vec<String> {
    vec!["3".to_string()]
}

fn default_select_text() -> Vec<String> {
    vec!["4".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["X".to_string()]
}

fn default_undo() -> Vec<String> {
    vec!["Ctrl+Z".to_string()]
}

fn default_redo() -> Vec<String> {
    vec!["Ctrl+Y".to_string(), "Ctrl+Shift+Z".to_string()]
}

fn default_toggle_help() -> Vec<String> {
    vec!["H".to_string()]
}

fn default_toggle_grid() -> Vec<String> {
    vec!["G".to_string()]
}

fn default_toggle_status_bar() -> Vec<String> {
    vec!["Ctrl+B".to_string()]
}

fn default_export_png() -> Vec<String> {
    vec!["Ctrl+S".to_string()]
}

fn default_export_svg() -> Vec<String> {
    vec!["Ctrl+Shift+S".to_string()]
}

fn default_exit() -> Vec<String> {
    vec!["Ctrl+Q".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("Escape").unwrap();
        assert_eq!(binding.key, "Escape");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_shift_key() {
        let binding = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        assert_eq!(binding.key, "Z");
        assert!(binding.ctrl);
        assert!(binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_with_spaces() {
        let binding = KeyBinding::parse("Ctrl + Shift + S").unwrap();
        assert_eq!(binding.key, "S");
        assert!(binding.ctrl);
        assert!(binding.shift);
    }

    #[test]
    fn test_parse_plus_key() {
        let binding = KeyBinding::parse("Ctrl+Shift++").unwrap();
        assert_eq!(binding.key, "+");
        assert!(binding.ctrl);
        assert!(binding.shift);
    }

    #[test]
    fn test_parse_rejects_modifier_only() {
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
        assert!(KeyBinding::parse("   ").is_err());
    }

    #[test]
    fn parse_rejects_unknown_modifier() {
        let err = KeyBinding::parse("Super+Z").unwrap_err();
        assert!(err.contains("Unknown modifier"));
    }

    #[test]
    fn test_matches() {
        let binding = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        assert!(binding.matches("Z", true, true, false));
        assert!(binding.matches("z", true, true, false)); // Case insensitive
        assert!(!binding.matches("Z", false, true, false)); // Missing ctrl
        assert!(!binding.matches("Z", true, false, false)); // Missing shift
        assert!(!binding.matches("Y", true, true, false)); // Wrong key
    }

    #[test]
    fn plain_digit_does_not_match_with_modifiers() {
        let binding = KeyBinding::parse("1").unwrap();
        assert!(binding.matches("1", false, false, false));
        assert!(!binding.matches("1", true, false, false));
    }

    #[test]
    fn test_build_action_map() {
        let config = KeybindingsConfig::default();
        let map = config.build_action_map().unwrap();

        let ctrl_z = KeyBinding::parse("Ctrl+Z").unwrap();
        assert_eq!(map.get(&ctrl_z), Some(&Action::Undo));

        let ctrl_y = KeyBinding::parse("Ctrl+Y").unwrap();
        let ctrl_shift_z = KeyBinding::parse("Ctrl+Shift+Z").unwrap();
        assert_eq!(map.get(&ctrl_y), Some(&Action::Redo));
        assert_eq!(map.get(&ctrl_shift_z), Some(&Action::Redo));

        let four = KeyBinding::parse("4").unwrap();
        assert_eq!(map.get(&four), Some(&Action::SelectText));

        let ctrl_shift_s = KeyBinding::parse("Ctrl+Shift+S").unwrap();
        assert_eq!(map.get(&ctrl_shift_s), Some(&Action::ExportSvg));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let mut config = KeybindingsConfig::default();
        config.exit = vec!["Ctrl+Z".to_string()];

        let result = config.build_action_map();
        assert!(result.is_err());
        let err_msg = result.unwrap_err();
        assert!(err_msg.contains("Duplicate keybinding"));
        assert!(err_msg.contains("Ctrl+Z"));
    }

    #[test]
    fn test_duplicate_with_different_modifier_order() {
        // Even with different modifier orders, these are the same keybinding
        let mut config = KeybindingsConfig::default();
        config.export_png = vec!["Shift+Ctrl+S".to_string()];

        let result = config.build_action_map();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Duplicate keybinding"));
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: KeybindingsConfig = toml::from_str("undo = [\"U\"]").unwrap();
        assert_eq!(config.undo, vec!["U".to_string()]);
        assert_eq!(config.redo, default_redo());
    }
}
