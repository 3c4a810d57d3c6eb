//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings include stroke and text defaults,
//! the export destination, window and chrome preferences, and keybindings.
//!
//! If no config file exists, defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::StatusPosition;
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{
    DrawingConfig, ExportConfig, HelpOverlayStyle, PerformanceConfig, StatusBarStyle, UiConfig,
};

use crate::draw::{FontDescriptor, RenderStyle};
use crate::export::{ExportSettings, is_valid_template};
use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// line_width = 2.0
/// font_size = 24.0
/// grid_size = 20
///
/// [export]
/// directory = "~/Pictures"
/// filename_template = "sketch_%Y-%m-%d_%H%M%S"
///
/// [ui]
/// status_bar_position = "top-right"
///
/// [keybindings]
/// redo = ["Ctrl+Y", "Ctrl+Shift+Z"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Stroke, font and grid settings
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Where exports land
    #[serde(default)]
    pub export: ExportConfig,

    /// Performance tuning options
    #[serde(default)]
    pub performance: PerformanceConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `line_width`: 0.5 - 20.0
    /// - `font_size`: 6.0 - 96.0
    /// - `grid_size`: 2 - 200
    /// - `buffer_count`: 2 - 4
    /// - `window_width` / `window_height`: 100 - 8192
    fn validate_and_clamp(&mut self) {
        // Line width: 0.5 - 20.0
        if !(0.5..=20.0).contains(&self.drawing.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 0.5-20.0 range",
                self.drawing.line_width
            );
            self.drawing.line_width = self.drawing.line_width.clamp(0.5, 20.0);
        }

        // Font size: 6.0 - 96.0
        if !(6.0..=96.0).contains(&self.drawing.font_size) {
            log::warn!(
                "Invalid font_size {:.1}, clamping to 6.0-96.0 range",
                self.drawing.font_size
            );
            self.drawing.font_size = self.drawing.font_size.clamp(6.0, 96.0);
        }

        // Grid size: 2 - 200
        if !(2..=200).contains(&self.drawing.grid_size) {
            log::warn!(
                "Invalid grid_size {}, clamping to 2-200 range",
                self.drawing.grid_size
            );
            self.drawing.grid_size = self.drawing.grid_size.clamp(2, 200);
        }

        // Buffer count: 2 - 4
        if !(2..=4).contains(&self.performance.buffer_count) {
            log::warn!(
                "Invalid buffer_count {}, clamping to 2-4 range",
                self.performance.buffer_count
            );
            self.performance.buffer_count = self.performance.buffer_count.clamp(2, 4);
        }

        if !(100..=8192).contains(&self.ui.window_width) {
            log::warn!(
                "Invalid window_width {}, clamping to 100-8192 range",
                self.ui.window_width
            );
            self.ui.window_width = self.ui.window_width.clamp(100, 8192);
        }

        if !(100..=8192).contains(&self.ui.window_height) {
            log::warn!(
                "Invalid window_height {}, clamping to 100-8192 range",
                self.ui.window_height
            );
            self.ui.window_height = self.ui.window_height.clamp(100, 8192);
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.drawing.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .drawing
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            log::warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.drawing.font_weight
            );
            self.drawing.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.drawing.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            log::warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.drawing.font_style
            );
            self.drawing.font_style = "normal".to_string();
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty export filename_template, falling back to 'image'");
            self.export.filename_template = "image".to_string();
        } else if !is_valid_template(&self.export.filename_template) {
            log::warn!(
                "Invalid strftime specifier in export filename_template '{}', falling back to 'image'",
                self.export.filename_template
            );
            self.export.filename_template = "image".to_string();
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is absent.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Stroke and text settings for replay and previews.
    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            line_width: self.drawing.line_width,
            font: FontDescriptor::new(
                self.drawing.font_family.clone(),
                self.drawing.font_weight.clone(),
                self.drawing.font_style.clone(),
            ),
            font_size: self.drawing.font_size,
        }
    }

    /// Export destination for PNG and SVG files.
    pub fn export_settings(&self) -> ExportSettings {
        ExportSettings {
            directory: self.export.directory.clone(),
            filename_template: self.export.filename_template.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (temp, path)
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();

        assert_eq!(config.drawing.line_width, 1.0);
        assert_eq!(config.drawing.font_size, 20.0);
        assert_eq!(config.drawing.grid_size, 10);
        assert_eq!(config.export.filename_template, "image");
        assert_eq!(config.ui.window_width, 800);
        assert_eq!(config.ui.window_height, 600);
    }

    #[test]
    fn default_render_style_matches_replay_defaults() {
        assert_eq!(Config::default().render_style(), RenderStyle::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let (_temp, path) = write_config(
            r#"
[drawing]
grid_size = 25

[export]
directory = "/tmp/drawings"
"#,
        );
        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.drawing.grid_size, 25);
        assert_eq!(config.drawing.font_family, "Sans");
        assert_eq!(config.export.directory, "/tmp/drawings");
        assert_eq!(config.export.filename_template, "image");
        assert_eq!(config.ui.status_bar_position, StatusPosition::BottomLeft);
    }

    #[test]
    fn invalid_filename_template_falls_back() {
        let (_temp, path) = write_config(
            r#"
[export]
filename_template = "sketch_%Q"
"#,
        );
        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.export.filename_template, "image");
    }

    #[test]
    fn valid_date_template_is_kept() {
        let (_temp, path) = write_config(
            r#"
[export]
filename_template = "sketch_%Y-%m-%d"
"#,
        );
        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.export.filename_template, "sketch_%Y-%m-%d");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let (_temp, path) = write_config(
            r#"
[drawing]
line_width = 50.0
font_size = 2.0
grid_size = 0
font_weight = "chunky"

[performance]
buffer_count = 9
"#,
        );
        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.drawing.line_width, 20.0);
        assert_eq!(config.drawing.font_size, 6.0);
        assert_eq!(config.drawing.grid_size, 2);
        assert_eq!(config.drawing.font_weight, "normal");
        assert_eq!(config.performance.buffer_count, 4);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let (_temp, path) = write_config("[drawing\nline_width = ");
        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config"));
    }

    #[test]
    fn keybindings_section_overrides_defaults() {
        let (_temp, path) = write_config(
            r#"
[keybindings]
toggle_grid = ["Ctrl+G"]
"#,
        );
        let config = Config::load_from(&path).unwrap();
        let map = config.keybindings.build_action_map().unwrap();

        let ctrl_g = KeyBinding::parse("Ctrl+G").unwrap();
        assert_eq!(map.get(&ctrl_g), Some(&Action::ToggleGrid));
        assert!(!map.contains_key(&KeyBinding::parse("G").unwrap()));
    }

    #[test]
    fn config_path_ends_with_app_directory() {
        if let Ok(path) = Config::get_config_path() {
            assert!(path.ends_with("sketchpad/config.toml"));
        }
    }
}
