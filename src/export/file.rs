//! Export target resolution.

use super::types::{ExportError, ExportFormat};
use chrono::Local;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Where exports are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSettings {
    /// Directory to write into (`~/` is expanded).
    pub directory: String,
    /// Filename template without extension (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            filename_template: "image".to_string(),
        }
    }
}

impl ExportSettings {
    /// Resolves the full output path for `format`, creating the directory if needed.
    pub fn target_path(&self, format: ExportFormat) -> Result<PathBuf, ExportError> {
        let directory = ensure_directory_exists(&expand_tilde(&self.directory))?;
        let filename = generate_filename(&self.filename_template, format.extension())?;
        Ok(directory.join(filename))
    }
}

/// Generate a filename based on the template and current time.
///
/// A template without format specifiers is used verbatim, so `"image"`
/// becomes `image.png`. Unknown specifiers such as `%Q` are an error.
pub fn generate_filename(template: &str, extension: &str) -> Result<String, ExportError> {
    let now = Local::now();
    let mut filename = String::new();
    write!(filename, "{}.{}", now.format(template), extension)
        .map_err(|_| ExportError::FilenameTemplate(template.to_string()))?;
    Ok(filename)
}

/// True when every strftime specifier in `template` is one chrono understands.
pub fn is_valid_template(template: &str) -> bool {
    !StrftimeItems::new(template).any(|item| matches!(item, Item::Error))
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }
    Ok(directory.to_path_buf())
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_template_is_used_verbatim() {
        assert_eq!(generate_filename("image", "png").unwrap(), "image.png");
        assert_eq!(generate_filename("image", "svg").unwrap(), "image.svg");
    }

    #[test]
    fn template_expands_date_specifiers() {
        let filename = generate_filename("sketch_%Y%m%d", "png").unwrap();
        assert!(filename.starts_with("sketch_"));
        assert!(filename.ends_with(".png"));
        assert!(!filename.contains('%'));
    }

    #[test]
    fn unknown_specifier_is_an_error() {
        let result = generate_filename("sketch_%Q", "png");
        assert!(matches!(result, Err(ExportError::FilenameTemplate(t)) if t == "sketch_%Q"));
        assert!(generate_filename("sketch_%", "svg").is_err());
    }

    #[test]
    fn template_validation() {
        assert!(is_valid_template("image"));
        assert!(is_valid_template("sketch_%Y-%m-%d_%H%M%S"));
        assert!(!is_valid_template("sketch_%Q"));
        assert!(!is_valid_template("trailing_%"));
    }

    #[test]
    fn bad_template_fails_target_path_without_writing() {
        let temp = tempfile::tempdir().unwrap();
        let settings = ExportSettings {
            directory: temp.path().to_string_lossy().into_owned(),
            filename_template: "sketch_%Q".to_string(),
        };

        assert!(settings.target_path(ExportFormat::Png).is_err());
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn target_path_creates_missing_directory() {
        let temp = tempfile::tempdir().unwrap();
        let nested = temp.path().join("out").join("drawings");
        let settings = ExportSettings {
            directory: nested.to_string_lossy().into_owned(),
            filename_template: "image".to_string(),
        };

        let path = settings.target_path(ExportFormat::Svg).unwrap();
        assert!(nested.is_dir());
        assert_eq!(path, nested.join("image.svg"));
    }
}
