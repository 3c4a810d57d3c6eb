//! Export formats and errors.

use thiserror::Error;

/// File format written by an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Raster copy of the canvas
    Png,
    /// Vector container holding the canvas as one embedded image
    Svg,
}

impl ExportFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG",
            ExportFormat::Svg => "SVG",
        }
    }
}

/// Errors that can occur while exporting the canvas.
///
/// None of these are fatal; the session reports them and keeps running.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No canvas to export yet")]
    NoCanvas,

    #[error("Invalid export filename template '{0}'")]
    FilenameTemplate(String),

    #[error("Failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cairo error during export: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),
}
