//! Writing the canvas to PNG and SVG files.
//!
//! Export reads the canvas surface only; the help overlay and status bar live
//! in the window buffer and never end up in a file.

pub mod file;
pub mod types;

pub use file::{ExportSettings, expand_tilde, generate_filename, is_valid_template};
pub use types::{ExportError, ExportFormat};

use std::fs::File;
use std::path::Path;

/// Writes `surface` to `path` in the requested format.
pub fn export_surface(
    surface: &cairo::ImageSurface,
    format: ExportFormat,
    path: &Path,
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Png => write_png(surface, path),
        ExportFormat::Svg => write_svg(surface, path),
    }
}

/// Encodes an ARGB32 copy of the canvas with Cairo's PNG writer.
pub fn write_png(surface: &cairo::ImageSurface, path: &Path) -> Result<(), ExportError> {
    let copy = cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        surface.width(),
        surface.height(),
    )?;
    {
        let ctx = cairo::Context::new(&copy)?;
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_surface(surface, 0.0, 0.0)?;
        ctx.paint()?;
    }
    copy.flush();

    let mut file = File::create(path)?;
    copy.write_to_png(&mut file)?;
    log::info!("Exported PNG to {}", path.display());
    Ok(())
}

/// Wraps the canvas in an SVG document as one full-size embedded image.
pub fn write_svg(surface: &cairo::ImageSurface, path: &Path) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let svg = cairo::SvgSurface::for_stream(
        surface.width() as f64,
        surface.height() as f64,
        file,
    )?;
    {
        let ctx = cairo::Context::new(&svg)?;
        ctx.set_source_surface(surface, 0.0, 0.0)?;
        ctx.paint()?;
    }
    svg.finish_output_stream()
        .map_err(|err| ExportError::Io(err.error))?;
    log::info!("Exported SVG to {}", path.display());
    Ok(())
}
