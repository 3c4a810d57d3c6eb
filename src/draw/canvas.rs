//! Off-screen raster surfaces backing the visible drawing area.

use super::color::WHITE;

/// The persistent canvas raster plus the snapshot used to erase previews.
///
/// Both surfaces always share the same size. The canvas is what the window
/// shows and what export reads; the snapshot is a copy taken when a gesture
/// starts so each preview frame can begin from a clean canvas.
pub struct Canvas {
    surface: cairo::ImageSurface,
    snapshot: cairo::ImageSurface,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Creates a white canvas and an identical blank snapshot.
    pub fn new(width: i32, height: i32) -> Result<Self, cairo::Error> {
        let surface = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)?;
        let snapshot = cairo::ImageSurface::create(cairo::Format::Rgb24, width, height)?;
        let canvas = Self {
            surface,
            snapshot,
            width,
            height,
        };
        canvas.clear()?;
        log::debug!("Created {}x{} canvas", width, height);
        Ok(canvas)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The live canvas surface.
    pub fn surface(&self) -> &cairo::ImageSurface {
        &self.surface
    }

    /// Opens a drawing context on the live canvas.
    pub fn context(&self) -> Result<cairo::Context, cairo::Error> {
        cairo::Context::new(&self.surface)
    }

    /// Fills the canvas with opaque white.
    pub fn clear(&self) -> Result<(), cairo::Error> {
        let ctx = self.context()?;
        WHITE.apply(&ctx);
        ctx.paint()
    }

    /// Copies the canvas into the snapshot surface.
    pub fn take_snapshot(&self) -> Result<(), cairo::Error> {
        copy_surface(&self.surface, &self.snapshot)
    }

    /// Copies the snapshot back over the canvas, erasing any preview.
    pub fn restore_snapshot(&self) -> Result<(), cairo::Error> {
        copy_surface(&self.snapshot, &self.surface)
    }

    /// Raw canvas bytes (Cairo RGB24, native-endian `u32` per pixel).
    ///
    /// Fails if a drawing context on the canvas is still alive.
    pub fn pixels(&mut self) -> Result<Vec<u8>, cairo::BorrowError> {
        self.surface.flush();
        let data = self.surface.data()?;
        Ok(data.to_vec())
    }

    /// Reads one pixel as `(r, g, b)` bytes; `None` when out of bounds.
    pub fn pixel(&mut self, x: i32, y: i32) -> Option<(u8, u8, u8)> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        let stride = self.surface.stride();
        let pixels = self.pixels().ok()?;
        let offset = (y * stride + x * 4) as usize;
        let word = u32::from_ne_bytes(pixels.get(offset..offset + 4)?.try_into().ok()?);
        Some((
            ((word >> 16) & 0xff) as u8,
            ((word >> 8) & 0xff) as u8,
            (word & 0xff) as u8,
        ))
    }
}

fn copy_surface(src: &cairo::ImageSurface, dst: &cairo::ImageSurface) -> Result<(), cairo::Error> {
    let ctx = cairo::Context::new(dst)?;
    ctx.set_operator(cairo::Operator::Source);
    ctx.set_source_surface(src, 0.0, 0.0)?;
    ctx.paint()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blacken(canvas: &Canvas, x: f64, y: f64) {
        let ctx = canvas.context().unwrap();
        ctx.set_source_rgb(0.0, 0.0, 0.0);
        ctx.rectangle(x, y, 4.0, 4.0);
        ctx.fill().unwrap();
    }

    #[test]
    fn new_canvas_is_white() {
        let mut canvas = Canvas::new(20, 10).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some((255, 255, 255)));
        assert_eq!(canvas.pixel(19, 9), Some((255, 255, 255)));
        assert_eq!(canvas.pixel(20, 0), None);
    }

    #[test]
    fn restore_snapshot_erases_later_strokes() {
        let mut canvas = Canvas::new(32, 32).unwrap();
        blacken(&canvas, 0.0, 0.0);
        canvas.take_snapshot().unwrap();

        blacken(&canvas, 20.0, 20.0);
        assert_eq!(canvas.pixel(21, 21), Some((0, 0, 0)));

        canvas.restore_snapshot().unwrap();
        assert_eq!(canvas.pixel(21, 21), Some((255, 255, 255)));
        assert_eq!(canvas.pixel(1, 1), Some((0, 0, 0)));
    }

    #[test]
    fn clear_paints_everything_white() {
        let mut canvas = Canvas::new(16, 16).unwrap();
        blacken(&canvas, 4.0, 4.0);
        canvas.clear().unwrap();
        assert_eq!(canvas.pixel(5, 5), Some((255, 255, 255)));
    }
}
