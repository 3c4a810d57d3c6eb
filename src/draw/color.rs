//! RGBA color type and the two inks the canvas uses.

/// Represents an RGBA color with floating-point components in `0.0..=1.0`.
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let grey = Color::new(0.5, 0.5, 0.5, 1.0);
/// assert_eq!(grey.a, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a color from a `[r, g, b, a]` config array.
    pub const fn from_array(rgba: [f64; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }

    /// Sets this color as the Cairo source.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

/// Canvas background.
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Ink used for every committed shape and for text.
pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
