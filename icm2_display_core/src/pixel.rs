//! The pixel-level contract between a monochrome buffer and a drawing layer.

/// How a pixel write combines with the bit already in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMode {
    On,
    Off,
    /// Toggle the current bit.
    Inverse,
}

impl From<bool> for PixelMode {
    fn from(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}

#[cfg(feature = "embedded_graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for PixelMode {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        color.is_on().into()
    }
}

/// Something pixels can be drawn into.
///
/// Coordinates outside `0..width()` x `0..height()` must be ignored silently,
/// drawing layers routinely rasterize shapes that cross the screen edge.
pub trait PixelSurface {
    fn width(&self) -> i8;

    fn height(&self) -> i8;

    fn set_pixel(&mut self, x: i32, y: i32, mode: PixelMode);

    /// `None` when out of range.
    fn pixel(&self, x: i32, y: i32) -> Option<bool>;

    fn fill(&mut self, on: bool) {
        for y in 0..i32::from(self.height()) {
            for x in 0..i32::from(self.width()) {
                self.set_pixel(x, y, on.into());
            }
        }
    }
}
