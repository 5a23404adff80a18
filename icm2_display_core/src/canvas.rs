//! Expose any [`PixelSurface`] to [embedded-graphics](https://docs.rs/embedded-graphics).
//!
//! # Examples
//! ```ignore
//! let mut canvas = Canvas::new(&mut surface);
//! Line::new(Point::new(0, 0), Point::new(10, 10))
//!     .draw_styled(&PrimitiveStyle::with_stroke(BinaryColor::On, 1), &mut canvas)?;
//! // `Canvas` derefs to the surface, so device methods stay reachable.
//! canvas.flush();
//! ```

use std::convert::Infallible;

use embedded_graphics_core::{image::GetPixel, pixelcolor::BinaryColor, prelude::*};

use crate::pixel::{PixelMode, PixelSurface};

#[derive(Debug)]
pub struct Canvas<'a, S> {
    inner: &'a mut S,
}

impl<'a, S> Canvas<'a, S> {
    pub fn new(inner: &'a mut S) -> Self {
        Self { inner }
    }
}

impl<'a, S> std::ops::Deref for Canvas<'a, S> {
    type Target = S;

    fn deref(&self) -> &Self::Target {
        self.inner
    }
}

impl<'a, S> std::ops::DerefMut for Canvas<'a, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.inner
    }
}

impl<'a, S: PixelSurface> OriginDimensions for Canvas<'a, S> {
    fn size(&self) -> Size {
        // Extents are never negative.
        Size::new(
            self.inner.width().max(0) as u32,
            self.inner.height().max(0) as u32,
        )
    }
}

impl<'a, S: PixelSurface> GetPixel for Canvas<'a, S> {
    type Color = BinaryColor;

    fn pixel(&self, p: Point) -> Option<Self::Color> {
        self.inner.pixel(p.x, p.y).map(BinaryColor::from)
    }
}

impl<'a, S: PixelSurface> DrawTarget for Canvas<'a, S> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.inner.set_pixel(point.x, point.y, PixelMode::from(color));
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.inner.fill(color.is_on());
        Ok(())
    }
}
