//! The packed 1bpp image the driver flushes to the panel.
//!
//! The buffer is split into [`BANDS`] horizontal bands of 8 pixel rows.
//! Each band is [`WIDTH`] bytes, one per column, and inside a byte the
//! most-significant bit is the top row of the band:
//!
//! ```text
//! buffer[x + band * WIDTH]  bit 7 -> row band * 8
//!                           bit 0 -> row band * 8 + 7
//! ```

use icm2_display_core::{
    error::AllocError,
    pixel::{PixelMode, PixelSurface},
};

pub const WIDTH: usize = 106;
pub const HEIGHT: usize = 65;
pub const BANDS: usize = HEIGHT.div_ceil(8);
pub const BUFFER_LEN: usize = WIDTH * BANDS;

pub struct Framebuffer {
    buf: Box<[u8]>,
}

impl std::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("len", &self.buf.len())
            .finish_non_exhaustive()
    }
}

impl Framebuffer {
    /// Allocate a zeroed buffer, reporting allocation failure instead of aborting.
    pub fn try_new() -> Result<Self, AllocError> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(BUFFER_LEN)
            .map_err(|source| AllocError {
                size: BUFFER_LEN,
                source,
            })?;
        buf.resize(BUFFER_LEN, 0);
        Ok(Self {
            buf: buf.into_boxed_slice(),
        })
    }

    pub fn set_pixel(&mut self, x: i32, y: i32, mode: PixelMode) {
        let Some((index, mask)) = locate(x, y) else {
            return;
        };
        let value = &mut self.buf[index];
        match mode {
            PixelMode::On => *value |= mask,
            PixelMode::Off => *value &= !mask,
            PixelMode::Inverse => *value ^= mask,
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        let (index, mask) = locate(x, y)?;
        Some(self.buf[index] & mask != 0)
    }

    /// All pixels on or all off. There is no pattern fill.
    pub fn fill(&mut self, on: bool) {
        self.buf.fill(if on { 0xff } else { 0x00 });
    }

    pub fn clear(&mut self) {
        self.fill(false);
    }

    /// The `WIDTH` bytes of one band.
    ///
    /// # Panics
    /// If `band >= BANDS`.
    pub fn band(&self, band: usize) -> &[u8] {
        &self.buf[band * WIDTH..(band + 1) * WIDTH]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Raw storage. Writes here skip bounds checks and are trusted to keep
    /// the band layout described in the module docs.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl PixelSurface for Framebuffer {
    fn width(&self) -> i8 {
        WIDTH as i8
    }

    fn height(&self) -> i8 {
        HEIGHT as i8
    }

    fn set_pixel(&mut self, x: i32, y: i32, mode: PixelMode) {
        Framebuffer::set_pixel(self, x, y, mode);
    }

    fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        Framebuffer::pixel(self, x, y)
    }

    fn fill(&mut self, on: bool) {
        Framebuffer::fill(self, on);
    }
}

/// Byte index and bit mask for `(x, y)`, `None` if off screen.
fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
    let x = usize::try_from(x).ok().filter(|&x| x < WIDTH)?;
    let y = usize::try_from(y).ok().filter(|&y| y < HEIGHT)?;
    Some((x + (y / 8) * WIDTH, 0x80 >> (y & 7)))
}
