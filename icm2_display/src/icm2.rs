//! Implement the driver for the **ICM2** 106x65 monochrome panel.
//!
//! Drawing only touches the in-memory [`Framebuffer`]; nothing reaches the
//! panel until [`Icm2::flush`]. Bus errors are logged and dropped.
//!
//! # Examples
//! ```no_run
//! # fn demo<I2C: embedded_hal::i2c::I2c>(i2c: I2C) -> Result<(), icm2_display_core::error::Error> {
//! use icm2_display::{Icm2, PixelMode, PixelSurface};
//!
//! let mut display = Icm2::new(i2c);
//! display.init()?;
//! display.force_clear();
//!
//! display.set_pixel(0, 0, PixelMode::On);
//! display.set_pixel(105, 64, PixelMode::On);
//! display.flush();
//! # Ok(())
//! # }
//! ```

use std::fmt::Debug;

use embedded_hal::i2c::I2c;
use icm2_display_core::{
    canvas::Canvas,
    error::Error,
    i2c_interface::I2cInterface,
    pixel::{PixelMode, PixelSurface},
};

use crate::{
    command::{self, Command, INIT_SEQUENCE, LINE_COUNT},
    framebuffer::{Framebuffer, HEIGHT, WIDTH},
    remap,
};

/// Fixed by the panel, not strappable.
pub const I2C_ADDRESS: u8 = 0x3c;

#[cfg(feature = "linux")]
pub const DEFAULT_I2C_PATH: &str = "/dev/i2c-1";

pub struct Icm2<I2C> {
    interface: I2cInterface<I2C>,
    framebuffer: Option<Framebuffer>,
}

impl<I2C> Debug for Icm2<I2C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Icm2")
            .field("interface", &self.interface)
            .field("initialized", &self.framebuffer.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "linux")]
impl Icm2<linux_embedded_hal::I2cdev> {
    /// Open a Linux i2c-dev bus, e.g. [`DEFAULT_I2C_PATH`].
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, anyhow::Error> {
        let i2c = linux_embedded_hal::I2cdev::new(path)?;
        Ok(Self::new(i2c))
    }
}

impl<I2C> Icm2<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self {
            interface: I2cInterface::new(i2c, I2C_ADDRESS),
            framebuffer: None,
        }
    }

    /// Allocate and zero the framebuffer, then configure the controller.
    ///
    /// MUST be called before drawing or flushing. The only failure is the
    /// framebuffer allocation; calling it again reuses the existing buffer.
    pub fn init(&mut self) -> Result<(), Error> {
        let framebuffer = match self.framebuffer.take() {
            Some(fb) => fb,
            None => Framebuffer::try_new()?,
        };
        self.framebuffer.insert(framebuffer).clear();

        log::debug!("icm2: sending {} init frames", INIT_SEQUENCE.len());
        for cmd in INIT_SEQUENCE {
            send(&mut self.interface, cmd);
        }
        Ok(())
    }

    /// Zero every address line of controller RAM, including the spare one,
    /// regardless of the framebuffer.
    pub fn force_clear(&mut self) {
        log::debug!("icm2: force clear");
        for line in 0..LINE_COUNT {
            select_line(&mut self.interface, line);
            report(self.interface.data([0; WIDTH]), "clear data");
        }
    }

    /// Push the whole framebuffer to the panel.
    pub fn flush(&mut self) {
        let Self {
            interface,
            framebuffer,
        } = self;
        let Some(fb) = framebuffer.as_ref() else {
            log::warn!("icm2: flush before init, nothing to send");
            return;
        };

        log::debug!("icm2: flush");
        for (line, payload) in remap::flush_plan(fb) {
            log::trace!("icm2: line {:#04x}", command::LINE_BASE + line);
            select_line(interface, line);
            report(interface.data(payload), "line data");
        }
    }

    /// Turn every pixel off. Buffer only.
    pub fn clear(&mut self) {
        if let Some(fb) = self.framebuffer.as_mut() {
            fb.clear();
        }
    }

    /// Turn every pixel on or off. Buffer only.
    pub fn fill(&mut self, on: bool) {
        if let Some(fb) = self.framebuffer.as_mut() {
            fb.fill(on);
        }
    }

    /// Issue a single low-level command byte directly, bypassing the frame format.
    pub fn send_raw_command(&mut self, cmd: u8) {
        report(self.interface.command(cmd), "raw command");
    }

    /// Issue `bytes` as one bus transaction.
    pub fn command_list(&mut self, bytes: &[u8]) {
        report(self.interface.command_list(bytes), "command list");
    }

    /// Direct access to the packed framebuffer, `None` before [`Icm2::init`].
    pub fn raw_buffer(&mut self) -> Option<&mut [u8]> {
        self.framebuffer.as_mut().map(Framebuffer::as_bytes_mut)
    }

    pub fn framebuffer(&self) -> Option<&Framebuffer> {
        self.framebuffer.as_ref()
    }

    /// Draw with embedded-graphics.
    pub fn canvas(&mut self) -> Canvas<'_, Self> {
        Canvas::new(self)
    }

    pub fn release(self) -> I2C {
        self.interface.release()
    }
}

impl<I2C> PixelSurface for Icm2<I2C> {
    fn width(&self) -> i8 {
        WIDTH as i8
    }

    fn height(&self) -> i8 {
        HEIGHT as i8
    }

    fn set_pixel(&mut self, x: i32, y: i32, mode: PixelMode) {
        if let Some(fb) = self.framebuffer.as_mut() {
            fb.set_pixel(x, y, mode);
        }
    }

    fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        self.framebuffer.as_ref()?.pixel(x, y)
    }

    fn fill(&mut self, on: bool) {
        if let Some(fb) = self.framebuffer.as_mut() {
            fb.fill(on);
        }
    }
}

fn send<I2C: I2c>(interface: &mut I2cInterface<I2C>, cmd: Command) {
    report(interface.command_list(cmd.frame()), "command");
}

fn select_line<I2C: I2c>(interface: &mut I2cInterface<I2C>, line: u8) {
    for cmd in command::address_sequence(line) {
        send(interface, cmd);
    }
}

fn report(result: Result<(), Error>, what: &str) {
    if let Err(e) = result {
        log::warn!("icm2: {what} not delivered: {e}");
    }
}
