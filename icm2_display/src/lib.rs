//! Driver for the SAAB ICM2 106x65 monochrome panel on I2C.

pub mod command;
pub mod framebuffer;
pub mod icm2;
pub mod remap;

#[cfg(test)]
mod test_spy;

pub use icm2::{Icm2, I2C_ADDRESS};
pub use icm2_display_core::{
    canvas::Canvas,
    error::Error,
    pixel::{PixelMode, PixelSurface},
};
