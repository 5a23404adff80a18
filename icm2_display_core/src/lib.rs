//! Device-independent building blocks for the ICM2 display driver.

#[cfg(feature = "embedded_graphics")]
pub mod canvas;
pub mod error;
#[cfg(feature = "embedded-hal")]
pub mod i2c_interface;
pub mod pixel;
