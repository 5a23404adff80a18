use std::collections::TryReserveError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Alloc(#[from] AllocError),
    #[cfg(feature = "embedded-hal")]
    #[error("i2c bus error: {0:?}")]
    Bus(embedded_hal::i2c::ErrorKind),
}

#[derive(Debug, thiserror::Error)]
#[error("failed to allocate framebuffer of {size} bytes")]
pub struct AllocError {
    pub size: usize,
    #[source]
    pub source: TryReserveError,
}
