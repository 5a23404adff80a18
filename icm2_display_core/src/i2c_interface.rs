//! Defined a common I2C interface.
//!
//! Considering generality, this interface uses [embedded-hal](https://docs.rs/embedded-hal/latest/embedded_hal/).
//!
//! Every method is exactly one bus transaction (start, address, bytes, stop).
//! Nothing is ever read back from the device.
//!
//! # Conventions:
//! - Command frames are written verbatim.
//! - Display data is prefixed with the [`DATA_PREFIX`] control byte, in the same transaction.

use std::fmt::Debug;

use crate::error::Error;
use embedded_hal::i2c::{Error as _, I2c, Operation};

/// Control byte announcing that the rest of the transaction is display RAM data.
pub const DATA_PREFIX: u8 = 0x40;

/// A common I2C interface uses [embedded-hal](https://docs.rs/embedded-hal/latest/embedded_hal/).
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Debug for I2cInterface<I2C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I2cInterface")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }

    pub fn command(&mut self, cmd: u8) -> Result<(), Error> {
        self.i2c.write(self.address, &[cmd]).map_err(bus_error)
    }

    pub fn command_list(&mut self, frame: impl AsRef<[u8]>) -> Result<(), Error> {
        let frame = frame.as_ref();
        if frame.is_empty() {
            return Ok(());
        }
        self.i2c.write(self.address, frame).map_err(bus_error)
    }

    /// Write `data` to display RAM at the current address.
    ///
    /// The control byte and the payload are two adjacent write operations of
    /// a single transaction, so no repeated start is emitted between them.
    pub fn data(&mut self, data: impl AsRef<[u8]>) -> Result<(), Error> {
        let data = data.as_ref();
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&[DATA_PREFIX]), Operation::Write(data)],
            )
            .map_err(bus_error)
    }
}

fn bus_error<E: embedded_hal::i2c::Error>(e: E) -> Error {
    Error::Bus(e.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType};

    #[derive(Default)]
    struct Recorder {
        transactions: Vec<(u8, Vec<u8>)>,
        fail: bool,
    }

    impl ErrorType for Recorder {
        type Error = ErrorKind;
    }

    impl I2c for Recorder {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }
            let mut bytes = Vec::new();
            for op in operations.iter() {
                match op {
                    Operation::Write(buf) => bytes.extend_from_slice(buf),
                    Operation::Read(_) => panic!("unexpected read"),
                }
            }
            self.transactions.push((address, bytes));
            Ok(())
        }
    }

    #[test]
    fn command_is_one_transaction() {
        let mut iface = I2cInterface::new(Recorder::default(), 0x3c);
        iface.command(0xa5).unwrap();
        iface.command_list([0x00, 0x01, 0x10]).unwrap();
        let bus = iface.release();
        assert_eq!(
            bus.transactions,
            vec![(0x3c, vec![0xa5]), (0x3c, vec![0x00, 0x01, 0x10])]
        );
    }

    #[test]
    fn data_is_prefixed_in_same_transaction() {
        let mut iface = I2cInterface::new(Recorder::default(), 0x3c);
        iface.data([1, 2, 3]).unwrap();
        let bus = iface.release();
        assert_eq!(bus.transactions, vec![(0x3c, vec![DATA_PREFIX, 1, 2, 3])]);
    }

    #[test]
    fn empty_command_list_is_skipped() {
        let mut iface = I2cInterface::new(Recorder::default(), 0x3c);
        iface.command_list(&[] as &[u8]).unwrap();
        assert!(iface.release().transactions.is_empty());
    }

    #[test]
    fn bus_failure_maps_to_error_kind() {
        let bus = Recorder {
            fail: true,
            ..Default::default()
        };
        let mut iface = I2cInterface::new(bus, 0x3c);
        let err = iface.command(0x00).unwrap_err();
        assert!(matches!(err, Error::Bus(ErrorKind::Other)));
    }
}
