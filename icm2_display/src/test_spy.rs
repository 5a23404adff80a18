//! An I2C bus for use in unit tests to spy on whatever was sent to it.

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub address: u8,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct TestSpyI2c {
    pub transactions: Vec<Transaction>,
    /// Every transaction fails (after being recorded) while set.
    pub fail: bool,
}

impl TestSpyI2c {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn frames(&self) -> Vec<&[u8]> {
        self.transactions.iter().map(|t| t.bytes.as_slice()).collect()
    }
}

impl ErrorType for TestSpyI2c {
    type Error = ErrorKind;
}

impl I2c for TestSpyI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut bytes = Vec::new();
        for op in operations.iter() {
            match op {
                Operation::Write(buf) => bytes.extend_from_slice(buf),
                Operation::Read(_) => panic!("the display is write-only"),
            }
        }
        self.transactions.push(Transaction { address, bytes });
        if self.fail {
            return Err(ErrorKind::Other);
        }
        Ok(())
    }
}
