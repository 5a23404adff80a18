//! Command frames understood by the ICM2 controller.
//!
//! Every frame is one bus transaction and starts with [`COMMAND_PREFIX`].
//! Short frames carry a single instruction byte, register frames carry a
//! register bank followed by its value.

pub const COMMAND_PREFIX: [u8; 2] = [0x00, 0x01];

/// First controller address line. Lines run `0x40..=0x48`.
pub const LINE_BASE: u8 = 0x40;
/// Number of address lines, one more than the bands of a 65 row image.
pub const LINE_COUNT: u8 = 9;
/// The line whose MSB drives the top physical row (`0x48`).
pub const TOP_ROW_LINE: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Instruction(u8),
    Register { bank: u8, value: u8 },
}

pub const SET_COLUMN_START: Command = Command::Instruction(0x20);
pub const SET_WRITE_ENABLE: Command = Command::Instruction(0x8d);

const ENTER_SETUP: Command = Command::Instruction(0x10);
const POWER: u8 = 0x0e;
const CONTRAST: u8 = 0x0d;
const ADDRESSING: u8 = 0x0b;

/// Sent once by `Icm2::init`, in this order.
pub const INIT_SEQUENCE: [Command; 12] = [
    ENTER_SETUP,
    Command::Register { bank: POWER, value: 0x12 },
    Command::Register { bank: POWER, value: 0x06 },
    Command::Register { bank: POWER, value: 0x0a },
    Command::Register { bank: POWER, value: 0x24 },
    Command::Register { bank: POWER, value: 0x84 },
    Command::Register { bank: CONTRAST, value: 0x0a },
    Command::Register { bank: CONTRAST, value: 0x13 },
    Command::Register { bank: CONTRAST, value: 0xb7 },
    Command::Register { bank: CONTRAST, value: 0x07 },
    Command::Register { bank: ADDRESSING, value: 0x04 },
    Command::Register { bank: ADDRESSING, value: 0x40 },
];

impl Command {
    /// Point the write cursor at address line `line` (`0..LINE_COUNT`).
    pub const fn select_line(line: u8) -> Self {
        debug_assert!(line < LINE_COUNT);
        Self::Instruction(LINE_BASE + line)
    }

    pub fn frame(self) -> Frame {
        let [p0, p1] = COMMAND_PREFIX;
        match self {
            Self::Instruction(op) => Frame {
                bytes: [p0, p1, op, 0],
                len: 3,
            },
            Self::Register { bank, value } => Frame {
                bytes: [p0, p1, bank, value],
                len: 4,
            },
        }
    }
}

/// The three frames that precede every data write to a line.
pub const fn address_sequence(line: u8) -> [Command; 3] {
    [Command::select_line(line), SET_COLUMN_START, SET_WRITE_ENABLE]
}

/// An encoded command, ready for the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    bytes: [u8; 4],
    len: usize,
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_start_with_prefix() {
        assert_eq!(Command::Instruction(0x10).frame().as_ref(), &[0x00, 0x01, 0x10]);
        assert_eq!(
            Command::Register { bank: 0x0e, value: 0x12 }.frame().as_ref(),
            &[0x00, 0x01, 0x0e, 0x12]
        );
    }

    #[test]
    fn init_sequence_bytes() {
        let frames: Vec<Vec<u8>> = INIT_SEQUENCE
            .iter()
            .map(|c| c.frame().as_ref().to_vec())
            .collect();
        assert_eq!(
            frames,
            vec![
                vec![0x00, 0x01, 0x10],
                vec![0x00, 0x01, 0x0e, 0x12],
                vec![0x00, 0x01, 0x0e, 0x06],
                vec![0x00, 0x01, 0x0e, 0x0a],
                vec![0x00, 0x01, 0x0e, 0x24],
                vec![0x00, 0x01, 0x0e, 0x84],
                vec![0x00, 0x01, 0x0d, 0x0a],
                vec![0x00, 0x01, 0x0d, 0x13],
                vec![0x00, 0x01, 0x0d, 0xb7],
                vec![0x00, 0x01, 0x0d, 0x07],
                vec![0x00, 0x01, 0x0b, 0x04],
                vec![0x00, 0x01, 0x0b, 0x40],
            ]
        );
    }

    #[test]
    fn address_sequence_for_top_row() {
        let frames: Vec<Vec<u8>> = address_sequence(TOP_ROW_LINE)
            .iter()
            .map(|c| c.frame().as_ref().to_vec())
            .collect();
        assert_eq!(
            frames,
            vec![
                vec![0x00, 0x01, 0x48],
                vec![0x00, 0x01, 0x20],
                vec![0x00, 0x01, 0x8d],
            ]
        );
    }
}
