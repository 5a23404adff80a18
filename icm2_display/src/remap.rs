//! Row remap between the framebuffer and controller RAM.
//!
//! The controller has 9 address lines of 8 rows, but the panel is wired one
//! row down: the top physical row is the MSB of line `0x48`, and line `0x40+n`
//! shows framebuffer rows `8n+1..=8n+8`. So the top row is sent on its own,
//! then every band is shifted up one bit and takes the MSB of the next band as
//! its new LSB.

use crate::{
    command::TOP_ROW_LINE,
    framebuffer::{Framebuffer, BANDS, WIDTH},
};

/// Payload for line `0x48`: only the MSB of every band 0 column.
pub fn top_row(fb: &Framebuffer) -> [u8; WIDTH] {
    let mut out = [0; WIDTH];
    for (dst, src) in out.iter_mut().zip(fb.band(0)) {
        *dst = src & 0b1000_0000;
    }
    out
}

/// Payload for line `0x40 + line`, `line` in `0..8`.
///
/// # Panics
/// If `line >= BANDS - 1`, there is no next band to carry from.
pub fn shifted_band(fb: &Framebuffer, line: usize) -> [u8; WIDTH] {
    debug_assert!(line + 1 < BANDS);
    let mut out = [0; WIDTH];
    let current = fb.band(line);
    let next = fb.band(line + 1);
    for (x, dst) in out.iter_mut().enumerate() {
        *dst = ((current[x] & 0x7f) << 1) | ((next[x] & 0x80) >> 7);
    }
    out
}

/// Every `(line, payload)` of a full refresh, in the order they go out:
/// the top row first, then lines `0..8`.
pub fn flush_plan(fb: &Framebuffer) -> impl Iterator<Item = (u8, [u8; WIDTH])> + '_ {
    std::iter::once((TOP_ROW_LINE, top_row(fb))).chain(
        (0..TOP_ROW_LINE).map(move |line| (line, shifted_band(fb, usize::from(line)))),
    )
}
