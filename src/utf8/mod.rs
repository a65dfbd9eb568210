//! Conversion between UTF-8 bytes and UCS2 code units.

use crate::{Error, Result, Ucs2, Ucs2Buf};
use alloc::vec::Vec;
use core::iter::FusedIterator;
use tracing::trace;

#[cfg(test)]
mod tests;

/// Unit emitted for a malformed or overlong UTF-8 sequence (`*`).
pub const INVALID: u16 = b'*' as u16;

/// Unit emitted for a character above U+FFFF, which UCS2 cannot hold (`~`).
pub const UNREPRESENTABLE: u16 = b'~' as u16;

/// Mask of the value bits of a continuation byte.
const CONT_MASK: u8 = 0b0011_1111;

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;

/// Returns the length in bytes of the UTF-8 sequence starting at `offset`.
///
/// The length is the number of leading one bits of the lead byte, with
/// these exceptions:
///
/// * an ASCII byte has length 1;
/// * a continuation byte (`10xxxxxx`) is not a valid start and gives 0;
/// * a zero byte, or an `offset` past the end, gives 0;
/// * bytes with five or more leading ones report 4.
///
/// A return of 0 ends a scan, either at the terminator or at a stray
/// continuation byte.
#[inline]
pub fn char_length(bytes: &[u8], offset: usize) -> usize {
    match bytes.get(offset) {
        None | Some(0) => 0,
        Some(lead) => match lead.leading_ones() {
            0 => 1,
            1 => 0,
            n => n.min(4) as usize,
        },
    }
}

/// Counts the characters of a UTF-8 string.
///
/// Scanning stops at the first zero byte and also at the first stray
/// continuation byte, so the result is the count of the well-started prefix.
/// A truncated sequence at the end still counts as one character, and its
/// length never carries the scan past the terminator.
pub fn char_count(bytes: &[u8]) -> usize {
    let bytes = until_nul(bytes);
    let mut offset = 0;
    let mut count = 0;
    loop {
        match char_length(bytes, offset) {
            0 => return count,
            len => {
                count += 1;
                offset += len;
            }
        }
    }
}

/// Decodes a UTF-8 string into a new UCS2 string.
///
/// Input ends at the first zero byte or at the end of the slice. Decoding
/// never fails on malformed input:
///
/// * a stray continuation byte, or a two or three byte sequence with a bad
///   continuation tag or an overlong value, becomes [`INVALID`];
/// * a sequence of four or more bytes becomes [`UNREPRESENTABLE`].
///
/// Returns an error only if the output buffer cannot be allocated.
pub fn decode_utf8(bytes: &[u8]) -> Result<Ucs2Buf> {
    let decoder = DecodeUtf8::new(bytes);
    let input_len = decoder.as_slice().len();
    let len = decoder.remaining_units();

    let mut units = Vec::new();
    units
        .try_reserve_exact(len)
        .map_err(|e| Error::alloc(len, "code units", e))?;
    units.extend(decoder);

    trace!(bytes = input_len, units = units.len(), "decoded UTF-8 to UCS2");
    Ok(Ucs2Buf::from_units(units))
}

/// Encodes a UCS2 string as UTF-8.
///
/// Encoding stops at the first zero unit. Every unit becomes one to three
/// bytes; surrogate units are encoded like any other value.
///
/// Returns an error only if the output buffer cannot be allocated.
pub fn encode_utf8(units: &Ucs2) -> Result<Vec<u8>> {
    // Worst case for a unit below 0x10000 is three bytes.
    let capacity = units.len().saturating_mul(3);

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(capacity)
        .map_err(|e| Error::alloc(capacity, "bytes", e))?;
    bytes.extend(units.encode_utf8());

    trace!(units = units.len(), bytes = bytes.len(), "encoded UCS2 to UTF-8");
    Ok(bytes)
}

/// Writes the UTF-8 form of `unit` to the front of `dst`, returning the
/// written part.
#[inline]
pub(crate) fn encode_unit(unit: u16, dst: &mut [u8; 3]) -> &[u8] {
    let code = unit as u32;
    match code {
        0..=0x7F => {
            dst[0] = code as u8;
            &dst[..1]
        }
        0x80..=0x7FF => {
            dst[0] = (code >> 6 & 0x1F) as u8 | TAG_TWO_B;
            dst[1] = (code & 0x3F) as u8 | TAG_CONT;
            &dst[..2]
        }
        _ => {
            dst[0] = (code >> 12 & 0x0F) as u8 | TAG_THREE_B;
            dst[1] = (code >> 6 & 0x3F) as u8 | TAG_CONT;
            dst[2] = (code & 0x3F) as u8 | TAG_CONT;
            &dst[..3]
        }
    }
}

/// Cuts `bytes` at its first zero byte, which terminates C-style input.
#[inline]
fn until_nul(bytes: &[u8]) -> &[u8] {
    match bytes.iter().position(|&b| b == 0) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

#[inline]
fn is_cont(byte: u8) -> bool {
    byte & 0b1100_0000 == TAG_CONT
}

/// An iterator decoding UTF-8 bytes into UCS2 code units.
///
/// Created by [`DecodeUtf8::new`]; [`decode_utf8`] collects it into a
/// [`Ucs2Buf`].
#[derive(Clone, Debug)]
pub struct DecodeUtf8<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> DecodeUtf8<'a> {
    /// Creates a decoder over `bytes`, which end at their first zero byte.
    #[inline]
    pub fn new(bytes: &'a [u8]) -> Self {
        DecodeUtf8 {
            bytes: until_nul(bytes),
            pos: 0,
        }
    }

    /// Returns the bytes not yet decoded.
    #[inline]
    pub fn as_slice(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Counts the units the rest of the input decodes to, without decoding.
    pub fn remaining_units(&self) -> usize {
        let mut pos = self.pos;
        let mut count = 0;
        while pos < self.bytes.len() {
            pos = self.step(pos);
            count += 1;
        }
        count
    }

    /// Returns the position after the sequence starting at `pos`, clamped to
    /// the end of the input. A stray continuation byte is one sequence.
    #[inline]
    fn step(&self, pos: usize) -> usize {
        let len = char_length(self.bytes, pos).max(1);
        (pos + len).min(self.bytes.len())
    }

    /// Continuation byte `i` of the sequence at `pos`, or 0 past the end.
    #[inline]
    fn cont(&self, pos: usize, i: usize) -> u8 {
        self.bytes.get(pos + i).copied().unwrap_or(0)
    }
}

impl Iterator for DecodeUtf8<'_> {
    type Item = u16;

    #[inline]
    fn next(&mut self) -> Option<u16> {
        let pos = self.pos;
        let lead = *self.bytes.get(pos)?;
        let len = char_length(self.bytes, pos);
        self.pos = self.step(pos);

        let unit = match len {
            1 => return Some(lead as u16),
            2 => {
                let y = self.cont(pos, 1);
                let ch = ((lead & 0x1F) as u16) << 6 | (y & CONT_MASK) as u16;
                if ch > 0x7F && is_cont(y) {
                    return Some(ch);
                }
                INVALID
            }
            3 => {
                let y = self.cont(pos, 1);
                let z = self.cont(pos, 2);
                let ch = ((lead & 0x0F) as u16) << 12
                    | ((y & CONT_MASK) as u16) << 6
                    | (z & CONT_MASK) as u16;
                if ch > 0x7FF && is_cont(y) && is_cont(z) {
                    return Some(ch);
                }
                INVALID
            }
            0 => INVALID,
            _ => UNREPRESENTABLE,
        };

        trace!(offset = pos, len, unit, "substituted UTF-8 sequence");
        Some(unit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let v = self.bytes.len() - self.pos;
        (v.saturating_add(3) / 4, Some(v))
    }
}
impl FusedIterator for DecodeUtf8<'_> {}

/// An iterator encoding UCS2 code units as UTF-8 bytes.
///
/// Created by [`Ucs2::encode_utf8`].
#[derive(Clone, Debug)]
pub struct EncodeUtf8<'a> {
    units: core::slice::Iter<'a, u16>,
    buf: [u8; 3],
    pending: core::ops::Range<usize>,
}

impl<'a> EncodeUtf8<'a> {
    #[inline]
    pub(crate) fn new(units: &'a [u16]) -> Self {
        let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
        EncodeUtf8 {
            units: units[..end].iter(),
            buf: [0; 3],
            pending: 0..0,
        }
    }
}

impl Iterator for EncodeUtf8<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if let Some(i) = self.pending.next() {
            return Some(self.buf[i]);
        }

        let unit = *self.units.next()?;
        let len = encode_unit(unit, &mut self.buf).len();
        self.pending = 1..len;
        Some(self.buf[0])
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending.len();
        let v = self.units.len();
        (
            v.saturating_add(pending),
            v.checked_mul(3).and_then(|x| x.checked_add(pending)),
        )
    }
}
impl FusedIterator for EncodeUtf8<'_> {}
