//! A UCS2 dynamically sized, growable string.

use crate::precompose::precompose;
use crate::utf8::DecodeUtf8;
use crate::{Error, Result, Ucs2};
use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::borrow::{Borrow, BorrowMut};
use core::fmt;
use core::ops::{Deref, DerefMut};

#[cfg(test)]
mod tests;

/// A UCS2 dynamically sized, growable string.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ucs2Buf {
    units: Vec<u16>,
}

impl Ucs2Buf {
    #[inline]
    pub(crate) fn from_units(units: Vec<u16>) -> Ucs2Buf {
        Ucs2Buf { units }
    }

    /// Creates a new, empty UCS2 string.
    #[inline]
    pub const fn new() -> Ucs2Buf {
        Ucs2Buf { units: Vec::new() }
    }

    /// Creates a new, empty UCS2 string with pre-allocated capacity for
    /// `capacity` units.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Ucs2Buf {
        Ucs2Buf {
            units: Vec::with_capacity(capacity),
        }
    }

    /// Creates a UCS2 string from high-byte-first data, two bytes per unit.
    ///
    /// This is the layout produced by [`Ucs2::to_be_bytes`] and X11's
    /// `XChar2b` arrays.
    pub fn from_be_bytes(bytes: &[u8]) -> Result<Ucs2Buf> {
        if bytes.len() % 2 != 0 {
            return Err(Error::OddLength { len: bytes.len() });
        }

        let units = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        Ok(Ucs2Buf { units })
    }

    /// Reserves capacity for at least `additional` more units.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.units.reserve(additional)
    }

    /// Shrinks the capacity of the buffer as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.units.shrink_to_fit()
    }

    /// Returns the number of units that this string buffer can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.units.capacity()
    }

    /// Clears the string.
    #[inline]
    pub fn clear(&mut self) {
        self.units.clear()
    }

    /// Returns the slice of this object.
    #[inline]
    pub fn as_ucs2(&self) -> &Ucs2 {
        Ucs2::new(self.units.as_slice())
    }

    /// Returns the slice of this object.
    #[inline]
    pub fn as_mut_ucs2(&mut self) -> &mut Ucs2 {
        Ucs2::from_units_mut(self.units.as_mut_slice())
    }

    /// Append a unit at the end of the string.
    #[inline]
    pub fn push(&mut self, unit: u16) {
        self.units.push(unit)
    }

    /// Append a UCS2 slice at the end of the string.
    #[inline]
    pub fn push_ucs2(&mut self, other: &Ucs2) {
        self.units.extend_from_slice(other.units())
    }

    /// Append UTF-8 text at the end of the string, decoding it the way
    /// [`decode_utf8`](crate::decode_utf8) does.
    #[inline]
    pub fn push_utf8(&mut self, bytes: &[u8]) {
        self.extend(DecodeUtf8::new(bytes))
    }

    /// Shortens the string to `new_len` units.
    ///
    /// Has no effect if `new_len` is greater than the current length.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        self.units.truncate(new_len)
    }

    /// Replaces each adjacent pair that has a canonical composition with the
    /// composed unit, in place.
    ///
    /// This is the in-place form of [`Ucs2::precomposed`]: pairs are taken
    /// left to right and a composed unit is not combined again.
    pub fn precompose(&mut self) {
        let units = &mut self.units;
        let mut read = 0;
        let mut write = 0;

        while read < units.len() {
            let first = units[read];
            let composed = match units.get(read + 1) {
                Some(&second) => precompose(first, second),
                None => None,
            };

            units[write] = match composed {
                Some(c) => {
                    read += 2;
                    c
                }
                None => {
                    read += 1;
                    first
                }
            };
            write += 1;
        }

        units.truncate(write);
    }

    /// Consumes the string, returning its units.
    #[inline]
    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Converts this `Ucs2Buf` into a boxed `Ucs2`.
    #[inline]
    pub fn into_box(self) -> Box<Ucs2> {
        // Safety: type layouts match.
        unsafe { Box::from_raw(Box::into_raw(self.units.into_boxed_slice()) as *mut Ucs2) }
    }

    /// Converts a `Box<Ucs2>` into a `Ucs2Buf`.
    pub fn from_box(boxed: Box<Ucs2>) -> Ucs2Buf {
        // Safety: type layouts are the same.
        let units: Box<[u16]> = unsafe { Box::from_raw(Box::into_raw(boxed) as *mut [u16]) };
        Ucs2Buf {
            units: units.into_vec(),
        }
    }
}

impl Deref for Ucs2Buf {
    type Target = Ucs2;
    #[inline]
    fn deref(&self) -> &Ucs2 {
        self.as_ucs2()
    }
}

impl DerefMut for Ucs2Buf {
    #[inline]
    fn deref_mut(&mut self) -> &mut Ucs2 {
        self.as_mut_ucs2()
    }
}

impl From<Vec<u16>> for Ucs2Buf {
    #[inline]
    fn from(units: Vec<u16>) -> Ucs2Buf {
        Ucs2Buf::from_units(units)
    }
}

impl From<&[u16]> for Ucs2Buf {
    #[inline]
    fn from(units: &[u16]) -> Ucs2Buf {
        Ucs2Buf::from_units(units.to_vec())
    }
}

/// Decodes the string as [`decode_utf8`](crate::decode_utf8) would, but
/// aborts on allocation failure like `String` does.
impl From<&str> for Ucs2Buf {
    #[inline]
    fn from(s: &str) -> Ucs2Buf {
        DecodeUtf8::new(s.as_bytes()).collect()
    }
}

impl From<&Ucs2> for Ucs2Buf {
    #[inline]
    fn from(x: &Ucs2) -> Ucs2Buf {
        x.to_owned()
    }
}

impl From<Ucs2Buf> for Vec<u16> {
    #[inline]
    fn from(x: Ucs2Buf) -> Vec<u16> {
        x.into_units()
    }
}

impl AsRef<Ucs2> for Ucs2Buf {
    #[inline]
    fn as_ref(&self) -> &Ucs2 {
        self
    }
}
impl Borrow<Ucs2> for Ucs2Buf {
    #[inline]
    fn borrow(&self) -> &Ucs2 {
        self
    }
}
impl AsMut<Ucs2> for Ucs2Buf {
    #[inline]
    fn as_mut(&mut self) -> &mut Ucs2 {
        self
    }
}
impl BorrowMut<Ucs2> for Ucs2Buf {
    #[inline]
    fn borrow_mut(&mut self) -> &mut Ucs2 {
        self
    }
}

impl ToOwned for Ucs2 {
    type Owned = Ucs2Buf;

    #[inline]
    fn to_owned(&self) -> Ucs2Buf {
        Ucs2Buf {
            units: self.units().to_owned(),
        }
    }
}

impl FromIterator<u16> for Ucs2Buf {
    fn from_iter<T: IntoIterator<Item = u16>>(iter: T) -> Ucs2Buf {
        let mut string = Ucs2Buf::new();
        string.extend(iter);
        string
    }
}

impl<'a> FromIterator<&'a Ucs2> for Ucs2Buf {
    fn from_iter<T: IntoIterator<Item = &'a Ucs2>>(iter: T) -> Ucs2Buf {
        let mut string = Ucs2Buf::new();
        string.extend(iter);
        string
    }
}

impl Extend<u16> for Ucs2Buf {
    fn extend<T: IntoIterator<Item = u16>>(&mut self, iter: T) {
        self.units.extend(iter)
    }
}

impl<'a> Extend<&'a u16> for Ucs2Buf {
    #[inline]
    fn extend<T: IntoIterator<Item = &'a u16>>(&mut self, iter: T) {
        self.extend(iter.into_iter().copied())
    }
}

impl<'a> Extend<&'a Ucs2> for Ucs2Buf {
    fn extend<T: IntoIterator<Item = &'a Ucs2>>(&mut self, iter: T) {
        for s in iter {
            self.push_ucs2(s);
        }
    }
}

impl PartialEq<Ucs2> for Ucs2Buf {
    #[inline]
    fn eq(&self, other: &Ucs2) -> bool {
        self.as_ucs2() == other
    }
}

impl<const N: usize> PartialEq<[u16; N]> for Ucs2Buf {
    #[inline]
    fn eq(&self, other: &[u16; N]) -> bool {
        self.units == other[..]
    }
}

impl fmt::Debug for Ucs2Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_ucs2(), f)
    }
}

impl fmt::Display for Ucs2Buf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_ucs2(), f)
    }
}
