//! A UCS2 slice.

use crate::precompose::precompose;
use crate::utf8::EncodeUtf8;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::sync::Arc;
use core::iter::FusedIterator;
use core::ops::Index;
use core::slice::{self, SliceIndex};
use core::{char, fmt};


/// A UCS2 slice: fixed-width 16-bit code units, one per character.
///
/// Unit values are numbers and do not depend on host byte order. Use
/// [`to_be_bytes`](Ucs2::to_be_bytes) or [`char2b`](Ucs2::char2b) for the
/// high-byte-first wire form.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Ucs2 {
    units: [u16],
}

impl Ucs2 {
    /// Coerces into a `Ucs2`. This accepts a `&[u16]` argument.
    #[inline]
    pub fn new<T: ?Sized + AsRef<Ucs2>>(x: &T) -> &Self {
        x.as_ref()
    }

    /// Coerces a C-style unit array into a `Ucs2`, ending it at the first zero
    /// unit.
    #[inline]
    pub fn from_nul_terminated(units: &[u16]) -> &Self {
        let len = units.iter().position(|&u| u == 0).unwrap_or(units.len());
        Ucs2::new(&units[..len])
    }

    #[inline]
    pub(crate) fn from_units_mut(units: &mut [u16]) -> &mut Self {
        // Safety: Ucs2 is transparent, type layouts match.
        unsafe { &mut *(units as *mut [u16] as *mut Ucs2) }
    }

    /// Returns the code units.
    #[inline]
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Returns the code units mutably.
    #[inline]
    pub fn units_mut(&mut self) -> &mut [u16] {
        &mut self.units
    }

    /// Returns the length, in code units.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns whether this is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns the first `n` units, or the whole string if it is shorter.
    #[inline]
    pub fn prefix(&self, n: usize) -> &Ucs2 {
        Ucs2::new(&self.units[..n.min(self.len())])
    }

    /// Returns the position of the first unit equal to the 8-bit character
    /// `byte`, that is, whose high byte is zero and low byte is `byte`.
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        self.units.iter().position(|&u| u == byte as u16)
    }

    /// Returns the position of the first occurrence of `unit`.
    #[inline]
    pub fn find(&self, unit: u16) -> Option<usize> {
        self.units.iter().position(|&u| u == unit)
    }

    /// Returns an iterator over the UTF-8 encoding of this string.
    ///
    /// Stops at the first zero unit.
    #[inline]
    pub fn encode_utf8(&self) -> EncodeUtf8<'_> {
        EncodeUtf8::new(&self.units)
    }

    /// Returns an iterator over the string with adjacent pairs precomposed.
    ///
    /// Scans left to right. Where a unit and its successor have a canonical
    /// composition, the composition is yielded and both are skipped. A
    /// composed unit is not combined again with what follows.
    #[inline]
    pub fn precomposed(&self) -> Precomposed<'_> {
        Precomposed {
            units: &self.units,
        }
    }

    /// Returns an iterator over the string in high-byte-first order, two bytes
    /// per unit.
    #[inline]
    pub fn to_be_bytes(&self) -> ToBeBytes<'_> {
        ToBeBytes {
            units: self.units.iter(),
            low: None,
        }
    }

    /// Returns an iterator over the string as [`Char2b`] pairs.
    #[inline]
    pub fn char2b(&self) -> Char2bs<'_> {
        Char2bs(self.units.iter())
    }

    /// Returns an iterator over the `char`s of the string.
    ///
    /// Surrogate units, which UCS2 cannot pair, are replaced with `'\u{FFFD}'`
    /// (the replacement character “�”).
    #[inline]
    pub fn chars_lossy(&self) -> impl Iterator<Item = char> + '_ {
        self.units
            .iter()
            .map(|&u| char::from_u32(u as u32).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Boxes this `Ucs2`.
    #[inline]
    pub fn to_box(&self) -> Box<Ucs2> {
        let boxed: Box<[u16]> = self.units.into();
        // Safety: This is sound as type layouts match
        unsafe { Box::from_raw(Box::into_raw(boxed) as *mut Ucs2) }
    }

    /// Boxes this `Ucs2` with [`Arc`](alloc::sync::Arc).
    #[inline]
    pub fn to_arc(&self) -> Arc<Ucs2> {
        let arc: Arc<[u16]> = Arc::from(&self.units);
        // Safety: This is sound as type layouts match
        unsafe { Arc::from_raw(Arc::into_raw(arc) as *const Ucs2) }
    }

    /// Boxes this `Ucs2` with [`Rc`](alloc::rc::Rc).
    #[inline]
    pub fn to_rc(&self) -> Rc<Ucs2> {
        let rc: Rc<[u16]> = Rc::from(&self.units);
        // Safety: This is sound as type layouts match
        unsafe { Rc::from_raw(Rc::into_raw(rc) as *const Ucs2) }
    }
}

impl From<&Ucs2> for Box<Ucs2> {
    #[inline]
    fn from(x: &Ucs2) -> Self {
        x.to_box()
    }
}

impl From<&Ucs2> for Rc<Ucs2> {
    #[inline]
    fn from(x: &Ucs2) -> Self {
        x.to_rc()
    }
}

impl From<&Ucs2> for Arc<Ucs2> {
    #[inline]
    fn from(x: &Ucs2) -> Self {
        x.to_arc()
    }
}

/// Formats the string as `u"..."`, escaping units that are not printable.
impl fmt::Debug for Ucs2 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write;

        formatter.write_str("u\"")?;

        for &u in &self.units {
            match char::from_u32(u as u32) {
                Some(c) => {
                    for ch in c.escape_debug() {
                        formatter.write_char(ch)?;
                    }
                }
                None => write!(formatter, "\\u{{{:x}}}", u)?,
            }
        }

        formatter.write_str("\"")
    }
}

impl fmt::Display for Ucs2 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        use core::fmt::Write;

        for c in self.chars_lossy() {
            formatter.write_char(c)?;
        }

        Ok(())
    }
}

/// Returns a subslice of the string.
///
/// # Panics
///
/// Panics when the range points beyond the end of the string.
impl<I> Index<I> for Ucs2
where
    I: SliceIndex<[u16], Output = [u16]>,
{
    type Output = Ucs2;

    #[inline]
    fn index(&self, index: I) -> &Ucs2 {
        Ucs2::new(&self.units[index])
    }
}

impl AsRef<Ucs2> for [u16] {
    #[inline]
    fn as_ref(&self) -> &Ucs2 {
        // Safety: the cast is sound because repr(transparent), matching the layout of [u16].
        // Any unit sequence is valid UCS2.
        unsafe { &*(self as *const [u16] as *const Ucs2) }
    }
}

impl<const N: usize> AsRef<Ucs2> for [u16; N] {
    #[inline]
    fn as_ref(&self) -> &Ucs2 {
        self[..].as_ref()
    }
}

impl AsRef<Ucs2> for Ucs2 {
    #[inline]
    fn as_ref(&self) -> &Ucs2 {
        self
    }
}

impl AsMut<Ucs2> for [u16] {
    #[inline]
    fn as_mut(&mut self) -> &mut Ucs2 {
        Ucs2::from_units_mut(self)
    }
}

impl Default for &Ucs2 {
    #[inline]
    fn default() -> Self {
        let empty: &[u16] = &[];
        Ucs2::new(empty)
    }
}

impl PartialEq<[u16]> for Ucs2 {
    #[inline]
    fn eq(&self, other: &[u16]) -> bool {
        self.units == *other
    }
}

impl<const N: usize> PartialEq<[u16; N]> for Ucs2 {
    #[inline]
    fn eq(&self, other: &[u16; N]) -> bool {
        self.units == other[..]
    }
}

/// A UCS2 unit in the X11 `XChar2b` layout: high byte first.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(C)]
pub struct Char2b {
    pub byte1: u8,
    pub byte2: u8,
}

impl Char2b {
    /// Splits a unit into its high and low byte.
    #[inline]
    pub const fn from_unit(unit: u16) -> Char2b {
        let [byte1, byte2] = unit.to_be_bytes();
        Char2b { byte1, byte2 }
    }

    /// Joins the two bytes back into a unit.
    #[inline]
    pub const fn to_unit(self) -> u16 {
        u16::from_be_bytes([self.byte1, self.byte2])
    }
}

impl From<u16> for Char2b {
    #[inline]
    fn from(unit: u16) -> Self {
        Char2b::from_unit(unit)
    }
}

impl From<Char2b> for u16 {
    #[inline]
    fn from(c: Char2b) -> Self {
        c.to_unit()
    }
}

/// Format as `U+` followed by four hexadecimal digits.
impl fmt::Debug for Char2b {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "U+{:04X}", self.to_unit())
    }
}

/// An iterator created by [`precomposed`](Ucs2::precomposed).
#[derive(Clone, Debug)]
pub struct Precomposed<'a> {
    units: &'a [u16],
}

impl Iterator for Precomposed<'_> {
    type Item = u16;

    #[inline]
    fn next(&mut self) -> Option<u16> {
        let units = self.units;
        match units {
            [] => None,
            [first, second, rest @ ..] => match precompose(*first, *second) {
                Some(composed) => {
                    self.units = rest;
                    Some(composed)
                }
                None => {
                    self.units = &units[1..];
                    Some(*first)
                }
            },
            [last] => {
                self.units = &[];
                Some(*last)
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let v = self.units.len();
        (v.saturating_add(1) / 2, Some(v))
    }
}
impl FusedIterator for Precomposed<'_> {}

/// An iterator created by [`to_be_bytes`](Ucs2::to_be_bytes).
#[derive(Clone, Debug)]
pub struct ToBeBytes<'a> {
    units: slice::Iter<'a, u16>,
    low: Option<u8>,
}

impl Iterator for ToBeBytes<'_> {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if let Some(x) = self.low.take() {
            return Some(x);
        }

        let [high, low] = self.units.next()?.to_be_bytes();
        self.low = Some(low);
        Some(high)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let v = self.units.len() * 2 + self.low.is_some() as usize;
        (v, Some(v))
    }
}
impl ExactSizeIterator for ToBeBytes<'_> {}
impl FusedIterator for ToBeBytes<'_> {}

/// An iterator created by [`char2b`](Ucs2::char2b).
#[derive(Clone, Debug)]
pub struct Char2bs<'a>(slice::Iter<'a, u16>);

impl Iterator for Char2bs<'_> {
    type Item = Char2b;

    #[inline]
    fn next(&mut self) -> Option<Char2b> {
        self.0.next().map(|&u| Char2b::from_unit(u))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}
impl ExactSizeIterator for Char2bs<'_> {}
impl FusedIterator for Char2bs<'_> {}
