#![no_std]

//! # ucs2-rs
//!
//! Conversion between UTF-8 and UCS2 (fixed-width 16-bit code units), and
//! canonical precomposition of a base character followed by a combining mark.
//!
//! UCS2 covers U+0000 to U+FFFF only. Characters outside that range are
//! decoded as [`UNREPRESENTABLE`] (`~`), and malformed UTF-8 as [`INVALID`]
//! (`*`). Neither direction rejects input.
//!
//! ```
//! let units = ucs2_rs::decode_utf8("A\u{300}".as_bytes()).unwrap();
//! assert_eq!(units.units(), [0x41, 0x300]);
//!
//! let composed: ucs2_rs::Ucs2Buf = units.precomposed().collect();
//! assert_eq!(composed.units(), [0xC0]);
//! assert_eq!(ucs2_rs::encode_utf8(&composed).unwrap(), "À".as_bytes());
//! ```
extern crate alloc;

pub mod error;
pub mod precompose;
pub mod ucs2;
pub mod ucs2buf;
pub mod utf8;

pub use error::{Error, Result};
pub use precompose::precompose;
pub use ucs2::{Char2b, Ucs2};
pub use ucs2buf::Ucs2Buf;
pub use utf8::{char_count, char_length, decode_utf8, encode_utf8, INVALID, UNREPRESENTABLE};
