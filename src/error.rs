//! Errors reported by the conversions.
//!
//! Malformed text is never an error: it is substituted during decoding. What
//! remains is failing to obtain an output buffer, and byte input that cannot
//! be split into 16-bit units.

use alloc::collections::TryReserveError;
use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Primary error type for UCS2 conversions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The output buffer could not be allocated.
    #[error("failed to allocate {requested} {unit} for the converted string")]
    Alloc {
        requested: usize,
        unit: &'static str,
        #[source]
        source: TryReserveError,
    },

    /// Big-endian UCS2 data must hold two bytes per unit.
    #[error("big-endian UCS2 data has odd length {len}")]
    OddLength { len: usize },
}

impl Error {
    #[inline]
    pub(crate) fn alloc(requested: usize, unit: &'static str, source: TryReserveError) -> Self {
        tracing::debug!(requested, unit, "output reservation failed");
        Error::Alloc {
            requested,
            unit,
            source,
        }
    }
}
