//! Canonical composition of a base character and a combining mark.
//!
//! Only pairs are composed: this is the last step of NFC for two BMP code
//! units, without decomposition or reordering by combining class.

mod table;

#[cfg(test)]
mod tests;

use table::COMPOSITIONS;

/// Packs two units into the 32-bit key the table is sorted by.
#[inline]
const fn pattern(first: u16, second: u16) -> u32 {
    (first as u32) << 16 | second as u32
}

const fn is_strictly_sorted(table: &[(u32, u16)]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if table[i - 1].0 >= table[i].0 {
            return false;
        }
        i += 1;
    }
    true
}

// Binary search is only correct over a strictly ascending table.
const _: () = assert!(
    is_strictly_sorted(&COMPOSITIONS),
    "composition table must be sorted by pattern without duplicates"
);

/// Returns the precomposed form of `first` followed by `second`, or `None` if
/// the pair has no canonical composition.
///
/// ```
/// use ucs2_rs::precompose;
///
/// // LATIN CAPITAL LETTER A + COMBINING GRAVE ACCENT
/// assert_eq!(precompose(0x0041, 0x0300), Some(0x00C0));
/// assert_eq!(precompose(0x0041, 0x0041), None);
/// ```
#[inline]
pub fn precompose(first: u16, second: u16) -> Option<u16> {
    let table: &'static [(u32, u16)] = &COMPOSITIONS;
    let key = pattern(first, second);
    table
        .binary_search_by_key(&key, |&(p, _)| p)
        .ok()
        .map(|i| table[i].1)
}

/// Returns all pairs with a canonical composition, as
/// `(first, second, precomposed)`, in ascending order of `(first, second)`.
pub fn compositions() -> impl ExactSizeIterator<Item = (u16, u16, u16)> + Clone {
    let table: &'static [(u32, u16)] = &COMPOSITIONS;
    table
        .iter()
        .map(|&(p, composed)| ((p >> 16) as u16, p as u16, composed))
}
