//! Magnitude comparison and length trimming.

use core::cmp::Ordering::{self, Equal};

use crate::big_digit::BigDigit;

/// Compares two magnitudes whose most-significant limbs are non-zero.
#[inline]
pub fn cmp_slice(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    debug_assert!(a.last() != Some(&0));
    debug_assert!(b.last() != Some(&0));

    match Ord::cmp(&a.len(), &b.len()) {
        Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

/// Compares the window of `left` starting at `offset` against `right`.
///
/// Either side may carry most-significant zero limbs; they are ignored.
pub fn cmp_offset(left: &[BigDigit], right: &[BigDigit], offset: usize) -> Ordering {
    let window = &left[offset.min(left.len())..];
    let window = &window[..trimmed_len(window, window.len())];
    let right = &right[..trimmed_len(right, right.len())];

    cmp_slice(window, right)
}

/// Shrinks a logical length past any most-significant zero limbs.
#[inline]
pub fn trimmed_len(bits: &[BigDigit], mut len: usize) -> usize {
    debug_assert!(len <= bits.len());

    while len > 0 && bits[len - 1] == 0 {
        len -= 1;
    }
    len
}
