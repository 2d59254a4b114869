//! Digit-slice subtraction with ripple borrow.
//!
//! A borrow is carried between limbs as the arithmetic right shift of a
//! signed wide accumulator: after the shift the accumulator is `-1` when
//! the limb difference went negative and `0` otherwise, so adding it into
//! the next limb propagates the borrow without any branching.

use alloc::vec::Vec;

use crate::big_digit::{BigDigit, SignedDoubleBigDigit, BITS};

// Subtract with borrow:
#[inline]
pub(crate) fn sbb(a: BigDigit, b: BigDigit, acc: &mut SignedDoubleBigDigit) -> BigDigit {
    *acc += SignedDoubleBigDigit::from(a);
    *acc -= SignedDoubleBigDigit::from(b);
    let lo = *acc as BigDigit;
    *acc >>= BITS;
    lo
}

/// `left - right`, returning `left.len()` limbs.
///
/// The caller must guarantee `left >= right` in value; no underflow flag
/// is produced.
pub fn sub(left: &[BigDigit], right: &[BigDigit]) -> Vec<BigDigit> {
    debug_assert!(left.len() >= right.len());

    let mut bits = Vec::with_capacity(left.len());
    let (l_lo, l_hi) = left.split_at(right.len());

    let mut borrow = 0;
    for (&a, &b) in l_lo.iter().zip(right) {
        bits.push(sbb(a, b, &mut borrow));
    }
    for &a in l_hi {
        bits.push(sbb(a, 0, &mut borrow));
    }
    debug_assert!(borrow == 0, "subtraction underflow");

    bits
}

/// `left - right` for a single-limb right operand.
pub fn sub_digit(left: &[BigDigit], right: BigDigit) -> Vec<BigDigit> {
    if left.is_empty() {
        return Vec::new();
    }

    let mut bits = Vec::with_capacity(left.len());
    let mut borrow = 0;
    bits.push(sbb(left[0], right, &mut borrow));
    for &a in &left[1..] {
        bits.push(sbb(a, 0, &mut borrow));
    }
    debug_assert!(borrow == 0, "subtraction underflow");

    bits
}

/// `left -= right` in place, where `left` is a window of a larger buffer
/// (slice the buffer at the desired offset).
///
/// The borrow ripples through the entire window; the caller must
/// guarantee the window's value is at least `right`.
pub fn sub_assign(left: &mut [BigDigit], right: &[BigDigit]) {
    debug_assert!(left.len() >= right.len());

    let (l_lo, l_hi) = left.split_at_mut(right.len());

    let mut borrow = 0;
    for (a, &b) in l_lo.iter_mut().zip(right) {
        *a = sbb(*a, b, &mut borrow);
    }
    if borrow != 0 {
        for a in l_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }
    debug_assert!(borrow == 0, "subtraction underflow");
}
