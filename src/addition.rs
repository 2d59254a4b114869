//! Digit-slice addition with ripple carry.

use alloc::vec;
use alloc::vec::Vec;

use crate::big_digit::{BigDigit, DoubleBigDigit, BITS};

// Add with carry:
#[inline]
pub(crate) fn adc(a: BigDigit, b: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += DoubleBigDigit::from(a);
    *acc += DoubleBigDigit::from(b);
    let lo = *acc as BigDigit;
    *acc >>= BITS;
    lo
}

/// `left + right`, returning `left.len() + 1` limbs; the final limb is the
/// carry-out (0 or 1).
pub fn add(left: &[BigDigit], right: &[BigDigit]) -> Vec<BigDigit> {
    debug_assert!(left.len() >= right.len());

    let mut bits = Vec::with_capacity(left.len() + 1);
    let (l_lo, l_hi) = left.split_at(right.len());

    let mut carry = 0;
    for (&a, &b) in l_lo.iter().zip(right) {
        bits.push(adc(a, b, &mut carry));
    }
    for &a in l_hi {
        bits.push(adc(a, 0, &mut carry));
    }
    bits.push(carry as BigDigit);

    bits
}

/// `left + right` for a single-limb right operand.
pub fn add_digit(left: &[BigDigit], right: BigDigit) -> Vec<BigDigit> {
    if left.is_empty() {
        return vec![right];
    }

    let mut bits = Vec::with_capacity(left.len() + 1);
    let mut carry = DoubleBigDigit::from(right);
    for &a in left {
        bits.push(adc(a, 0, &mut carry));
    }
    bits.push(carry as BigDigit);

    bits
}

/// `left += right` in place, where `left` is a window of a larger result
/// buffer (slice the buffer at the desired offset).
///
/// `right` is clamped to the window. When it fits with room to spare, the
/// carry is folded into the single following limb; a carry out of the
/// window is dropped. This is the merge step of the divide-and-conquer
/// multiply/square routines, which pre-size the destination to the exact
/// product length so no carry can actually fall off.
pub fn add_assign(left: &mut [BigDigit], right: &[BigDigit]) {
    let len = right.len().min(left.len());

    let mut carry = 0;
    for (a, &b) in left[..len].iter_mut().zip(right) {
        *a = adc(*a, b, &mut carry);
    }
    if len < left.len() {
        let digit = DoubleBigDigit::from(left[len]) + carry;
        left[len] = digit as BigDigit;
    }
}
