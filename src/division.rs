//! Division of digit slices.
//!
//! Single-limb divisors take a fast top-down path, one 64-bit window per
//! limb (with a half-limb variant for divisors that fit 16 bits). The
//! multi-limb path is Knuth, TAOCP vol 2 section 4.3, algorithm D:
//! normalize so the divisor's top limb has its highest bit set, estimate
//! each quotient digit from the dividend's top two limbs over the
//! divisor's top limb, correct the estimate downward where it overshoots
//! (at most a couple of steps thanks to normalization), subtract the
//! scratch product in place and un-normalize the remainder at the end.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering::{Greater, Less};

use num_integer::Integer;

use crate::big_digit::{self, BigDigit, DoubleBigDigit, BITS, HALF, HALF_BITS};
use crate::cmp::{cmp_offset, trimmed_len};
use crate::shift::shift;
use crate::subtraction::sub_assign;

/// Divide a two digit numerator by a one digit divisor, returns quotient
/// and remainder:
///
/// Note: the caller must ensure that both the quotient and remainder will
/// fit into a single digit. This is _not_ true for an arbitrary
/// numerator/denominator.
///
/// (This function also matches what the x86 divide instruction does).
#[inline]
fn div_wide(hi: BigDigit, lo: BigDigit, divisor: BigDigit) -> (BigDigit, BigDigit) {
    debug_assert!(hi < divisor);

    let lhs = big_digit::to_doublebigdigit(hi, lo);
    let rhs = DoubleBigDigit::from(divisor);
    ((lhs / rhs) as BigDigit, (lhs % rhs) as BigDigit)
}

/// For small divisors, we can divide without promoting to `DoubleBigDigit`
/// by using half-size pieces of digit, like long-division.
#[inline]
fn div_half(rem: BigDigit, digit: BigDigit, divisor: BigDigit) -> (BigDigit, BigDigit) {
    debug_assert!(rem < divisor && divisor <= HALF);

    let (hi, rem) = ((rem << HALF_BITS) | (digit >> HALF_BITS)).div_rem(&divisor);
    let (lo, rem) = ((rem << HALF_BITS) | (digit & HALF)).div_rem(&divisor);
    ((hi << HALF_BITS) | lo, rem)
}

/// `left / right` for a single-limb divisor, returning `left.len()`
/// quotient limbs and the remainder.
pub fn div_rem_digit(left: &[BigDigit], right: BigDigit) -> (Vec<BigDigit>, BigDigit) {
    debug_assert!(right != 0, "attempt to divide by zero");

    let mut bits = vec![0; left.len()];
    let mut rem = 0;

    if right <= HALF {
        for (b, &d) in bits.iter_mut().rev().zip(left.iter().rev()) {
            let (q, r) = div_half(rem, d, right);
            *b = q;
            rem = r;
        }
    } else {
        for (b, &d) in bits.iter_mut().rev().zip(left.iter().rev()) {
            let (q, r) = div_wide(rem, d, right);
            *b = q;
            rem = r;
        }
    }

    (bits, rem)
}

/// `left % right` for a single-limb divisor, skipping the quotient.
pub fn rem_digit(left: &[BigDigit], right: BigDigit) -> BigDigit {
    debug_assert!(right != 0, "attempt to divide by zero");

    let mut rem = 0;

    if right <= HALF {
        for &d in left.iter().rev() {
            let (_, r) = div_half(rem, d, right);
            rem = r;
        }
    } else {
        for &d in left.iter().rev() {
            let (_, r) = div_wide(rem, d, right);
            rem = r;
        }
    }

    rem
}

// The quotient-digit estimate may legitimately reach the radix itself;
// the divisor multiplier therefore has to be 64-bit.
fn mul_divisor(left: &[BigDigit], right: DoubleBigDigit, bits: &mut [BigDigit]) {
    let mut carry: DoubleBigDigit = 0;
    for (b, &l) in bits.iter_mut().zip(left) {
        let digits = DoubleBigDigit::from(l) * right + carry;
        *b = digits as BigDigit;
        carry = digits >> BITS;
    }
    bits[left.len()] = carry as BigDigit;
}

/// `left / right` for a multi-limb divisor, returning
/// `left.len() - right.len() + 1` quotient limbs and the remainder.
///
/// The caller must guarantee that `right` is non-zero with a non-zero
/// top limb, and that `left` has at least as many limbs as `right`.
pub fn div_rem(left: &[BigDigit], right: &[BigDigit]) -> (Vec<BigDigit>, Vec<BigDigit>) {
    debug_assert!(right.last() != Some(&0), "attempt to divide by zero");
    debug_assert!(!right.is_empty(), "attempt to divide by zero");
    debug_assert!(left.len() >= right.len());

    let right_len = right.len();
    let mut quot = vec![0; left.len() - right_len + 1];

    // Normalize so the highest bit in the highest limb of the divisor is
    // set: the main loop divides by that limb to generate guesses, so we
    // want it to be the largest number we can efficiently divide by.
    let shifted = i64::from(right[right_len - 1].leading_zeros());
    let mut rem = shift(left, shifted, 0);
    let right_shifted = shift(right, shifted, 0);
    // no bits spill out of the divisor, so its limb count is unchanged
    let right = &right_shifted[..right_len];

    // measure again (the dividend may have spilled into a fresh top limb)
    let mut rem_len = match rem.last() {
        Some(&0) => rem.len() - 1,
        _ => rem.len(),
    };

    let mut guess = vec![0; right_len + 1];

    // The naive per-digit loop below cannot express a quotient digit at
    // the very top position; take care of it by repeated subtraction.
    loop {
        let delta = cmp_offset(&rem[..rem_len], right, rem_len - right_len);
        if delta != Less {
            quot[rem_len - right_len] += 1;
            let offset = rem_len - right_len;
            sub_assign(&mut rem[offset..rem_len], right);
            rem_len = trimmed_len(&rem, rem_len);
        }
        if !(rem_len >= right_len && delta == Greater) {
            break;
        }
    }

    // divides the rest of the limbs
    while rem_len > right_len {
        let i = rem_len - 1;
        let offset = i - right_len;

        // first guess for the current digit of the quotient
        let mut digits = big_digit::to_doublebigdigit(rem[i], rem[i - 1])
            / DoubleBigDigit::from(right[right_len - 1]);
        if digits & 0x1_0000_0000 != 0 {
            // normalization slack lets the estimate reach the radix itself
            digits = 0x1_0000_0000;
        }

        // the guess may be a little bit too big
        let guess_len = loop {
            mul_divisor(right, digits, &mut guess);
            let guess_len = match guess[right_len] {
                0 => right_len,
                _ => right_len + 1,
            };
            if cmp_offset(&rem[..rem_len], &guess[..guess_len], offset) != Less {
                break guess_len;
            }
            digits -= 1;
        };

        // we have the digit!
        sub_assign(&mut rem[offset..rem_len], &guess[..guess_len]);
        rem_len = trimmed_len(&rem, rem_len);
        quot[offset] = digits as BigDigit;
        if digits == 0x1_0000_0000 {
            quot[offset + 1] += 1;
        }
    }

    // a subtraction may cancel more than one top limb at once, shrinking
    // the window past an unprocessed quotient position and leaving the
    // remainder at least one divisor too large; settle it at position zero
    while cmp_offset(&rem[..rem_len], right, 0) != Less {
        for q in quot.iter_mut() {
            let (digit, overflow) = q.overflowing_add(1);
            *q = digit;
            if !overflow {
                break;
            }
        }
        sub_assign(&mut rem[..rem_len], right);
        rem_len = trimmed_len(&rem, rem_len);
    }

    // repair the cheated shift
    let rem = shift(&rem[..rem_len], -shifted, 0);

    (quot, rem)
}
