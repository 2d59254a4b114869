//! Multiplication and squaring of digit slices.
//!
//! Small operands use long multiplication. Once both operands reach a
//! digit-count threshold, a three-product divide-and-conquer scheme takes
//! over: split each operand into a low and a high half at
//! `n = ceil(max_len / 2)` and compute
//!
//! ```text
//! p1 = hi(l) * hi(r)
//! p2 = lo(l) * lo(r)
//! p3 = (lo(l) + hi(l)) * (lo(r) + hi(r))
//! ```
//!
//! Then `p3 - p1 - p2` is the middle cross term and the product is
//! assembled by adding `p2` at limb offset 0, the reduced `p3` at `n` and
//! `p1` at `2n` into the pre-sized output. The two half sums carry one
//! guard limb each, so the intermediate subtractions can never underflow.
//! This drops the asymptotic cost from O(n²) to roughly O(n^1.585) at the
//! price of extra additions and allocations; the threshold keeps small
//! operands on the cheaper schoolbook path.
//!
//! Squaring runs the same recursion with `p1 = hi²`, `p2 = lo²`,
//! `p3 = (lo + hi)²` — three squarings where a general multiply would pay
//! full price — and its schoolbook path exploits the symmetry of the
//! cross products, accumulating each `value[i] * value[j]` (`i != j`)
//! once, doubled.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp;

use crate::addition::{add, add_assign, adc};
use crate::big_digit::{self, BigDigit, DoubleBigDigit, BITS};
use crate::subtraction::sub_assign;

/// Digit count below which multiplication stays on the schoolbook path.
///
/// Debug builds use the smallest safe threshold so tests exercise the
/// recursive scheme on tiny operands; release builds switch only past the
/// measured crossover. [`mul_with_threshold`] overrides either.
#[cfg(debug_assertions)]
pub const MULTIPLY_THRESHOLD: usize = 128 / BITS;
#[cfg(not(debug_assertions))]
pub const MULTIPLY_THRESHOLD: usize = 2048 / BITS;

/// Digit count below which squaring stays on the schoolbook path.
#[cfg(debug_assertions)]
pub const SQUARE_THRESHOLD: usize = 128 / BITS;
#[cfg(not(debug_assertions))]
pub const SQUARE_THRESHOLD: usize = 4096 / BITS;

// The recursion makes progress only while the half sums (n + 1 limbs)
// shrink, which needs operands of at least this many limbs.
const MIN_THRESHOLD: usize = 4;

#[inline]
pub(crate) fn mac_with_carry(
    a: BigDigit,
    b: BigDigit,
    c: BigDigit,
    acc: &mut DoubleBigDigit,
) -> BigDigit {
    *acc += DoubleBigDigit::from(a);
    *acc += DoubleBigDigit::from(b) * DoubleBigDigit::from(c);
    let lo = *acc as BigDigit;
    *acc >>= BITS;
    lo
}

#[inline]
pub(crate) fn mul_with_carry(a: BigDigit, b: BigDigit, acc: &mut DoubleBigDigit) -> BigDigit {
    *acc += DoubleBigDigit::from(a) * DoubleBigDigit::from(b);
    let lo = *acc as BigDigit;
    *acc >>= BITS;
    lo
}

/// Three argument multiply accumulate:
/// acc += b * c
pub(crate) fn mac_digit(acc: &mut [BigDigit], b: &[BigDigit], c: BigDigit) {
    if c == 0 {
        return;
    }

    let mut carry = 0;
    let (a_lo, a_hi) = acc.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    let mut a = a_hi.iter_mut();
    while carry != 0 {
        let a = a.next().expect("carry overflow during multiplication!");
        *a = adc(*a, 0, &mut carry);
    }
}

/// `left * right`, returning `left.len() + right.len()` limbs.
pub fn mul(left: &[BigDigit], right: &[BigDigit]) -> Vec<BigDigit> {
    mul_with_threshold(left, right, MULTIPLY_THRESHOLD)
}

/// [`mul`] with an explicit divide-and-conquer threshold, pinning the
/// algorithm choice for tests and tuning. `threshold` must be at least 4.
pub fn mul_with_threshold(
    left: &[BigDigit],
    right: &[BigDigit],
    threshold: usize,
) -> Vec<BigDigit> {
    debug_assert!(threshold >= MIN_THRESHOLD);

    let mut bits = vec![0; left.len() + right.len()];

    if left.len() < threshold || right.len() < threshold {
        // Long multiplication:
        for (i, &r) in right.iter().enumerate() {
            mac_digit(&mut bits[i..], left, r);
        }
    } else {
        // divide & conquer
        let n = (cmp::max(left.len(), right.len()) + 1) / 2;

        let (l_lo, l_hi) = left.split_at(cmp::min(n, left.len()));
        let (r_lo, r_hi) = right.split_at(cmp::min(n, right.len()));

        let p1 = mul_with_threshold(l_hi, r_hi, threshold);
        let p2 = mul_with_threshold(l_lo, r_lo, threshold);
        let mut p3 = mul_with_threshold(&add(l_lo, l_hi), &add(r_lo, r_hi), threshold);

        // p3 -= p1 + p2, leaving the middle cross term
        sub_assign(&mut p3, &p1);
        sub_assign(&mut p3, &p2);

        // merge the result
        add_assign(&mut bits, &p2);
        add_assign(&mut bits[n..], &p3);
        add_assign(&mut bits[n * 2..], &p1);
    }

    bits
}

/// `left * right` for a single-limb right operand, returning
/// `left.len() + 1` limbs.
pub fn mul_digit(left: &[BigDigit], right: BigDigit) -> Vec<BigDigit> {
    let mut bits = Vec::with_capacity(left.len() + 1);
    let mut carry = 0;
    for &a in left {
        bits.push(mul_with_carry(a, right, &mut carry));
    }
    bits.push(carry as BigDigit);

    bits
}

/// `value * value`, returning `2 * value.len()` limbs.
pub fn square(value: &[BigDigit]) -> Vec<BigDigit> {
    square_with_threshold(value, SQUARE_THRESHOLD)
}

/// [`square`] with an explicit divide-and-conquer threshold.
/// `threshold` must be at least 4.
pub fn square_with_threshold(value: &[BigDigit], threshold: usize) -> Vec<BigDigit> {
    debug_assert!(threshold >= MIN_THRESHOLD);

    let mut bits = vec![0; value.len() * 2];

    if value.len() < threshold {
        // Each cross product appears twice, so accumulate it once doubled;
        // the low limb keeps wrapping arithmetic while the carry tracks
        // the doubled high part via the halved-sum trick.
        for i in 0..value.len() {
            let vi = DoubleBigDigit::from(value[i]);
            let mut carry: DoubleBigDigit = 0;
            for j in 0..i {
                let digit1 = DoubleBigDigit::from(bits[i + j]) + carry;
                let digit2 = DoubleBigDigit::from(value[j]) * vi;
                bits[i + j] = digit1.wrapping_add(digit2 << 1) as BigDigit;
                carry = (digit2 + (digit1 >> 1)) >> (BITS - 1);
            }
            let digit = vi * vi + carry;
            let (hi, lo) = big_digit::from_doublebigdigit(digit);
            bits[i * 2] = lo;
            bits[i * 2 + 1] = hi;
        }
    } else {
        // divide & conquer
        let n = (value.len() + 1) / 2;

        let (lo, hi) = value.split_at(n);

        let p1 = square_with_threshold(hi, threshold);
        let p2 = square_with_threshold(lo, threshold);
        let mut p3 = square_with_threshold(&add(lo, hi), threshold);

        sub_assign(&mut p3, &p1);
        sub_assign(&mut p3, &p2);

        // merge the result
        add_assign(&mut bits, &p2);
        add_assign(&mut bits[n..], &p3);
        add_assign(&mut bits[n * 2..], &p1);
    }

    bits
}
