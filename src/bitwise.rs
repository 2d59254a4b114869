//! Bitwise AND, OR and XOR over digit slices.
//!
//! The right operand may be shorter than the left; past its end the left
//! limbs are combined with a caller-chosen padding word instead. Padding
//! with `0` or `BigDigit::MAX` lets the caller emulate values extended
//! with an infinite run of clear or set bits.

use alloc::vec;
use alloc::vec::Vec;

use crate::big_digit::BigDigit;

/// `left & right`, padding the shorter right operand with `right_pad`.
pub fn and(left: &[BigDigit], right: &[BigDigit], right_pad: BigDigit) -> Vec<BigDigit> {
    debug_assert!(left.len() >= right.len());

    let mut bits = Vec::with_capacity(left.len());
    for (&l, &r) in left.iter().zip(right) {
        bits.push(l & r);
    }
    for &l in &left[right.len()..] {
        bits.push(l & right_pad);
    }
    bits
}

/// `left & right` for a single-limb right operand.
pub fn and_digit(left: &[BigDigit], right: BigDigit, right_pad: BigDigit) -> Vec<BigDigit> {
    if left.is_empty() {
        return Vec::new();
    }

    let mut bits = vec![0; left.len()];
    bits[0] = left[0] & right;
    for (b, &l) in bits[1..].iter_mut().zip(&left[1..]) {
        *b = l & right_pad;
    }
    bits
}

/// `left | right`, padding the shorter right operand with `right_pad`.
pub fn or(left: &[BigDigit], right: &[BigDigit], right_pad: BigDigit) -> Vec<BigDigit> {
    debug_assert!(left.len() >= right.len());

    let mut bits = Vec::with_capacity(left.len());
    for (&l, &r) in left.iter().zip(right) {
        bits.push(l | r);
    }
    for &l in &left[right.len()..] {
        bits.push(l | right_pad);
    }
    bits
}

/// `left | right` for a single-limb right operand.
pub fn or_digit(left: &[BigDigit], right: BigDigit, right_pad: BigDigit) -> Vec<BigDigit> {
    if left.is_empty() {
        return vec![right];
    }

    let mut bits = vec![0; left.len()];
    bits[0] = left[0] | right;
    for (b, &l) in bits[1..].iter_mut().zip(&left[1..]) {
        *b = l | right_pad;
    }
    bits
}

/// `left ^ right`, padding the shorter right operand with `right_pad`.
pub fn xor(left: &[BigDigit], right: &[BigDigit], right_pad: BigDigit) -> Vec<BigDigit> {
    debug_assert!(left.len() >= right.len());

    let mut bits = Vec::with_capacity(left.len());
    for (&l, &r) in left.iter().zip(right) {
        bits.push(l ^ r);
    }
    for &l in &left[right.len()..] {
        bits.push(l ^ right_pad);
    }
    bits
}

/// `left ^ right` for a single-limb right operand.
pub fn xor_digit(left: &[BigDigit], right: BigDigit, right_pad: BigDigit) -> Vec<BigDigit> {
    if left.is_empty() {
        return vec![right];
    }

    let mut bits = vec![0; left.len()];
    bits[0] = left[0] ^ right;
    for (b, &l) in bits[1..].iter_mut().zip(&left[1..]) {
        *b = l ^ right_pad;
    }
    bits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_and() {
        assert_eq!(and(&[0b1100, 0b1010], &[0b1010, 0b0110], 0), [0b1000, 0b0010]);
        // zero pad clears the uncovered limbs...
        assert_eq!(and(&[7, 7, 7], &[3], 0), [3, 0, 0]);
        // ...an all-ones pad keeps them
        assert_eq!(and(&[7, 7, 7], &[3], BigDigit::MAX), [3, 7, 7]);
        assert_eq!(and(&[], &[], 0), []);
    }

    #[test]
    fn test_and_digit() {
        assert_eq!(and_digit(&[], 5, 0), []);
        assert_eq!(and_digit(&[7, 7], 5, 0), [5, 0]);
        assert_eq!(and_digit(&[7, 7], 5, BigDigit::MAX), [5, 7]);
    }

    #[test]
    fn test_or() {
        assert_eq!(or(&[0b1100, 0b1010], &[0b1010, 0b0110], 0), [0b1110, 0b1110]);
        assert_eq!(or(&[1, 2, 4], &[8], 0), [9, 2, 4]);
        assert_eq!(
            or(&[1, 2], &[8], BigDigit::MAX),
            [9, BigDigit::MAX]
        );
    }

    #[test]
    fn test_or_digit() {
        assert_eq!(or_digit(&[], 5, 0), [5]);
        assert_eq!(or_digit(&[2, 4], 5, 0), [7, 4]);
    }

    #[test]
    fn test_xor() {
        assert_eq!(xor(&[0b1100, 0b1010], &[0b1010, 0b0110], 0), [0b0110, 0b1100]);
        assert_eq!(xor(&[1, 2], &[1], 0), [0, 2]);
        assert_eq!(xor(&[1, 2], &[1], BigDigit::MAX), [0, !2]);
    }

    #[test]
    fn test_xor_digit() {
        assert_eq!(xor_digit(&[], 5, 0), [5]);
        assert_eq!(xor_digit(&[7, 2], 5, 0), [2, 2]);
    }
}
