//! Unsigned magnitude arithmetic on raw digit slices.
//!
//! A magnitude is an unsigned integer stored as a slice of 32-bit digits
//! ("limbs"), least significant first. Every operation here works directly
//! on such slices: callers keep oversized backing buffers and pass the
//! meaningful prefix, so a logical length is simply the slice length and a
//! window into a shared buffer is simply a subslice. The empty slice is
//! the value zero.
//!
//! Operations that return a fresh `Vec` size it exactly per their contract
//! and never trim most-significant zero limbs; trimming is the caller's
//! job (see [`trimmed_len`]). The `_assign` variants mutate a caller
//! window in place.
//!
//! Wherever two slices are combined, the left one must be at least as long
//! as the right one. Shape preconditions (length ordering, non-zero
//! divisors, trimmed divisor limbs) are deliberately not validated in
//! release builds; they are `debug_assert!`ed only.
//!
//! Multiplication and squaring switch from long multiplication to a
//! three-product divide-and-conquer scheme past a digit-count threshold;
//! the `_with_threshold` entry points pin the algorithm choice for tests
//! and tuning. Division follows Knuth, TAOCP vol 2 section 4.3,
//! algorithm D.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod big_digit {
    //! Limb types and constants.

    /// A single digit of a magnitude.
    pub type BigDigit = u32;

    /// A `DoubleBigDigit` is the internal type used to do the computations.
    /// Its size is the double of the size of `BigDigit`, so all products of
    /// two digits fit without overflow.
    pub type DoubleBigDigit = u64;

    /// The signed counterpart of [`DoubleBigDigit`], used to propagate
    /// borrows through arithmetic right shifts.
    pub type SignedDoubleBigDigit = i64;

    /// The number of bits in one limb.
    pub const BITS: usize = 32;

    pub const HALF_BITS: usize = BITS / 2;
    pub const HALF: BigDigit = (1 << HALF_BITS) - 1;

    const LO_MASK: DoubleBigDigit = (1 << BITS) - 1;

    #[inline]
    fn get_hi(n: DoubleBigDigit) -> BigDigit {
        (n >> BITS) as BigDigit
    }

    #[inline]
    fn get_lo(n: DoubleBigDigit) -> BigDigit {
        (n & LO_MASK) as BigDigit
    }

    /// Join two `BigDigit`s into one `DoubleBigDigit`.
    #[inline]
    pub fn to_doublebigdigit(hi: BigDigit, lo: BigDigit) -> DoubleBigDigit {
        DoubleBigDigit::from(lo) | (DoubleBigDigit::from(hi) << BITS)
    }

    /// Split one `DoubleBigDigit` into two `BigDigit`s.
    #[inline]
    pub fn from_doublebigdigit(n: DoubleBigDigit) -> (BigDigit, BigDigit) {
        (get_hi(n), get_lo(n))
    }
}

mod addition;
mod bitwise;
mod cmp;
mod division;
mod multiplication;
mod shift;
mod subtraction;

pub use crate::addition::{add, add_assign, add_digit};
pub use crate::bitwise::{and, and_digit, or, or_digit, xor, xor_digit};
pub use crate::cmp::{cmp_offset, cmp_slice, trimmed_len};
pub use crate::division::{div_rem, div_rem_digit, rem_digit};
pub use crate::multiplication::{
    mul, mul_digit, mul_with_threshold, square, square_with_threshold, MULTIPLY_THRESHOLD,
    SQUARE_THRESHOLD,
};
pub use crate::shift::shift;
pub use crate::subtraction::{sub, sub_assign, sub_digit};
