//! Logical bit shifts across limb boundaries.

use alloc::vec;
use alloc::vec::Vec;

use num_traits::PrimInt;

use crate::big_digit::{BigDigit, BITS};

/// Shifts a magnitude by `amount` bits, positive toward higher
/// significance, negative toward lower.
///
/// `pad` supplies the bits shifted in from the vacated end, so a caller
/// can emulate an operand extended with an infinite run of clear
/// (`pad == 0`) or set (`pad == BigDigit::MAX`) bits. A left shift always
/// returns `value.len() + amount / 32 + 1` limbs; the extra top limb holds
/// the final carry-out. A right shift drops whole limbs first and folds
/// `pad` into the most significant result limb; shifting everything out
/// yields `[pad]`, as does shifting an empty value.
pub fn shift<T: PrimInt>(value: &[BigDigit], amount: T, pad: BigDigit) -> Vec<BigDigit> {
    let amount = amount.to_i64().expect("shift amount overflow");
    let length = value.len();

    if length == 0 {
        return vec![pad];
    }

    if amount < 0 {
        // big shifts move entire limbs
        let leap = (-amount) as usize / BITS;
        if length <= leap {
            return vec![pad];
        }
        let tiny = (-amount) as usize % BITS;

        let mut bits = vec![0; length - leap];
        if tiny == 0 {
            bits.copy_from_slice(&value[leap..]);
        } else {
            let last = bits.len() - 1;
            for (i, b) in bits[..last].iter_mut().enumerate() {
                *b = (value[i + leap] >> tiny) | (value[i + leap + 1] << (BITS - tiny));
            }
            bits[last] = (pad << (BITS - tiny)) | (value[length - 1] >> tiny);
        }

        bits
    } else if amount > 0 {
        // big shifts move entire limbs
        let leap = amount as usize / BITS;
        let tiny = amount as usize % BITS;

        let mut bits = vec![0; length + leap + 1];
        let last = bits.len() - 1;
        if tiny == 0 {
            bits[leap..last].copy_from_slice(value);
            bits[last] = pad;
        } else {
            for i in leap + 1..last {
                bits[i] = (value[i - leap] << tiny) | (value[i - leap - 1] >> (BITS - tiny));
            }
            bits[leap] = value[0] << tiny;
            bits[last] = (pad << tiny) | (value[length - 1] >> (BITS - tiny));
        }

        bits
    } else {
        value.to_vec()
    }
}
