//! Randomized cross-checks between the arithmetic primitives.

use core::cmp::Ordering::Less;

use rand::Rng;
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;

use num_magnitude::{
    add, add_assign, cmp_offset, div_rem, div_rem_digit, mul, mul_with_threshold, rem_digit,
    shift, square_with_threshold, sub, sub_assign, trimmed_len,
};

// `fill` is faster than many `random::<u32>` calls
fn gen_digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u32> {
    let mut data = vec![0u32; len];
    rng.fill(&mut data[..]);
    if let Some(last) = data.last_mut() {
        // keep the logical length canonical
        if *last == 0 {
            *last = 1;
        }
    }
    data
}

fn trimmed(bits: &[u32]) -> &[u32] {
    &bits[..trimmed_len(bits, bits.len())]
}

#[test]
fn test_mul_schoolbook_recursive_agreement() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);

    for i in 1usize..24 {
        for j in &[1usize, 3, 4, 5, 8, 16] {
            let a = gen_digits(&mut rng, i);
            let b = gen_digits(&mut rng, *j);

            let school = mul_with_threshold(&a, &b, usize::MAX);
            let recursive = mul_with_threshold(&a, &b, 4);
            assert_eq!(school, recursive, "{} x {} limbs", i, j);
        }
    }
}

#[test]
fn test_square_consistency() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);

    for i in 1usize..32 {
        let a = gen_digits(&mut rng, i);

        let school = square_with_threshold(&a, usize::MAX);
        let recursive = square_with_threshold(&a, 4);
        assert_eq!(school, recursive, "{} limbs", i);
        assert_eq!(school, mul(&a, &a), "{} limbs", i);
    }
}

#[test]
fn test_division_identity() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);

    for i in 2usize..16 {
        for j in 2usize..=8 {
            if j > i {
                continue;
            }
            let a = gen_digits(&mut rng, i);
            let d = gen_digits(&mut rng, j);

            let (q, r) = div_rem(&a, &d);

            // a == q * d + r
            let back = add(&mul(&q, &d), &r);
            assert_eq!(trimmed(&back), trimmed(&a), "{:?} / {:?}", a, d);
            // 0 <= r < d
            assert_eq!(cmp_offset(&r, &d, 0), Less, "{:?} / {:?}", a, d);
        }
    }
}

// every combination of boundary digits up to `len` limbs, top limb non-zero
fn boundary_values(len: usize) -> Vec<Vec<u32>> {
    const DIGITS: [u32; 6] = [0, 1, 2, 0x8000_0000, 0xFFFF_FFFE, 0xFFFF_FFFF];

    let mut values = Vec::new();
    let mut idx = vec![0usize; len];
    'odometer: loop {
        if idx[len - 1] != 0 {
            values.push(idx.iter().map(|&k| DIGITS[k]).collect());
        }
        for k in idx.iter_mut() {
            *k += 1;
            if *k < DIGITS.len() {
                continue 'odometer;
            }
            *k = 0;
        }
        break;
    }
    values
}

// random limbs almost never cancel exactly, so sweep the digit values
// where the division window collapses by whole limbs
#[test]
fn test_division_boundary_limbs() {
    let dividends: Vec<Vec<Vec<u32>>> = (1usize..=4).map(boundary_values).collect();

    for i in 1usize..=4 {
        for j in 1usize..=i.min(3) {
            for a in &dividends[i - 1] {
                for d in &dividends[j - 1] {
                    let (q, r) = div_rem(a, d);

                    let back = add(&mul(&q, d), &r);
                    assert_eq!(trimmed(&back), trimmed(a), "{:?} / {:?}", a, d);
                    assert_eq!(cmp_offset(&r, d, 0), Less, "{:?} / {:?}", a, d);
                }
            }
        }
    }
}

#[test]
fn test_division_digit_identity() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);

    for i in 1usize..16 {
        let a = gen_digits(&mut rng, i);
        let d = loop {
            let d = rng.random::<u32>();
            if d != 0 {
                break d;
            }
        };

        let (q, r) = div_rem_digit(&a, d);
        assert_eq!(rem_digit(&a, d), r);
        assert!(r < d);

        let back = add(&mul(&q, &[d]), &[r]);
        assert_eq!(trimmed(&back), trimmed(&a), "{:?} / {}", a, d);
    }
}

#[test]
fn test_add_sub_inverse() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);

    for i in 1usize..24 {
        for j in 1usize..=i {
            let a = gen_digits(&mut rng, i);
            let b = gen_digits(&mut rng, j);

            let sum = add(&a, &b);
            let diff = sub(&sum, &b);
            assert_eq!(trimmed(&diff), trimmed(&a));
        }
    }
}

#[test]
fn test_shift_round_trip() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);

    for i in 1usize..12 {
        let a = gen_digits(&mut rng, i);

        for s in 0i64..=100 {
            let up = shift(&a, s, 0);
            let back = shift(&up, -s, 0);
            assert_eq!(trimmed(&back), trimmed(&a), "{} limbs by {}", i, s);
        }
    }
}

#[test]
fn test_in_place_out_of_place_equivalence() {
    let mut rng = XorShiftRng::from_seed([1u8; 16]);

    for i in 1usize..16 {
        // the carry folds into the limb right after the operand, so give
        // the in-place add the same absorbing limb the carry-out occupies
        let a = gen_digits(&mut rng, i);
        let b = gen_digits(&mut rng, i);

        let sum = add(&a, &b);
        let mut buf = a.clone();
        buf.push(0);
        add_assign(&mut buf, &b);
        assert_eq!(buf, sum);

        for j in 1usize..=i {
            let b = gen_digits(&mut rng, j);

            // sum >= b always holds, so the in-place subtract is safe
            let sum = add(&a, &b);
            let diff = sub(&sum, &b);
            let mut buf = sum.clone();
            sub_assign(&mut buf, &b);
            assert_eq!(buf, diff);
        }
    }
}
