//! Long division, Knuth's Algorithm D (spec.md §4.5).

use core::cmp::Ordering;

use crate::algorithms::add::trim;
use crate::algorithms::bitwise::{shl_mag, shr_mag};
use crate::algorithms::cmp_mag;
use crate::big_digit::{BigDigit, DoubleBigDigit};
use crate::bigint::DigitVec;

/// Single-digit divisor fast path: one pass from MSW to LSW carrying a
/// 64-bit `(prev_remainder << 32) | digit` accumulator.
pub(crate) fn div_mag_small(x: &[BigDigit], y: BigDigit) -> (DigitVec, BigDigit) {
    debug_assert!(y != 0);
    if x.is_empty() {
        return (DigitVec::new(), 0);
    }

    let mut quotient = DigitVec::new();
    quotient.resize(x.len(), 0);

    let mut rem: DoubleBigDigit = 0;
    for i in (0..x.len()).rev() {
        let cur = (rem << 32) | x[i] as DoubleBigDigit;
        quotient[i] = (cur / y as DoubleBigDigit) as BigDigit;
        rem = cur % y as DoubleBigDigit;
    }

    trim(&mut quotient);
    (quotient, rem as BigDigit)
}

/// Full magnitude division: `x = quotient * y + remainder`, `0 <= remainder
/// < y`. The caller is responsible for rejecting a zero divisor.
pub(crate) fn div_mag(x: &[BigDigit], y: &[BigDigit]) -> (DigitVec, DigitVec) {
    debug_assert!(!y.is_empty());

    if y.len() == 1 {
        let (q, r) = div_mag_small(x, y[0]);
        let rem: DigitVec = if r == 0 { DigitVec::new() } else { core::iter::once(r).collect() };
        return (q, rem);
    }

    match cmp_mag(x, y) {
        Ordering::Less => return (DigitVec::new(), x.iter().copied().collect()),
        Ordering::Equal => return (core::iter::once(1).collect(), DigitVec::new()),
        Ordering::Greater => {}
    }

    // --- Normalize: shift both operands so y's MSW has its top bit set. ---
    let n = y.len();
    let s = y[n - 1].leading_zeros() as usize;

    let ynorm = shl_mag(y, s);
    debug_assert_eq!(ynorm.len(), n);

    let mut xnorm = shl_mag(x, s);
    if xnorm.len() < x.len() + 1 {
        xnorm.resize(x.len() + 1, 0);
    }

    let m = x.len() - n;
    let y_msw = ynorm[n - 1] as DoubleBigDigit;
    let y_n2 = ynorm[n - 2] as DoubleBigDigit;

    let mut quo = DigitVec::new();
    quo.resize(m + 1, 0);

    for i in (0..=m).rev() {
        let mut q_h = ((xnorm[n + i] as DoubleBigDigit) << 32 | xnorm[n + i - 1] as DoubleBigDigit) / y_msw;
        let mut r_h = ((xnorm[n + i] as DoubleBigDigit) << 32 | xnorm[n + i - 1] as DoubleBigDigit) % y_msw;

        while q_h >= (1 << 32) || q_h * y_n2 > (r_h << 32) + xnorm[n + i - 2] as DoubleBigDigit {
            q_h -= 1;
            r_h += y_msw;
            if r_h >= (1 << 32) {
                break;
            }
        }

        // temp = ynorm * q_h, padded to n+1 digits.
        let mut temp = crate::algorithms::mul::mul_mag_small(&ynorm, q_h as BigDigit);
        temp.resize(n + 1, 0);

        // xnorm[i..=i+n] -= temp, tracking a borrow.
        let mut borrow = false;
        for j in 0..=n {
            let (r1, b1) = xnorm[i + j].overflowing_sub(temp[j]);
            let (r2, b2) = r1.overflowing_sub(borrow as BigDigit);
            xnorm[i + j] = r2;
            borrow = b1 || b2;
        }

        if borrow {
            // The estimate was one too high; add y back and fix the digit.
            let mut carry: DoubleBigDigit = 0;
            for j in 0..=n {
                let y_j = if j < n { ynorm[j] as DoubleBigDigit } else { 0 };
                carry += xnorm[i + j] as DoubleBigDigit + y_j;
                xnorm[i + j] = carry as BigDigit;
                carry >>= 32;
            }
            q_h -= 1;
        }

        quo[i] = q_h as BigDigit;
    }

    trim(&mut quo);
    let remainder = shr_mag(&xnorm, s);
    (quo, remainder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn words(s: &str) -> Vec<u32> {
        crate::BigInt::from_str(s).unwrap().to_words_lsw()
    }

    #[test]
    fn div_mag_matches_power_of_two_identity() {
        // (2^256 - 1) / (2^128 + 1) == 2^128 - 1, remainder 0.
        let x = words(
            "115792089237316195423570985008687907853269984665640564039457584007913129639935",
        );
        let y = words("340282366920938463463374607431768211457");
        let (q, r) = div_mag(&x, &y);
        let expected_q = words("340282366920938463463374607431768211455");
        assert_eq!(q, expected_q);
        assert!(r.is_empty());
    }

    #[test]
    fn div_mag_forces_add_back_case() {
        // Constructed so the quotient-digit estimate is exactly one too large.
        let y: Vec<u32> = vec![0x00000000, 0x80000001];
        let x: Vec<u32> = vec![0x00000001, 0x80000002, 0x00000001];
        let (q, r) = div_mag(&x, &y);
        let (prod, _) = (crate::algorithms::mul::mul_mag(&q, &y), ());
        let sum = crate::algorithms::add::add_mag(&prod, &r);
        assert_eq!(sum, x.iter().copied().collect::<DigitVec>());
    }
}
