//! Schoolbook multiplication (spec.md §4.4).

use crate::algorithms::add::trim;
use crate::big_digit::{BigDigit, DoubleBigDigit};
use crate::bigint::DigitVec;

/// `x * y` on magnitudes in `O(|x|*|y|)`, fused multiply-accumulate with a
/// 64-bit carry.
pub(crate) fn mul_mag(x: &[BigDigit], y: &[BigDigit]) -> DigitVec {
    if x.is_empty() || y.is_empty() {
        return DigitVec::new();
    }

    let (big, sml) = if x.len() >= y.len() { (x, y) } else { (y, x) };

    let mut out = DigitVec::new();
    out.resize(big.len() + sml.len(), 0);

    for (i, &s) in sml.iter().enumerate() {
        let mut carry: DoubleBigDigit = 0;
        for (j, &b) in big.iter().enumerate() {
            carry += b as DoubleBigDigit * s as DoubleBigDigit + out[i + j] as DoubleBigDigit;
            out[i + j] = carry as BigDigit;
            carry >>= 32;
        }
        out[i + big.len()] = carry as BigDigit;
    }

    trim(&mut out);
    out
}

/// `x * y` where `y` is a single digit.
pub(crate) fn mul_mag_small(x: &[BigDigit], y: BigDigit) -> DigitVec {
    if x.is_empty() || y == 0 {
        return DigitVec::new();
    }

    let mut out = DigitVec::new();
    out.resize(x.len() + 1, 0);

    let mut carry: DoubleBigDigit = 0;
    for (i, &d) in x.iter().enumerate() {
        carry += d as DoubleBigDigit * y as DoubleBigDigit;
        out[i] = carry as BigDigit;
        carry >>= 32;
    }
    out[x.len()] = carry as BigDigit;

    trim(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_mag_matches_known_product() {
        // 123456789012345678901234567890 * 987654321098765432109876543210
        let a = crate::BigInt::from_words_lsw(
            &decimal_to_words("123456789012345678901234567890"),
            false,
        );
        let b = crate::BigInt::from_words_lsw(
            &decimal_to_words("987654321098765432109876543210"),
            false,
        );
        let product = mul_mag(a.digits(), b.digits());
        let expected = decimal_to_words("121932631137021795226185032733622923332237463801111263526900");
        assert_eq!(&product[..], &expected[..]);
    }

    fn decimal_to_words(s: &str) -> Vec<u32> {
        use core::str::FromStr;
        crate::BigInt::from_str(s).unwrap().to_words_lsw()
    }
}
