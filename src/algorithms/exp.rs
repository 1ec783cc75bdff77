//! Binary exponentiation and its modular variant (spec.md §4.7).

use crate::bigint::BigInt;
use crate::error::{BigIntError, BigIntResult};
use crate::monty;

/// `x^y`. `y` must be non-negative.
pub(crate) fn exp(x: &BigInt, y: &BigInt) -> BigIntResult<BigInt> {
    if y.is_negative() {
        return Err(BigIntError::Domain("negative exponent"));
    }

    let mut sqr = x.clone();
    let mut acc = BigInt::one();
    for i in 0..y.get_bitsize() {
        if y.get_bit(i) {
            acc = acc.mul(&sqr);
        }
        sqr = sqr.mul(&sqr);
    }
    Ok(acc)
}

/// `(x^y) mod m`. Delegates to Montgomery reduction when `m` is odd and
/// both `x` and `m` are non-negative; otherwise plain binary exponentiation
/// reducing modulo `m` after every multiply.
pub(crate) fn mod_exp(x: &BigInt, y: &BigInt, m: &BigInt) -> BigIntResult<BigInt> {
    if y.is_negative() {
        return Err(BigIntError::Domain("negative exponent"));
    }

    if !x.is_negative() && !m.is_negative() && m.is_odd() {
        return monty::monty_mod_exp(x, y, m);
    }

    let mut sqr = x.modulus(m)?;
    let mut acc = BigInt::one();
    for i in 0..y.get_bitsize() {
        if y.get_bit(i) {
            acc = acc.mul(&sqr).modulus(m)?;
        }
        sqr = sqr.mul(&sqr).modulus(m)?;
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn exp_laws_hold() {
        let a = BigInt::from(7i64);
        let i = BigInt::from(5i64);
        let j = BigInt::from(11i64);
        let lhs = exp(&a, &i.add(&j)).unwrap();
        let rhs = exp(&a, &i).unwrap().mul(&exp(&a, &j).unwrap());
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn negative_exponent_is_domain_error() {
        let a = BigInt::from(2i64);
        let e = BigInt::from(-1i64);
        assert!(exp(&a, &e).is_err());
    }

    #[test]
    fn mod_exp_known_scenario() {
        // mod_exp(3, 644, 645) == 36.
        let x = BigInt::from(3i64);
        let y = BigInt::from(644i64);
        let m = BigInt::from(645i64);
        assert_eq!(mod_exp(&x, &y, &m).unwrap(), BigInt::from(36i64));
    }

    #[test]
    fn mod_exp_matches_plain_exp_then_mod_for_even_modulus() {
        let x = BigInt::from(3i64);
        let y = BigInt::from(9i64);
        let m = BigInt::from(100i64);
        let direct = mod_exp(&x, &y, &m).unwrap();
        let via_plain = exp(&x, &y).unwrap().modulus(&m).unwrap();
        assert_eq!(direct, via_plain);
    }

    #[test]
    fn mod_exp_odd_matches_big_literal() {
        let p = BigInt::from_str("340282366920938463463374607431768211507").unwrap();
        let x = BigInt::from(65537i64);
        let y = BigInt::from(12345i64);
        let direct = mod_exp(&x, &y, &p).unwrap();
        let via_plain = exp(&x, &y).unwrap().modulus(&p).unwrap();
        assert_eq!(direct, via_plain);
    }
}
