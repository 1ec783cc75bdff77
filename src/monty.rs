//! Montgomery-form modular exponentiation (spec.md §4.9).
//!
//! `R` is taken word-aligned (`R = 1 << (32 * ceil(bits(m)/32))`) rather than
//! bit-aligned: this costs a little memory but turns "mod R" into a digit
//! mask and "div R" into a digit-count shift, matching the `bw_and`/`bw_shr`
//! step spec.md §4.9 describes for REDC.

use crate::bigint::BigInt;
use crate::error::{BigIntError, BigIntResult};

struct MontyReducer {
    m: BigInt,
    m_prime: BigInt,
    r_sub_1: BigInt,
    r_shift: usize,
}

impl MontyReducer {
    /// `m` must be odd and non-negative.
    fn new(m: &BigInt) -> Self {
        debug_assert!(m.is_odd() && !m.is_negative());

        let r_shift = next_word_multiple(m.get_bitsize());
        let r = BigInt::one().bw_shl(r_shift);
        let r_sub_1 = r.sub_u32(1);

        // ext_gcd(R, m) == (1, r_inv, m_prime); R*r_inv + m*m_prime == 1.
        let (_, _, mut m_prime) = r.ext_gcd(m);
        if m_prime.is_negative() {
            m_prime = r.sub(&m_prime.abs());
        }

        MontyReducer {
            m: m.clone(),
            m_prime,
            r_sub_1,
            r_shift,
        }
    }

    /// `REDC(t) = t * R^-1 (mod m)`, computed without dividing by `m`.
    fn redc(&self, t: &BigInt) -> BigInt {
        let n = t.bw_and(&self.r_sub_1).mul(&self.m_prime).bw_and(&self.r_sub_1);
        let mut reduced = t.sub(&n.mul(&self.m)).bw_shr(self.r_shift);
        if reduced.is_negative() {
            reduced = reduced.add(&self.m);
        }
        reduced
    }
}

fn next_word_multiple(bits: usize) -> usize {
    ((bits + 31) / 32) * 32
}

/// Montgomery modular exponentiation: `(x^y) mod m`.
///
/// Preconditions: `m` odd and non-negative, `x` and `y` non-negative
/// (`Err(Unsupported)`/`Err(Domain)` otherwise).
pub(crate) fn monty_mod_exp(x: &BigInt, y: &BigInt, m: &BigInt) -> BigIntResult<BigInt> {
    if x.is_negative() || m.is_negative() {
        return Err(BigIntError::Unsupported(
            "signed x or m not supported by Montgomery exponentiation",
        ));
    }
    if y.is_negative() {
        return Err(BigIntError::Domain("negative exponent"));
    }
    if !m.is_odd() {
        return Err(BigIntError::Domain(
            "even modulus not supported by Montgomery exponentiation",
        ));
    }

    let mr = MontyReducer::new(m);

    let r = BigInt::one().bw_shl(mr.r_shift);
    let mut x_tilde = x.mul(&r).modulus(m)?;
    let mut acc = r.modulus(m)?;

    for i in 0..y.get_bitsize() {
        if y.get_bit(i) {
            acc = mr.redc(&acc.mul(&x_tilde));
        }
        x_tilde = mr.redc(&x_tilde.mul(&x_tilde));
    }

    Ok(mr.redc(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redc_identity_matches_plain_modexp() {
        let x = BigInt::from(17i64);
        let y = BigInt::from(257i64);
        let m = BigInt::from(1000000007i64);
        let direct = monty_mod_exp(&x, &y, &m).unwrap();
        let expected = x.exp(&y).unwrap().modulus(&m).unwrap();
        assert_eq!(direct, expected);
    }

    #[test]
    fn known_scenario_3_644_645() {
        let x = BigInt::from(3i64);
        let y = BigInt::from(644i64);
        let m = BigInt::from(645i64);
        assert_eq!(monty_mod_exp(&x, &y, &m).unwrap(), BigInt::from(36i64));
    }

    #[test]
    fn rejects_even_modulus() {
        let x = BigInt::from(3i64);
        let y = BigInt::from(4i64);
        let m = BigInt::from(8i64);
        assert!(monty_mod_exp(&x, &y, &m).is_err());
    }

    #[test]
    fn rejects_negative_base() {
        let x = BigInt::from(-3i64);
        let y = BigInt::from(4i64);
        let m = BigInt::from(9i64);
        assert!(monty_mod_exp(&x, &y, &m).is_err());
    }
}
