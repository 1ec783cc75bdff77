//! Euclid and the extended Euclidean algorithm (spec.md §4.8).

use crate::bigint::BigInt;
use crate::error::{BigIntError, BigIntResult};

/// `gcd(a, b)`, always non-negative.
pub(crate) fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let (mut big, mut sml) = if a.cmp_with(b, true) != core::cmp::Ordering::Less {
        (a.abs(), b.abs())
    } else {
        (b.abs(), a.abs())
    };

    while !sml.is_zero() {
        let (_, rem) = big.div_rem(&sml).expect("sml is non-zero by loop guard");
        big = sml;
        sml = rem;
    }
    big
}

/// Extended Euclidean algorithm: `(g, x, y)` with `a*x + b*y == g ==
/// gcd(a, b)`.
pub(crate) fn ext_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_s = BigInt::one();
    let mut s = BigInt::zero();
    let mut old_t = BigInt::zero();
    let mut t = BigInt::one();

    while !r.is_zero() {
        let q = old_r.div(&r).expect("r is non-zero by loop guard");

        let new_r = old_r.sub(&q.mul(&r));
        old_r = r;
        r = new_r;

        let new_s = old_s.sub(&q.mul(&s));
        old_s = s;
        s = new_s;

        let new_t = old_t.sub(&q.mul(&t));
        old_t = t;
        t = new_t;
    }

    (old_r, old_s, old_t)
}

/// `x^-1 (mod m)`. `Err(Domain)` if `gcd(x, m) != 1`.
pub(crate) fn mod_inv(x: &BigInt, m: &BigInt) -> BigIntResult<BigInt> {
    let (g, inv, _) = ext_gcd(x, m);
    if g != BigInt::one() {
        return Err(BigIntError::Domain(
            "modular inverse does not exist: gcd(x, m) != 1",
        ));
    }
    Ok(if inv.is_negative() {
        inv.add(m)
    } else {
        inv
    })
}
