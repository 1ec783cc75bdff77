//! Sign-dispatched arithmetic on [`BigInt`], and the `core::ops` operator
//! impls built on top of it.
//!
//! Per spec.md §9, sign dispatch is a 2-bit switch on `(x.sign, y.sign)`
//! redirecting to the magnitude operation; the arithmetic loops themselves
//! never see a sign. Rust's borrow checker already forbids aliasing a
//! `&BigInt` input with a `&mut BigInt` output, so the "compute into a
//! temporary, then swap" aliasing discipline spec.md §9 describes for the
//! reference implementation is enforced by the type system here rather than
//! by a runtime convention: every operation below takes owned/borrowed
//! inputs and returns a freshly built `BigInt`.

use crate::algorithms::{add, bitwise, cmp_mag, div, gcd as gcd_algo, mul, sub};
use crate::big_digit::BigDigit;
use crate::bigint::{BigInt, DigitVec};
use crate::error::{BigIntError, BigIntResult};

impl BigInt {
    /// `x + y`.
    pub fn add(&self, other: &BigInt) -> BigInt {
        match (self.sign, other.sign) {
            (false, false) => BigInt::from_mag(add::add_mag(&self.digits, &other.digits), false),
            (true, true) => BigInt::from_mag(add::add_mag(&self.digits, &other.digits), true),
            (true, false) => other.sub(&self.abs()),
            (false, true) => self.sub(&other.abs()),
        }
    }

    /// `x - y`.
    pub fn sub(&self, other: &BigInt) -> BigInt {
        match (self.sign, other.sign) {
            (false, true) => BigInt::from_mag(add::add_mag(&self.digits, &other.digits), false),
            (true, false) => BigInt::from_mag(add::add_mag(&self.digits, &other.digits), true),
            (true, true) => other.abs().sub(&self.abs()),
            (false, false) => match cmp_mag(&self.digits, &other.digits) {
                core::cmp::Ordering::Less => {
                    BigInt::from_mag(sub::sub_mag(&other.digits, &self.digits), true)
                }
                _ => BigInt::from_mag(sub::sub_mag(&self.digits, &other.digits), false),
            },
        }
    }

    /// `x * y`.
    pub fn mul(&self, other: &BigInt) -> BigInt {
        let sign = self.sign ^ other.sign;
        BigInt::from_mag(mul::mul_mag(&self.digits, &other.digits), sign)
    }

    /// `x * y` for a scalar right-hand side.
    pub fn mul_u32(&self, y: u32) -> BigInt {
        BigInt::from_mag(mul::mul_mag_small(&self.digits, y), self.sign)
    }

    /// `x + y` for a scalar right-hand side.
    pub fn add_u32(&self, y: u32) -> BigInt {
        if self.sign {
            return -self.abs().sub_u32(y);
        }
        BigInt::from_mag(add::add_mag_small(&self.digits, y), false)
    }

    /// `x - y` for a scalar right-hand side.
    pub fn sub_u32(&self, y: u32) -> BigInt {
        if self.sign {
            let mag = add::add_mag_small(&self.digits, y);
            return BigInt::from_mag(mag, true);
        }
        if y == 0 {
            return self.clone();
        }
        let x0 = self.digits.first().copied().unwrap_or(0);
        if self.digits.len() > 1 || x0 >= y {
            BigInt::from_mag(sub::sub_mag_small(&self.digits, y), false)
        } else {
            BigInt::from_mag(core::iter::once(y - x0).collect(), true)
        }
    }

    /// `x / y` and `x % y` together. `Err(DivideByZero)` if `y` is zero.
    pub fn div_rem(&self, other: &BigInt) -> BigIntResult<(BigInt, BigInt)> {
        if other.is_zero() {
            return Err(BigIntError::DivideByZero);
        }
        let (q_mag, r_mag) = div::div_mag(&self.digits, &other.digits);
        let q_sign = !q_mag.is_empty() && (self.sign ^ other.sign);
        let r_sign = !r_mag.is_empty() && self.sign;
        Ok((BigInt::from_mag(q_mag, q_sign), BigInt::from_mag(r_mag, r_sign)))
    }

    /// `x / y`, truncating toward zero.
    pub fn div(&self, other: &BigInt) -> BigIntResult<BigInt> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// `x % y` with the canonical non-negative class: `0 <= result < |y|`.
    pub fn modulus(&self, other: &BigInt) -> BigIntResult<BigInt> {
        let (_, r) = self.div_rem(other)?;
        Ok(if r.sign {
            other.abs().sub(&r.abs())
        } else {
            r
        })
    }

    /// `x / y` for a scalar divisor, returning the quotient. `Err` on zero
    /// divisor.
    pub fn div_u32(&self, y: u32) -> BigIntResult<BigInt> {
        self.div_rem_u32(y).map(|(q, _)| q)
    }

    /// `x / y` and the exact signed remainder as a machine integer, for a
    /// scalar divisor — the single-scalar fast path of spec.md §6.
    pub fn div_rem_u32(&self, y: u32) -> BigIntResult<(BigInt, i64)> {
        if y == 0 {
            return Err(BigIntError::DivideByZero);
        }
        let (q_mag, r) = div::div_mag_small(&self.digits, y);
        let q_sign = !q_mag.is_empty() && self.sign;
        let signed_r = if self.sign { -(r as i64) } else { r as i64 };
        Ok((BigInt::from_mag(q_mag, q_sign), signed_r))
    }

    /// `x % y` for a scalar divisor, canonicalized to `[0, y)`.
    pub fn mod_u32(&self, y: u32) -> BigIntResult<u32> {
        if y == 0 {
            return Err(BigIntError::DivideByZero);
        }
        let (_, r) = div::div_mag_small(&self.digits, y);
        Ok(if self.sign && r != 0 { y - r } else { r })
    }

    /// `x & y` on magnitudes (the sign of both operands is ignored, per
    /// spec.md §4.6's restriction of bitwise ops to the non-negative
    /// magnitude).
    pub fn bw_and(&self, other: &BigInt) -> BigInt {
        BigInt::from_mag(bitwise::and_mag(&self.digits, &other.digits), false)
    }

    /// `x | y` on magnitudes.
    pub fn bw_or(&self, other: &BigInt) -> BigInt {
        BigInt::from_mag(bitwise::or_mag(&self.digits, &other.digits), false)
    }

    /// `x ^ y` on magnitudes.
    pub fn bw_xor(&self, other: &BigInt) -> BigInt {
        BigInt::from_mag(bitwise::xor_mag(&self.digits, &other.digits), false)
    }

    /// `x << n`.
    pub fn bw_shl(&self, n: usize) -> BigInt {
        BigInt::from_mag(bitwise::shl_mag(&self.digits, n), self.sign)
    }

    /// `x >> n` (arithmetic shift on the magnitude; callers needing
    /// floor-division semantics for negative `x` should use `div`/`modulus`
    /// instead, per spec.md §4.6/§8).
    pub fn bw_shr(&self, n: usize) -> BigInt {
        BigInt::from_mag(bitwise::shr_mag(&self.digits, n), self.sign)
    }

    /// Read bit `i` of the magnitude.
    pub fn get_bit(&self, i: usize) -> bool {
        bitwise::get_bit(&self.digits, i)
    }

    /// Set bit `i` of the magnitude, growing the buffer if needed.
    pub fn set_bit(&mut self, i: usize) {
        bitwise::set_bit(&mut self.digits, i);
    }

    /// Clear bit `i` of the magnitude.
    pub fn clr_bit(&mut self, i: usize) {
        bitwise::clr_bit(&mut self.digits, i);
        self.trunc();
    }

    /// Greatest common divisor of the magnitudes of `a` and `b` (always
    /// non-negative).
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        gcd_algo::gcd(self, other)
    }

    /// `lcm(x, y) = |x*y| / gcd(x, y)`. Zero if either input is zero.
    pub fn lcm(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return BigInt::zero();
        }
        let g = self.gcd(other);
        self.mul(other).abs().div(&g).expect("gcd of nonzero inputs is nonzero")
    }

    /// Extended Euclidean algorithm: returns `(g, x, y)` with `a*x + b*y ==
    /// g == gcd(a, b)`.
    pub fn ext_gcd(&self, other: &BigInt) -> (BigInt, BigInt, BigInt) {
        gcd_algo::ext_gcd(self, other)
    }

    /// The modular multiplicative inverse of `x` modulo `m`, in `[0, m)`.
    /// `Err(Domain)` if `gcd(x, m) != 1`.
    pub fn mod_inv(&self, m: &BigInt) -> BigIntResult<BigInt> {
        gcd_algo::mod_inv(self, m)
    }

    /// `x^y`. `Err(Domain)` if `y` is negative.
    pub fn exp(&self, y: &BigInt) -> BigIntResult<BigInt> {
        crate::algorithms::exp::exp(self, y)
    }

    /// `(x^y) mod m`, dispatching to Montgomery reduction for an odd,
    /// non-negative modulus with a non-negative base.
    pub fn mod_exp(&self, y: &BigInt, m: &BigInt) -> BigIntResult<BigInt> {
        crate::algorithms::exp::mod_exp(self, y, m)
    }

    pub(crate) fn from_mag(digits: DigitVec, sign: bool) -> BigInt {
        let mut out = BigInt { sign, digits };
        out.trunc();
        out
    }
}

macro_rules! forward_ref_binop {
    ($imp:ident, $method:ident) => {
        impl core::ops::$imp<&BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$method(self, rhs)
            }
        }
        impl core::ops::$imp<BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$method(&self, &rhs)
            }
        }
        impl core::ops::$imp<&BigInt> for BigInt {
            type Output = BigInt;
            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$method(&self, rhs)
            }
        }
        impl core::ops::$imp<BigInt> for &BigInt {
            type Output = BigInt;
            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$method(self, &rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);
forward_ref_binop!(Mul, mul);
forward_ref_binop!(BitAnd, bw_and);
forward_ref_binop!(BitOr, bw_or);
forward_ref_binop!(BitXor, bw_xor);

impl core::ops::Neg for &BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        let mut out = self.clone();
        if !out.is_zero() {
            out.sign = !out.sign;
        }
        out
    }
}
impl core::ops::Neg for BigInt {
    type Output = BigInt;
    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
        self
    }
}

impl core::ops::Shl<usize> for &BigInt {
    type Output = BigInt;
    fn shl(self, n: usize) -> BigInt {
        self.bw_shl(n)
    }
}
impl core::ops::Shr<usize> for &BigInt {
    type Output = BigInt;
    fn shr(self, n: usize) -> BigInt {
        self.bw_shr(n)
    }
}

// `Div`/`Rem` panic on zero divisor (matching `core`'s own integer types'
// behavior) rather than returning `Result`; `div`/`div_rem`/`modulus` above
// are the fallible API spec.md §7 requires.
impl core::ops::Div<&BigInt> for &BigInt {
    type Output = BigInt;
    fn div(self, rhs: &BigInt) -> BigInt {
        BigInt::div(self, rhs).expect("division by zero")
    }
}
impl core::ops::Rem<&BigInt> for &BigInt {
    type Output = BigInt;
    fn rem(self, rhs: &BigInt) -> BigInt {
        BigInt::modulus(self, rhs).expect("division by zero")
    }
}

/// Exposes the magnitude-only digit comparator used by other modules
/// (Montgomery, Miller-Rabin) that need it without the signed wrapper.
pub(crate) fn cmp_digits(x: &[BigDigit], y: &[BigDigit]) -> core::cmp::Ordering {
    cmp_mag(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn n(s: &str) -> BigInt {
        BigInt::from_str(s).unwrap()
    }

    #[test]
    fn ring_laws_hold() {
        let a = n("123456789012345678901234567890");
        let b = n("987654321098765432109876543210");
        let c = n("42");

        assert_eq!(a.add(&b), b.add(&a));
        assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        assert_eq!(a.mul(&b.add(&c)), a.mul(&b).add(&a.mul(&c)));
        assert_eq!(a.sub(&b).add(&b), a);
    }

    #[test]
    fn known_product_and_sum() {
        let a = n("123456789012345678901234567890");
        let b = n("987654321098765432109876543210");
        assert_eq!(
            a.mul(&b),
            n("121932631137021795226185032733622923332237463801111263526900")
        );
        assert_eq!(a.add(&b), n("1111111110111111111011111111100"));
    }

    #[test]
    fn division_identity_holds() {
        let a = n("-123456789012345678901234567890");
        let b = n("987654321");
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q.mul(&b).add(&r), a);

        let m = a.modulus(&b).unwrap();
        assert!(!m.sign);
        assert!(m.cmp_with(&b.abs(), false) == core::cmp::Ordering::Less);
    }

    #[test]
    fn divide_by_zero_is_an_error() {
        let a = n("5");
        let z = BigInt::zero();
        assert_eq!(a.div(&z).unwrap_err(), BigIntError::DivideByZero);
        assert_eq!(a.modulus(&z).unwrap_err(), BigIntError::DivideByZero);
    }

    #[test]
    fn shift_matches_scalar_identity() {
        let a = n("123456789012345");
        let shifted = a.bw_shl(10);
        let expected = a.mul(&BigInt::from(1u64 << 10));
        assert_eq!(shifted, expected);

        let down = shifted.bw_shr(10);
        assert_eq!(down, a);
    }

    #[test]
    fn gcd_and_ext_gcd_scenario() {
        let a = n("240");
        let b = n("46");
        assert_eq!(a.gcd(&b), n("2"));

        let (g, x, y) = a.ext_gcd(&b);
        assert_eq!(g, n("2"));
        assert_eq!(x, n("-9"));
        assert_eq!(y, n("47"));
        assert_eq!(a.mul(&x).add(&b.mul(&y)), g);
    }
}
