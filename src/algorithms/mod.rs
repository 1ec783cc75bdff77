//! The arithmetic engine: magnitude-level primitives operating on raw
//! little-endian digit slices, plus the signed binary-exponentiation and
//! GCD layers built on top of the signed [`crate::BigInt`] API.

pub(crate) mod add;
pub(crate) mod bitwise;
pub(crate) mod div;
pub(crate) mod exp;
pub(crate) mod gcd;
pub(crate) mod mul;
pub(crate) mod sub;

use core::cmp::Ordering;

use crate::big_digit::BigDigit;

/// Unsigned magnitude comparison of two digit slices.
pub(crate) fn cmp_mag(x: &[BigDigit], y: &[BigDigit]) -> Ordering {
    match x.len().cmp(&y.len()) {
        Ordering::Equal => {
            for (a, b) in x.iter().rev().zip(y.iter().rev()) {
                match a.cmp(b) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            Ordering::Equal
        }
        other => other,
    }
}
