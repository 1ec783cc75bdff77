//! `rand`-crate integration on top of the raw random-digit-callback
//! constructors in `convert.rs`.
//!
//! The library itself never reaches for a system RNG; every constructor
//! here is a thin adapter from an `rng.fill`-style word source onto
//! [`BigInt::from_random_words`], the "digit producing function" signature
//! callers are expected to supply.

#![cfg(feature = "rand")]

use rand::distributions::Distribution;
use rand::Rng;

use crate::bigint::BigInt;

/// Random `BigInt` generation on top of any [`rand::Rng`].
pub trait RandBigInt {
    /// A random non-negative `BigInt` of exactly `bit_size` bits.
    fn gen_bigint(&mut self, bit_size: usize) -> BigInt;

    /// A random non-negative `BigInt` in `[0, bound)`. Panics if `bound` is
    /// not positive.
    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt;

    /// A random `BigInt` in `[lbound, ubound)`. Panics if `ubound` does not
    /// exceed `lbound`.
    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt;
}

impl<R: Rng + ?Sized> RandBigInt for R {
    fn gen_bigint(&mut self, bit_size: usize) -> BigInt {
        if bit_size == 0 {
            return BigInt::zero();
        }
        BigInt::from_random_words(bit_size, || self.gen::<u32>())
    }

    fn gen_bigint_below(&mut self, bound: &BigInt) -> BigInt {
        assert!(!bound.is_zero() && !bound.is_negative(), "bound must be positive");
        // Rejection sampling against the smallest power-of-two bit width
        // covering `bound`.
        let bits = bound.get_bitsize();
        loop {
            let candidate = self.gen_bigint(bits);
            if candidate.cmp_with(bound, false) == core::cmp::Ordering::Less {
                return candidate;
            }
        }
    }

    fn gen_bigint_range(&mut self, lbound: &BigInt, ubound: &BigInt) -> BigInt {
        assert!(
            lbound.cmp_with(ubound, false) == core::cmp::Ordering::Less,
            "ubound must exceed lbound"
        );
        let span = ubound.sub(lbound);
        lbound.add(&self.gen_bigint_below(&span))
    }
}

/// A distribution yielding `BigInt`s of a fixed bit size, for use with
/// `Rng::sample`.
#[derive(Clone, Copy, Debug)]
pub struct RandomBits {
    bits: usize,
}

impl RandomBits {
    pub fn new(bits: usize) -> RandomBits {
        RandomBits { bits }
    }
}

impl Distribution<BigInt> for RandomBits {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInt {
        rng.gen_bigint(self.bits)
    }
}
