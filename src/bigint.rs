//! The canonical big-integer representation: magnitude plus sign.

use core::cmp::Ordering;
use smallvec::SmallVec;

use crate::big_digit::BigDigit;

/// Inline capacity for the digit buffer before it spills to the heap.
/// Four 32-bit words cover every `u128` without allocating.
pub(crate) const INLINE_DIGITS: usize = 4;

pub(crate) type DigitVec = SmallVec<[BigDigit; INLINE_DIGITS]>;

/// An arbitrary-precision signed integer.
///
/// Represented as a non-negative magnitude (`digits`, base `2^32`,
/// least-significant word first) and a `sign` flag. The representation is
/// canonical at every public boundary: `digits` never carries a trailing
/// zero word, and zero is always stored with `sign == false` and an empty
/// digit buffer. Every producer in this crate ends with [`BigInt::trunc`] to
/// re-establish this invariant.
#[derive(Clone, Debug)]
pub struct BigInt {
    pub(crate) sign: bool,
    pub(crate) digits: DigitVec,
}

impl BigInt {
    /// The additive identity.
    pub fn zero() -> Self {
        BigInt {
            sign: false,
            digits: DigitVec::new(),
        }
    }

    /// The multiplicative identity.
    pub fn one() -> Self {
        BigInt::from(1i64)
    }

    /// `true` if `self` is canonical zero.
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// `true` if `self` is negative. Zero is never negative.
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// `true` if `self` is an odd integer.
    pub fn is_odd(&self) -> bool {
        self.digits.first().map_or(false, |d| d & 1 == 1)
    }

    /// Number of logically-present digits.
    pub fn size(&self) -> usize {
        self.digits.len()
    }

    /// The magnitude's bit length. Zero has bit length zero.
    pub fn get_bitsize(&self) -> usize {
        match self.digits.last() {
            None => 0,
            Some(&msw) => self.digits.len() * super::big_digit::BITS - msw.leading_zeros() as usize,
        }
    }

    pub(crate) fn digits(&self) -> &[BigDigit] {
        &self.digits
    }

    pub(crate) fn digits_mut(&mut self) -> &mut DigitVec {
        &mut self.digits
    }

    /// Establish `digits.len() == n`.
    ///
    /// Shrinking simply truncates the logical length; growing zero-fills the
    /// new range. `SmallVec` already implements the power-of-two heap growth
    /// policy spec.md's storage layer calls for, so this is a thin wrapper
    /// rather than a hand-rolled allocator.
    pub(crate) fn resize(&mut self, n: usize) {
        self.digits.resize(n, 0);
    }

    /// Drop trailing zero words and re-normalize the sign of canonical zero.
    /// Called at the end of every arithmetic producer.
    pub(crate) fn trunc(&mut self) {
        while let Some(&0) = self.digits.last() {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.sign = false;
        }
    }

    /// Exchange buffer ownership between `self` and `other` without copying
    /// digits. This is the mechanism by which operations taking `ret: &mut
    /// BigInt` support `ret` aliasing an input: compute into a local
    /// temporary, then swap it into `ret`.
    pub(crate) fn swap(&mut self, other: &mut BigInt) {
        core::mem::swap(&mut self.sign, &mut other.sign);
        core::mem::swap(&mut self.digits, &mut other.digits);
    }

    /// Return `self` with the sign cleared.
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: false,
            digits: self.digits.clone(),
        }
    }

    /// Signed or unsigned three-way comparison, matching spec.md `cmp`.
    ///
    /// `unsigned` compares magnitudes only, ignoring both operands' signs.
    pub fn cmp_with(&self, other: &BigInt, unsigned: bool) -> Ordering {
        if !unsigned && self.sign != other.sign {
            return if self.sign {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }

        let ord = match self.digits.len().cmp(&other.digits.len()) {
            Ordering::Equal => {
                let mut ord = Ordering::Equal;
                for (a, b) in self.digits.iter().rev().zip(other.digits.iter().rev()) {
                    match a.cmp(b) {
                        Ordering::Equal => continue,
                        other => {
                            ord = other;
                            break;
                        }
                    }
                }
                ord
            }
            other => other,
        };

        if !unsigned && self.sign && ord != Ordering::Equal {
            ord.reverse()
        } else {
            ord
        }
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_with(other, false) == Ordering::Equal
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_with(other, false)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::Zeroize for BigInt {
    /// Overwrite every digit word and reset to canonical zero. For key
    /// material (spec.md §1's RSA use case) callers should wrap `BigInt` in
    /// `zeroize::Zeroizing` rather than relying on `Drop` here, since this
    /// crate does not implement `ZeroizeOnDrop` itself.
    fn zeroize(&mut self) {
        for d in self.digits.iter_mut() {
            d.zeroize();
        }
        self.digits.clear();
        self.sign = false;
    }
}
