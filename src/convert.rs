//! Constructors and output conversions: machine integers, word/byte arrays
//! in either word order, base-10 text, a random-digit callback, and their
//! symmetric outputs.

use core::fmt;
use core::str::FromStr;

use crate::big_digit::BigDigit;
use crate::bigint::{BigInt, DigitVec};
use crate::error::BigIntError;

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        let mut digits = DigitVec::new();
        digits.push(n as BigDigit);
        digits.push((n >> 32) as BigDigit);
        let mut out = BigInt { sign: false, digits };
        out.trunc();
        out
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        let sign = n < 0;
        // `unsigned_abs` avoids overflow on `i64::MIN`.
        let mag = n.unsigned_abs();
        let mut out = BigInt::from(mag);
        out.sign = sign && !out.is_zero();
        out
    }
}

impl From<u32> for BigInt {
    fn from(n: u32) -> Self {
        BigInt::from(n as u64)
    }
}

impl From<i32> for BigInt {
    fn from(n: i32) -> Self {
        BigInt::from(n as i64)
    }
}

impl BigInt {
    /// Build a magnitude from 32-bit words, least-significant word first.
    pub fn from_words_lsw(words: &[u32], sign: bool) -> Self {
        let mut digits = DigitVec::new();
        digits.extend_from_slice(words);
        let mut out = BigInt { sign, digits };
        out.trunc();
        out
    }

    /// Build a magnitude from 32-bit words, most-significant word first.
    pub fn from_words_msw(words: &[u32], sign: bool) -> Self {
        let mut digits = DigitVec::new();
        digits.extend(words.iter().rev().copied());
        let mut out = BigInt { sign, digits };
        out.trunc();
        out
    }

    /// Build a magnitude from bytes, least-significant byte first.
    pub fn from_bytes_lsw(bytes: &[u8], sign: bool) -> Self {
        let mut digits = DigitVec::with_capacity((bytes.len() + 3) / 4);
        for chunk in bytes.chunks(4) {
            let mut word = 0u32;
            for (i, &b) in chunk.iter().enumerate() {
                word |= (b as u32) << (i * 8);
            }
            digits.push(word);
        }
        let mut out = BigInt { sign, digits };
        out.trunc();
        out
    }

    /// Build a magnitude from bytes, most-significant byte first (network
    /// byte order — the usual wire/key-material encoding).
    pub fn from_bytes_msw(bytes: &[u8], sign: bool) -> Self {
        let mut digits = DigitVec::new();
        digits.resize((bytes.len() + 3) / 4, 0);
        // Walk from the last byte (LSB) to the first, packing 4 bytes per word.
        let mut word_idx = 0;
        let mut shift = 0;
        for &b in bytes.iter().rev() {
            digits[word_idx] |= (b as u32) << shift;
            shift += 8;
            if shift == 32 {
                shift = 0;
                word_idx += 1;
            }
        }
        let mut out = BigInt { sign, digits };
        out.trunc();
        out
    }

    /// Dump the magnitude as 32-bit words, least-significant word first.
    pub fn to_words_lsw(&self) -> Vec<u32> {
        self.digits.iter().copied().collect()
    }

    /// Dump the magnitude as 32-bit words, most-significant word first.
    pub fn to_words_msw(&self) -> Vec<u32> {
        self.digits.iter().rev().copied().collect()
    }

    /// Dump the magnitude as bytes, most-significant byte first, with no
    /// leading zero bytes (matching the round-trip property of spec.md §8).
    pub fn to_bytes_msw(&self) -> Vec<u8> {
        if self.is_zero() {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(self.digits.len() * 4);
        let msw = *self.digits.last().unwrap();
        let leading = (msw.leading_zeros() / 8) as usize;
        out.extend(msw.to_be_bytes().into_iter().skip(leading));
        for &word in self.digits[..self.digits.len() - 1].iter().rev() {
            out.extend_from_slice(&word.to_be_bytes());
        }
        out
    }

    /// Dump the magnitude as bytes, least-significant byte first.
    pub fn to_bytes_lsw(&self) -> Vec<u8> {
        let mut be = self.to_bytes_msw();
        be.reverse();
        be
    }

    /// Build a magnitude of exactly `bit_size` bits using a caller-supplied
    /// per-word random source. The top word is re-drawn until non-zero so
    /// the magnitude has exactly the requested bit length, matching
    /// spec.md §6/§9: this crate never calls a system RNG itself.
    pub fn from_random_words<F: FnMut() -> u32>(bit_size: usize, mut next_word: F) -> Self {
        if bit_size == 0 {
            return BigInt::zero();
        }
        let whole_words = bit_size / 32;
        let rem = bit_size % 32;
        let n_words = whole_words + if rem > 0 { 1 } else { 0 };
        let mut digits = DigitVec::with_capacity(n_words);
        for _ in 0..n_words.saturating_sub(1) {
            digits.push(next_word());
        }
        let mut top = next_word();
        while top == 0 {
            top = next_word();
        }
        if rem > 0 {
            top >>= 32 - rem;
            // Re-drawing only the raw word could still mask to zero; force
            // the top bit so the requested bit length is exact.
            top |= 1 << (rem - 1);
        } else {
            // `bit_size` is an exact multiple of 32: the whole word is
            // significant, so force its top bit rather than only the
            // masked-down one above.
            top |= 1 << 31;
        }
        digits.push(top);
        let mut out = BigInt { sign: false, digits };
        out.trunc();
        out
    }

    /// Build a magnitude of exactly `bit_size` bits using a caller-supplied
    /// per-byte random source.
    pub fn from_random_bytes<F: FnMut() -> u8>(bit_size: usize, mut next_byte: F) -> Self {
        BigInt::from_random_words(bit_size, move || {
            let mut word = 0u32;
            for i in 0..4 {
                word |= (next_byte() as u32) << (i * 8);
            }
            word
        })
    }
}

/// Parse a base-10 integer.
///
/// Accepts optional leading whitespace, an optional leading `+`/`-`, and
/// internal spaces or commas as separators (matching the Alginate source
/// this spec was distilled from). Any other character is
/// [`BigIntError::Domain`].
impl FromStr for BigInt {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start();
        let (sign, digits_str) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };

        if digits_str.is_empty() {
            return Err(BigIntError::Domain("empty base-10 string"));
        }

        let mut acc = BigInt::zero();
        let mut saw_digit = false;
        for c in digits_str.chars() {
            if c == ' ' || c == ',' {
                continue;
            }
            let d = c
                .to_digit(10)
                .ok_or(BigIntError::Domain("invalid base-10 character"))?;
            saw_digit = true;
            acc = acc.mul_u32(10).add_u32(d);
        }
        if !saw_digit {
            return Err(BigIntError::Domain("no digits in base-10 string"));
        }

        acc.sign = sign && !acc.is_zero();
        Ok(acc)
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        if self.sign {
            write!(f, "-")?;
        }
        let mut temp = self.abs();
        let mut rev = Vec::new();
        while !temp.is_zero() {
            let (q, r) = temp.div_rem_u32(10).expect("divisor 10 is nonzero");
            temp = q;
            rev.push(b'0' + r as u8);
        }
        for &b in rev.iter().rev() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

/// Debug form: words listed least-significant-word first in braces, e.g.
/// `-{1, 0, 4294967295}`.
impl BigInt {
    pub fn debug_form(&self) -> String {
        use core::fmt::Write;
        let mut out = String::new();
        if self.sign {
            out.push('-');
        }
        if self.is_zero() {
            out.push_str("{0}");
            return out;
        }
        out.push('{');
        for (i, d) in self.digits.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}", d);
        }
        out.push('}');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_bytes() {
        let x = BigInt::from(0x01020304_05060708u64);
        let bytes = x.to_bytes_msw();
        let back = BigInt::from_bytes_msw(&bytes, false);
        assert_eq!(x, back);
    }

    #[test]
    fn parses_base10_with_separators() {
        let x: BigInt = "  -1,234 567".parse().unwrap();
        assert_eq!(x, BigInt::from(-1234567i64));
    }

    #[test]
    fn rejects_malformed_base10() {
        assert!("12x4".parse::<BigInt>().is_err());
        assert!("".parse::<BigInt>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let x = BigInt::from(-987654321098765432i64);
        let s = x.to_string();
        let back: BigInt = s.parse().unwrap();
        assert_eq!(x, back);
    }

    #[test]
    fn random_words_has_exact_bit_size() {
        let mut words = [0x12345678u32, 0x00000001u32].into_iter();
        let x = BigInt::from_random_words(40, || words.next().unwrap());
        assert_eq!(x.get_bitsize(), 40);
    }

    #[test]
    fn random_words_forces_top_bit_on_whole_word_boundary() {
        // `bit_size` an exact multiple of 32: the `rem == 0` branch must
        // still force the top bit, not just the `rem > 0` masking path.
        let x = BigInt::from_random_words(32, || 1);
        assert_eq!(x.get_bitsize(), 32);
    }

    #[test]
    fn debug_form_lists_lsw_first() {
        let x = BigInt::from_words_lsw(&[1, 2, 3], false);
        assert_eq!(x.debug_form(), "{1, 2, 3}");
    }
}
