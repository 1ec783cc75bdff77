//! `serde` support. Serializes as `(sign, words)` rather than decimal text:
//! cheaper to produce/consume than base-10 conversion and round-trips
//! exactly, matching the teacher's own `(sign, [u32])` wire shape.

#![cfg(feature = "serde")]

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeTuple;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::bigint::BigInt;

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(2)?;
        tup.serialize_element(&self.is_negative())?;
        tup.serialize_element(&self.to_words_lsw())?;
        tup.end()
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("a (sign, little-endian u32 words) tuple")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let sign: bool = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
        let words: Vec<u32> = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
        Ok(BigInt::from_words_lsw(&words, sign))
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(2, BigIntVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn round_trips_through_serde_test() {
        let x = BigInt::from_str("-123456789012345678901234567890").unwrap();
        serde_test::assert_tokens(
            &x,
            &[
                serde_test::Token::Tuple { len: 2 },
                serde_test::Token::Bool(true),
                serde_test::Token::Seq { len: Some(3) },
                serde_test::Token::U32(x.to_words_lsw()[0]),
                serde_test::Token::U32(x.to_words_lsw()[1]),
                serde_test::Token::U32(x.to_words_lsw()[2]),
                serde_test::Token::SeqEnd,
                serde_test::Token::TupleEnd,
            ],
        );
    }

    #[test]
    fn zero_round_trips() {
        let zero = BigInt::zero();
        serde_test::assert_tokens(
            &zero,
            &[
                serde_test::Token::Tuple { len: 2 },
                serde_test::Token::Bool(false),
                serde_test::Token::Seq { len: Some(0) },
                serde_test::Token::SeqEnd,
                serde_test::Token::TupleEnd,
            ],
        );
    }
}
