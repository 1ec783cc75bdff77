//! Arbitrary-precision signed integers.
//!
//! [`BigInt`] stores a sign and a base-2^32 magnitude and supports the usual
//! ring operations, bitwise operations on the magnitude, binary and
//! Montgomery modular exponentiation, the extended Euclidean algorithm, and
//! Miller-Rabin primality testing — the building blocks this crate's
//! intended use case, RSA key generation and modular arithmetic, is built
//! from.
//!
//! ```
//! use bignum_core::BigInt;
//! use core::str::FromStr;
//!
//! let a = BigInt::from_str("123456789012345678901234567890").unwrap();
//! let b = BigInt::from(2i64);
//! assert_eq!((&a * &b).to_string(), "246913578024691357802469135780");
//! ```

mod big_digit;
mod bigint;
mod convert;
mod error;
mod ops;

mod algorithms;
mod monty;
mod prime;

#[cfg(feature = "rand")]
mod bigrand;

#[cfg(feature = "serde")]
mod impl_serde;

pub use crate::bigint::BigInt;
pub use crate::error::{BigIntError, BigIntResult};

#[cfg(feature = "rand")]
pub use crate::bigrand::{RandBigInt, RandomBits};

#[cfg(feature = "prime")]
pub use crate::prime::probable_prime;
pub use crate::prime::{miller_rabin, miller_rabin_all};
