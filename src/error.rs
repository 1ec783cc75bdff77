//! Error taxonomy for fallible operations.
//!
//! Canonicalization is never an error: `trunc` is re-established
//! unconditionally at the end of every producer. Only the handful of
//! operations with a genuine domain restriction (division by zero, a
//! negative exponent, an even Montgomery modulus, an out-of-range
//! Miller-Rabin witness, a non-invertible modular inverse, malformed base-10
//! text) return `Result`.

use core::fmt;

/// The error type returned by this crate's fallible operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BigIntError {
    /// Division or modulus with a zero divisor.
    DivideByZero,
    /// An input lies outside the domain an operation is defined on
    /// (negative exponent, even Montgomery modulus, out-of-range witness,
    /// non-existent modular inverse, malformed base-10 text).
    Domain(&'static str),
    /// An operation that is only defined on non-negative magnitudes
    /// (Montgomery reduction and exponentiation) was given a signed input.
    Unsupported(&'static str),
}

/// Convenience alias for this crate's `Result` type.
pub type BigIntResult<T> = Result<T, BigIntError>;

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BigIntError::DivideByZero => write!(f, "division or modulus by zero"),
            BigIntError::Domain(reason) => write!(f, "domain error: {}", reason),
            BigIntError::Unsupported(reason) => write!(f, "unsupported: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BigIntError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_stable() {
        assert_eq!(
            BigIntError::DivideByZero.to_string(),
            "division or modulus by zero"
        );
        assert_eq!(
            BigIntError::Domain("negative exponent").to_string(),
            "domain error: negative exponent"
        );
    }
}
