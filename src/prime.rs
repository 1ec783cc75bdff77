//! Miller-Rabin primality testing (spec.md §4.10), and a bounded
//! probable-prime search built on top of it (spec.md §1's stated purpose of
//! supporting RSA key generation; see DESIGN.md for the original_source/
//! grounding of the search helper).

use crate::bigint::BigInt;
use crate::error::{BigIntError, BigIntResult};

/// Deterministic single-witness Miller-Rabin test.
///
/// `Err(Domain)` if `witness` is outside `[2, candidate - 2]`. Returns
/// `false` immediately for `candidate == 0` or an even `candidate`
/// (guaranteed composite or non-prime by definition).
pub fn miller_rabin(candidate: &BigInt, witness: &BigInt) -> BigIntResult<bool> {
    if candidate.is_zero() || !candidate.is_odd() {
        return Ok(false);
    }

    let cand_sub1 = candidate.sub_u32(1);
    if witness.cmp_with(&BigInt::from(2i64), false) == core::cmp::Ordering::Less
        || witness.cmp_with(&cand_sub1, false) != core::cmp::Ordering::Less
    {
        return Err(BigIntError::Domain(
            "witness must be within [2, candidate - 2]",
        ));
    }

    // n - 1 = d * 2^s, d odd. s starts at 1 because n-1 is always even.
    let mut s = 1usize;
    while !cand_sub1.get_bit(s) {
        s += 1;
    }
    let d = cand_sub1.bw_shr(s);

    let mut t = witness.mod_exp(&d, candidate)?;
    if t == BigInt::one() || t == cand_sub1 {
        return Ok(true);
    }

    for _ in 1..s {
        // A single squaring per round, not a full `mod_exp`: this is the
        // main constant-factor win over the naive Fermat-loop formulation.
        t = t.mul(&t).modulus(candidate)?;
        if t == cand_sub1 {
            return Ok(true);
        }
    }

    Ok(false)
}

/// Run Miller-Rabin against every witness in `witnesses`; `candidate` is
/// reported prime only if every witness fails to prove it composite.
pub fn miller_rabin_all(candidate: &BigInt, witnesses: &[BigInt]) -> BigIntResult<bool> {
    for w in witnesses {
        if !miller_rabin(candidate, w)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Draw random odd candidates of `bit_size` bits via `next_word` (see
/// [`BigInt::from_random_words`]) until one passes Miller-Rabin against
/// every witness in `witnesses`.
///
/// Not itself a spec.md-named operation; a convenience built entirely from
/// already-specified primitives (construction + `miller_rabin`), matching
/// this crate's stated purpose of supporting RSA key generation. No
/// trial-division sieve is applied here — callers wanting one may layer it
/// in front of this search, per spec.md's Non-goal on sieve logic.
#[cfg(feature = "prime")]
pub fn probable_prime<F: FnMut() -> u32>(
    bit_size: usize,
    witnesses: &[BigInt],
    mut next_word: F,
) -> BigIntResult<BigInt> {
    loop {
        let mut candidate = BigInt::from_random_words(bit_size, &mut next_word);
        candidate.set_bit(0);
        candidate.set_bit(bit_size - 1);

        match miller_rabin_all(&candidate, witnesses) {
            Ok(true) => {
                log::debug!("probable_prime: candidate accepted after witness checks");
                return Ok(candidate);
            }
            Ok(false) => {
                log::trace!("probable_prime: candidate rejected by Miller-Rabin");
                continue;
            }
            Err(e) => return Err(e),
        }
    }
}
