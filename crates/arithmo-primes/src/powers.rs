//! Perfect powers and power decompositions.

use arithmo_integers::Natural;

use crate::error::PrimeError;
use crate::factor::{defactorize, factorize, Factor};
use crate::roots::{integer_root, integer_root_remainder};

/// Decomposes `a >= 1` as `b^r` with `r` maximal.
///
/// The maximal exponent is the gcd of all exponents in the
/// factorization of `a`; `as_power(1)` is `(1, 1)`.
///
/// # Errors
///
/// Returns [`PrimeError::ZeroInput`] for `a = 0`, or a factorization
/// failure for pathological composites.
pub fn as_power(a: &Natural) -> Result<(Natural, u32), PrimeError> {
    if a.is_zero() {
        return Err(PrimeError::ZeroInput {
            operation: "as_power",
            value: a.clone(),
        });
    }
    if a.is_one() {
        return Ok((Natural::one(), 1));
    }

    let factorization = factorize(a)?;
    let r = factorization
        .iter()
        .fold(0u32, |g, f| gcd_u32(g, f.exponent));
    let base: Vec<Factor> = factorization
        .iter()
        .map(|f| Factor {
            prime: f.prime.clone(),
            exponent: f.exponent / r,
        })
        .collect();
    Ok((defactorize(&base), r))
}

/// Returns `Some((b, r))` with `a = b^r` and `r >= 2` if `a` is a
/// perfect power, `None` otherwise.
///
/// # Errors
///
/// Propagates [`as_power`] failures.
pub fn perfect_power(a: &Natural) -> Result<Option<(Natural, u32)>, PrimeError> {
    let (b, r) = as_power(a)?;
    Ok((r >= 2).then_some((b, r)))
}

/// Returns true if `a` is `b^r` for some `r >= 2`.
///
/// # Errors
///
/// Propagates [`as_power`] failures.
pub fn is_perfect_power(a: &Natural) -> Result<bool, PrimeError> {
    Ok(perfect_power(a)?.is_some())
}

/// Returns `Some((p, e))` if `n = p^e` for a prime `p` and `e >= 1`.
///
/// # Errors
///
/// Propagates factorization failures.
pub fn prime_power(n: &Natural) -> Result<Option<(Natural, u32)>, PrimeError> {
    if n.is_zero() || n.is_one() {
        return Ok(None);
    }
    let factorization = factorize(n)?;
    if let [f] = factorization.as_slice() {
        Ok(Some((f.prime.clone(), f.exponent)))
    } else {
        Ok(None)
    }
}

/// Returns true if `n = p^e` for an odd prime `p`.
///
/// # Errors
///
/// Propagates factorization failures.
pub fn is_odd_prime_power(n: &Natural) -> Result<bool, PrimeError> {
    Ok(matches!(prime_power(n)?, Some((p, _)) if !p.is_even()))
}

/// Returns the exact square root if `n` is a perfect square.
#[must_use]
pub fn perfect_square(n: &Natural) -> Option<Natural> {
    let (r, rem) = integer_root_remainder(n, 2).expect("exponent 2 is positive");
    rem.is_zero().then_some(r)
}

/// Cycle-free perfect-power probe: finds `(b, e)` with `a = b^e` and
/// prime `e >= 2`, using only integer roots.
///
/// Unlike [`as_power`] this never factorizes, so the factorization
/// engine can call it while splitting large composites.
pub(crate) fn find_power_split(a: &Natural) -> Option<(Natural, u32)> {
    if a.is_zero() || a.is_one() {
        return None;
    }
    let max_exp = u32::try_from(a.bit_len()).unwrap_or(u32::MAX);
    for e in 2..=max_exp {
        if !is_small_prime(e) {
            continue;
        }
        let r = integer_root(a, e).expect("e >= 2");
        if &r.pow(e) == a {
            return Some((r, e));
        }
        // Once 2^e exceeds a, larger exponents only give root 1.
        if r.is_one() {
            break;
        }
    }
    None
}

fn gcd_u32(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn is_small_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u32;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}
