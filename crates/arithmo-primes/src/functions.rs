//! Number-theoretic functions derived from factorization.

use arithmo_integers::{Integer, Natural};

use crate::error::PrimeError;
use crate::factor::factorize;

/// Euler's totient: the count of integers in `[1, n]` coprime to `n`.
///
/// Computed in integer arithmetic as `(n / prod(p)) * prod(p - 1)` over
/// the distinct prime divisors, avoiding rationals.
///
/// # Errors
///
/// Returns [`PrimeError::ZeroInput`] for `n = 0`, or a factorization
/// failure.
pub fn totient(n: &Natural) -> Result<Natural, PrimeError> {
    let factorization = factorize(n)?;
    let mut result = n.clone();
    for f in &factorization {
        let (q, _) = result.div_rem(&f.prime);
        let p_minus_1 = Natural::new(f.prime.as_integer() - &Integer::from(1u32))
            .expect("primes exceed 1");
        result = q * p_minus_1;
    }
    Ok(result)
}

/// The Moebius function: 0 if `n` has a squared prime factor, otherwise
/// `(-1)^k` for `k` distinct prime factors.
///
/// # Errors
///
/// Returns [`PrimeError::ZeroInput`] for `n = 0`, or a factorization
/// failure.
pub fn moebius_mu(n: &Natural) -> Result<i8, PrimeError> {
    let factorization = factorize(n)?;
    if factorization.iter().any(|f| f.exponent > 1) {
        return Ok(0);
    }
    Ok(if factorization.len() % 2 == 0 { 1 } else { -1 })
}

/// The divisor power sum `sigma_k(n) = sum of d^k over divisors d of n`.
///
/// Multiplicative: the product over prime-power factors `p^e` of
/// `1 + p^k + ... + p^(k*e)`, with closed forms for `k = 0` (divisor
/// count) and `k = 1`.
///
/// # Errors
///
/// Returns [`PrimeError::ZeroInput`] for `n = 0`, or a factorization
/// failure.
pub fn divisor_sum(n: &Natural, k: u32) -> Result<Natural, PrimeError> {
    let factorization = factorize(n)?;
    let mut result = Natural::one();
    for f in &factorization {
        let term = match k {
            // sigma_0 contribution: e + 1 divisors of p^e.
            0 => Natural::from(f.exponent + 1),
            // sigma_1 contribution: (p^(e+1) - 1) / (p - 1).
            1 => {
                let p = f.prime.as_integer();
                let num = p.pow(f.exponent + 1) - Integer::from(1u32);
                let den = p - &Integer::from(1u32);
                Natural::new(num / den).expect("geometric sum is positive")
            }
            _ => {
                let pk = f.prime.pow(k);
                let mut sum = Natural::one();
                let mut power = Natural::one();
                for _ in 0..f.exponent {
                    power = &power * &pk;
                    sum = &sum + &power;
                }
                sum
            }
        };
        result = result * term;
    }
    Ok(result)
}

/// All positive divisors of `n`, in increasing order.
///
/// Generated as the cartesian product of `{p^0, ..., p^e}` across the
/// factorization entries.
///
/// # Errors
///
/// Returns [`PrimeError::ZeroInput`] for `n = 0`, or a factorization
/// failure.
pub fn divisors(n: &Natural) -> Result<Vec<Natural>, PrimeError> {
    let factorization = factorize(n)?;
    let mut out = vec![Natural::one()];
    for f in &factorization {
        let mut next = Vec::with_capacity(out.len() * (f.exponent as usize + 1));
        let mut power = Natural::one();
        for e in 0..=f.exponent {
            if e > 0 {
                power = &power * &f.prime;
            }
            for d in &out {
                next.push(d * &power);
            }
        }
        out = next;
    }
    out.sort();
    Ok(out)
}
