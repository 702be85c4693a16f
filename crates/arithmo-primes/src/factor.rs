//! Integer factorization.
//!
//! Small inputs go through plain trial division; large inputs through a
//! recursive case split ending in Pollard's rho. Both produce the same
//! canonical form: prime factors in strictly increasing order, each with
//! its full exponent.

use arithmo_integers::{Integer, Modulus, Natural};
use num_traits::{One, Zero};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::error::PrimeError;
use crate::powers::find_power_split;
use crate::pseudoprime::PrimalityTester;
use crate::rng::uniform_range;
use crate::roots::max_dividing_power;
use crate::{MAX_RHO_RETRIES, SMALL_FACTOR_LIMIT};

/// One prime-power entry of a factorization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Factor {
    /// The prime base.
    pub prime: Natural,
    /// Its exponent, at least 1.
    pub exponent: u32,
}

/// A complete factorization: primes strictly increasing, exponents >= 1,
/// and the product of `prime^exponent` equal to the input.
pub type Factorization = Vec<Factor>;

/// Factorizes `n >= 1` into prime powers.
///
/// Inputs below [`SMALL_FACTOR_LIMIT`] use trial division; larger
/// inputs use the Pollard-rho case split.
///
/// # Errors
///
/// Returns [`PrimeError::ZeroInput`] for `n = 0`, or
/// [`PrimeError::RhoExhausted`] if a composite resists the rho retry
/// cap (probabilistically negligible).
pub fn factorize(n: &Natural) -> Result<Factorization, PrimeError> {
    if n.is_zero() {
        return Err(PrimeError::ZeroInput {
            operation: "factorize",
            value: n.clone(),
        });
    }
    if let Some(small) = n.to_u64() {
        if small < SMALL_FACTOR_LIMIT {
            return Ok(factorize_small(small));
        }
    }

    let tester = PrimalityTester::default();
    let mut rng = ChaCha8Rng::from_entropy();
    let mut pairs = Vec::new();
    factor_into(n, &tester, &mut rng, 1, &mut pairs)?;

    // Recursion emits factors out of order, possibly with repeated
    // primes from separate branches; sort and merge.
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    let mut out: Factorization = Vec::with_capacity(pairs.len());
    for (prime, exponent) in pairs {
        match out.last_mut() {
            Some(last) if last.prime == prime => last.exponent += exponent,
            _ => out.push(Factor { prime, exponent }),
        }
    }
    Ok(out)
}

/// Factorizes many values in parallel.
///
/// # Errors
///
/// Fails if any single factorization fails.
pub fn factorize_batch(values: &[Natural]) -> Result<Vec<Factorization>, PrimeError> {
    values.par_iter().map(factorize).collect()
}

/// Multiplies a factorization back out: the inverse of [`factorize`].
#[must_use]
pub fn defactorize(factors: &[Factor]) -> Natural {
    factors
        .iter()
        .fold(Natural::one(), |acc, f| &acc * &f.prime.pow(f.exponent))
}

/// Trial division for `n < SMALL_FACTOR_LIMIT`.
///
/// Divides each exponent out inline on machine words rather than
/// bracketing it with `max_dividing_power`; for inputs this small the
/// u64 loop wins and the canonical output is identical.
fn factorize_small(n: u64) -> Factorization {
    let mut out = Vec::new();
    let mut m = n;
    let mut d = 2u64;
    while d * d <= m {
        if m % d == 0 {
            let mut exponent = 0u32;
            while m % d == 0 {
                m /= d;
                exponent += 1;
            }
            out.push(Factor {
                prime: Natural::from(d),
                exponent,
            });
        }
        d += if d == 2 { 1 } else { 2 };
    }
    if m > 1 {
        out.push(Factor {
            prime: Natural::from(m),
            exponent: 1,
        });
    }
    out
}

/// Recursive case split for large `n`, accumulating `(prime, exponent)`
/// pairs. `scale` carries exponent multipliers picked up from
/// perfect-power reductions.
fn factor_into(
    n: &Natural,
    tester: &PrimalityTester<'_>,
    rng: &mut ChaCha8Rng,
    scale: u32,
    out: &mut Vec<(Natural, u32)>,
) -> Result<(), PrimeError> {
    if n.is_one() {
        return Ok(());
    }
    if let Some(small) = n.to_u64() {
        if small < SMALL_FACTOR_LIMIT {
            for f in factorize_small(small) {
                out.push((f.prime, f.exponent * scale));
            }
            return Ok(());
        }
    }
    if tester.is_prime(n) {
        out.push((n.clone(), scale));
        return Ok(());
    }

    // Peel the tiny primes before paying for rho.
    for small in [2u64, 3] {
        let p = Natural::from(small);
        if p.divides(n) {
            let e = max_dividing_power(&p, n).expect("p and n are positive");
            out.push((p.clone(), e * scale));
            let (cofactor, _) = n.div_rem(&p.pow(e));
            return factor_into(&cofactor, tester, rng, scale, out);
        }
    }

    // A composite perfect power is cheaper to open through its root.
    if let Some((base, e)) = find_power_split(n) {
        return factor_into(&base, tester, rng, scale * e, out);
    }

    let d = pollard_rho(n, rng)?;
    let (cofactor, _) = n.div_rem(&d);
    factor_into(&d, tester, rng, scale, out)?;
    factor_into(&cofactor, tester, rng, scale, out)
}

/// Finds a proper divisor of an odd composite `n` by Floyd-cycle
/// Pollard rho on the map `x -> x^2 + 1 mod n`.
///
/// Each attempt runs from a fresh random starting point for a bounded
/// number of steps; attempts are capped at [`MAX_RHO_RETRIES`].
fn pollard_rho(n: &Natural, rng: &mut ChaCha8Rng) -> Result<Natural, PrimeError> {
    let ctx = Modulus::new(n.clone()).expect("n >= 2");
    let one = Integer::one();
    let step = |x: &Natural| -> Natural {
        ctx.add(&(x.as_integer() * x.as_integer()), &one)
    };

    // O(sqrt(n)) expected cycle length, with a hard per-attempt cap so
    // a single attempt cannot run away.
    let max_steps = 1u64 << (u32::try_from(n.bit_len() / 2).unwrap_or(u32::MAX).min(26) + 4);

    for _ in 0..MAX_RHO_RETRIES {
        let seed = uniform_range(rng, &Natural::from(2u64), n);
        let mut tortoise = seed.clone();
        let mut hare = seed;

        for _ in 0..max_steps {
            tortoise = step(&tortoise);
            hare = step(&step(&hare));

            let diff = (tortoise.as_integer() - hare.as_integer()).abs();
            if diff.is_zero() {
                // Cycle closed without finding a factor; reseed.
                break;
            }
            let d = diff.gcd(n.as_integer());
            if !d.is_one() {
                if &d == n.as_integer() {
                    break;
                }
                return Ok(Natural::new(d).expect("gcd is non-negative"));
            }
        }
    }

    Err(PrimeError::RhoExhausted {
        value: n.clone(),
        retries: MAX_RHO_RETRIES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nat(v: u64) -> Natural {
        Natural::from(v)
    }

    fn pairs(factorization: &Factorization) -> Vec<(u64, u32)> {
        factorization
            .iter()
            .map(|f| (f.prime.to_u64().unwrap(), f.exponent))
            .collect()
    }

    #[test]
    fn test_factorize_360() {
        let f = factorize(&nat(360)).unwrap();
        assert_eq!(pairs(&f), vec![(2, 3), (3, 2), (5, 1)]);
    }

    #[test]
    fn test_factorize_edge_cases() {
        assert!(factorize(&nat(0)).is_err());
        assert!(factorize(&nat(1)).unwrap().is_empty());
        assert_eq!(pairs(&factorize(&nat(2)).unwrap()), vec![(2, 1)]);
        assert_eq!(pairs(&factorize(&nat(97)).unwrap()), vec![(97, 1)]);
    }

    #[test]
    fn test_defactorize_round_trip() {
        for n in [1u64, 2, 12, 360, 9973, 65536, 999_983] {
            let f = factorize(&nat(n)).unwrap();
            assert_eq!(defactorize(&f), nat(n), "round trip for {n}");
        }
    }

    #[test]
    fn test_factors_strictly_increasing() {
        let f = factorize(&nat(720_720)).unwrap();
        for w in f.windows(2) {
            assert!(w[0].prime < w[1].prime);
        }
        assert!(f.iter().all(|x| x.exponent >= 1));
    }

    #[test]
    fn test_large_semiprime() {
        // 1000003 and 1000033 are the two smallest primes above the
        // trial-division threshold.
        let n = nat(1_000_003) * nat(1_000_033);
        let f = factorize(&n).unwrap();
        assert_eq!(pairs(&f), vec![(1_000_003, 1), (1_000_033, 1)]);
    }

    #[test]
    fn test_large_perfect_power() {
        let n = nat(1_000_003).pow(2);
        let f = factorize(&n).unwrap();
        assert_eq!(pairs(&f), vec![(1_000_003, 2)]);
    }

    #[test]
    fn test_large_with_small_prime_peeling() {
        let n = nat(24) * nat(1_000_003);
        let f = factorize(&n).unwrap();
        assert_eq!(pairs(&f), vec![(2, 3), (3, 1), (1_000_003, 1)]);
    }

    #[test]
    fn test_repeated_large_prime_merged() {
        let n = nat(1_000_003).pow(2) * nat(1_000_033);
        let f = factorize(&n).unwrap();
        assert_eq!(pairs(&f), vec![(1_000_003, 2), (1_000_033, 1)]);
    }

    #[test]
    fn test_factorize_batch() {
        let values = [nat(12), nat(360), nat(97)];
        let batch = factorize_batch(&values).unwrap();
        assert_eq!(batch.len(), 3);
        for (n, f) in values.iter().zip(&batch) {
            assert_eq!(&defactorize(f), n);
        }
    }
}
