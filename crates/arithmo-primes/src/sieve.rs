//! The small-prime sieve.
//!
//! A [`PrimeSieve`] is an ordinary value, so tests and embedders can
//! build sieves of any size and pass them where a primality oracle is
//! needed. The process-wide default sieve is built once, on first use,
//! behind a [`OnceLock`].

use std::sync::OnceLock;

use crate::DEFAULT_SIEVE_LIMIT;

/// A sieve of Eratosthenes recording compositeness for all integers
/// below a fixed limit.
#[derive(Clone, Debug)]
pub struct PrimeSieve {
    limit: u64,
    composite: Vec<bool>,
}

impl PrimeSieve {
    /// Builds the compositeness table for all integers below `limit`.
    #[must_use]
    pub fn new(limit: u64) -> Self {
        let len = usize::try_from(limit).expect("sieve limit fits in memory");
        let mut composite = vec![false; len];
        if len > 0 {
            composite[0] = true;
        }
        if len > 1 {
            composite[1] = true;
        }

        let mut p = 2usize;
        while p * p < len {
            if !composite[p] {
                let mut k = p * p;
                while k < len {
                    composite[k] = true;
                    k += p;
                }
            }
            p += 1;
        }

        Self { limit, composite }
    }

    /// The exclusive upper bound of the table.
    #[must_use]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Exact primality for `n` below the limit.
    ///
    /// # Panics
    ///
    /// Panics if `n >= self.limit()`.
    #[must_use]
    pub fn is_prime(&self, n: u64) -> bool {
        assert!(n < self.limit, "sieve lookup out of range: {n}");
        !self.composite[n as usize]
    }

    /// Iterates the primes below the limit in increasing order.
    pub fn primes(&self) -> impl Iterator<Item = u64> + '_ {
        self.composite
            .iter()
            .enumerate()
            .filter(|(_, &c)| !c)
            .map(|(i, _)| i as u64)
    }
}

/// Returns the process-wide sieve with limit [`DEFAULT_SIEVE_LIMIT`].
///
/// The first caller pays the construction cost; concurrent first use is
/// serialized by the `OnceLock`.
#[must_use]
pub fn default_sieve() -> &'static PrimeSieve {
    static SIEVE: OnceLock<PrimeSieve> = OnceLock::new();
    SIEVE.get_or_init(|| PrimeSieve::new(DEFAULT_SIEVE_LIMIT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        let sieve = PrimeSieve::new(100);
        let primes: Vec<u64> = sieve.primes().collect();
        assert_eq!(
            primes,
            vec![
                2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73,
                79, 83, 89, 97
            ]
        );
    }

    #[test]
    fn test_zero_and_one_not_prime() {
        let sieve = PrimeSieve::new(10);
        assert!(!sieve.is_prime(0));
        assert!(!sieve.is_prime(1));
        assert!(sieve.is_prime(2));
    }

    #[test]
    fn test_agrees_with_trial_division() {
        let sieve = PrimeSieve::new(2000);
        for n in 0u64..2000 {
            let trial = n >= 2 && (2..n).take_while(|d| d * d <= n).all(|d| n % d != 0);
            assert_eq!(sieve.is_prime(n), trial, "disagreement at {n}");
        }
    }

    #[test]
    fn test_default_sieve_is_shared() {
        let a = default_sieve() as *const PrimeSieve;
        let b = default_sieve() as *const PrimeSieve;
        assert_eq!(a, b);
        assert_eq!(default_sieve().limit(), DEFAULT_SIEVE_LIMIT);
    }
}
