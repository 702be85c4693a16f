//! Prime search: next, previous and n-th prime.

use arithmo_integers::{Integer, Natural};

use crate::error::PrimeError;
use crate::pseudoprime::PrimalityTester;

/// Returns the smallest prime greater than `n`.
///
/// Negative inputs mirror the search: `next_prime(-n) = -prev_prime(n)`,
/// so primes extend symmetrically below zero.
///
/// # Errors
///
/// Returns [`PrimeError::NoSmallerPrime`] for the mirrored cases where
/// `prev_prime` has no answer, e.g. `next_prime(-2)`.
pub fn next_prime(n: &Integer) -> Result<Integer, PrimeError> {
    if n.is_negative() {
        let mirrored = prev_prime(&-n)?;
        return Ok(-mirrored);
    }
    let two = Integer::new(2);
    if n < &two {
        return Ok(two);
    }
    if n == &two {
        return Ok(Integer::new(3));
    }

    let tester = PrimalityTester::default();
    // Start at the next odd candidate and step by 2.
    let mut candidate = if n.is_even() {
        n + &Integer::new(1)
    } else {
        n + &Integer::new(2)
    };
    loop {
        let c = Natural::new(candidate.clone()).expect("candidate is positive");
        if tester.is_prime(&c) {
            return Ok(candidate);
        }
        candidate = candidate + two.clone();
    }
}

/// Returns the largest prime smaller than `n`.
///
/// Negative inputs mirror the search: `prev_prime(-n) = -next_prime(n)`.
///
/// # Errors
///
/// Returns [`PrimeError::NoSmallerPrime`] if `n <= 2`: there is no
/// positive prime below 2.
pub fn prev_prime(n: &Integer) -> Result<Integer, PrimeError> {
    if n.is_negative() {
        let mirrored = next_prime(&-n)?;
        return Ok(-mirrored);
    }
    let two = Integer::new(2);
    if n <= &two {
        return Err(PrimeError::NoSmallerPrime {
            bound: Natural::new(n.abs()).expect("abs is non-negative"),
        });
    }
    if n == &Integer::new(3) {
        return Ok(two);
    }

    let tester = PrimalityTester::default();
    let mut candidate = if n.is_even() {
        n - &Integer::new(1)
    } else {
        n - &Integer::new(2)
    };
    loop {
        let c = Natural::new(candidate.clone()).expect("candidate is positive");
        if tester.is_prime(&c) {
            return Ok(candidate);
        }
        candidate = candidate - two.clone();
    }
}

/// Returns the n-th prime, zero-indexed: `nth_prime(0) = 2`.
///
/// Computed by repeated application of [`next_prime`] starting from 2,
/// so the cost is linear in `n`.
#[must_use]
pub fn nth_prime(n: usize) -> Natural {
    let mut p = Integer::new(2);
    for _ in 0..n {
        p = next_prime(&p).expect("search upward never fails");
    }
    Natural::new(p).expect("primes are positive")
}
