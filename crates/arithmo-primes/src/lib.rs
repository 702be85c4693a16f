//! # arithmo-primes
//!
//! Exact number theory for the arithmo numerical core.
//!
//! This crate provides:
//! - **Sieve**: a process-wide (or injectable) sieve of Eratosthenes
//! - **Strong pseudoprime testing**: Miller-Rabin with a quantified
//!   false-positive bound
//! - **Prime search**: next/prev/nth prime
//! - **Integer roots**: Newton-based n-th roots, perfect power detection
//! - **Factorization**: trial division and Pollard's rho
//! - **Number-theoretic functions**: totient, Moebius mu, divisor sums
//!
//! # Probabilistic guarantees
//!
//! Primality of large integers is decided by repeated strong-pseudoprime
//! trials. A composite survives all trials with probability below
//! [`FALSE_POSITIVE_TOLERANCE`]; callers needing certainty must run a
//! deterministic proof, which is out of scope here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod factor;
pub mod functions;
pub mod powers;
pub mod pseudoprime;
pub mod roots;
pub mod search;
pub mod sieve;

mod rng;

#[cfg(test)]
mod proptests;

pub use error::PrimeError;
pub use factor::{defactorize, factorize, factorize_batch, Factor, Factorization};
pub use functions::{divisor_sum, divisors, moebius_mu, totient};
pub use powers::{as_power, is_odd_prime_power, is_perfect_power, perfect_power, perfect_square, prime_power};
pub use pseudoprime::{PrimalityTester, Verdict};
pub use roots::{integer_root, integer_root_remainder, max_dividing_power};
pub use search::{next_prime, nth_prime, prev_prime};
pub use sieve::{default_sieve, PrimeSieve};

/// Upper bound (exclusive) of the process-wide compositeness sieve.
///
/// Below this limit `is_prime` is an O(1) table lookup.
pub const DEFAULT_SIEVE_LIMIT: u64 = 1_000_000;

/// Inputs below this threshold are factorized by trial division rather
/// than Pollard's rho.
pub const SMALL_FACTOR_LIMIT: u64 = 1_000_000;

/// Aggregate false-positive tolerance of the strong pseudoprime test.
///
/// The trial count is `ceil(log2(1 / tolerance))`.
pub const FALSE_POSITIVE_TOLERANCE: f64 = 1e-7;

/// Maximum number of reseeded Pollard-rho attempts before a factorization
/// call gives up with [`PrimeError::RhoExhausted`].
pub const MAX_RHO_RETRIES: u32 = 64;

use arithmo_integers::Natural;

/// Tests `n` for primality.
///
/// Below the sieve limit this is an exact table lookup; above it, the
/// answer `true` means "very probably prime" with false-positive
/// probability below [`FALSE_POSITIVE_TOLERANCE`].
#[must_use]
pub fn is_prime(n: &Natural) -> bool {
    PrimalityTester::default().is_prime(n)
}
