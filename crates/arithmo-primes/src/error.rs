//! Error types for the number-theory layer.

use arithmo_integers::Natural;
use thiserror::Error;

/// Errors raised by primality, root and factorization routines.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PrimeError {
    /// An operation required a strictly positive input.
    #[error("{operation}: expected a positive integer, got {value}")]
    ZeroInput {
        /// The operation that rejected the value.
        operation: &'static str,
        /// The offending value.
        value: Natural,
    },

    /// `integer_root` was called with exponent zero.
    #[error("integer_root: root exponent must be positive")]
    ZeroRootExponent,

    /// There is no prime below the given bound.
    #[error("prev_prime: no prime below {bound}")]
    NoSmallerPrime {
        /// The exclusive upper bound of the search.
        bound: Natural,
    },

    /// Pollard's rho failed to split a composite after the retry cap.
    ///
    /// With the default cap this is vanishingly unlikely; it exists so
    /// factorization provably terminates.
    #[error("pollard_rho: failed to split {value} after {retries} randomized retries")]
    RhoExhausted {
        /// The composite that resisted splitting.
        value: Natural,
        /// The retry cap that was exhausted.
        retries: u32,
    },
}
