//! Error types for combinatorics.

use thiserror::Error;

/// Errors raised by combinatorial functions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MeasureError {
    /// The components of a multinomial did not sum to `n`.
    #[error("multinomial: components sum to {sum}, expected {n}")]
    MultinomialSum {
        /// The expected total.
        n: u64,
        /// The actual component sum.
        sum: u64,
    },
}
