//! # arithmo-measure
//!
//! Error measurement and combinatorics for the arithmo numerical core.
//!
//! - [`absolute_error`] / [`relative_error`]: measured exactly in
//!   rational arithmetic for finite operands, with explicit handling of
//!   infinities and NaN
//! - [`factorial`] and friends: a precomputed small-value table, an
//!   iterative middle range and binary-splitting products for large
//!   arguments

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combinatorics;
pub mod error;
pub mod measure;

#[cfg(test)]
mod proptests;

pub use combinatorics::{binomial, factorial, multinomial, permutations};
pub use error::MeasureError;
pub use measure::{absolute_error, relative_error};

/// Factorials below this bound are answered from a precomputed table.
pub const FACTORIAL_TABLE_SIZE: u64 = 171;

/// Factorials below this bound (and above the table) accumulate
/// iteratively from the last table entry; larger arguments use a
/// binary-splitting product.
pub const SIMPLE_FACTORIAL_CUTOFF: u64 = 244;
