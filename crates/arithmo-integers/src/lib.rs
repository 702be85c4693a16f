//! # arithmo-integers
//!
//! Arbitrary precision exact arithmetic for the arithmo numerical core.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Non-negative integers validated at construction (`Natural`)
//! - Arbitrary precision rationals (`Rational`)
//! - The exact arithmetic kernel: gcd, Bezout coefficients, modular
//!   inverses, Chinese remaindering (`euclid`)
//! - A value-object modular context (`Modulus`)
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated with GMP-like performance

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod euclid;
pub mod integer;
pub mod modular;
pub mod natural;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use error::ArithmeticError;
pub use integer::Integer;
pub use modular::Modulus;
pub use natural::Natural;
pub use rational::Rational;
