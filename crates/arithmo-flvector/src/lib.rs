//! # arithmo-flvector
//!
//! Fixed-length double-precision vectors with elementwise operations.
//!
//! An [`FlVector`] has a length fixed at creation. Pointwise operators
//! allocate fresh result vectors; the in-place primitives ([`FlVector::fill`],
//! [`copy_range`]) are the only mutation surface. Binary operators demand
//! equal lengths and fail with [`FlVectorError::LengthMismatch`] otherwise.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod build;
pub mod error;
pub mod vector;

#[cfg(test)]
mod proptests;

pub use build::FlVectorBuilder;
pub use error::FlVectorError;
pub use vector::{copy_range, FlVector};
