//! Error types for exact arithmetic.

use thiserror::Error;

use crate::Integer;

/// Errors raised by the exact arithmetic kernel.
///
/// These are domain errors: the call is invalid and no partial work is
/// observable. Recoverable "no result" outcomes (no modular inverse, not a
/// perfect power) are `Option` returns, not errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A natural-number parameter was negative.
    #[error("{operation}: expected a non-negative integer, got {value}")]
    NegativeInput {
        /// The operation that rejected the value.
        operation: &'static str,
        /// The offending value.
        value: Integer,
    },

    /// A modulus was zero or negative.
    #[error("{operation}: modulus must be positive, got {modulus}")]
    NonPositiveModulus {
        /// The operation that rejected the modulus.
        operation: &'static str,
        /// The offending modulus.
        modulus: Integer,
    },

    /// Residue and modulus lists passed to the Chinese remainder solver
    /// had different lengths.
    #[error("solve_chinese: {residues} residues but {moduli} moduli")]
    ResidueCountMismatch {
        /// Number of residues supplied.
        residues: usize,
        /// Number of moduli supplied.
        moduli: usize,
    },
}
