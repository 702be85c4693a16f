//! Error types for vector operations.

use thiserror::Error;

/// Errors raised by elementwise vector operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FlVectorError {
    /// A binary pointwise operation received operands of different
    /// lengths.
    #[error("{operation}: length mismatch, {left} vs {right}")]
    LengthMismatch {
        /// The operation that failed.
        operation: &'static str,
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// A copy range fell outside a buffer, or its bounds were inverted.
    #[error(
        "copy_range: invalid range (dest_start {dest_start}, src {src_start}..{src_end}) \
         for dest of length {dest_len} and src of length {src_len}"
    )]
    IndexOutOfRange {
        /// Start offset into the destination.
        dest_start: usize,
        /// Start offset into the source.
        src_start: usize,
        /// End offset (exclusive) into the source.
        src_end: usize,
        /// Destination length.
        dest_len: usize,
        /// Source length.
        src_len: usize,
    },
}
