//! The fixed-length double vector and its pointwise operations.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::FlVectorError;

/// A fixed-length vector of `f64` values.
///
/// The length is set at construction and never changes. Pointwise
/// operators return fresh vectors; only [`FlVector::fill`] and
/// [`copy_range`] mutate in place.
#[derive(Clone, PartialEq, Default)]
pub struct FlVector {
    data: Box<[f64]>,
}

macro_rules! pointwise_unary {
    ($( $(#[$doc:meta])* $name:ident => $expr:expr ),* $(,)?) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name(&self) -> FlVector {
                self.map($expr)
            }
        )*
    };
}

macro_rules! pointwise_binary {
    ($( $(#[$doc:meta])* $name:ident => $expr:expr ),* $(,)?) => {
        $(
            $(#[$doc])*
            ///
            /// # Errors
            ///
            /// Fails with [`FlVectorError::LengthMismatch`] if the operand
            /// lengths differ.
            pub fn $name(&self, other: &FlVector) -> Result<FlVector, FlVectorError> {
                self.zip_with(other, stringify!($name), $expr)
            }
        )*
    };
}

macro_rules! pointwise_compare {
    ($( $(#[$doc:meta])* $name:ident => $expr:expr ),* $(,)?) => {
        $(
            $(#[$doc])*
            ///
            /// # Errors
            ///
            /// Fails with [`FlVectorError::LengthMismatch`] if the operand
            /// lengths differ.
            pub fn $name(&self, other: &FlVector) -> Result<Vec<bool>, FlVectorError> {
                self.check_len(other, stringify!($name))?;
                Ok(self
                    .data
                    .iter()
                    .zip(other.data.iter())
                    .map(|(&a, &b)| $expr(a, b))
                    .collect())
            }
        )*
    };
}

impl FlVector {
    /// Creates a vector of `len` zeros.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, 0.0)
    }

    /// Creates a vector of `len` copies of `value`.
    #[must_use]
    pub fn filled(len: usize, value: f64) -> Self {
        Self {
            data: vec![value; len].into_boxed_slice(),
        }
    }

    /// Creates a vector from a slice.
    #[must_use]
    pub fn from_slice(values: &[f64]) -> Self {
        Self {
            data: values.into(),
        }
    }

    /// Creates a vector by evaluating `f` once per slot, in index order.
    #[must_use]
    pub fn from_fn(len: usize, mut f: impl FnMut(usize) -> f64) -> Self {
        Self {
            data: (0..len).map(&mut f).collect(),
        }
    }

    /// Creates a vector of exactly `len` slots from an iterator.
    ///
    /// The iterator is consumed in order; once `len` slots are filled
    /// the remaining items are silently ignored, and if the iterator
    /// runs dry early the unfilled tail stays zero.
    #[must_use]
    pub fn from_iter_with_len(len: usize, values: impl IntoIterator<Item = f64>) -> Self {
        let mut result = Self::zeros(len);
        for (slot, value) in result.data.iter_mut().zip(values) {
            *slot = value;
        }
        result
    }

    /// The number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the vector has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrows the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copies the elements into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    /// Sets every element to `value`, in place.
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> FlVector {
        FlVector {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    fn check_len(&self, other: &FlVector, operation: &'static str) -> Result<(), FlVectorError> {
        if self.len() == other.len() {
            Ok(())
        } else {
            Err(FlVectorError::LengthMismatch {
                operation,
                left: self.len(),
                right: other.len(),
            })
        }
    }

    fn zip_with(
        &self,
        other: &FlVector,
        operation: &'static str,
        f: impl Fn(f64, f64) -> f64,
    ) -> Result<FlVector, FlVectorError> {
        self.check_len(other, operation)?;
        Ok(FlVector {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        })
    }

    pointwise_unary! {
        /// Rounds each element to the nearest integer, ties away from zero.
        round => f64::round,
        /// Floor of each element.
        floor => f64::floor,
        /// Ceiling of each element.
        ceiling => f64::ceil,
        /// Truncates each element toward zero.
        truncate => f64::trunc,
        /// Absolute value of each element.
        abs => f64::abs,
        /// Squares each element.
        sqr => |x: f64| x * x,
        /// Square root of each element.
        sqrt => f64::sqrt,
        /// Natural logarithm of each element.
        log => f64::ln,
        /// Exponential of each element.
        exp => f64::exp,
        /// Sine of each element.
        sin => f64::sin,
        /// Cosine of each element.
        cos => f64::cos,
        /// Tangent of each element.
        tan => f64::tan,
        /// Arcsine of each element.
        asin => f64::asin,
        /// Arccosine of each element.
        acos => f64::acos,
        /// Arctangent of each element.
        atan => f64::atan,
        /// Negates each element: the unary form of subtraction.
        neg => |x: f64| -x,
        /// Reciprocal of each element: the unary form of division.
        recip => f64::recip,
    }

    pointwise_binary! {
        /// Elementwise sum.
        add => |a, b| a + b,
        /// Elementwise difference.
        sub => |a, b| a - b,
        /// Elementwise product.
        mul => |a, b| a * b,
        /// Elementwise quotient.
        div => |a, b| a / b,
        /// Elementwise power `a^b`.
        pow => f64::powf,
        /// Elementwise minimum.
        min => f64::min,
        /// Elementwise maximum.
        max => f64::max,
    }

    pointwise_compare! {
        /// Elementwise equality.
        eq => |a, b| a == b,
        /// Elementwise `<`.
        lt => |a, b| a < b,
        /// Elementwise `<=`.
        le => |a, b| a <= b,
        /// Elementwise `>`.
        gt => |a, b| a > b,
        /// Elementwise `>=`.
        ge => |a, b| a >= b,
    }
}

impl Index<usize> for FlVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl IndexMut<usize> for FlVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        &mut self.data[index]
    }
}

impl fmt::Debug for FlVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlVector(")?;
        f.debug_list().entries(self.data.iter()).finish()?;
        write!(f, ")")
    }
}

impl From<Vec<f64>> for FlVector {
    fn from(values: Vec<f64>) -> Self {
        Self {
            data: values.into_boxed_slice(),
        }
    }
}

impl FromIterator<f64> for FlVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FlVector {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter().copied()
    }
}

/// Copies `src[src_start..src_end]` into `dest` starting at `dest_start`.
///
/// All bounds are validated up front; the copy itself is a single
/// unchecked block move.
///
/// # Errors
///
/// Fails with [`FlVectorError::IndexOutOfRange`] if the source range is
/// inverted or out of bounds, or the destination lacks room.
pub fn copy_range(
    dest: &mut FlVector,
    dest_start: usize,
    src: &FlVector,
    src_start: usize,
    src_end: usize,
) -> Result<(), FlVectorError> {
    let count = src_end.checked_sub(src_start);
    let valid = match count {
        Some(count) => {
            src_end <= src.len()
                && dest_start <= dest.len()
                && count <= dest.len() - dest_start
        }
        None => false,
    };
    if !valid {
        return Err(FlVectorError::IndexOutOfRange {
            dest_start,
            src_start,
            src_end,
            dest_len: dest.len(),
            src_len: src.len(),
        });
    }
    let count = src_end - src_start;
    dest.data[dest_start..dest_start + count].copy_from_slice(&src.data[src_start..src_end]);
    Ok(())
}
