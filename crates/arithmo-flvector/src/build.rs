//! Growable construction of fixed-length vectors.

use crate::vector::FlVector;

/// Initial capacity of a growing builder.
const INITIAL_CAPACITY: usize = 4;

/// Accumulates elements of unknown count and trims to an exact-length
/// [`FlVector`].
///
/// The buffer starts at capacity 4 and doubles whenever it overflows;
/// [`FlVectorBuilder::finish`] trims to the number of elements actually
/// pushed.
#[derive(Debug, Default)]
pub struct FlVectorBuilder {
    data: Vec<f64>,
}

impl FlVectorBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Appends one element, doubling the buffer on overflow.
    pub fn push(&mut self, value: f64) {
        if self.data.len() == self.data.capacity() {
            self.data.reserve_exact(self.data.capacity().max(INITIAL_CAPACITY));
        }
        self.data.push(value);
    }

    /// Number of elements pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if nothing has been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Trims to the exact element count and produces the vector.
    #[must_use]
    pub fn finish(self) -> FlVector {
        FlVector::from(self.data)
    }
}

impl Extend<f64> for FlVectorBuilder {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
