//! # Arithmo
//!
//! A numerical core combining exact arbitrary-precision arithmetic with
//! fast flonum vectors.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: Big integers, rationals, modular arithmetic
//!   and the extended Euclidean toolbox
//! - **Primality**: A shared sieve, Miller-Rabin probabilistic testing
//!   and prime search
//! - **Factorization**: Trial division, perfect-power detection and
//!   Pollard's rho, with multiplicative functions built on top
//! - **Flonum Vectors**: Contiguous `f64` vectors with pointwise
//!   elementwise operations
//! - **Measurement**: Exact absolute/relative error and combinatorics
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arithmo::prelude::*;
//!
//! let n = Natural::from(360u64);
//! let factors = factorize(&n)?;
//! assert_eq!(defactorize(&factors), n);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use arithmo_flvector as flvector;
pub use arithmo_integers as integers;
pub use arithmo_measure as measure;
pub use arithmo_primes as primes;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use arithmo_flvector::{FlVector, FlVectorBuilder};
    pub use arithmo_integers::{Integer, Modulus, Natural, Rational};
    pub use arithmo_measure::{absolute_error, binomial, factorial, relative_error};
    pub use arithmo_primes::{
        defactorize, factorize, is_prime, Factorization, PrimalityTester,
    };
}
