//! Factorials, binomials and multinomials in exact arithmetic.

use std::sync::OnceLock;

use arithmo_integers::Natural;

use crate::error::MeasureError;
use crate::{FACTORIAL_TABLE_SIZE, SIMPLE_FACTORIAL_CUTOFF};

/// The precomputed factorials `0!` through `(FACTORIAL_TABLE_SIZE-1)!`.
fn factorial_table() -> &'static [Natural] {
    static TABLE: OnceLock<Vec<Natural>> = OnceLock::new();
    TABLE.get_or_init(|| {
        let mut table = Vec::with_capacity(FACTORIAL_TABLE_SIZE as usize);
        let mut acc = Natural::one();
        table.push(acc.clone());
        for i in 1..FACTORIAL_TABLE_SIZE {
            acc = acc * Natural::from(i);
            table.push(acc.clone());
        }
        table
    })
}

/// Product of the integers in `[lo, hi]` by binary splitting.
///
/// Splitting keeps the two halves balanced in bit length, which makes
/// the big multiplications asymptotically cheaper than a left-to-right
/// accumulation.
fn range_product(lo: u64, hi: u64) -> Natural {
    if lo > hi {
        return Natural::one();
    }
    if hi - lo < 8 {
        let mut acc = Natural::from(lo);
        for i in lo + 1..=hi {
            acc = acc * Natural::from(i);
        }
        return acc;
    }
    let mid = lo + (hi - lo) / 2;
    range_product(lo, mid) * range_product(mid + 1, hi)
}

/// The factorial `n!`.
///
/// Table lookup below [`FACTORIAL_TABLE_SIZE`], iterative accumulation
/// from the table below [`SIMPLE_FACTORIAL_CUTOFF`], binary-splitting
/// product beyond that.
#[must_use]
pub fn factorial(n: u64) -> Natural {
    let table = factorial_table();
    if n < FACTORIAL_TABLE_SIZE {
        return table[n as usize].clone();
    }
    let last = table.last().expect("table is never empty").clone();
    if n < SIMPLE_FACTORIAL_CUTOFF {
        let mut acc = last;
        for i in FACTORIAL_TABLE_SIZE..=n {
            acc = acc * Natural::from(i);
        }
        return acc;
    }
    last * range_product(FACTORIAL_TABLE_SIZE, n)
}

/// Divides `num` by `den`, asserting the division is exact.
fn exact_div(num: Natural, den: &Natural, what: &'static str) -> Natural {
    let (q, r) = num.div_rem(den);
    debug_assert!(r.is_zero(), "{what}: quotient must be exact");
    q
}

/// The binomial coefficient `C(n, k)`; 0 when `k > n`.
#[must_use]
pub fn binomial(n: u64, k: u64) -> Natural {
    if k > n {
        return Natural::zero();
    }
    let den = factorial(k) * factorial(n - k);
    exact_div(factorial(n), &den, "binomial")
}

/// The number of k-permutations of n items, `n! / (n-k)!`; 0 when
/// `k > n`.
#[must_use]
pub fn permutations(n: u64, k: u64) -> Natural {
    if k > n {
        return Natural::zero();
    }
    exact_div(factorial(n), &factorial(n - k), "permutations")
}

/// The multinomial coefficient `n! / (k_1! k_2! ... k_m!)`.
///
/// # Errors
///
/// Returns [`MeasureError::MultinomialSum`] unless the components sum
/// to `n`.
pub fn multinomial(n: u64, components: &[u64]) -> Result<Natural, MeasureError> {
    let sum: u64 = components.iter().sum();
    if sum != n {
        return Err(MeasureError::MultinomialSum { n, sum });
    }
    let den = components
        .iter()
        .fold(Natural::one(), |acc, &k| acc * factorial(k));
    Ok(exact_div(factorial(n), &den, "multinomial"))
}
