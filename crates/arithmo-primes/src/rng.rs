//! Uniform random big integers.

use arithmo_integers::{Integer, Natural};
use dashu::integer::IBig;
use rand::Rng;

/// Draws a uniform natural number in `[0, bound)` by rejection sampling
/// fixed-width random bit strings.
///
/// # Panics
///
/// Panics if `bound` is zero.
pub(crate) fn uniform_below<R: Rng>(rng: &mut R, bound: &Natural) -> Natural {
    assert!(!bound.is_zero(), "uniform_below: empty range");
    let bits = bound.bit_len();
    let words = bits.div_ceil(64);
    let top_mask = if bits % 64 == 0 {
        u64::MAX
    } else {
        (1u64 << (bits % 64)) - 1
    };

    loop {
        let mut x = IBig::ZERO;
        for i in 0..words {
            let mut w: u64 = rng.gen();
            if i + 1 == words {
                w &= top_mask;
            }
            x = x + (IBig::from(w) << (64 * i));
        }
        let x = Natural::new(Integer::from(x))
            .expect("assembled from unsigned words, cannot be negative");
        if &x < bound {
            return x;
        }
    }
}

/// Draws a uniform natural number in `[lo, bound)`.
///
/// # Panics
///
/// Panics if `lo >= bound`.
pub(crate) fn uniform_range<R: Rng>(rng: &mut R, lo: &Natural, bound: &Natural) -> Natural {
    assert!(lo < bound, "uniform_range: empty range");
    let width = Natural::new(bound.as_integer() - lo.as_integer())
        .expect("bound exceeds lo");
    let offset = uniform_below(rng, &width);
    Natural::new(lo.as_integer() + offset.as_integer())
        .expect("sum of naturals is natural")
}
