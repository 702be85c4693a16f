//! Strong pseudoprime (Miller-Rabin) testing.
//!
//! A single trial draws a uniform witness and either certifies
//! compositeness, surfaces a proper divisor (possible for Carmichael
//! numbers), or reports "probably prime". The [`PrimalityTester`]
//! wrapper repeats trials until the aggregate false-positive bound is
//! reached.

use arithmo_integers::{Integer, Modulus, Natural};
use num_traits::One;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::rng::uniform_range;
use crate::sieve::{default_sieve, PrimeSieve};
use crate::FALSE_POSITIVE_TOLERANCE;

/// Outcome of a single strong-pseudoprime trial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The witness did not contradict primality.
    ProbablyPrime,
    /// The witness proves `n` composite.
    Composite,
    /// The trial proves `n` composite and found a proper divisor.
    Divisor(Natural),
}

/// Writes `n = 2^nu * m` with `m` odd.
fn split_even_part(n: &Natural) -> (u32, Natural) {
    debug_assert!(!n.is_zero());
    let mut m = n.as_integer().clone();
    let mut nu = 0u32;
    while m.is_even() {
        m = m >> 1;
        nu += 1;
    }
    (nu, Natural::new(m).expect("shift preserves sign"))
}

/// Runs one strong-pseudoprime trial on odd `n >= 3` with a witness
/// drawn uniformly from `[2, n-1]`.
///
/// If `gcd(witness, n) > 1` the gcd is returned directly as a divisor.
/// Otherwise the standard square-and-check loop runs on
/// `n - 1 = 2^nu * m`; a square root of unity other than +-1 encountered
/// along the way also yields a proper divisor.
pub fn strong_pseudoprime_trial<R: Rng>(n: &Natural, rng: &mut R) -> Verdict {
    debug_assert!(n.as_integer() >= &Integer::new(3) && !n.is_even());

    let one = Integer::new(1);
    let n_minus_1 = n.as_integer() - &one;
    let a = uniform_range(rng, &Natural::from(2u64), n);

    let g = a.gcd(n);
    if !g.is_one() {
        return Verdict::Divisor(g);
    }

    let ctx = Modulus::new(n.clone()).expect("n >= 3");
    let (nu, m) = split_even_part(&Natural::new(n_minus_1.clone()).expect("n >= 3"));

    let mut x = ctx.pow(a.as_integer(), &m).into_integer();
    if x.is_one() || x == n_minus_1 {
        return Verdict::ProbablyPrime;
    }

    for _ in 1..nu {
        let prev = x.clone();
        x = ctx.mul(&x, &x).into_integer();
        if x == n_minus_1 {
            return Verdict::ProbablyPrime;
        }
        if x.is_one() {
            // prev is a square root of 1 other than +-1, so it splits n.
            let d = (prev - &one).gcd(n.as_integer());
            return Verdict::Divisor(Natural::new(d).expect("gcd is non-negative"));
        }
    }

    Verdict::Composite
}

/// Repeated strong-pseudoprime testing with a configurable sieve and
/// false-positive tolerance.
#[derive(Clone, Debug)]
pub struct PrimalityTester<'s> {
    sieve: &'s PrimeSieve,
    trials: u32,
}

impl Default for PrimalityTester<'static> {
    fn default() -> Self {
        Self::new(default_sieve(), FALSE_POSITIVE_TOLERANCE)
    }
}

impl<'s> PrimalityTester<'s> {
    /// Creates a tester over the given sieve.
    ///
    /// The trial count is `ceil(log2(1 / tolerance))`: each trial that
    /// fails to witness compositeness at most halves the error
    /// probability.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < tolerance < 1`.
    #[must_use]
    pub fn new(sieve: &'s PrimeSieve, tolerance: f64) -> Self {
        assert!(
            tolerance > 0.0 && tolerance < 1.0,
            "tolerance must be in (0, 1)"
        );
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let trials = (1.0 / tolerance).log2().ceil() as u32;
        Self { sieve, trials }
    }

    /// Number of trials run before declaring "very probably prime".
    #[must_use]
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Classifies odd `n >= 3` by repeated trials using the supplied
    /// random stream.
    ///
    /// Returns the first non-"probably prime" verdict, or
    /// [`Verdict::ProbablyPrime`] once all trials are exhausted.
    pub fn classify_with<R: Rng>(&self, n: &Natural, rng: &mut R) -> Verdict {
        for _ in 0..self.trials {
            match strong_pseudoprime_trial(n, rng) {
                Verdict::ProbablyPrime => {}
                other => return other,
            }
        }
        Verdict::ProbablyPrime
    }

    /// Classifies odd `n >= 3` with a fresh random stream.
    #[must_use]
    pub fn classify(&self, n: &Natural) -> Verdict {
        let mut rng = ChaCha8Rng::from_entropy();
        self.classify_with(n, &mut rng)
    }

    /// Tests `n` for primality.
    ///
    /// Below the sieve limit the answer is exact; above it, `true`
    /// means "very probably prime" within the configured tolerance.
    #[must_use]
    pub fn is_prime(&self, n: &Natural) -> bool {
        if let Some(small) = n.to_u64() {
            if small < self.sieve.limit() {
                return self.sieve.is_prime(small);
            }
        }
        // A sieve smaller than 3 leaves 0, 1 and 2 to this path; settle
        // them before the even shortcut writes 2 off as composite.
        let two = Natural::from(2u64);
        if n < &two {
            return false;
        }
        if n == &two {
            return true;
        }
        if n.is_even() {
            return false;
        }
        self.classify(n) == Verdict::ProbablyPrime
    }
}
