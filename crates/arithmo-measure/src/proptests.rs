//! Property-based tests for error measurement and combinatorics.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{absolute_error, binomial, factorial, multinomial, relative_error};
    use arithmo_integers::Natural;

    proptest! {
        #[test]
        fn absolute_error_is_symmetric(x in -1e12f64..1e12, r in -1e12f64..1e12) {
            prop_assert_eq!(
                absolute_error(x, r).to_bits(),
                absolute_error(r, x).to_bits()
            );
        }

        #[test]
        fn absolute_error_of_self_is_zero(x in -1e12f64..1e12) {
            prop_assert_eq!(absolute_error(x, x), 0.0);
        }

        #[test]
        fn relative_error_is_nonnegative(x in -1e12f64..1e12, r in -1e12f64..1e12) {
            prop_assert!(relative_error(x, r) >= 0.0);
        }

        #[test]
        fn binomial_is_symmetric(n in 0u64..120, k in 0u64..120) {
            prop_assume!(k <= n);
            prop_assert_eq!(binomial(n, k), binomial(n, n - k));
        }

        #[test]
        fn binomial_row_sums_to_power_of_two(n in 0u64..40) {
            let sum = (0..=n).fold(Natural::zero(), |acc, k| acc + binomial(n, k));
            prop_assert_eq!(sum, Natural::from(2u64).pow(u32::try_from(n).unwrap()));
        }

        #[test]
        fn factorial_recurrence(n in 1u64..400) {
            prop_assert_eq!(factorial(n), factorial(n - 1) * Natural::from(n));
        }

        #[test]
        fn multinomial_pair_matches_binomial(n in 0u64..80, k in 0u64..80) {
            prop_assume!(k <= n);
            prop_assert_eq!(multinomial(n, &[k, n - k]).unwrap(), binomial(n, k));
        }
    }
}
