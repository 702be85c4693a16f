//! Property-based tests for primality, roots and factorization.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::factor::{defactorize, factorize};
    use crate::functions::{divisors, totient};
    use crate::roots::{integer_root, integer_root_remainder};
    use crate::is_prime;
    use crate::sieve::default_sieve;
    use arithmo_integers::Natural;

    fn nat(v: u64) -> Natural {
        Natural::from(v)
    }

    proptest! {
        // defactorize inverts factorize

        #[test]
        fn factorize_round_trip(n in 1u64..100_000u64) {
            let f = factorize(&nat(n)).unwrap();
            prop_assert_eq!(defactorize(&f), nat(n));
        }

        #[test]
        fn factorization_canonical_form(n in 2u64..100_000u64) {
            let f = factorize(&nat(n)).unwrap();
            for w in f.windows(2) {
                prop_assert!(w[0].prime < w[1].prime);
            }
            prop_assert!(f.iter().all(|x| x.exponent >= 1));
            prop_assert!(f.iter().all(|x| is_prime(&x.prime)));
        }

        // Divisor count law

        #[test]
        fn divisor_count_law(n in 1u64..20_000u64) {
            let f = factorize(&nat(n)).unwrap();
            let expected: usize = f.iter().map(|x| x.exponent as usize + 1).product();
            prop_assert_eq!(divisors(&nat(n)).unwrap().len(), expected);
        }

        // Totient multiplicativity on coprime pairs

        #[test]
        fn totient_multiplicative(m in 1u64..500u64, n in 1u64..500u64) {
            prop_assume!(nat(m).gcd(&nat(n)).is_one());
            let lhs = totient(&(nat(m) * nat(n))).unwrap();
            let rhs = totient(&nat(m)).unwrap() * totient(&nat(n)).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        // Root exactness and remainder bounds

        #[test]
        fn integer_root_exact(r in 0u64..1000u64, y in 1u32..6u32) {
            let power = nat(r).pow(y);
            prop_assert_eq!(integer_root(&power, y).unwrap(), nat(r));
        }

        #[test]
        fn integer_root_floor(x in 0u64..1_000_000u64, y in 1u32..6u32) {
            let (root, rem) = integer_root_remainder(&nat(x), y).unwrap();
            // root^y <= x < (root+1)^y
            prop_assert_eq!(&root.pow(y) + &rem, nat(x));
            let next = Natural::from(root.to_u64().unwrap() + 1);
            prop_assert!(next.pow(y) > nat(x));
        }

        // Sieve agrees with the probabilistic test

        #[test]
        fn sieve_matches_tester(n in 0u64..50_000u64) {
            prop_assert_eq!(is_prime(&nat(n)), default_sieve().is_prime(n));
        }
    }
}
