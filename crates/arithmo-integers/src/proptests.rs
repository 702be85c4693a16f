//! Property-based tests for the exact arithmetic kernel.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::euclid::{bezout_binary, coprime, modular_inverse, solve_chinese};
    use crate::{Integer, Modulus, Natural};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Bezout identity: a*u + b*v = gcd(a, b)

        #[test]
        fn bezout_identity(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (u, v) = bezout_binary(&a, &b);
            let g = a.gcd(&b);
            prop_assert_eq!(a * u + b * v, g);
        }

        #[test]
        fn bezout_gcd_nonnegative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let (u, v) = bezout_binary(&a, &b);
            let combo = a * u + b * v;
            prop_assert!(!combo.is_negative());
        }

        // Modular inverse law: if inverse exists, a * inv(a) = 1 (mod n)

        #[test]
        fn modular_inverse_law(a in non_zero_int(), n in 2u64..1000u64) {
            let a = Integer::new(a);
            let n = Natural::from(n);
            if let Some(b) = modular_inverse(&a, &n) {
                let m = Modulus::new(n).unwrap();
                prop_assert!(m.mul(&a, b.as_integer()).is_one());
            } else {
                prop_assert!(!a.gcd(n.as_integer()).is_one());
            }
        }

        // Modular context laws

        #[test]
        fn modular_pow_matches_naive(a in small_int(), e in 0u32..30u32, n in 1u64..500u64) {
            let m = Modulus::from_u64(n).unwrap();
            let a = Integer::new(a);
            let fast = m.pow(&a, &Natural::from(u64::from(e)));
            let mut naive = m.reduce(&Integer::one());
            for _ in 0..e {
                naive = m.mul(naive.as_integer(), &a);
            }
            prop_assert_eq!(fast, naive);
        }

        #[test]
        fn modular_reduce_in_range(a in small_int(), n in 1u64..1000u64) {
            let m = Modulus::from_u64(n).unwrap();
            let r = m.reduce(&Integer::new(a));
            prop_assert!(r.as_integer() < &Integer::from(n));
            prop_assert!(!r.as_integer().is_negative());
        }

        // Chinese remainder: solution satisfies every congruence

        #[test]
        fn crt_satisfies_congruences(a in 0i64..100i64, b in 0i64..100i64) {
            // 101 and 103 are distinct primes, hence coprime.
            let residues = [Integer::new(a), Integer::new(b)];
            let moduli = [Natural::from(101u64), Natural::from(103u64)];
            let x = solve_chinese(&residues, &moduli).unwrap();
            for (r, m) in residues.iter().zip(&moduli) {
                let ctx = Modulus::new(m.clone()).unwrap();
                prop_assert_eq!(ctx.reduce(x.as_integer()), ctx.reduce(r));
            }
        }

        // Coprimality is symmetric

        #[test]
        fn coprime_symmetric(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(coprime(&a, &b), coprime(&b, &a));
        }
    }
}
