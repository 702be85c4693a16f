//! Property-based tests for pointwise vector laws.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{copy_range, FlVector};

    fn finite_vec(len: usize) -> impl Strategy<Value = Vec<f64>> {
        prop::collection::vec(-1e6f64..1e6f64, len)
    }

    proptest! {
        // Pointwise laws: op(a, b)[i] == op(a[i], b[i])

        #[test]
        fn add_matches_scalar(values in finite_vec(8)) {
            let a = FlVector::from_slice(&values);
            let b = a.sqr();
            let sum = a.add(&b).unwrap();
            for i in 0..a.len() {
                prop_assert_eq!(sum[i], a[i] + b[i]);
            }
        }

        #[test]
        fn neg_is_unary_sub(values in finite_vec(8)) {
            let a = FlVector::from_slice(&values);
            let neg = a.neg();
            for i in 0..a.len() {
                prop_assert_eq!(neg[i], -a[i]);
            }
        }

        #[test]
        fn min_max_bracket(values in finite_vec(8)) {
            let a = FlVector::from_slice(&values);
            let b = a.neg();
            let lo = a.min(&b).unwrap();
            let hi = a.max(&b).unwrap();
            for i in 0..a.len() {
                prop_assert!(lo[i] <= hi[i]);
            }
        }

        #[test]
        fn comparisons_are_complementary(values in finite_vec(8)) {
            let a = FlVector::from_slice(&values);
            let b = a.round();
            let lt = a.lt(&b).unwrap();
            let ge = a.ge(&b).unwrap();
            for i in 0..a.len() {
                prop_assert_ne!(lt[i], ge[i]);
            }
        }

        // copy_range moves exactly the requested window

        #[test]
        fn copy_range_window(
            values in finite_vec(16),
            start in 0usize..8,
            count in 0usize..8,
        ) {
            let src = FlVector::from_slice(&values);
            let mut dest = FlVector::zeros(16);
            copy_range(&mut dest, 0, &src, start, start + count).unwrap();
            for i in 0..count {
                prop_assert_eq!(dest[i], src[start + i]);
            }
            for i in count..dest.len() {
                prop_assert_eq!(dest[i], 0.0);
            }
        }

        // Mismatched lengths always fail

        #[test]
        fn length_mismatch_always_errors(a_len in 0usize..6, b_len in 0usize..6) {
            prop_assume!(a_len != b_len);
            let a = FlVector::zeros(a_len);
            let b = FlVector::zeros(b_len);
            prop_assert!(a.add(&b).is_err());
            prop_assert!(a.eq(&b).is_err());
        }
    }
}
