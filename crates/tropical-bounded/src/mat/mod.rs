//! Square matrices over a semiring.
//!
//! [`Mat<S>`] is a single generic container; the semiring element type `S`
//! supplies ⊕, ⊗, and the zero and one elements, so multiplication and
//! exponentiation by squaring are written once for every instance:
//! - [`TropicalMatrix`](crate::TropicalMatrix) = `Mat<TropicalMinPlus>`
//! - [`BooleanMatrix`](crate::BooleanMatrix) = `Mat<TropicalAndOr>`
//!
//! # Example
//!
//! ```
//! use tropical_bounded::{Mat, TropicalMinPlus, Weight};
//!
//! let inf = Weight::Infinite;
//! let a = Mat::<TropicalMinPlus>::from_rows(&[
//!     [Weight::Finite(0), inf],
//!     [Weight::Finite(1), Weight::Finite(0)],
//! ])
//! .unwrap();
//!
//! // Pure product
//! let c = a.times(&a).unwrap();
//! assert_eq!(c.get(1, 0), Weight::Finite(1));
//!
//! // Exponentiation by squaring
//! assert_eq!(a.pow(5).unwrap(), a);
//! ```

mod owned;

pub use owned::Mat;

#[cfg(test)]
pub(crate) mod strategies {
    use proptest::prelude::*;

    use crate::types::{TropicalAndOr, TropicalMinPlus, Weight};
    use crate::{BooleanMatrix, Mat, TropicalMatrix};

    pub fn weight() -> impl Strategy<Value = Weight> {
        prop_oneof![
            1 => Just(Weight::Infinite),
            1 => Just(Weight::Finite(0)),
            2 => (1u32..6).prop_map(Weight::Finite),
        ]
    }

    pub fn tropical(n: usize) -> impl Strategy<Value = TropicalMatrix> {
        prop::collection::vec(weight(), n * n).prop_map(move |data| Mat {
            data: data.into_iter().map(TropicalMinPlus).collect(),
            n,
        })
    }

    pub fn boolean(n: usize) -> impl Strategy<Value = BooleanMatrix> {
        prop::collection::vec(any::<bool>(), n * n).prop_map(move |data| Mat {
            data: data.into_iter().map(TropicalAndOr).collect(),
            n,
        })
    }

    pub fn tropical_triple() -> impl Strategy<Value = (TropicalMatrix, TropicalMatrix, TropicalMatrix)>
    {
        (1usize..5).prop_flat_map(|n| (tropical(n), tropical(n), tropical(n)))
    }

    pub fn boolean_triple() -> impl Strategy<Value = (BooleanMatrix, BooleanMatrix, BooleanMatrix)> {
        (1usize..5).prop_flat_map(|n| (boolean(n), boolean(n), boolean(n)))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::strategies::*;
    use super::*;
    use crate::error::BoundednessError;
    use crate::types::{TropicalAndOr, TropicalMinPlus, TropicalSemiring, Weight};

    const INF: Weight = Weight::Infinite;

    fn w(v: u32) -> Weight {
        Weight::Finite(v)
    }

    #[test]
    fn test_mat_zeros() {
        let m = Mat::<TropicalMinPlus>::zeros(3);
        assert_eq!(m.size(), 3);
        assert!(m.as_slice().iter().all(|e| e.0 == INF));
    }

    #[test]
    fn test_mat_identity() {
        let m = Mat::<TropicalMinPlus>::identity(3);
        assert_eq!(m.get(0, 0), w(0)); // tropical one
        assert_eq!(m.get(0, 1), INF); // tropical zero
        assert_eq!(m.get(2, 2), w(0));

        let b = Mat::<TropicalAndOr>::identity(2);
        assert!(b.get(0, 0));
        assert!(!b.get(0, 1));
    }

    #[test]
    fn test_mat_from_fn() {
        let m = Mat::<TropicalMinPlus>::from_fn(2, |i, j| TropicalMinPlus::finite((i * 2 + j) as u32));
        assert_eq!(m.get(0, 0), w(0));
        assert_eq!(m.get(0, 1), w(1));
        assert_eq!(m.get(1, 0), w(2));
        assert_eq!(m.get(1, 1), w(3));
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let err = Mat::<TropicalMinPlus>::from_rows(&[vec![w(1), w(2)], vec![w(3)]]).unwrap_err();
        assert!(matches!(err, BoundednessError::NotSquare { rows: 2, cols: 1 }));

        let empty: [[Weight; 0]; 0] = [];
        assert!(matches!(
            Mat::<TropicalMinPlus>::from_rows(&empty),
            Err(BoundednessError::EmptyMatrix)
        ));
    }

    #[test]
    fn test_set_and_get() {
        let mut m = Mat::<TropicalMinPlus>::zeros(2);
        m.set(1, 0, w(7));
        assert_eq!(m.get(1, 0), w(7));
        assert_eq!(m[(1, 0)], TropicalMinPlus::finite(7));
    }

    #[test]
    fn test_minplus_times() {
        let a = Mat::<TropicalMinPlus>::from_rows(&[[w(1), w(2)], [w(3), w(4)]]).unwrap();
        let b = Mat::<TropicalMinPlus>::from_rows(&[[w(1), INF], [w(0), w(5)]]).unwrap();

        let c = a.times(&b).unwrap();
        // C[0,0] = min(1+1, 2+0) = 2
        assert_eq!(c.get(0, 0), w(2));
        // C[0,1] = min(1+∞, 2+5) = 7
        assert_eq!(c.get(0, 1), w(7));
        // C[1,0] = min(3+1, 4+0) = 4
        assert_eq!(c.get(1, 0), w(4));
        // C[1,1] = min(3+∞, 4+5) = 9
        assert_eq!(c.get(1, 1), w(9));

        // operands untouched
        assert_eq!(a.get(0, 0), w(1));
        assert_eq!(b.get(0, 1), INF);
    }

    #[test]
    fn test_times_dimension_mismatch() {
        let a = Mat::<TropicalMinPlus>::identity(2);
        let b = Mat::<TropicalMinPlus>::identity(3);
        assert!(matches!(
            a.times(&b),
            Err(BoundednessError::DimensionMismatch { expected: 2, found: 3 })
        ));
    }

    #[test]
    fn test_times_overflow() {
        let big = Mat::<TropicalMinPlus>::filled(1, TropicalMinPlus::finite(u32::MAX - 1));
        assert!(matches!(big.times(&big), Err(BoundednessError::Overflow(_))));
    }

    #[test]
    fn test_times_in_place_matches_times() {
        let a = Mat::<TropicalMinPlus>::from_rows(&[[w(0), w(3), INF], [INF, w(1), w(2)], [w(4), INF, w(0)]])
            .unwrap();
        let b = Mat::<TropicalMinPlus>::from_rows(&[[w(1), INF, w(0)], [w(2), w(2), INF], [INF, w(5), w(1)]])
            .unwrap();

        let expected = a.times(&b).unwrap();
        let mut c = a.clone();
        c.times_in_place(&b).unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn test_times_in_place_overflow_leaves_self_unchanged() {
        let mut a = Mat::<TropicalMinPlus>::from_rows(&[[w(1), INF], [INF, w(u32::MAX - 1)]]).unwrap();
        let before = a.clone();
        let b = Mat::<TropicalMinPlus>::from_rows(&[[w(2), INF], [INF, w(2)]]).unwrap();
        // row 0 succeeds, row 1 overflows
        assert!(matches!(a.times_in_place(&b), Err(BoundednessError::Overflow(_))));
        assert_eq!(a, before);
        assert!(a.square_in_place().is_err());
        assert_eq!(a, before);
    }

    #[test]
    #[should_panic(expected = "col index 2 out of bounds 2")]
    fn test_get_out_of_bounds_panics() {
        let m = Mat::<TropicalMinPlus>::identity(2);
        // row-major offset 2 is a valid slot, so only the bounds check catches this
        let _ = m.get(0, 2);
    }

    #[test]
    #[should_panic(expected = "row index 3 out of bounds 2")]
    fn test_set_out_of_bounds_panics() {
        let mut m = Mat::<TropicalMinPlus>::zeros(2);
        m.set(3, 0, w(1));
    }

    #[test]
    fn test_square_in_place_matches_times() {
        let a = Mat::<TropicalMinPlus>::from_rows(&[[w(1), w(0)], [w(0), INF]]).unwrap();
        let expected = a.times(&a).unwrap();
        let mut c = a.clone();
        c.square_in_place().unwrap();
        assert_eq!(c, expected);
    }

    #[test]
    fn test_pow_zero_is_identity() {
        let a = Mat::<TropicalMinPlus>::from_rows(&[[w(3), INF], [w(1), w(2)]]).unwrap();
        assert_eq!(a.pow(0).unwrap(), Mat::identity(2));
    }

    #[test]
    fn test_boolean_times() {
        let t = true;
        let f = false;
        let a = Mat::<TropicalAndOr>::from_rows(&[[f, t], [f, f]]).unwrap();
        let b = Mat::<TropicalAndOr>::from_rows(&[[f, f], [t, f]]).unwrap();
        let c = a.times(&b).unwrap();
        assert!(c.get(0, 0));
        assert!(!c.get(0, 1));
        assert!(!c.get(1, 0));
    }

    #[test]
    fn test_hash_set_membership_is_structural() {
        let a = Mat::<TropicalMinPlus>::from_rows(&[[w(1), INF], [w(0), w(2)]]).unwrap();
        let b = Mat::<TropicalMinPlus>::from_rows(&[[w(1), INF], [w(0), w(2)]]).unwrap();
        let c = Mat::<TropicalMinPlus>::from_rows(&[[w(1), INF], [w(0), w(3)]]).unwrap();

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
        assert!(!set.contains(&Mat::<TropicalMinPlus>::identity(3)));
    }

    #[test]
    fn test_map() {
        let a = Mat::<TropicalMinPlus>::from_rows(&[[w(1), INF], [w(0), w(2)]]).unwrap();
        let b = a.map(|e| TropicalAndOr(!e.is_tropical_zero()));
        assert!(b.get(0, 0));
        assert!(!b.get(0, 1));
        assert_eq!(b.size(), 2);
    }

    proptest! {
        #[test]
        fn prop_tropical_associative((a, b, c) in tropical_triple()) {
            let left = a.times(&b).unwrap().times(&c).unwrap();
            let right = a.times(&b.times(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_boolean_associative((a, b, c) in boolean_triple()) {
            let left = a.times(&b).unwrap().times(&c).unwrap();
            let right = a.times(&b.times(&c).unwrap()).unwrap();
            prop_assert_eq!(left, right);
        }

        #[test]
        fn prop_tropical_identity_laws((a, _, _) in tropical_triple()) {
            let id = Mat::identity(a.size());
            prop_assert_eq!(id.times(&a).unwrap(), a.clone());
            prop_assert_eq!(a.times(&id).unwrap(), a);
        }

        #[test]
        fn prop_boolean_identity_laws((a, _, _) in boolean_triple()) {
            let id = Mat::identity(a.size());
            prop_assert_eq!(id.times(&a).unwrap(), a.clone());
            prop_assert_eq!(a.times(&id).unwrap(), a);
        }

        #[test]
        fn prop_pow_matches_iterated_multiply((a, _, _) in tropical_triple()) {
            let mut iterated = Mat::identity(a.size());
            for k in 0..=5u32 {
                prop_assert_eq!(a.pow(k).unwrap(), iterated.clone());
                iterated.times_in_place(&a).unwrap();
            }
        }

        #[test]
        fn prop_boolean_pow_matches_iterated_multiply((a, _, _) in boolean_triple()) {
            let mut iterated = Mat::identity(a.size());
            for k in 0..=5u32 {
                prop_assert_eq!(a.pow(k).unwrap(), iterated.clone());
                iterated.times_in_place(&a).unwrap();
            }
        }
    }
}
