//! Matrices over the (OR, AND) semiring.

use std::fmt;

use crate::error::Result;
use crate::mat::Mat;
use crate::tropical::write_grid;
use crate::types::TropicalAndOr;

/// Square 0/1 matrix; a `true` at (i, j) is an edge from i to j.
pub type BooleanMatrix = Mat<TropicalAndOr>;

impl Mat<TropicalAndOr> {
    /// Reachability by one or more hops.
    ///
    /// Computed as M¹ ∨ M² ∨ … ∨ Mⁿ. A node only reaches itself if it lies
    /// on a cycle: the 0-hop identity is not included.
    pub fn transitive_closure(&self) -> Result<BooleanMatrix> {
        let mut result = self.clone();
        let mut product = self.clone();
        for _ in 2..=self.n {
            product.times_in_place(self)?;
            for (acc, hop) in result.data.iter_mut().zip(&product.data) {
                *acc = *acc + *hop;
            }
        }
        Ok(result)
    }

    /// Entrywise OR.
    pub fn or(&self, other: &BooleanMatrix) -> Result<BooleanMatrix> {
        self.ensure_same_size(other)?;
        Ok(Mat {
            data: self.data.iter().zip(&other.data).map(|(&a, &b)| a + b).collect(),
            n: self.n,
        })
    }

    /// Whether row `i` reaches itself.
    #[inline]
    pub fn on_cycle(&self, i: usize) -> bool {
        self.get(i, i)
    }
}

impl fmt::Display for Mat<TropicalAndOr> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::mat::strategies::boolean;

    const T: bool = true;
    const F: bool = false;

    #[test]
    fn test_closure_of_path() {
        // 0 -> 1 -> 2
        let m = BooleanMatrix::from_rows(&[[F, T, F], [F, F, T], [F, F, F]]).unwrap();
        let r = m.transitive_closure().unwrap();
        assert!(r.get(0, 1));
        assert!(r.get(0, 2));
        assert!(r.get(1, 2));
        assert!(!r.get(2, 0));
        // no cycle, so no node reaches itself
        for i in 0..3 {
            assert!(!r.on_cycle(i));
        }
    }

    #[test]
    fn test_closure_of_cycle() {
        // 0 -> 1 -> 2 -> 0
        let m = BooleanMatrix::from_rows(&[[F, T, F], [F, F, T], [T, F, F]]).unwrap();
        let r = m.transitive_closure().unwrap();
        assert!(r.as_slice().iter().all(|e| e.0));
    }

    #[test]
    fn test_closure_self_loop() {
        let m = BooleanMatrix::from_rows(&[[T, F], [T, F]]).unwrap();
        let r = m.transitive_closure().unwrap();
        assert!(r.on_cycle(0));
        assert!(!r.on_cycle(1));
        assert!(r.get(1, 0));
    }

    #[test]
    fn test_closure_one_by_one() {
        let m = BooleanMatrix::from_rows(&[[F]]).unwrap();
        assert_eq!(m.transitive_closure().unwrap(), m);
    }

    #[test]
    fn test_or() {
        let a = BooleanMatrix::from_rows(&[[T, F], [F, F]]).unwrap();
        let b = BooleanMatrix::from_rows(&[[F, F], [F, T]]).unwrap();
        assert_eq!(a.or(&b).unwrap(), BooleanMatrix::identity(2));
    }

    #[test]
    fn test_display() {
        let m = BooleanMatrix::from_rows(&[[T, F], [F, T]]).unwrap();
        assert_eq!(m.to_string(), "1  0\n0  1");
    }

    proptest! {
        #[test]
        fn prop_closure_idempotent(m in (1usize..6).prop_flat_map(boolean)) {
            let once = m.transitive_closure().unwrap();
            let twice = once.transitive_closure().unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
