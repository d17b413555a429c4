//! Exact polynomial decision for a single generator.

use tracing::debug;

use crate::error::Result;
use crate::types::Weight;
use crate::TropicalMatrix;

/// Decide boundedness of `{M^k : k ≥ 0}` exactly.
///
/// A node has a zero loop if some `M^i[j][j] == 0` for `i` in `1..=n`.
/// The instance is bounded iff every node on a cycle of M's edge graph
/// lies in a strongly connected part that contains a zero-loop node: each
/// cycle can then be pumped at zero cost.
///
/// ```
/// use tropical_bounded::{decide_one_matrix, TropicalMatrix, Weight};
///
/// let inf = Weight::Infinite;
/// let cycle = TropicalMatrix::from_rows(&[[inf, Weight::Finite(1)], [Weight::Finite(1), inf]]).unwrap();
/// assert!(!decide_one_matrix(&cycle).unwrap());
/// ```
pub fn decide_one_matrix(matrix: &TropicalMatrix) -> Result<bool> {
    let n = matrix.size();

    let mut zero_loop = vec![false; n];
    let mut product = TropicalMatrix::identity(n);
    for _ in 0..n {
        product.times_in_place(matrix)?;
        for (j, flag) in zero_loop.iter_mut().enumerate() {
            if product.get(j, j) == Weight::ZERO {
                *flag = true;
            }
        }
    }

    let reachable = matrix.boolean_abstraction().transitive_closure()?;
    for i in (0..n).filter(|&i| reachable.on_cycle(i)) {
        let pumpable = (0..n).any(|j| zero_loop[j] && reachable.get(i, j) && reachable.get(j, i));
        if !pumpable {
            debug!(node = i, "cycle without a zero loop: unbounded");
            return Ok(false);
        }
    }
    Ok(true)
}
