//! Structural sufficient condition for boundedness.

use super::check_generators;
use crate::error::Result;
use crate::types::{TropicalAndOr, Weight};
use crate::{BooleanMatrix, TropicalMatrix};

/// Structural test over the generators' shared edge sets.
///
/// For every pair (i, j) joined by some word through a cycle, it requires
/// a node k that every generator can route through (edge intersection)
/// and that carries a zero loop made of edges that are zero in every
/// generator. `true` implies bounded; `false` does not imply unbounded.
#[deprecated(
    note = "reports unbounded on some bounded instances; use `decide_with_bound` or `semi_decide`"
)]
pub fn decide(generators: &[TropicalMatrix]) -> Result<bool> {
    let n = check_generators(generators)?;

    // zero in every generator
    let zero_intersection = BooleanMatrix::from_fn(n, |i, j| {
        TropicalAndOr(generators.iter().all(|g| g.get(i, j) == Weight::ZERO))
    });

    let mut zero_loop = vec![false; n];
    let mut product = zero_intersection.clone();
    for _ in 0..n {
        for (j, flag) in zero_loop.iter_mut().enumerate() {
            if product.get(j, j) {
                *flag = true;
            }
        }
        product.times_in_place(&zero_intersection)?;
    }

    // finite in some generator / finite in every generator
    let edge_union = BooleanMatrix::from_fn(n, |i, j| {
        TropicalAndOr(generators.iter().any(|g| g.get(i, j).is_finite()))
    });
    let edge_intersection = BooleanMatrix::from_fn(n, |i, j| {
        TropicalAndOr(generators.iter().all(|g| g.get(i, j).is_finite()))
    });

    let path_union = edge_union.transitive_closure()?;
    let path_intersection = edge_intersection.transitive_closure()?;

    for i in 0..n {
        for j in (0..n).filter(|&j| path_union.get(i, j)) {
            let loop_on_the_way = (0..n)
                .any(|k| path_union.get(i, k) && path_union.on_cycle(k) && path_union.get(k, j));
            if !loop_on_the_way {
                continue;
            }
            let through_zero_loop = (0..n).any(|k| {
                path_intersection.get(i, k) && zero_loop[k] && path_intersection.get(k, j)
            });
            if !through_zero_loop {
                return Ok(false);
            }
        }
    }
    Ok(true)
}
