//! Full decision conditioned on a conjectured value bound.

use tracing::{info, warn};

use super::closure::{Closure, Step};
use super::check_generators;
use crate::error::Result;
use crate::TropicalMatrix;

/// Answer of [`decide_with_bound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundVerdict {
    /// The closure converged: bounded, proven.
    Bounded,
    /// A product entry exceeded `bound` before convergence.
    ///
    /// `certified` is true only for a single generator. For more generators
    /// the bound formula is a conjecture, so this answer is "unbounded if
    /// the conjecture holds", not a proof.
    BoundExceeded { bound: u64, certified: bool },
}

impl BoundVerdict {
    /// Collapse the verdict to the plain boolean answer.
    #[inline]
    pub fn is_bounded(self) -> bool {
        matches!(self, BoundVerdict::Bounded)
    }
}

/// The conjectured bound `(n - 1) · 2 · max_i maxValue(G_i) · k`.
///
/// Saturates instead of overflowing; a saturated bound is never exceeded.
pub fn conjectured_bound(generators: &[TropicalMatrix]) -> Result<u64> {
    let dimension = check_generators(generators)?;
    let max_value = generators
        .iter()
        .map(TropicalMatrix::max_value)
        .max()
        .unwrap_or(0);
    Ok((dimension as u64 - 1)
        .saturating_mul(2)
        .saturating_mul(u64::from(max_value))
        .saturating_mul(generators.len() as u64))
}

/// Decide boundedness without a timeout.
///
/// Runs the same fixed-point iteration as the semi-decision and stops when
/// the closure converges or when the largest finite entry of a fresh layer
/// exceeds [`conjectured_bound`]. An unbounded instance eventually exceeds
/// any bound, so this always terminates.
///
/// The negative answer rests on the bound being correct, which is unproven
/// for more than one generator; see [`BoundVerdict::BoundExceeded`].
pub fn decide_with_bound(generators: &[TropicalMatrix]) -> Result<BoundVerdict> {
    let dimension = check_generators(generators)?;
    let bound = conjectured_bound(generators)?;
    let mut closure = Closure::new(generators, dimension);

    loop {
        match closure.step()? {
            Step::Converged => {
                info!(
                    generators = generators.len(),
                    dimension,
                    bound,
                    layers = closure.layers(),
                    "closure converged below bound: bounded"
                );
                return Ok(BoundVerdict::Bounded);
            }
            Step::Grew { next_max } if u64::from(next_max) > bound => {
                let certified = generators.len() == 1;
                if certified {
                    info!(next_max, bound, layers = closure.layers(), "bound exceeded: unbounded");
                } else {
                    warn!(
                        generators = generators.len(),
                        next_max,
                        bound,
                        layers = closure.layers(),
                        "bound exceeded; unbounded only if the conjectured bound holds"
                    );
                }
                return Ok(BoundVerdict::BoundExceeded { bound, certified });
            }
            Step::Grew { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Weight;

    const INF: Weight = Weight::Infinite;

    fn w(v: u32) -> Weight {
        Weight::Finite(v)
    }

    #[test]
    fn test_conjectured_bound() {
        let a = TropicalMatrix::from_rows(&[[w(0), w(3), INF], [INF; 3], [INF; 3]]).unwrap();
        let b = TropicalMatrix::from_rows(&[[w(1), INF, INF], [INF; 3], [INF, w(2), INF]]).unwrap();
        // (3 - 1) * 2 * 3 * 2
        assert_eq!(conjectured_bound(&[a, b]).unwrap(), 24);
    }

    #[test]
    fn test_bounded_single_generator() {
        let g = TropicalMatrix::from_rows(&[[w(0), INF], [w(1), w(0)]]).unwrap();
        assert_eq!(decide_with_bound(&[g]).unwrap(), BoundVerdict::Bounded);
    }

    #[test]
    fn test_unbounded_single_generator_is_certified() {
        let g = TropicalMatrix::from_rows(&[[INF, w(1)], [w(1), INF]]).unwrap();
        let verdict = decide_with_bound(&[g]).unwrap();
        assert_eq!(
            verdict,
            BoundVerdict::BoundExceeded {
                bound: 2,
                certified: true
            }
        );
        assert!(!verdict.is_bounded());
    }

    #[test]
    fn test_one_by_one_positive_entry() {
        // n = 1 makes the bound 0, so the first positive entry exceeds it
        let g = TropicalMatrix::from_rows(&[[w(3)]]).unwrap();
        assert!(!decide_with_bound(&[g]).unwrap().is_bounded());
    }

    #[test]
    fn test_unbounded_pair_is_not_certified() {
        let a = TropicalMatrix::from_rows(&[[w(1), INF], [INF, w(0)]]).unwrap();
        let b = TropicalMatrix::from_rows(&[[w(0), INF], [INF, w(1)]]).unwrap();
        match decide_with_bound(&[a, b]).unwrap() {
            BoundVerdict::BoundExceeded { certified, .. } => assert!(!certified),
            BoundVerdict::Bounded => panic!("a^k grows without bound"),
        }
    }

    #[test]
    fn test_bounded_pair() {
        let a = TropicalMatrix::from_rows(&[[w(0), INF], [w(2), INF]]).unwrap();
        let b = TropicalMatrix::from_rows(&[[w(0), INF], [w(1), INF]]).unwrap();
        assert!(decide_with_bound(&[a, b]).unwrap().is_bounded());
    }
}
