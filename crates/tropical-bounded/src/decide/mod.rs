//! Boundedness decision procedures.
//!
//! A generator set G is *bounded* when the products of all finite words
//! over G take finitely many distinct finite entry values. Procedures:
//!
//! | Function | Generators | Answer |
//! |----------|------------|--------|
//! | [`semi_decide`] | any | `true` is a proof; `false` means undecided (timed out) |
//! | [`semi_decide_max_value`] | any | as above, plus the largest value seen |
//! | [`decide_one_matrix`] | one | exact, polynomial |
//! | [`decide_with_bound`] | any | exact if the conjectured bound holds |
//! | [`decide`] (deprecated) | any | `true` is a proof; `false` may be wrong |
//!
//! Every procedure except [`decide_one_matrix`] iterates the same fixed
//! point: `next = { p·g : p ∈ partial, g ∈ G }`, stopping once a fully
//! materialised layer adds no product that was not already seen.

mod bound;
mod closure;
mod heuristic;
mod semi;
mod single;

pub use bound::{conjectured_bound, decide_with_bound, BoundVerdict};
#[allow(deprecated)]
pub use heuristic::decide;
pub use semi::{semi_decide, semi_decide_max_value, SemiDecision};
pub use single::decide_one_matrix;

use crate::error::{BoundednessError, Result};
use crate::TropicalMatrix;

/// Validate a generator set and return the shared dimension.
pub fn check_generators(generators: &[TropicalMatrix]) -> Result<usize> {
    let first = generators.first().ok_or(BoundednessError::EmptyGenerators)?;
    let dimension = first.size();
    for g in &generators[1..] {
        first.ensure_same_size(g)?;
    }
    Ok(dimension)
}
