//! Semiring element types.
//!
//! Re-exported from `tropical-types` so that matrix code names a single
//! path for elements, weights and the overflow error.

pub use tropical_types::{ArithmeticOverflow, TropicalAndOr, TropicalMinPlus, TropicalSemiring, Weight};
