//! Semiring element types for tropical boundedness queries.
//!
//! This crate provides the scalar layer: an explicit finite-or-infinite
//! [`Weight`], the [`TropicalSemiring`] trait, and the two semirings the
//! matrix layer is instantiated with.
//!
//! # Supported Semirings
//!
//! | Type | ⊕ (add) | ⊗ (mul) | Zero | One |
//! |------|---------|---------|------|-----|
//! | [`TropicalMinPlus`] | min | + | +∞ | 0 |
//! | [`TropicalAndOr`] | OR | AND | false | true |
//!
//! # Example
//!
//! ```
//! use tropical_types::{TropicalMinPlus, TropicalSemiring, Weight};
//!
//! let a = TropicalMinPlus::finite(3);
//! let b = TropicalMinPlus::finite(5);
//!
//! // Tropical addition: min(3, 5) = 3
//! assert_eq!(a.tropical_add(b).value(), Weight::Finite(3));
//!
//! // Tropical multiplication: 3 + 5 = 8
//! assert_eq!(a.tropical_mul(b).unwrap().value(), Weight::Finite(8));
//! ```

mod and_or;
mod error;
mod min_plus;
mod traits;
mod weight;

pub use and_or::TropicalAndOr;
pub use error::ArithmeticOverflow;
pub use min_plus::TropicalMinPlus;
pub use traits::TropicalSemiring;
pub use weight::Weight;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{ArithmeticOverflow, TropicalAndOr, TropicalMinPlus, TropicalSemiring, Weight};
}
