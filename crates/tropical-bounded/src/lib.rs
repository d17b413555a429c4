//! Boundedness of finitely generated tropical matrix semigroups.
//!
//! A finite set G of square matrices over the (min, +) semiring generates
//! the semigroup of all products of words over G. The set is *bounded*
//! when those products take finitely many distinct finite entry values.
//! This crate decides (or semi-decides) boundedness and, for bounded
//! instances, finds a shortest word realising the largest value together
//! with the path through the word's layered graph that explains it.
//!
//! # Semirings
//!
//! | Type | ⊕ (add) | ⊗ (mul) | Zero | One | Matrix alias |
//! |------|---------|---------|------|-----|--------------|
//! | [`TropicalMinPlus`] | min | + | +∞ | 0 | [`TropicalMatrix`] |
//! | [`TropicalAndOr`] | OR | AND | false | true | [`BooleanMatrix`] |
//!
//! Both are instances of the single generic container [`Mat<S>`].
//!
//! # Quick Start
//!
//! ## Deciding boundedness
//!
//! ```
//! use std::time::Duration;
//! use tropical_bounded::{decide_one_matrix, semi_decide, TropicalMatrix, Weight};
//!
//! let inf = Weight::Infinite;
//! // zero self-loop at node 0, node 1 reaches it
//! let a = TropicalMatrix::from_rows(&[[Weight::Finite(0), inf], [Weight::Finite(1), Weight::Finite(0)]]).unwrap();
//! // positive 2-cycle
//! let b = TropicalMatrix::from_rows(&[[inf, Weight::Finite(1)], [Weight::Finite(1), inf]]).unwrap();
//!
//! assert!(decide_one_matrix(&a).unwrap());
//! assert!(semi_decide(&[a], Duration::from_secs(1)).unwrap());
//!
//! assert!(!decide_one_matrix(&b).unwrap());
//! // never converges: the semi-decision can only time out
//! assert!(!semi_decide(&[b], Duration::from_millis(20)).unwrap());
//! ```
//!
//! ## Finding a witness
//!
//! ```
//! use tropical_bounded::{find_min_path_for_max_value, parse_generators};
//!
//! let gens = parse_generators("- 1 -\n- - -\n- - -\n\n- - -\n- - 2\n- - -").unwrap();
//! let report = find_min_path_for_max_value(&gens).unwrap();
//! assert_eq!(report.distance, 3);
//! println!("{report}");
//! ```
//!
//! # Logging
//!
//! Progress and verdicts are emitted through [`tracing`]; install a
//! subscriber to see them.

pub mod boolean;
pub mod config;
pub mod decide;
pub mod error;
pub mod generate;
pub mod mat;
pub mod text;
pub mod tropical;
pub mod types;
pub mod witness;

pub use boolean::BooleanMatrix;
pub use config::{SamplingConfig, SearchConfig};
#[allow(deprecated)]
pub use decide::decide;
pub use decide::{
    conjectured_bound, decide_one_matrix, decide_with_bound, semi_decide, semi_decide_max_value,
    BoundVerdict, SemiDecision,
};
pub use error::{BoundednessError, Result};
pub use generate::{all_matrices, random_generators};
pub use mat::Mat;
pub use text::{format_generators, parse_generators};
pub use tropical::TropicalMatrix;
pub use types::{ArithmeticOverflow, TropicalAndOr, TropicalMinPlus, TropicalSemiring, Weight};
pub use witness::{
    find_min_path_for_max_value, find_min_path_for_max_value_with, tropical_dijkstra,
    tropical_dijkstra_code, WitnessReport, Word,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use super::{
        decide_one_matrix, decide_with_bound, find_min_path_for_max_value, semi_decide,
        semi_decide_max_value, tropical_dijkstra, BooleanMatrix, BoundVerdict, BoundednessError,
        Mat, SearchConfig, TropicalMatrix, TropicalSemiring, Weight, WitnessReport, Word,
    };
}
