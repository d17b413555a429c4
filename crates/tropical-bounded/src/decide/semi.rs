//! Semi-decision with a wall-clock timeout.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::closure::{Closure, Step};
use super::check_generators;
use crate::error::Result;
use crate::TropicalMatrix;

/// Outcome of [`semi_decide_max_value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemiDecision {
    /// The closure reached a fixed point: the instance is bounded.
    pub converged: bool,
    /// Largest finite entry over every product found.
    ///
    /// The true bound when `converged`; otherwise only a lower bound that
    /// hints whether the timeout was too short.
    pub max_value: u32,
    /// Layers expanded, i.e. the longest word length examined.
    pub layers: usize,
    /// Distinct products found.
    pub products: usize,
}

/// Semi-decide boundedness.
///
/// Returns `Ok(true)` once the closure converges, a proof of
/// boundedness. Returns `Ok(false)` when `timeout` elapses first: the
/// instance is *undecided*, likely unbounded, but nothing is proven.
///
/// The deadline is checked once per layer, never mid-layer, so the call may
/// overrun `timeout` by up to one layer expansion.
///
/// ```
/// use std::time::Duration;
/// use tropical_bounded::{semi_decide, TropicalMatrix, Weight};
///
/// let g = TropicalMatrix::from_rows(&[
///     [Weight::Finite(0), Weight::Infinite],
///     [Weight::Finite(1), Weight::Finite(0)],
/// ])
/// .unwrap();
/// assert!(semi_decide(&[g], Duration::from_secs(1)).unwrap());
/// ```
pub fn semi_decide(generators: &[TropicalMatrix], timeout: Duration) -> Result<bool> {
    semi_decide_max_value(generators, timeout).map(|d| d.converged)
}

/// Same iteration as [`semi_decide`], also reporting the largest finite
/// entry seen.
pub fn semi_decide_max_value(
    generators: &[TropicalMatrix],
    timeout: Duration,
) -> Result<SemiDecision> {
    let dimension = check_generators(generators)?;
    let mut closure = Closure::new(generators, dimension);

    let start = Instant::now();
    let deadline = start.checked_add(timeout);
    let mut converged = false;
    while deadline.map_or(true, |d| Instant::now() < d) {
        if closure.step()? == Step::Converged {
            converged = true;
            break;
        }
    }

    let decision = SemiDecision {
        converged,
        max_value: closure.max_value(),
        layers: closure.layers(),
        products: closure.len(),
    };
    if converged {
        info!(
            generators = generators.len(),
            dimension,
            max_value = decision.max_value,
            layers = decision.layers,
            elapsed = ?start.elapsed(),
            "closure converged: bounded"
        );
    } else {
        debug!(
            generators = generators.len(),
            dimension,
            max_value = decision.max_value,
            layers = decision.layers,
            products = decision.products,
            ?timeout,
            "semi-decision timed out: undecided"
        );
    }
    Ok(decision)
}
