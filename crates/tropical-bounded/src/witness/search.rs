//! Shortest word realising the closure maximum.

use tracing::{debug, info};

use super::{tropical_dijkstra, Word, WitnessReport};
use crate::config::SearchConfig;
use crate::decide::{check_generators, semi_decide_max_value};
use crate::error::{BoundednessError, Result};
use crate::types::Weight;
use crate::TropicalMatrix;

/// [`find_min_path_for_max_value_with`] using the default 10 s timeout.
pub fn find_min_path_for_max_value(generators: &[TropicalMatrix]) -> Result<WitnessReport> {
    find_min_path_for_max_value_with(generators, &SearchConfig::default())
}

/// Find a shortest word whose product contains the largest finite value of
/// the closure, and explain that entry with [`tropical_dijkstra`].
///
/// The instance must be proven bounded within `config`'s timeout;
/// otherwise this fails with [`BoundednessError::NotConverged`] and the
/// caller should raise the timeout.
///
/// Non-empty words are enumerated by length, every word of one length in
/// code order, so the first hit is a word of minimal length. The empty word
/// is returned only when every product of the generators is all-infinite,
/// the one case where the maximum 0 is attained by the identity alone.
///
/// ```
/// use tropical_bounded::{find_min_path_for_max_value, TropicalMatrix, Weight};
///
/// let inf = Weight::Infinite;
/// let g = TropicalMatrix::from_rows(&[[Weight::Finite(0), inf], [Weight::Finite(1), Weight::Finite(0)]]).unwrap();
/// let report = find_min_path_for_max_value(&[g]).unwrap();
/// assert_eq!(report.distance, 1);
/// assert_eq!(report.word.len(), 1);
/// ```
pub fn find_min_path_for_max_value_with(
    generators: &[TropicalMatrix],
    config: &SearchConfig,
) -> Result<WitnessReport> {
    let dimension = check_generators(generators)?;
    let timeout = config.get_timeout();

    let decision = semi_decide_max_value(generators, timeout)?;
    if !decision.converged {
        return Err(BoundednessError::NotConverged {
            timeout,
            max_value: decision.max_value,
        });
    }
    let target = Weight::Finite(decision.max_value);
    let k = generators.len();

    // layer[code] is the product of the word of the current length with that code
    let mut layer = generators.to_vec();
    for length in 1..=decision.layers {
        for (code, product) in layer.iter().enumerate() {
            if let Some((row, col)) = product.position_of(target) {
                let word = Word::from_code(code as u64, length, k)?;
                info!(
                    max_value = decision.max_value,
                    word = %word,
                    row = row + 1,
                    col = col + 1,
                    "shortest word for the maximum found"
                );
                return tropical_dijkstra(generators, row + 1, col + 1, &word);
            }
        }
        if length == decision.layers {
            break;
        }

        let mut next = Vec::with_capacity(layer.len() * k);
        for product in &layer {
            for g in generators {
                next.push(product.times(g)?);
            }
        }
        debug!(length = length + 1, words = next.len(), "enumerating words");
        layer = next;
    }

    // every non-empty word is all-infinite: only the identity attains 0
    if decision.max_value == 0 {
        debug!(dimension, "no finite product entry; falling back to the empty word");
        return tropical_dijkstra(generators, 1, 1, &Word::default());
    }
    Err(BoundednessError::WitnessNotFound {
        max_value: decision.max_value,
    })
}
