//! Witnesses: concrete words and shortest paths realising product entries.
//!
//! The `(start, end)` entry of a word's tropical product equals the
//! shortest-path distance between the first and last layer of the word's
//! layered graph, so a path found there explains where the value comes
//! from edge by edge.
//!
//! # Example
//!
//! ```
//! use tropical_bounded::{tropical_dijkstra, TropicalMatrix, Weight, Word};
//!
//! let inf = Weight::Infinite;
//! let a = TropicalMatrix::from_rows(&[[Weight::Finite(0), Weight::Finite(1)], [inf, Weight::Finite(0)]]).unwrap();
//! let b = TropicalMatrix::from_rows(&[[inf, Weight::Finite(2)], [Weight::Finite(3), inf]]).unwrap();
//!
//! // word "a b", node 1 to node 1 (1-based)
//! let report = tropical_dijkstra(&[a, b], 1, 1, &Word::new(vec![0, 1])).unwrap();
//! assert_eq!(report.distance, 4); // 0 -> 1 (1) then 1 -> 0 (3)
//! assert_eq!(report.path, vec![0, 1, 0]);
//! assert_eq!(report.weights, vec![1, 3]);
//! ```

mod graph;
mod search;
mod word;

use std::fmt;

pub use search::{find_min_path_for_max_value, find_min_path_for_max_value_with};
pub use word::Word;

use tracing::debug;

use crate::decide::check_generators;
use crate::error::{BoundednessError, Result};
use crate::types::Weight;
use crate::TropicalMatrix;
use graph::LayeredGraph;

/// Shortest-path explanation of one entry of a word's product.
///
/// Indices are 0-based; `Display` renders them 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessReport {
    /// The word whose product is explained.
    pub word: Word,
    /// Start node (row of the entry).
    pub start: usize,
    /// End node (column of the entry).
    pub end: usize,
    /// The word's tropical product.
    pub product: TropicalMatrix,
    /// Total path weight; equals `product[start][end]`.
    pub distance: u32,
    /// Visited nodes, one per layer, `word.len() + 1` in total.
    pub path: Vec<usize>,
    /// Edge weight taken at each letter.
    pub weights: Vec<u32>,
}

impl fmt::Display for WitnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Word: {}", self.word)?;
        writeln!(f, "Resulting Matrix:\n{}\n", self.product)?;
        writeln!(f, "Shortest path from {} to {}:", self.start + 1, self.end + 1)?;
        writeln!(f, "Total distance: {}", self.distance)?;
        let path: Vec<usize> = self.path.iter().map(|p| p + 1).collect();
        writeln!(f, "Path:     {:?}", path)?;
        writeln!(f, "Weights:  {:?}", self.weights)?;
        write!(f, "Matrices: {} (same as \"word\")", self.word)
    }
}

/// Explain the `(start, end)` entry of `word`'s product by a shortest path.
///
/// `start` and `end` are 1-based. Fails with
/// [`BoundednessError::Unreachable`] if the entry is infinite.
pub fn tropical_dijkstra(
    generators: &[TropicalMatrix],
    start: usize,
    end: usize,
    word: &Word,
) -> Result<WitnessReport> {
    let n = check_generators(generators)?;
    for index in [start, end] {
        if index < 1 || index > n {
            return Err(BoundednessError::IndexOutOfRange {
                index,
                dimension: n,
            });
        }
    }
    word.check_letters(generators.len())?;
    let (start, end) = (start - 1, end - 1);

    let product = word.product(generators)?;
    let layers = word.letters().iter().map(|&l| &generators[l]);
    let graph = LayeredGraph::build(n, layers);

    let (distance, nodes) = graph
        .shortest_path(graph.node(0, start), graph.node(word.len(), end))?
        .ok_or(BoundednessError::Unreachable {
            start: start + 1,
            end: end + 1,
        })?;
    debug_assert_eq!(product.get(start, end), Weight::Finite(distance));

    let path: Vec<usize> = nodes.iter().map(|v| v % n).collect();
    let weights = word
        .letters()
        .iter()
        .zip(path.windows(2))
        .map(|(&l, hop)| generators[l].get(hop[0], hop[1]).finite().unwrap_or_default())
        .collect();

    debug!(word = %word, start, end, distance, "witness path found");
    Ok(WitnessReport {
        word: word.clone(),
        start,
        end,
        product,
        distance,
        path,
        weights,
    })
}

/// [`tropical_dijkstra`] with the word given by its base-k code.
///
/// `word_code` is read as `word_length` digits in base `generators.len()`,
/// most significant digit first.
pub fn tropical_dijkstra_code(
    generators: &[TropicalMatrix],
    start: usize,
    end: usize,
    word_length: usize,
    word_code: u64,
) -> Result<WitnessReport> {
    let word = Word::from_code(word_code, word_length, generators.len())?;
    tropical_dijkstra(generators, start, end, &word)
}
