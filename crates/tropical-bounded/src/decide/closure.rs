//! Layer-by-layer closure of a generator set under multiplication.

use std::collections::HashSet;

use tracing::trace;

use crate::error::Result;
use crate::TropicalMatrix;

/// Outcome of expanding one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// No new product appeared; the closure is complete.
    Converged,
    /// New products appeared. `next_max` is the largest finite entry among
    /// the products of the expanded layer.
    Grew { next_max: u32 },
}

/// Working state of the fixed-point iteration.
///
/// `partial` holds the products of words of the current length, `full`
/// the products of every length seen so far. Both start at `{identity}`.
pub(crate) struct Closure<'g> {
    generators: &'g [TropicalMatrix],
    partial: HashSet<TropicalMatrix>,
    full: HashSet<TropicalMatrix>,
    full_max: u32,
    layers: usize,
}

impl<'g> Closure<'g> {
    /// Start from the empty word. `generators` must already be validated.
    pub(crate) fn new(generators: &'g [TropicalMatrix], dimension: usize) -> Self {
        let identity = TropicalMatrix::identity(dimension);
        let mut partial = HashSet::new();
        partial.insert(identity.clone());
        let mut full = HashSet::new();
        full.insert(identity);
        Self {
            generators,
            partial,
            full,
            full_max: 0,
            layers: 0,
        }
    }

    /// Extend every word of the current length by every generator.
    ///
    /// The whole layer is materialised before the convergence test, which
    /// is only sound on a complete layer.
    pub(crate) fn step(&mut self) -> Result<Step> {
        let mut next = HashSet::with_capacity(self.partial.len() * self.generators.len());
        for p in &self.partial {
            for g in self.generators {
                next.insert(p.times(g)?);
            }
        }
        self.layers += 1;

        if next == self.partial || next.is_subset(&self.full) {
            trace!(layer = self.layers, size = self.full.len(), "closure converged");
            return Ok(Step::Converged);
        }

        let next_max = next.iter().map(TropicalMatrix::max_value).max().unwrap_or(0);
        self.full_max = self.full_max.max(next_max);
        self.full.extend(next.iter().cloned());
        self.partial = next;
        trace!(
            layer = self.layers,
            partial = self.partial.len(),
            full = self.full.len(),
            next_max,
            "closure layer expanded"
        );
        Ok(Step::Grew { next_max })
    }

    /// Largest finite entry over every product in `full`.
    pub(crate) fn max_value(&self) -> u32 {
        self.full_max
    }

    /// Number of layers expanded so far, including a converging one.
    pub(crate) fn layers(&self) -> usize {
        self.layers
    }

    /// Number of distinct products found so far.
    pub(crate) fn len(&self) -> usize {
        self.full.len()
    }
}
