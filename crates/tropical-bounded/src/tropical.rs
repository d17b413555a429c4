//! Matrices over the (min, +) semiring.

use std::fmt;

use crate::mat::Mat;
use crate::types::{TropicalAndOr, TropicalMinPlus, TropicalSemiring, Weight};
use crate::BooleanMatrix;

/// Square matrix over ({0, 1, 2, …} ∪ {∞}, min, +).
pub type TropicalMatrix = Mat<TropicalMinPlus>;

impl Mat<TropicalMinPlus> {
    /// Largest finite entry, or 0 if every entry is infinite.
    pub fn max_value(&self) -> u32 {
        self.data
            .iter()
            .filter_map(|e| e.0.finite())
            .max()
            .unwrap_or(0)
    }

    /// Edge-existence graph: 1 where the entry is finite, 0 where infinite.
    pub fn boolean_abstraction(&self) -> BooleanMatrix {
        self.map(|e| TropicalAndOr(e.0.is_finite()))
    }

    /// Clamp finite entries to `min(1, value)`; 0 and ∞ are preserved.
    ///
    /// Keeps only the zero / positive / infinite structure of each entry.
    pub fn normalized(&self) -> TropicalMatrix {
        self.map(|e| match e.0 {
            Weight::Finite(v) => TropicalMinPlus::finite(v.min(1)),
            Weight::Infinite => TropicalMinPlus::infinite(),
        })
    }

    /// First position (row-major) holding `value`.
    pub fn position_of(&self, value: Weight) -> Option<(usize, usize)> {
        self.data
            .iter()
            .position(|e| e.0 == value)
            .map(|idx| (idx / self.n, idx % self.n))
    }

    /// Whether every entry is infinite.
    pub fn is_all_infinite(&self) -> bool {
        self.data.iter().all(|e| e.is_tropical_zero())
    }
}

impl fmt::Display for Mat<TropicalMinPlus> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self)
    }
}

/// Write a grid padded to the widest entry, two spaces between columns.
pub(crate) fn write_grid<S>(f: &mut fmt::Formatter<'_>, mat: &Mat<S>) -> fmt::Result
where
    S: TropicalSemiring + fmt::Display,
{
    let cells: Vec<String> = mat.as_slice().iter().map(|e| e.to_string()).collect();
    let width = cells.iter().map(String::len).max().unwrap_or(0);
    for (i, row) in cells.chunks(mat.size()).enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        let last = row.len() - 1;
        for (j, cell) in row.iter().enumerate() {
            if j == last {
                write!(f, "{}", cell)?;
            } else {
                write!(f, "{:<width$}  ", cell, width = width)?;
            }
        }
    }
    Ok(())
}
