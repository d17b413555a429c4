//! Error types for boundedness queries.

use std::time::Duration;

use thiserror::Error;
use tropical_types::ArithmeticOverflow;

/// Errors that can occur while building matrices or answering a query.
#[derive(Debug, Error)]
pub enum BoundednessError {
    /// The generator set is empty.
    #[error("generator set is empty")]
    EmptyGenerators,

    /// Two operands (or two generators) have different dimensions.
    #[error("dimension mismatch: expected {expected}x{expected}, found {found}x{found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A matrix with no rows.
    #[error("matrix dimension must be non-zero")]
    EmptyMatrix,

    /// A row whose length differs from the number of rows.
    #[error("matrix is not square: {rows} rows, but a row has {cols} entries")]
    NotSquare { rows: usize, cols: usize },

    /// A probability outside [0, 1], or probabilities summing above 1.
    #[error("invalid probability: {0}")]
    InvalidProbability(String),

    /// The sampling cap for finite entries must be positive.
    #[error("sampling cap must be positive")]
    InvalidCap,

    /// A timeout that is negative, NaN or too large to represent.
    #[error("invalid timeout: {0} seconds")]
    InvalidTimeout(f64),

    /// A 1-based node index outside `1..=dimension`.
    #[error("node index {index} out of range 1..={dimension}")]
    IndexOutOfRange { index: usize, dimension: usize },

    /// A word letter that names no generator.
    #[error("letter {letter} out of range for {alphabet} generators")]
    LetterOutOfRange { letter: usize, alphabet: usize },

    /// The product entry is infinite, so no path realises it.
    #[error("no path from node {start} to node {end}: the product entry is infinite")]
    Unreachable { start: usize, end: usize },

    /// Witness search needed a converged closure but the semi-decision timed out.
    #[error(
        "semi-decision did not converge within {timeout:?} (largest value seen: {max_value}); \
         the instance is unbounded or the timeout must be raised"
    )]
    NotConverged { timeout: Duration, max_value: u32 },

    /// The closure maximum was not realised by any enumerated word.
    #[error("no word realises the maximum value {max_value}")]
    WitnessNotFound { max_value: u32 },

    /// A token in the text format that is neither a non-negative integer nor `-`.
    #[error("parse error on line {line}: invalid entry {token:?}")]
    Parse { line: usize, token: String },

    /// More distinct random matrices requested than the sampling space holds.
    #[error("requested {requested} distinct matrices, but only {available} exist")]
    TooManyDistinct { requested: usize, available: u128 },

    /// Exhaustive enumeration would not fit in memory.
    #[error("cannot enumerate all {dimension}x{dimension} matrices with entries up to {max_value}")]
    EnumerationTooLarge { dimension: usize, max_value: u32 },

    /// Tropical addition of two finite values overflowed.
    #[error(transparent)]
    Overflow(#[from] ArithmeticOverflow),
}

/// Result type for boundedness operations.
pub type Result<T> = std::result::Result<T, BoundednessError>;
