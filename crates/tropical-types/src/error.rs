//! Error types for scalar arithmetic.

use thiserror::Error;

/// Two finite weights whose sum does not fit in a finite weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("arithmetic overflow: {lhs} + {rhs} exceeds the finite range")]
pub struct ArithmeticOverflow {
    /// Left operand.
    pub lhs: u32,
    /// Right operand.
    pub rhs: u32,
}
