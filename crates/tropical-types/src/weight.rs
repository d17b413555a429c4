use crate::error::ArithmeticOverflow;
use std::cmp::Ordering;
use std::fmt;

/// Non-negative edge weight with an absorbing infinity.
///
/// `Infinite` compares greater than every finite value, so `min` over
/// weights behaves as the tropical sum.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Weight {
    /// A finite weight.
    Finite(u32),
    /// No edge.
    Infinite,
}

impl Weight {
    /// The additive identity of ordinary arithmetic.
    pub const ZERO: Weight = Weight::Finite(0);

    /// Returns `true` for any finite weight.
    #[inline(always)]
    pub fn is_finite(self) -> bool {
        matches!(self, Weight::Finite(_))
    }

    /// Returns `true` for the infinite weight.
    #[inline(always)]
    pub fn is_infinite(self) -> bool {
        matches!(self, Weight::Infinite)
    }

    /// The finite value, if any.
    #[inline(always)]
    pub fn finite(self) -> Option<u32> {
        match self {
            Weight::Finite(v) => Some(v),
            Weight::Infinite => None,
        }
    }

    /// Saturating-at-infinity addition.
    ///
    /// Infinity absorbs. Two finite operands whose sum does not fit are an
    /// overflow, never a silent wrap or a silent promotion to infinity.
    #[inline]
    pub fn checked_add(self, rhs: Weight) -> Result<Weight, ArithmeticOverflow> {
        match (self, rhs) {
            (Weight::Finite(a), Weight::Finite(b)) => a
                .checked_add(b)
                .map(Weight::Finite)
                .ok_or(ArithmeticOverflow { lhs: a, rhs: b }),
            _ => Ok(Weight::Infinite),
        }
    }

    /// Smaller of two weights.
    #[inline(always)]
    pub fn min(self, rhs: Weight) -> Weight {
        if self <= rhs {
            self
        } else {
            rhs
        }
    }
}

impl Ord for Weight {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Weight::Finite(a), Weight::Finite(b)) => a.cmp(b),
            (Weight::Finite(_), Weight::Infinite) => Ordering::Less,
            (Weight::Infinite, Weight::Finite(_)) => Ordering::Greater,
            (Weight::Infinite, Weight::Infinite) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Weight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Default for Weight {
    fn default() -> Self {
        Weight::Infinite
    }
}

impl From<u32> for Weight {
    #[inline(always)]
    fn from(value: u32) -> Self {
        Weight::Finite(value)
    }
}

impl From<Option<u32>> for Weight {
    #[inline(always)]
    fn from(value: Option<u32>) -> Self {
        value.map_or(Weight::Infinite, Weight::Finite)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Finite(v) => write!(f, "{}", v),
            Weight::Infinite => f.write_str("-"),
        }
    }
}
