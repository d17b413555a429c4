use crate::error::ArithmeticOverflow;
use crate::traits::TropicalSemiring;
use crate::weight::Weight;
use std::fmt;
use std::ops::Add;

/// TropicalMinPlus semiring: ({0, 1, 2, …} ∪ {+∞}, min, +)
///
/// - Addition (⊕) = min
/// - Multiplication (⊗) = + (∞ absorbing, overflow checked)
/// - Zero = +∞
/// - One = 0
///
/// This is used for:
/// - Word products in boundedness queries
/// - Shortest path weights
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TropicalMinPlus(pub Weight);

impl TropicalMinPlus {
    /// Create a new TropicalMinPlus value.
    #[inline(always)]
    pub fn new(value: Weight) -> Self {
        Self(value)
    }

    /// A finite element.
    #[inline(always)]
    pub fn finite(value: u32) -> Self {
        Self(Weight::Finite(value))
    }

    /// The infinite element.
    #[inline(always)]
    pub fn infinite() -> Self {
        Self(Weight::Infinite)
    }
}

impl TropicalSemiring for TropicalMinPlus {
    type Scalar = Weight;

    #[inline(always)]
    fn tropical_zero() -> Self {
        Self(Weight::Infinite)
    }

    #[inline(always)]
    fn tropical_one() -> Self {
        Self(Weight::ZERO)
    }

    #[inline(always)]
    fn tropical_add(self, rhs: Self) -> Self {
        Self(self.0.min(rhs.0))
    }

    #[inline(always)]
    fn tropical_mul(self, rhs: Self) -> Result<Self, ArithmeticOverflow> {
        self.0.checked_add(rhs.0).map(Self)
    }

    #[inline(always)]
    fn value(&self) -> Weight {
        self.0
    }

    #[inline(always)]
    fn from_scalar(s: Weight) -> Self {
        Self(s)
    }
}

impl Add for TropicalMinPlus {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.tropical_add(rhs)
    }
}

impl Default for TropicalMinPlus {
    #[inline(always)]
    fn default() -> Self {
        Self::tropical_zero()
    }
}

impl fmt::Debug for TropicalMinPlus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TropicalMinPlus({})", self.0)
    }
}

impl fmt::Display for TropicalMinPlus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Weight> for TropicalMinPlus {
    #[inline(always)]
    fn from(value: Weight) -> Self {
        Self(value)
    }
}

impl From<u32> for TropicalMinPlus {
    #[inline(always)]
    fn from(value: u32) -> Self {
        Self::finite(value)
    }
}
