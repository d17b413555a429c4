use crate::error::ArithmeticOverflow;
use crate::traits::TropicalSemiring;
use std::fmt;
use std::ops::Add;

/// Edge existence: ({0, 1}, OR, AND).
///
/// `true` means "some finite path", so a product of boolean matrices tracks
/// which node pairs a word connects while forgetting the weights. Zero is
/// `false`, one is `true`, and ⊗ can never overflow.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TropicalAndOr(pub bool);

impl TropicalAndOr {
    #[inline(always)]
    pub fn new(value: bool) -> Self {
        Self(value)
    }
}

impl TropicalSemiring for TropicalAndOr {
    type Scalar = bool;

    #[inline(always)]
    fn tropical_zero() -> Self {
        Self(false)
    }

    #[inline(always)]
    fn tropical_one() -> Self {
        Self(true)
    }

    #[inline(always)]
    fn tropical_add(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    #[inline(always)]
    fn tropical_mul(self, rhs: Self) -> Result<Self, ArithmeticOverflow> {
        Ok(Self(self.0 & rhs.0))
    }

    #[inline(always)]
    fn value(&self) -> bool {
        self.0
    }

    #[inline(always)]
    fn from_scalar(s: bool) -> Self {
        Self(s)
    }
}

impl Add for TropicalAndOr {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        self.tropical_add(rhs)
    }
}

impl fmt::Debug for TropicalAndOr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TropicalAndOr({})", self)
    }
}

/// Renders `1` or `0`, the form used in matrix grids.
impl fmt::Display for TropicalAndOr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "1" } else { "0" })
    }
}

impl From<bool> for TropicalAndOr {
    #[inline(always)]
    fn from(value: bool) -> Self {
        Self(value)
    }
}
