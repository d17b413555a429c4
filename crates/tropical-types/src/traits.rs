use crate::error::ArithmeticOverflow;
use std::fmt::Debug;
use std::hash::Hash;

/// Core trait for semiring operations.
///
/// A semiring (S, ⊕, ⊗) satisfies:
/// - (S, ⊕) is a commutative monoid with identity `tropical_zero`
/// - (S, ⊗) is a monoid with identity `tropical_one`
/// - ⊗ distributes over ⊕
/// - `tropical_zero` is absorbing: a ⊗ 0 = 0 ⊗ a = 0
///
/// ⊗ is fallible: bounded integer carriers report overflow instead of
/// wrapping. Elements are plain values with structural equality and
/// hashing so that matrices over them can be used as set keys.
pub trait TropicalSemiring: Copy + Clone + Debug + Eq + Hash + 'static {
    /// The underlying scalar type.
    type Scalar: Copy + Debug;

    /// Returns the additive identity (zero element for ⊕).
    fn tropical_zero() -> Self;

    /// Returns the multiplicative identity (one element for ⊗).
    fn tropical_one() -> Self;

    /// Tropical addition (⊕).
    fn tropical_add(self, rhs: Self) -> Self;

    /// Tropical multiplication (⊗).
    fn tropical_mul(self, rhs: Self) -> Result<Self, ArithmeticOverflow>;

    /// Get the underlying scalar value.
    fn value(&self) -> Self::Scalar;

    /// Create from a scalar value.
    fn from_scalar(s: Self::Scalar) -> Self;

    /// Whether this element is the absorbing zero.
    #[inline(always)]
    fn is_tropical_zero(&self) -> bool {
        *self == Self::tropical_zero()
    }
}
