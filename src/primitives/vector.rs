//! Traits shared by the vector types.

use crate::error::GeomError;
use num_traits::Float;
use std::hash::Hash;
use std::ops::Neg;

/// Queries every vector supports, including [`Direction`](super::Direction).
pub trait Vector<F: Float>: Copy + Eq + Hash + Neg<Output = Self> {
    /// Fixed-size component storage, e.g. `[F; 2]`.
    type Components: AsRef<[F]>;

    /// Returns the components in declaration order.
    fn components(&self) -> Self::Components;

    /// Returns the Euclidean length.
    fn length(&self) -> F;

    /// Returns the manhattan (taxicab) length.
    fn manhattan(&self) -> F;

    /// Returns the anti-parallel vector.
    fn reverse(&self) -> Self;
}

/// Component-wise arithmetic for positional vectors.
///
/// Only types for which rescaling and translation are meaningful implement
/// this trait. Operations that can produce a NaN component (for instance
/// `inf - inf`, or a NaN scale factor) go through the strict constructor and
/// report [`GeomError::NanComponent`].
pub trait ArithmeticVector<F: Float>: Vector<F> {
    /// The zero vector.
    fn zero() -> Self;

    /// The vector with every component set to `0.5`: the midpoint of a unit grid cell.
    fn cell_centre() -> Self;

    /// A vector with every component equal to `value`.
    fn splat(value: F) -> Result<Self, GeomError>;

    /// Returns the unit vector parallel to this one, or zero if the length is zero.
    fn normalize(&self) -> Result<Self, GeomError>;

    /// Returns the vector parallel to this one with the given length.
    fn normalize_to(&self, length: F) -> Result<Self, GeomError> {
        self.normalize()?.scale(length)
    }

    /// Returns this vector multiplied by `factor`.
    fn scale(&self, factor: F) -> Result<Self, GeomError>;

    /// Returns the component-wise sum.
    fn add(&self, addend: &Self) -> Result<Self, GeomError>;

    /// Returns the component-wise difference.
    fn subtract(&self, subtrahend: &Self) -> Result<Self, GeomError>;

    /// Returns this vector with every component floored.
    fn floor(&self) -> Self;

    /// Returns this vector with every component rounded up.
    fn ceil(&self) -> Self;
}

/// Euclidean length of a component slice, summed in order.
#[inline]
pub(crate) fn euclidean<F: Float>(components: &[F]) -> F {
    components
        .iter()
        .fold(F::zero(), |acc, &c| acc + c * c)
        .sqrt()
}
