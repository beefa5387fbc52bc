//! 3D vector type for positions and offsets.

use super::bits;
use super::vector::{euclidean, ArithmeticVector, Vector};
use crate::checked::Checked;
use crate::error::GeomError;
use num_traits::Float;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// An immutable 3D vector.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy)]
pub struct Vec3<F> {
    x: F,
    y: F,
    z: F,
    length: F,
}

impl<F: Float> Vec3<F> {
    /// Creates a new vector, rejecting NaN components.
    pub fn new(x: F, y: F, z: F) -> Result<Self, GeomError> {
        if x.is_nan() {
            return Err(GeomError::NanComponent { component: "x" });
        }
        if y.is_nan() {
            return Err(GeomError::NanComponent { component: "y" });
        }
        if z.is_nan() {
            return Err(GeomError::NanComponent { component: "z" });
        }
        Ok(Self::from_parts(x, y, z))
    }

    /// Creates a new vector, or [`Checked::Invalid`] if any component is NaN.
    #[inline]
    pub fn of(x: F, y: F, z: F) -> Checked<Self> {
        Self::new(x, y, z).into()
    }

    #[inline]
    pub(crate) fn from_parts(x: F, y: F, z: F) -> Self {
        Self {
            x,
            y,
            z,
            length: euclidean(&[x, y, z]),
        }
    }

    /// The **x**-component.
    #[inline]
    pub fn x(&self) -> F {
        self.x
    }

    /// The **y**-component.
    #[inline]
    pub fn y(&self) -> F {
        self.y
    }

    /// The **z**-component.
    #[inline]
    pub fn z(&self) -> F {
        self.z
    }

    /// `[0, 0, 0]`.
    #[inline]
    pub fn origin() -> Self {
        Self::from_parts(F::zero(), F::zero(), F::zero())
    }

    /// `[1, 1, 1]`.
    #[inline]
    pub fn one() -> Self {
        Self::from_parts(F::one(), F::one(), F::one())
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::from_parts(F::one(), F::zero(), F::zero())
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::from_parts(F::zero(), F::one(), F::zero())
    }

    /// Creates a unit vector along the Z axis.
    #[inline]
    pub fn unit_z() -> Self {
        Self::from_parts(F::zero(), F::zero(), F::one())
    }

    /// Alias for [`Vec3::unit_x`].
    #[inline]
    pub fn i_hat() -> Self {
        Self::unit_x()
    }

    /// Alias for [`Vec3::unit_y`].
    #[inline]
    pub fn j_hat() -> Self {
        Self::unit_y()
    }

    /// Alias for [`Vec3::unit_z`].
    #[inline]
    pub fn k_hat() -> Self {
        Self::unit_z()
    }

    /// Space-separated components rounded to two decimal places.
    pub fn to_simple_string(&self) -> String
    where
        F: fmt::Display,
    {
        format!("{:.2} {:.2} {:.2}", self.x, self.y, self.z)
    }
}

impl<F: Float> Vector<F> for Vec3<F> {
    type Components = [F; 3];

    #[inline]
    fn components(&self) -> [F; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    fn length(&self) -> F {
        self.length
    }

    #[inline]
    fn manhattan(&self) -> F {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    #[inline]
    fn reverse(&self) -> Self {
        Self::from_parts(-self.x, -self.y, -self.z)
    }
}

impl<F: Float> ArithmeticVector<F> for Vec3<F> {
    #[inline]
    fn zero() -> Self {
        Self::origin()
    }

    #[inline]
    fn cell_centre() -> Self {
        let half = F::one() / (F::one() + F::one());
        Self::from_parts(half, half, half)
    }

    #[inline]
    fn splat(value: F) -> Result<Self, GeomError> {
        Self::new(value, value, value)
    }

    fn normalize(&self) -> Result<Self, GeomError> {
        if self.length == F::zero() {
            return Ok(Self::zero());
        }
        Self::new(
            self.x / self.length,
            self.y / self.length,
            self.z / self.length,
        )
    }

    #[inline]
    fn scale(&self, factor: F) -> Result<Self, GeomError> {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    #[inline]
    fn add(&self, addend: &Self) -> Result<Self, GeomError> {
        Self::new(self.x + addend.x, self.y + addend.y, self.z + addend.z)
    }

    #[inline]
    fn subtract(&self, subtrahend: &Self) -> Result<Self, GeomError> {
        Self::new(
            self.x - subtrahend.x,
            self.y - subtrahend.y,
            self.z - subtrahend.z,
        )
    }

    #[inline]
    fn floor(&self) -> Self {
        Self::from_parts(self.x.floor(), self.y.floor(), self.z.floor())
    }

    #[inline]
    fn ceil(&self) -> Self {
        Self::from_parts(self.x.ceil(), self.y.ceil(), self.z.ceil())
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.reverse()
    }
}

impl<F: Float> PartialEq for Vec3<F> {
    fn eq(&self, other: &Self) -> bool {
        bits::same(self.x, other.x) && bits::same(self.y, other.y) && bits::same(self.z, other.z)
    }
}

impl<F: Float> Eq for Vec3<F> {}

impl<F: Float> Hash for Vec3<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        bits::hash(self.x, state);
        bits::hash(self.y, state);
        bits::hash(self.z, state);
    }
}

impl<F: Float> Default for Vec3<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float + fmt::Display> fmt::Display for Vec3<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3(x={}, y={}, z={})", self.x, self.y, self.z)
    }
}
