//! 2D vector type for positions and offsets.

use super::bits;
use super::vector::{euclidean, ArithmeticVector, Vector};
use crate::checked::Checked;
use crate::error::GeomError;
use num_traits::Float;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// An immutable 2D vector.
///
/// Generic over floating-point types (`f32` or `f64`). Components are never
/// NaN, and the length is computed once at construction.
///
/// # Example
///
/// ```
/// use deltoid::{ArithmeticVector, Vec2, Vector};
///
/// let v: Vec2<f64> = Vec2::new(3.0, 4.0).unwrap();
/// assert_eq!(v.length(), 5.0);
/// assert_eq!(v.manhattan(), 7.0);
/// assert_eq!(v.add(&Vec2::one()).unwrap(), Vec2::new(4.0, 5.0).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Vec2<F> {
    x: F,
    y: F,
    length: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector, rejecting NaN components.
    pub fn new(x: F, y: F) -> Result<Self, GeomError> {
        if x.is_nan() {
            return Err(GeomError::NanComponent { component: "x" });
        }
        if y.is_nan() {
            return Err(GeomError::NanComponent { component: "y" });
        }
        Ok(Self::from_parts(x, y))
    }

    /// Creates a new vector, or [`Checked::Invalid`] if any component is NaN.
    #[inline]
    pub fn of(x: F, y: F) -> Checked<Self> {
        Self::new(x, y).into()
    }

    /// Caller guarantees neither component is NaN.
    #[inline]
    pub(crate) fn from_parts(x: F, y: F) -> Self {
        Self {
            x,
            y,
            length: euclidean(&[x, y]),
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

    /// `[0, 0]`.
    #[inline]
    pub fn origin() -> Self {
        Self::from_parts(F::zero(), F::zero())
    }

    /// `[1, 1]`.
    #[inline]
    pub fn one() -> Self {
        Self::from_parts(F::one(), F::one())
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self::from_parts(F::one(), F::zero())
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self::from_parts(F::zero(), F::one())
    }

    /// Alias for [`Vec2::unit_x`].
    #[inline]
    pub fn i_hat() -> Self {
        Self::unit_x()
    }

    /// Alias for [`Vec2::unit_y`].
    #[inline]
    pub fn j_hat() -> Self {
        Self::unit_y()
    }

    /// Space-separated components rounded to two decimal places.
    pub fn to_simple_string(&self) -> String
    where
        F: fmt::Display,
    {
        format!("{:.2} {:.2}", self.x, self.y)
    }
}

impl<F: Float> Vector<F> for Vec2<F> {
    type Components = [F; 2];

    #[inline]
    fn components(&self) -> [F; 2] {
        [self.x, self.y]
    }

    #[inline]
    fn length(&self) -> F {
        self.length
    }

    #[inline]
    fn manhattan(&self) -> F {
        self.x.abs() + self.y.abs()
    }

    #[inline]
    fn reverse(&self) -> Self {
        Self::from_parts(-self.x, -self.y)
    }
}

impl<F: Float> ArithmeticVector<F> for Vec2<F> {
    #[inline]
    fn zero() -> Self {
        Self::origin()
    }

    #[inline]
    fn cell_centre() -> Self {
        let half = F::one() / (F::one() + F::one());
        Self::from_parts(half, half)
    }

    #[inline]
    fn splat(value: F) -> Result<Self, GeomError> {
        Self::new(value, value)
    }

    fn normalize(&self) -> Result<Self, GeomError> {
        if self.length == F::zero() {
            return Ok(Self::zero());
        }
        Self::new(self.x / self.length, self.y / self.length)
    }

    #[inline]
    fn scale(&self, factor: F) -> Result<Self, GeomError> {
        Self::new(self.x * factor, self.y * factor)
    }

    #[inline]
    fn add(&self, addend: &Self) -> Result<Self, GeomError> {
        Self::new(self.x + addend.x, self.y + addend.y)
    }

    #[inline]
    fn subtract(&self, subtrahend: &Self) -> Result<Self, GeomError> {
        Self::new(self.x - subtrahend.x, self.y - subtrahend.y)
    }

    #[inline]
    fn floor(&self) -> Self {
        Self::from_parts(self.x.floor(), self.y.floor())
    }

    #[inline]
    fn ceil(&self) -> Self {
        Self::from_parts(self.x.ceil(), self.y.ceil())
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.reverse()
    }
}

impl<F: Float> PartialEq for Vec2<F> {
    fn eq(&self, other: &Self) -> bool {
        bits::same(self.x, other.x) && bits::same(self.y, other.y)
    }
}

impl<F: Float> Eq for Vec2<F> {}

impl<F: Float> Hash for Vec2<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        bits::hash(self.x, state);
        bits::hash(self.y, state);
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float + fmt::Display> fmt::Display for Vec2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2(x={}, y={})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn v(x: f64, y: f64) -> Vec2<f64> {
        Vec2::new(x, y).unwrap()
    }

    #[test]
    fn test_new() {
        let p = v(3.0, 4.0);
        assert_eq!(p.x(), 3.0);
        assert_eq!(p.y(), 4.0);
        assert_eq!(p.components(), [3.0, 4.0]);
    }

    #[test]
    fn test_new_rejects_nan() {
        assert_eq!(
            Vec2::new(f64::NAN, 1.0),
            Err(GeomError::NanComponent { component: "x" })
        );
        assert_eq!(
            Vec2::new(1.0, f64::NAN),
            Err(GeomError::NanComponent { component: "y" })
        );
    }

    #[test]
    fn test_of() {
        assert_eq!(Vec2::of(1.0, 2.0), Checked::Valid(v(1.0, 2.0)));
        assert!(Vec2::of(1.0, 2.0).is_valid());
        assert_eq!(Vec2::of(f64::NAN, 2.0), Checked::Invalid);
        assert!(!Vec2::of(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn test_length() {
        assert_eq!(Vec2::<f64>::origin().length(), 0.0);
        assert_eq!(Vec2::<f64>::one().length(), 2.0_f64.sqrt());
        assert_eq!(v(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(v(3.0, 4.0).manhattan(), 7.0);
        assert_eq!(v(-3.0, 4.0).manhattan(), 7.0);
    }

    #[test]
    fn test_normalize() {
        let n = v(3.0, 4.0).normalize().unwrap();
        assert_relative_eq!(n.length(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(n.x(), 0.6, epsilon = 1e-10);
        assert_relative_eq!(n.y(), 0.8, epsilon = 1e-10);
    }

    #[test]
    fn test_normalize_zero() {
        let z = Vec2::<f64>::zero();
        assert_eq!(z.normalize().unwrap(), z);
        assert_eq!(z.normalize_to(5.0).unwrap(), z);
    }

    #[test]
    fn test_normalize_to() {
        let n = v(0.0, 2.0).normalize_to(10.0).unwrap();
        assert_eq!(n, v(0.0, 10.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = v(1.0, 2.0);
        let b = v(3.0, 4.0);
        assert_eq!(a.add(&b).unwrap(), v(4.0, 6.0));
        assert_eq!(b.subtract(&a).unwrap(), v(2.0, 2.0));
        assert_eq!(a.scale(2.0).unwrap(), v(2.0, 4.0));
        assert_eq!(-a, v(-1.0, -2.0));
    }

    #[test]
    fn test_arithmetic_producing_nan_fails() {
        let inf = v(f64::INFINITY, 0.0);
        assert_eq!(
            inf.subtract(&inf),
            Err(GeomError::NanComponent { component: "x" })
        );
        assert!(v(1.0, 1.0).scale(f64::NAN).is_err());
    }

    #[test]
    fn test_floor_ceil() {
        let p = v(1.5, -1.5);
        assert_eq!(p.floor(), v(1.0, -2.0));
        assert_eq!(p.ceil(), v(2.0, -1.0));
    }

    #[test]
    fn test_reverse_twice() {
        let p = v(2.5, -7.0);
        assert_eq!(p.reverse().reverse(), p);
    }

    #[test]
    fn test_equality_is_bit_exact() {
        assert_ne!(v(0.0, 0.0), v(-0.0, 0.0));
        assert_eq!(v(0.1 + 0.2, 1.0), v(0.1 + 0.2, 1.0));
        assert_ne!(v(0.1 + 0.2, 1.0), v(0.3, 1.0));
    }

    #[test]
    fn test_constants() {
        assert_eq!(Vec2::<f64>::i_hat(), v(1.0, 0.0));
        assert_eq!(Vec2::<f64>::j_hat(), v(0.0, 1.0));
        assert_eq!(Vec2::<f64>::cell_centre(), v(0.5, 0.5));
        assert_eq!(Vec2::<f64>::splat(2.0).unwrap(), v(2.0, 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(v(3.0, 4.5).to_string(), "Vec2(x=3, y=4.5)");
        assert_eq!(v(3.0, 4.456).to_simple_string(), "3.00 4.46");
    }

    /// Any non-NaN float, with signed zeros, infinities and subnormals forced in.
    fn component() -> impl Strategy<Value = f64> {
        prop_oneof![
            Just(0.0),
            Just(-0.0),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            Just(f64::MIN_POSITIVE / 4.0),
            Just(-f64::MIN_POSITIVE / 4.0),
            prop::num::f64::POSITIVE
                | prop::num::f64::NEGATIVE
                | prop::num::f64::NORMAL
                | prop::num::f64::SUBNORMAL
                | prop::num::f64::ZERO
                | prop::num::f64::INFINITE,
        ]
    }

    proptest! {
        #[test]
        fn prop_of_agrees_with_new(x in component(), y in component()) {
            let strict = Vec2::new(x, y).unwrap();
            prop_assert_eq!(Vec2::of(x, y), Checked::Valid(strict));
        }

        #[test]
        fn prop_reverse_twice_is_identity(x in component(), y in component()) {
            let d = Vec2::new(x, y).unwrap();
            prop_assert_eq!(d.reverse().reverse(), d);
            prop_assert_eq!(-(-d), d);
        }

        #[test]
        fn prop_nan_in_any_position_is_invalid(
            other in prop::array::uniform2(component()),
            at in 0usize..2,
        ) {
            let mut parts = other;
            parts[at] = f64::NAN;
            let [x, y] = parts;
            prop_assert_eq!(Vec2::of(x, y), Checked::Invalid);
            let names = ["x", "y"];
            prop_assert_eq!(
                Vec2::new(x, y),
                Err(GeomError::NanComponent { component: names[at] })
            );
        }
    }
}
