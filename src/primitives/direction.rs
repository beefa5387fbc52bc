//! Direction-cosine angle triple.

use super::bits;
use super::vector::{euclidean, Vector};
use crate::checked::Checked;
use crate::error::GeomError;
use num_traits::Float;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// A direction described by its three direction angles.
///
/// The squared cosines of `alpha`, `beta` and `gamma` sum to one for a true
/// direction. Rescaling or translating such a triple has no meaning, so
/// `Direction` implements [`Vector`] but not
/// [`ArithmeticVector`](super::ArithmeticVector):
///
/// ```compile_fail
/// use deltoid::{ArithmeticVector, Direction};
///
/// let d: Direction<f64> = Direction::new(0.0, 1.0, 1.0).unwrap();
/// let _ = d.scale(2.0);
/// ```
///
/// Reversal is supported:
///
/// ```
/// use deltoid::{Direction, Vector};
///
/// let d: Direction<f64> = Direction::new(0.0, 1.0, 1.0).unwrap();
/// assert_eq!(d.reverse().reverse(), d);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Direction<F> {
    alpha: F,
    beta: F,
    gamma: F,
    length: F,
}

impl<F: Float> Direction<F> {
    /// Creates a new direction, rejecting NaN angles.
    pub fn new(alpha: F, beta: F, gamma: F) -> Result<Self, GeomError> {
        if alpha.is_nan() {
            return Err(GeomError::NanComponent { component: "alpha" });
        }
        if beta.is_nan() {
            return Err(GeomError::NanComponent { component: "beta" });
        }
        if gamma.is_nan() {
            return Err(GeomError::NanComponent { component: "gamma" });
        }
        Ok(Self::from_parts(alpha, beta, gamma))
    }

    /// Creates a new direction, or [`Checked::Invalid`] if any angle is NaN.
    #[inline]
    pub fn of(alpha: F, beta: F, gamma: F) -> Checked<Self> {
        Self::new(alpha, beta, gamma).into()
    }

    #[inline]
    fn from_parts(alpha: F, beta: F, gamma: F) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            length: euclidean(&[alpha, beta, gamma]),
        }
    }

    /// `[0, 0, 0]`.
    #[inline]
    pub fn origin() -> Self {
        Self::from_parts(F::zero(), F::zero(), F::zero())
    }

    /// Angle between the direction and the x-axis.
    #[inline]
    pub fn alpha(&self) -> F {
        self.alpha
    }

    /// Angle between the direction and the y-axis.
    #[inline]
    pub fn beta(&self) -> F {
        self.beta
    }

    /// Angle between the direction and the z-axis.
    #[inline]
    pub fn gamma(&self) -> F {
        self.gamma
    }

    /// Space-separated angles rounded to two decimal places.
    pub fn to_simple_string(&self) -> String
    where
        F: fmt::Display,
    {
        format!("{:.2} {:.2} {:.2}", self.alpha, self.beta, self.gamma)
    }
}

impl<F: Float> Vector<F> for Direction<F> {
    type Components = [F; 3];

    #[inline]
    fn components(&self) -> [F; 3] {
        [self.alpha, self.beta, self.gamma]
    }

    #[inline]
    fn length(&self) -> F {
        self.length
    }

    /// Signed sum of the angles. Unlike the positional vectors, no absolute
    /// value is taken.
    #[inline]
    fn manhattan(&self) -> F {
        self.alpha + self.beta + self.gamma
    }

    #[inline]
    fn reverse(&self) -> Self {
        Self::from_parts(-self.alpha, -self.beta, -self.gamma)
    }
}

impl<F: Float> Neg for Direction<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.reverse()
    }
}

impl<F: Float> PartialEq for Direction<F> {
    fn eq(&self, other: &Self) -> bool {
        bits::same(self.alpha, other.alpha)
            && bits::same(self.beta, other.beta)
            && bits::same(self.gamma, other.gamma)
    }
}

impl<F: Float> Eq for Direction<F> {}

impl<F: Float> Hash for Direction<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        bits::hash(self.alpha, state);
        bits::hash(self.beta, state);
        bits::hash(self.gamma, state);
    }
}

impl<F: Float + fmt::Display> fmt::Display for Direction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Direction(alpha={}, beta={}, gamma={})",
            self.alpha, self.beta, self.gamma
        )
    }
}
