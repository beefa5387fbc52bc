//! Circular regions on the 2D grid.

use super::grid::cell_distance;
use super::rectangle::RectangleRegion;
use super::region::Region;
use super::unions::{canonical, enclosing_ball, overlap};
use crate::checked::Checked;
use crate::error::GeomError;
use crate::primitives::bits::{self, BitKey};
use crate::primitives::{ArithmeticVector, Vec2, Vector};
use num_traits::{Float, FloatConst};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A circle defined by centre and radius.
///
/// # Example
///
/// ```
/// use deltoid::regions::{CircleRegion, Region};
/// use deltoid::Vec2;
///
/// let circle: CircleRegion<f64> = CircleRegion::new(Vec2::origin(), 1.0).unwrap();
/// assert!(circle.exists());
/// assert_eq!(circle.surface_area(), std::f64::consts::PI);
/// assert!(circle.contains(&Vec2::new(-1.0, -1.0).unwrap()));
/// assert!(!circle.contains(&Vec2::new(1.0, 0.0).unwrap()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CircleRegion<F> {
    centre: Vec2<F>,
    radius: F,
    area: F,
}

impl<F: Float + FloatConst> CircleRegion<F> {
    /// Creates a new circle, rejecting a NaN or negative radius.
    pub fn new(centre: Vec2<F>, radius: F) -> Result<Self, GeomError> {
        if radius.is_nan() {
            return Err(GeomError::NanComponent { component: "radius" });
        }
        if radius < F::zero() {
            return Err(GeomError::NegativeRadius);
        }
        Ok(Self {
            centre,
            radius,
            area: F::PI() * radius * radius,
        })
    }

    /// Creates a new circle, or [`Checked::Invalid`] if the centre is invalid
    /// or the radius is rejected by [`CircleRegion::new`].
    pub fn of(centre: Checked<Vec2<F>>, radius: F) -> Checked<Self> {
        centre.and_then(|centre| Self::new(centre, radius).into())
    }

    /// The zero-radius circle at the origin. It does not exist.
    pub fn origin() -> Self {
        Self {
            centre: Vec2::origin(),
            radius: F::zero(),
            area: F::zero(),
        }
    }

    /// Centre of the circle.
    #[inline]
    pub fn centre(&self) -> Vec2<F> {
        self.centre
    }

    /// Radius of the circle.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// The axis-aligned square `centre ± (radius, radius)`.
    pub fn bounding_box(&self) -> Result<RectangleRegion<F>, GeomError> {
        let reach = Vec2::splat(self.radius)?;
        Ok(RectangleRegion::new(
            self.centre.add(&reach)?,
            self.centre.subtract(&reach)?,
        ))
    }

    fn bit_key(&self) -> Vec<BitKey> {
        let mut key = bits::keys(&self.centre.components());
        key.push(bits::key(self.radius));
        key
    }
}

impl<F: Float + FloatConst> Region<F> for CircleRegion<F> {
    type Point = Vec2<F>;

    /// Circles have no volume.
    #[inline]
    fn volume(&self) -> F {
        F::zero()
    }

    #[inline]
    fn surface_area(&self) -> F {
        self.area
    }

    #[inline]
    fn contains(&self, point: &Vec2<F>) -> bool {
        cell_distance(&self.centre, point) <= self.radius
    }

    fn enclosed_points(&self) -> Result<Vec<Vec2<F>>, GeomError> {
        overlap(&self.bounding_box()?, self)
    }

    fn union(&self, other: &Self) -> Result<Self, GeomError> {
        let (a, b) = canonical(self, other, Self::bit_key);
        let (centre, radius) = enclosing_ball((a.centre, a.radius), (b.centre, b.radius))?;
        Self::new(centre, radius)
    }

    fn offset(&self, by: &Vec2<F>) -> Result<Self, GeomError> {
        Self::new(self.centre.add(by)?, self.radius)
    }
}

impl<F: Float> PartialEq for CircleRegion<F> {
    fn eq(&self, other: &Self) -> bool {
        self.centre == other.centre && bits::same(self.radius, other.radius)
    }
}

impl<F: Float> Eq for CircleRegion<F> {}

impl<F: Float> Hash for CircleRegion<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.centre.hash(state);
        bits::hash(self.radius, state);
    }
}

impl<F: Float + fmt::Display> fmt::Display for CircleRegion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CircleRegion(centre={}, radius={})", self.centre, self.radius)
    }
}
