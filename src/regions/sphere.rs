//! Spherical regions on the 3D grid.

use super::cuboid::CuboidRegion;
use super::grid::cell_distance;
use super::region::Region;
use super::unions::{canonical, enclosing_ball, overlap};
use crate::checked::Checked;
use crate::error::GeomError;
use crate::primitives::bits::{self, BitKey};
use crate::primitives::{ArithmeticVector, Vec3, Vector};
use num_traits::{Float, FloatConst};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A sphere defined by centre and radius.
#[derive(Debug, Clone, Copy)]
pub struct SphereRegion<F> {
    centre: Vec3<F>,
    radius: F,
    area: F,
    volume: F,
}

impl<F: Float + FloatConst> SphereRegion<F> {
    /// Creates a new sphere, rejecting a NaN or negative radius.
    pub fn new(centre: Vec3<F>, radius: F) -> Result<Self, GeomError> {
        if radius.is_nan() {
            return Err(GeomError::NanComponent { component: "radius" });
        }
        if radius < F::zero() {
            return Err(GeomError::NegativeRadius);
        }
        let two = F::one() + F::one();
        let four = two + two;
        let three = two + F::one();
        Ok(Self {
            centre,
            radius,
            area: four * F::PI() * radius * radius,
            volume: four / three * F::PI() * radius * radius * radius,
        })
    }

    /// Creates a new sphere, or [`Checked::Invalid`] on any rejected input.
    pub fn of(centre: Checked<Vec3<F>>, radius: F) -> Checked<Self> {
        centre.and_then(|centre| Self::new(centre, radius).into())
    }

    /// Centre of the sphere.
    #[inline]
    pub fn centre(&self) -> Vec3<F> {
        self.centre
    }

    /// Radius of the sphere.
    #[inline]
    pub fn radius(&self) -> F {
        self.radius
    }

    /// The axis-aligned cube `centre ± (radius, radius, radius)`.
    pub fn bounding_box(&self) -> Result<CuboidRegion<F>, GeomError> {
        let reach = Vec3::splat(self.radius)?;
        Ok(CuboidRegion::new(
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

impl<F: Float + FloatConst> Region<F> for SphereRegion<F> {
    type Point = Vec3<F>;

    #[inline]
    fn volume(&self) -> F {
        self.volume
    }

    #[inline]
    fn surface_area(&self) -> F {
        self.area
    }

    #[inline]
    fn contains(&self, point: &Vec3<F>) -> bool {
        cell_distance(&self.centre, point) <= self.radius
    }

    fn enclosed_points(&self) -> Result<Vec<Vec3<F>>, GeomError> {
        overlap(&self.bounding_box()?, self)
    }

    fn union(&self, other: &Self) -> Result<Self, GeomError> {
        let (a, b) = canonical(self, other, Self::bit_key);
        let (centre, radius) = enclosing_ball((a.centre, a.radius), (b.centre, b.radius))?;
        Self::new(centre, radius)
    }

    fn offset(&self, by: &Vec3<F>) -> Result<Self, GeomError> {
        Self::new(self.centre.add(by)?, self.radius)
    }
}

impl<F: Float> PartialEq for SphereRegion<F> {
    fn eq(&self, other: &Self) -> bool {
        self.centre == other.centre && bits::same(self.radius, other.radius)
    }
}

impl<F: Float> Eq for SphereRegion<F> {}

impl<F: Float> Hash for SphereRegion<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.centre.hash(state);
        bits::hash(self.radius, state);
    }
}

impl<F: Float + fmt::Display> fmt::Display for SphereRegion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SphereRegion(centre={}, radius={})", self.centre, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn v(x: f64, y: f64, z: f64) -> Vec3<f64> {
        Vec3::new(x, y, z).unwrap()
    }

    fn sphere(x: f64, y: f64, z: f64, r: f64) -> SphereRegion<f64> {
        SphereRegion::new(v(x, y, z), r).unwrap()
    }

    #[test]
    fn test_measures() {
        let s = sphere(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(s.surface_area(), 4.0 * PI, epsilon = 1e-12);
        assert_relative_eq!(s.volume(), 4.0 / 3.0 * PI, epsilon = 1e-12);
        assert!(s.exists());
        assert!(!sphere(1.0, 1.0, 1.0, 0.0).exists());
    }

    #[test]
    fn test_contains_and_enclosed_points() {
        let s = sphere(0.0, 0.0, 0.0, 1.0);
        let points = s.enclosed_points().unwrap();
        // The eight cells touching the origin, each with centre sqrt(0.75) away.
        assert_eq!(points.len(), 8);
        assert_eq!(points[0], v(-1.0, -1.0, -1.0));
        assert_eq!(points[7], v(0.0, 0.0, 0.0));
        assert!(!s.contains(&v(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_enclosed_points_match_brute_force() {
        let s = sphere(0.3, -1.2, 2.0, 2.6);
        let points = s.enclosed_points().unwrap();
        let mut expected = Vec::new();
        for z in -10..=10 {
            for y in -10..=10 {
                for x in -10..=10 {
                    let p = v(f64::from(x), f64::from(y), f64::from(z));
                    if s.contains(&p) {
                        expected.push(p);
                    }
                }
            }
        }
        assert_eq!(points, expected);
    }

    #[test]
    fn test_enclosed_points_too_many() {
        let s = SphereRegion::new(Vec3::origin(), 1.0e6).unwrap();
        assert_eq!(s.enclosed_points(), Err(GeomError::TooManyPoints));
        let s = SphereRegion::new(Vec3::origin(), 1.0e7).unwrap();
        assert_eq!(s.enclosed_points(), Err(GeomError::TooManyPoints));
    }

    #[test]
    fn test_union() {
        let a = sphere(0.0, 0.0, 0.0, 1.0);
        let b = sphere(0.0, 0.0, 4.0, 1.0);
        let u = a.union(&b).unwrap();
        assert_eq!(u, sphere(0.0, 0.0, 2.0, 3.0));
        assert_eq!(u, b.union(&a).unwrap());
        assert_eq!(u.union(&a).unwrap(), u);
    }

    #[test]
    fn test_offset_and_rejection() {
        let s = sphere(1.0, 2.0, 3.0, 1.0);
        let by = v(-1.0, -2.0, -3.0);
        assert_eq!(s.offset(&by).unwrap(), sphere(0.0, 0.0, 0.0, 1.0));
        assert_eq!(
            SphereRegion::new(v(0.0, 0.0, 0.0), -0.5),
            Err(GeomError::NegativeRadius)
        );
        assert_eq!(SphereRegion::of(Vec3::of(f64::NAN, 0.0, 0.0), 1.0), Checked::Invalid);
    }
}
