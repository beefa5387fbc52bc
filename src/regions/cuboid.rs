//! Axis-aligned cuboid regions on the 3D grid.

use super::grid::{axis, cell_count, cell_in_box, GridBounds};
use super::region::Region;
use super::unions::{canonical, overlap};
use crate::checked::Checked;
use crate::error::GeomError;
use crate::primitives::bits::{self, BitKey};
use crate::primitives::{ArithmeticVector, Vec3, Vector};
use num_traits::Float;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An axis-aligned box in three dimensions.
#[derive(Debug, Clone, Copy)]
pub struct CuboidRegion<F> {
    min: Vec3<F>,
    max: Vec3<F>,
    area: F,
    volume: F,
}

impl<F: Float> CuboidRegion<F> {
    /// Creates a cuboid from two opposite corners in any orientation.
    pub fn new(a: Vec3<F>, b: Vec3<F>) -> Self {
        let min = Vec3::from_parts(
            bits::lesser(a.x(), b.x()),
            bits::lesser(a.y(), b.y()),
            bits::lesser(a.z(), b.z()),
        );
        let max = Vec3::from_parts(
            bits::greater(a.x(), b.x()),
            bits::greater(a.y(), b.y()),
            bits::greater(a.z(), b.z()),
        );
        let (w, h, d) = (max.x() - min.x(), max.y() - min.y(), max.z() - min.z());
        Self {
            min,
            max,
            area: (F::one() + F::one()) * (w * h + h * d + w * d),
            volume: w * h * d,
        }
    }

    /// Creates a cuboid, or [`Checked::Invalid`] if either corner is invalid.
    pub fn of(a: Checked<Vec3<F>>, b: Checked<Vec3<F>>) -> Checked<Self> {
        match (a, b) {
            (Checked::Valid(a), Checked::Valid(b)) => Checked::Valid(Self::new(a, b)),
            _ => Checked::Invalid,
        }
    }

    /// Minimum corner (smallest x, y and z values).
    #[inline]
    pub fn min(&self) -> Vec3<F> {
        self.min
    }

    /// Maximum corner (largest x, y and z values).
    #[inline]
    pub fn max(&self) -> Vec3<F> {
        self.max
    }

    fn bit_key(&self) -> Vec<BitKey> {
        let mut key = bits::keys(&self.min.components());
        key.extend(bits::keys(&self.max.components()));
        key
    }
}

impl<F: Float> Region<F> for CuboidRegion<F> {
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
        cell_in_box(&self.min, &self.max, point)
    }

    fn enclosed_points(&self) -> Result<Vec<Vec3<F>>, GeomError> {
        overlap(self, self)
    }

    fn union(&self, other: &Self) -> Result<Self, GeomError> {
        let (a, b) = canonical(self, other, Self::bit_key);
        Ok(Self::new(
            Vec3::from_parts(
                bits::lesser(a.min.x(), b.min.x()),
                bits::lesser(a.min.y(), b.min.y()),
                bits::lesser(a.min.z(), b.min.z()),
            ),
            Vec3::from_parts(
                bits::greater(a.max.x(), b.max.x()),
                bits::greater(a.max.y(), b.max.y()),
                bits::greater(a.max.z(), b.max.z()),
            ),
        ))
    }

    fn offset(&self, by: &Vec3<F>) -> Result<Self, GeomError> {
        Ok(Self::new(self.min.add(by)?, self.max.add(by)?))
    }
}

impl<F: Float> GridBounds<F> for CuboidRegion<F> {
    fn grid_cells(&self) -> Result<Vec<Vec3<F>>, GeomError> {
        let (min, max) = (self.min.components(), self.max.components());
        let count = cell_count::<F, Vec3<F>>(&min, &max)?;
        let xs = axis(self.min.x(), self.max.x())?;
        let ys = axis(self.min.y(), self.max.y())?;
        let zs = axis(self.min.z(), self.max.z())?;

        let mut cells = Vec::with_capacity(count);
        for &z in &zs {
            for &y in &ys {
                for &x in &xs {
                    cells.push(Vec3::from_parts(x, y, z));
                }
            }
        }
        Ok(cells)
    }
}

impl<F: Float> PartialEq for CuboidRegion<F> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<F: Float> Eq for CuboidRegion<F> {}

impl<F: Float> Hash for CuboidRegion<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.min.hash(state);
        self.max.hash(state);
    }
}

impl<F: Float + fmt::Display> fmt::Display for CuboidRegion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CuboidRegion(min={}, max={})", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64, z: f64) -> Vec3<f64> {
        Vec3::new(x, y, z).unwrap()
    }

    #[test]
    fn test_measures() {
        let c = CuboidRegion::new(v(2.0, 3.0, 4.0), v(0.0, 0.0, 0.0));
        assert_eq!(c.min(), v(0.0, 0.0, 0.0));
        assert_eq!(c.volume(), 24.0);
        assert_eq!(c.surface_area(), 52.0);
        assert!(c.exists());
    }

    #[test]
    fn test_flat_cuboid_still_exists() {
        let c = CuboidRegion::new(v(0.0, 0.0, 0.0), v(2.0, 3.0, 0.0));
        assert_eq!(c.volume(), 0.0);
        assert_eq!(c.surface_area(), 12.0);
        assert!(c.exists());
    }

    #[test]
    fn test_enclosed_points_order() {
        let c = CuboidRegion::new(v(0.0, 0.0, 0.0), v(2.0, 1.0, 2.0));
        let points = c.enclosed_points().unwrap();
        assert_eq!(
            points,
            vec![
                v(0.0, 0.0, 0.0),
                v(1.0, 0.0, 0.0),
                v(0.0, 0.0, 1.0),
                v(1.0, 0.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_grid_cells_too_many() {
        let c = CuboidRegion::new(v(-1.0e6, -1.0e6, -1.0e6), v(1.0e6, 1.0e6, 1.0e6));
        assert_eq!(c.grid_cells(), Err(GeomError::TooManyPoints));
        assert_eq!(c.enclosed_points(), Err(GeomError::TooManyPoints));
    }

    #[test]
    fn test_signed_zero_corners_any_orientation() {
        let a = v(0.0, 0.0, -0.0);
        let b = v(-0.0, 1.0, 0.0);
        assert_eq!(CuboidRegion::new(a, b), CuboidRegion::new(b, a));
        assert!(bits::same(CuboidRegion::new(a, b).min().x(), -0.0));
        assert!(bits::same(CuboidRegion::new(b, a).max().z(), 0.0));
    }

    #[test]
    fn test_union_and_offset() {
        let a = CuboidRegion::new(v(0.0, 0.0, 0.0), v(1.0, 1.0, 1.0));
        let b = CuboidRegion::new(v(-1.0, 2.0, 0.5), v(0.0, 3.0, 4.0));
        let u = a.union(&b).unwrap();
        assert_eq!(u, CuboidRegion::new(v(-1.0, 0.0, 0.0), v(1.0, 3.0, 4.0)));
        assert_eq!(u, b.union(&a).unwrap());

        let by = v(1.0, 2.0, 3.0);
        assert_eq!(a.offset(&by).unwrap().offset(&-by).unwrap(), a);
    }

    #[test]
    fn test_of_invalid() {
        let invalid = CuboidRegion::of(Vec3::of(0.0, 0.0, f64::NAN), Vec3::of(1.0, 1.0, 1.0));
        assert!(!invalid.is_valid());
        assert_eq!(invalid.volume(), 0.0);
    }
}
