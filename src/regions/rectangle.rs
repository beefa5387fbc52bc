//! Axis-aligned rectangular regions on the 2D grid.

use super::grid::{axis, cell_count, cell_in_box, GridBounds};
use super::region::Region;
use super::unions::{canonical, overlap};
use crate::checked::Checked;
use crate::error::GeomError;
use crate::primitives::bits::{self, BitKey};
use crate::primitives::{ArithmeticVector, Vec2, Vector};
use num_traits::Float;
use std::fmt;
use std::hash::{Hash, Hasher};

/// An axis-aligned rectangle.
///
/// Defined by minimum and maximum corners.
#[derive(Debug, Clone, Copy)]
pub struct RectangleRegion<F> {
    min: Vec2<F>,
    max: Vec2<F>,
    area: F,
}

impl<F: Float> RectangleRegion<F> {
    /// Creates a rectangle from two opposite corners in any orientation.
    pub fn new(a: Vec2<F>, b: Vec2<F>) -> Self {
        let min = Vec2::from_parts(bits::lesser(a.x(), b.x()), bits::lesser(a.y(), b.y()));
        let max = Vec2::from_parts(bits::greater(a.x(), b.x()), bits::greater(a.y(), b.y()));
        let area = (max.x() - min.x()) * (max.y() - min.y());
        Self { min, max, area }
    }

    /// Creates a rectangle, or [`Checked::Invalid`] if either corner is invalid.
    pub fn of(a: Checked<Vec2<F>>, b: Checked<Vec2<F>>) -> Checked<Self> {
        match (a, b) {
            (Checked::Valid(a), Checked::Valid(b)) => Checked::Valid(Self::new(a, b)),
            _ => Checked::Invalid,
        }
    }

    /// Minimum corner (smallest x and y values).
    #[inline]
    pub fn min(&self) -> Vec2<F> {
        self.min
    }

    /// Maximum corner (largest x and y values).
    #[inline]
    pub fn max(&self) -> Vec2<F> {
        self.max
    }

    /// Extent along the x-axis.
    #[inline]
    pub fn width(&self) -> F {
        self.max.x() - self.min.x()
    }

    /// Extent along the y-axis.
    #[inline]
    pub fn height(&self) -> F {
        self.max.y() - self.min.y()
    }

    fn bit_key(&self) -> Vec<BitKey> {
        let mut key = bits::keys(&self.min.components());
        key.extend(bits::keys(&self.max.components()));
        key
    }
}

impl<F: Float> Region<F> for RectangleRegion<F> {
    type Point = Vec2<F>;

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
        cell_in_box(&self.min, &self.max, point)
    }

    fn enclosed_points(&self) -> Result<Vec<Vec2<F>>, GeomError> {
        overlap(self, self)
    }

    fn union(&self, other: &Self) -> Result<Self, GeomError> {
        let (a, b) = canonical(self, other, Self::bit_key);
        Ok(Self::new(
            Vec2::from_parts(
                bits::lesser(a.min.x(), b.min.x()),
                bits::lesser(a.min.y(), b.min.y()),
            ),
            Vec2::from_parts(
                bits::greater(a.max.x(), b.max.x()),
                bits::greater(a.max.y(), b.max.y()),
            ),
        ))
    }

    fn offset(&self, by: &Vec2<F>) -> Result<Self, GeomError> {
        Ok(Self::new(self.min.add(by)?, self.max.add(by)?))
    }
}

impl<F: Float> GridBounds<F> for RectangleRegion<F> {
    fn grid_cells(&self) -> Result<Vec<Vec2<F>>, GeomError> {
        let (min, max) = (self.min.components(), self.max.components());
        let count = cell_count::<F, Vec2<F>>(&min, &max)?;
        let xs = axis(self.min.x(), self.max.x())?;
        let ys = axis(self.min.y(), self.max.y())?;

        let mut cells = Vec::with_capacity(count);
        for &y in &ys {
            for &x in &xs {
                cells.push(Vec2::from_parts(x, y));
            }
        }
        Ok(cells)
    }
}

impl<F: Float> PartialEq for RectangleRegion<F> {
    fn eq(&self, other: &Self) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl<F: Float> Eq for RectangleRegion<F> {}

impl<F: Float> Hash for RectangleRegion<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.min.hash(state);
        self.max.hash(state);
    }
}

impl<F: Float + fmt::Display> fmt::Display for RectangleRegion<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RectangleRegion(min={}, max={})", self.min, self.max)
    }
}
