//! The region contract and its implementation for invalid regions.

use crate::checked::Checked;
use crate::error::GeomError;
use crate::primitives::ArithmeticVector;
use num_traits::Float;

/// An immutable shape over a grid of unit cells.
///
/// Points are treated as unit cells: a point `p` belongs to a region when the
/// cell centre `p + ½` does.
pub trait Region<F: Float>: Copy {
    /// Coordinate type of the region.
    type Point: ArithmeticVector<F>;

    /// Enclosed volume. Zero for planar shapes.
    fn volume(&self) -> F;

    /// Total surface area, fixed at construction.
    fn surface_area(&self) -> F;

    /// Returns `true` if the region has a non-zero surface area.
    #[inline]
    fn exists(&self) -> bool {
        self.surface_area() != F::zero()
    }

    /// Returns `true` if the grid cell at `point` lies in this region.
    fn contains(&self, point: &Self::Point) -> bool;

    /// Every grid point in this region, in row-major order.
    ///
    /// Fails with [`GeomError::Unbounded`] if the bounding box is not finite,
    /// and with [`GeomError::TooManyPoints`] if it spans more cells than can
    /// be allocated.
    fn enclosed_points(&self) -> Result<Vec<Self::Point>, GeomError>;

    /// The smallest region of the same kind enclosing both `self` and `other`.
    fn union(&self, other: &Self) -> Result<Self, GeomError>;

    /// This region translated by `by`.
    fn offset(&self, by: &Self::Point) -> Result<Self, GeomError>;
}

/// An invalid region has no area, contains nothing and is the identity for union.
impl<F: Float, R: Region<F>> Region<F> for Checked<R> {
    type Point = R::Point;

    fn volume(&self) -> F {
        self.valid().map_or(F::zero(), |r| r.volume())
    }

    fn surface_area(&self) -> F {
        self.valid().map_or(F::zero(), |r| r.surface_area())
    }

    fn contains(&self, point: &Self::Point) -> bool {
        self.valid().is_some_and(|r| r.contains(point))
    }

    fn enclosed_points(&self) -> Result<Vec<Self::Point>, GeomError> {
        match self {
            Checked::Valid(region) => region.enclosed_points(),
            Checked::Invalid => Ok(Vec::new()),
        }
    }

    fn union(&self, other: &Self) -> Result<Self, GeomError> {
        match (self, other) {
            (Checked::Valid(a), Checked::Valid(b)) => Ok(Checked::Valid(a.union(b)?)),
            (Checked::Valid(a), Checked::Invalid) => Ok(Checked::Valid(*a)),
            (Checked::Invalid, other) => Ok(*other),
        }
    }

    fn offset(&self, by: &Self::Point) -> Result<Self, GeomError> {
        match self {
            Checked::Valid(region) => Ok(Checked::Valid(region.offset(by)?)),
            Checked::Invalid => Ok(Checked::Invalid),
        }
    }
}
