//! Enclosing unions and bounded enumeration.
//!
//! These free functions hold the geometry shared by every region kind:
//! the smallest ball around two balls, and the filtering of a bounding box's
//! grid against a target region.

use super::grid::GridBounds;
use super::region::Region;
use crate::error::GeomError;
use crate::primitives::bits::BitKey;
use crate::primitives::ArithmeticVector;
use num_traits::Float;

/// The smallest region of the same kind enclosing both `a` and `b`.
///
/// Commutative and idempotent for every region kind in this crate.
#[inline]
pub fn union<F: Float, R: Region<F>>(a: &R, b: &R) -> Result<R, GeomError> {
    a.union(b)
}

/// Every grid point of `bounds` that also lies in `target`, in row-major order.
///
/// # Example
///
/// ```
/// use deltoid::regions::{overlap, CircleRegion, RectangleRegion};
/// use deltoid::Vec2;
///
/// let circle: CircleRegion<f64> = CircleRegion::new(Vec2::origin(), 1.0).unwrap();
/// let quadrant = RectangleRegion::new(Vec2::origin(), Vec2::new(2.0, 2.0).unwrap());
/// let points = overlap(&quadrant, &circle).unwrap();
/// assert_eq!(points, vec![Vec2::origin()]);
/// ```
pub fn overlap<F, B, R>(bounds: &B, target: &R) -> Result<Vec<B::Point>, GeomError>
where
    F: Float,
    B: GridBounds<F>,
    R: Region<F, Point = B::Point>,
{
    Ok(bounds
        .grid_cells()?
        .into_iter()
        .filter(|p| bounds.contains(p) && target.contains(p))
        .collect())
}

/// Orders two operands by bit pattern so binary operations see the same
/// argument order regardless of call order.
pub(crate) fn canonical<'a, T>(a: &'a T, b: &'a T, key: impl Fn(&T) -> Vec<BitKey>) -> (&'a T, &'a T) {
    if key(b) < key(a) {
        (b, a)
    } else {
        (a, b)
    }
}

/// Smallest ball enclosing two balls, given as `(centre, radius)`.
///
/// If one ball already contains the other, the larger is returned unchanged.
/// Otherwise the result's boundary passes through the two points of the inputs
/// farthest apart along the line joining their centres.
pub(crate) fn enclosing_ball<F: Float, V: ArithmeticVector<F>>(
    a: (V, F),
    b: (V, F),
) -> Result<(V, F), GeomError> {
    let (centre_a, radius_a) = a;
    let (centre_b, radius_b) = b;

    let offset = centre_b.subtract(&centre_a)?;
    let distance = offset.length();

    if distance + radius_b <= radius_a {
        return Ok(a);
    }
    if distance + radius_a <= radius_b {
        return Ok(b);
    }

    let radius = (distance + radius_a + radius_b) / (F::one() + F::one());
    let centre = centre_a.add(&offset.normalize_to(radius - radius_a)?)?;
    Ok((centre, radius))
}
