//! Integer grid enumeration over axis-aligned boxes.

use super::region::Region;
use crate::error::GeomError;
use crate::primitives::Vector;
use num_traits::Float;
use std::mem::size_of;

/// An axis-aligned box that can list the integer grid points it spans.
pub trait GridBounds<F: Float>: Region<F> {
    /// Every integer grid point from `floor(min)` to `max` on each axis, in
    /// row-major order (the last axis outermost).
    ///
    /// This is a superset of the cells the box contains; callers filter with
    /// [`Region::contains`]. Fails with [`GeomError::TooManyPoints`] when the
    /// cells would not fit in one allocation.
    fn grid_cells(&self) -> Result<Vec<Self::Point>, GeomError>;
}

/// Integer steps covering `[floor(lo), hi]`.
///
/// Stops early once adding one no longer changes the value, which happens for
/// magnitudes beyond the float's integer precision.
pub(crate) fn axis<F: Float>(lo: F, hi: F) -> Result<Vec<F>, GeomError> {
    if !lo.is_finite() || !hi.is_finite() {
        return Err(GeomError::Unbounded);
    }

    let mut steps = Vec::new();
    let mut current = lo.floor();
    while current <= hi {
        steps.push(current);
        let next = current + F::one();
        if next <= current {
            break;
        }
        current = next;
    }
    Ok(steps)
}

/// Upper bound on the grid points of the box `[min, max]`, checked against the
/// largest `Vec<P>` that can be allocated.
///
/// Fails with [`GeomError::Unbounded`] on a non-finite extent and with
/// [`GeomError::TooManyPoints`] when the count does not fit.
pub(crate) fn cell_count<F: Float, P>(min: &[F], max: &[F]) -> Result<usize, GeomError> {
    if min.iter().chain(max).any(|c| !c.is_finite()) {
        return Err(GeomError::Unbounded);
    }

    let limit = isize::MAX as usize / size_of::<P>().max(1);
    let mut count: usize = 1;
    for (&lo, &hi) in min.iter().zip(max) {
        let (lo, hi) = (lo.floor(), hi.floor());
        if hi < lo {
            return Ok(0);
        }
        let steps = (hi - lo + F::one())
            .to_usize()
            .ok_or(GeomError::TooManyPoints)?;
        count = count
            .checked_mul(steps)
            .filter(|&n| n <= limit)
            .ok_or(GeomError::TooManyPoints)?;
    }
    Ok(count)
}

#[inline]
fn half<F: Float>() -> F {
    F::one() / (F::one() + F::one())
}

/// Euclidean distance from `centre` to the centre of the cell at `point`.
pub(crate) fn cell_distance<F: Float, V: Vector<F>>(centre: &V, point: &V) -> F {
    let centre = centre.components();
    let point = point.components();
    centre
        .as_ref()
        .iter()
        .zip(point.as_ref())
        .fold(F::zero(), |acc, (&c, &p)| {
            let d = c - (p + half());
            acc + d * d
        })
        .sqrt()
}

/// Returns `true` if the centre of the cell at `point` lies within `[min, max]`.
pub(crate) fn cell_in_box<F: Float, V: Vector<F>>(min: &V, max: &V, point: &V) -> bool {
    let min = min.components();
    let max = max.components();
    let point = point.components();
    min.as_ref()
        .iter()
        .zip(max.as_ref())
        .zip(point.as_ref())
        .all(|((&lo, &hi), &p)| {
            let c = p + half();
            lo <= c && c <= hi
        })
}
