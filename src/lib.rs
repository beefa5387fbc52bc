//! deltoid - Immutable vectors and grid regions
//!
//! Value types for 2D and 3D geometry on a grid of unit cells: vectors with
//! NaN-free components, and regions that answer area, containment, point
//! enumeration, union and offset queries.
//!
//! Every type has a strict constructor (`new`, returning [`GeomError`] on NaN
//! input) and a permissive one (`of`, returning [`Checked::Invalid`]).

pub mod checked;
pub mod error;
pub mod primitives;
pub mod regions;

pub use checked::Checked;
pub use error::GeomError;
pub use primitives::{ArithmeticVector, Direction, Vec2, Vec3, Vector};
pub use regions::{
    CircleRegion, CuboidRegion, GridBounds, RectangleRegion, Region, SphereRegion,
};
