//! Immutable floating-point vector types.

pub(crate) mod bits;
mod direction;
mod vec2;
mod vec3;
mod vector;

pub use direction::Direction;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vector::{ArithmeticVector, Vector};
